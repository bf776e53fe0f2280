use std::collections::VecDeque;

use super::grid::Position;

/// Occupied cells of the snake, head first.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    pub fn new(head: Position) -> Self {
        Self {
            body: VecDeque::from([head]),
        }
    }

    pub fn head(&self) -> Position {
        // The body is never empty: every removal keeps at least one cell.
        self.body[0]
    }

    #[cfg(test)]
    fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }

    /// True if `position` is covered by any segment behind the head, tail included.
    pub fn body_contains(&self, position: Position) -> bool {
        self.body.iter().skip(1).any(|segment| *segment == position)
    }

    pub fn grow_head(&mut self, position: Position) {
        self.body.push_front(position);
    }

    pub fn drop_tail(&mut self) {
        if self.body.len() > 1 {
            self.body.pop_back();
        }
    }

    /// Removes the segment just in front of the tail, leaving the tail in place.
    pub fn drop_second_from_end(&mut self) {
        let len = self.body.len();
        if len > 1 {
            self.body.remove(len - 2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake_from(cells: &[(i32, i32)]) -> Snake {
        let (tail_x, tail_y) = cells[cells.len() - 1];
        let mut snake = Snake::new(Position::new(tail_x, tail_y));
        for &(x, y) in cells.iter().rev().skip(1) {
            snake.grow_head(Position::new(x, y));
        }
        snake
    }

    #[test]
    fn test_grow_head_puts_new_cell_in_front() {
        let mut snake = Snake::new(Position::new(3, 3));
        snake.grow_head(Position::new(4, 3));
        assert_eq!(snake.head(), Position::new(4, 3));
        assert_eq!(snake.tail(), Position::new(3, 3));
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn test_drop_tail_never_empties() {
        let mut snake = Snake::new(Position::new(3, 3));
        snake.drop_tail();
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position::new(3, 3));
    }

    #[test]
    fn test_drop_second_from_end_keeps_tail() {
        let mut snake = snake_from(&[(5, 1), (4, 1), (3, 1), (2, 1)]);
        snake.drop_second_from_end();
        let cells: Vec<Position> = snake.segments().copied().collect();
        assert_eq!(
            cells,
            vec![Position::new(5, 1), Position::new(4, 1), Position::new(2, 1)]
        );
    }

    #[test]
    fn test_drop_second_from_end_is_noop_for_single_cell() {
        let mut snake = Snake::new(Position::new(1, 1));
        snake.drop_second_from_end();
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn test_body_contains_skips_head_but_not_tail() {
        let snake = snake_from(&[(3, 1), (2, 1), (1, 1)]);
        assert!(!snake.body_contains(Position::new(3, 1)));
        assert!(snake.body_contains(Position::new(2, 1)));
        assert!(snake.body_contains(Position::new(1, 1)));
    }
}
