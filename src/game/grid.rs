//! Discrete coordinate space of the arena.

/// Grid cell, 0-indexed from the top-left corner. `y` grows downward.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`. `Direction::None` stays put.
    pub fn step(self, direction: Direction) -> Position {
        match direction {
            Direction::None => self,
            Direction::Left => Position::new(self.x - 1, self.y),
            Direction::Right => Position::new(self.x + 1, self.y),
            Direction::Up => Position::new(self.x, self.y - 1),
            Direction::Down => Position::new(self.x, self.y + 1),
        }
    }
}

/// Heading of the snake. `None` means no input has been given yet.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Direction {
    #[default]
    None,
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn is_none(&self) -> bool {
        matches!(self, Direction::None)
    }
}

/// Arena dimensions in cells.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Movement bound: anything outside of this ends the game.
    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0 && position.x < self.width && position.y >= 0 && position.y < self.height
    }

    /// Outermost one-cell frame. Movement into it is legal, spawning on it is not.
    pub fn on_border(&self, position: Position) -> bool {
        position.x == 0
            || position.x == self.width - 1
            || position.y == 0
            || position.y == self.height - 1
    }

    pub fn center(&self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    pub fn area(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Position::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_covers_border_ring() {
        let grid = Grid::new(40, 20);
        assert!(grid.contains(Position::new(0, 0)));
        assert!(grid.contains(Position::new(39, 19)));
        assert!(!grid.contains(Position::new(-1, 5)));
        assert!(!grid.contains(Position::new(40, 5)));
        assert!(!grid.contains(Position::new(5, -1)));
        assert!(!grid.contains(Position::new(5, 20)));
    }

    #[test]
    fn test_border_ring_is_inside_movement_bound() {
        let grid = Grid::new(40, 20);
        for cell in grid.cells().filter(|c| grid.on_border(*c)) {
            assert!(grid.contains(cell));
        }
        assert!(!grid.on_border(Position::new(1, 1)));
        assert!(grid.on_border(Position::new(39, 7)));
        assert!(grid.on_border(Position::new(7, 19)));
    }

    #[test]
    fn test_step_moves_one_cell() {
        let p = Position::new(5, 5);
        assert_eq!(p.step(Direction::Left), Position::new(4, 5));
        assert_eq!(p.step(Direction::Right), Position::new(6, 5));
        assert_eq!(p.step(Direction::Up), Position::new(5, 4));
        assert_eq!(p.step(Direction::Down), Position::new(5, 6));
        assert_eq!(p.step(Direction::None), p);
    }

    #[test]
    fn test_center_and_area() {
        let grid = Grid::new(40, 20);
        assert_eq!(grid.center(), Position::new(20, 10));
        assert_eq!(grid.area(), 800);
        assert_eq!(grid.cells().count(), 800);
    }
}
