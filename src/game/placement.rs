//! Spawn positions for food, bonus food and obstacles.

use std::collections::HashSet;

use bevy::log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use thiserror::Error;

use super::grid::{Grid, Position};

/// Random draws per grid cell before falling back to a full scan.
const ATTEMPTS_PER_CELL: usize = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("no free cell left on the {width}x{height} grid")]
    CapacityExceeded { width: i32, height: i32 },
}

/// Rejection sampler over a fixed grid.
#[derive(Clone, Debug)]
pub struct Placer<R> {
    grid: Grid,
    rng: R,
}

impl<R: Rng> Placer<R> {
    pub fn new(grid: Grid, rng: R) -> Self {
        Self { grid, rng }
    }

    /// Picks a uniformly random cell that is not in `exclusions` and, if
    /// `avoid_border` is set, not on the border ring.
    pub fn place(
        &mut self,
        exclusions: &HashSet<Position>,
        avoid_border: bool,
    ) -> Result<Position, PlacementError> {
        let is_free = |grid: &Grid, p: Position| {
            !exclusions.contains(&p) && !(avoid_border && grid.on_border(p))
        };

        let attempts = self.grid.area() * ATTEMPTS_PER_CELL;
        for _ in 0..attempts {
            let candidate = Position::new(
                self.rng.random_range(0..self.grid.width),
                self.rng.random_range(0..self.grid.height),
            );
            if is_free(&self.grid, candidate) {
                return Ok(candidate);
            }
        }

        debug!(
            "Random placement gave up after {} attempts, scanning the grid",
            attempts
        );
        let free: Vec<Position> = self.grid.cells().filter(|p| is_free(&self.grid, *p)).collect();
        free.choose(&mut self.rng)
            .copied()
            .ok_or(PlacementError::CapacityExceeded {
                width: self.grid.width,
                height: self.grid.height,
            })
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn placer(width: i32, height: i32, seed: u64) -> Placer<StdRng> {
        Placer::new(Grid::new(width, height), StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_place_avoids_exclusions_and_border() {
        let mut placer = placer(40, 20, 7);
        let exclusions: HashSet<Position> =
            [Position::new(5, 5), Position::new(6, 6), Position::new(10, 3)]
                .into_iter()
                .collect();

        for _ in 0..2_000 {
            let p = placer.place(&exclusions, true).unwrap();
            assert!(!exclusions.contains(&p));
            assert!(!placer.grid().on_border(p));
            assert!(placer.grid().contains(p));
        }
    }

    #[test]
    fn test_place_without_border_rule_can_use_border() {
        let mut placer = placer(3, 3, 1);
        // Only the interior cell is excluded, so every result is a border cell.
        let exclusions: HashSet<Position> = [Position::new(1, 1)].into_iter().collect();
        let p = placer.place(&exclusions, false).unwrap();
        assert!(placer.grid().on_border(p));
    }

    #[test]
    fn test_place_finds_single_remaining_cell() {
        // 5x5 grid has a 3x3 interior; exclude all interior cells but one.
        let mut placer = placer(5, 5, 3);
        let last = Position::new(3, 2);
        let exclusions: HashSet<Position> = (1..4)
            .flat_map(|y| (1..4).map(move |x| Position::new(x, y)))
            .filter(|p| *p != last)
            .collect();

        assert_eq!(placer.place(&exclusions, true), Ok(last));
    }

    #[test]
    fn test_place_reports_capacity_exceeded() {
        let mut placer = placer(4, 4, 11);
        let exclusions: HashSet<Position> = (1..3)
            .flat_map(|y| (1..3).map(move |x| Position::new(x, y)))
            .collect();

        assert_eq!(
            placer.place(&exclusions, true),
            Err(PlacementError::CapacityExceeded {
                width: 4,
                height: 4
            })
        );
    }

    #[test]
    fn test_place_on_grid_without_interior_fails() {
        let mut placer = placer(2, 2, 0);
        assert!(placer.place(&HashSet::new(), true).is_err());
        assert!(placer.place(&HashSet::new(), false).is_ok());
    }
}
