//! Level and tick-delay progression.

use super::constants::{
    BONUS_SPEED_FLOOR, INITIAL_SPEED_MS, LEVEL_SPEED_FLOOR, LEVEL_THRESHOLD, SPEED_STEP_MS,
};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Difficulty {
    level: u32,
    speed_ms: u32,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self {
            level: 0,
            speed_ms: INITIAL_SPEED_MS,
        }
    }
}

impl Difficulty {
    pub fn level_for_score(score: u32) -> u32 {
        score / LEVEL_THRESHOLD
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Current tick delay in milliseconds. Lower is faster.
    pub fn speed_ms(&self) -> u32 {
        self.speed_ms
    }

    pub fn on_bonus_eaten(&mut self) {
        if self.speed_ms > BONUS_SPEED_FLOOR {
            self.speed_ms -= SPEED_STEP_MS;
        }
    }

    /// Returns the new level if `score` crossed into a higher tier.
    pub fn advance(&mut self, score: u32) -> Option<u32> {
        let new_level = Self::level_for_score(score);
        if new_level <= self.level {
            return None;
        }

        self.level = new_level;
        if self.speed_ms > LEVEL_SPEED_FLOOR {
            self.speed_ms -= SPEED_STEP_MS;
        }
        Some(new_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_is_idempotent() {
        let mut difficulty = Difficulty::default();
        assert_eq!(difficulty.advance(50), Some(1));
        assert_eq!(difficulty.advance(50), None);
        assert_eq!(difficulty.level(), 1);
        assert_eq!(difficulty.speed_ms(), 90);
    }

    #[test]
    fn test_level_never_goes_down() {
        let mut difficulty = Difficulty::default();
        difficulty.advance(120);
        assert_eq!(difficulty.advance(40), None);
        assert_eq!(difficulty.level(), 2);
    }

    #[test]
    fn test_skipping_levels_applies_one_speed_step() {
        let mut difficulty = Difficulty::default();
        assert_eq!(difficulty.advance(150), Some(3));
        assert_eq!(difficulty.speed_ms(), 90);
    }

    #[test]
    fn test_bonus_floor_is_ten() {
        let mut difficulty = Difficulty::default();
        for _ in 0..20 {
            difficulty.on_bonus_eaten();
        }
        assert_eq!(difficulty.speed_ms(), 10);
    }

    #[test]
    fn test_level_floor_is_twenty() {
        let mut difficulty = Difficulty::default();
        for level in 1..20 {
            difficulty.advance(level * LEVEL_THRESHOLD);
        }
        assert_eq!(difficulty.speed_ms(), 20);

        // The bonus path still goes below the level floor.
        difficulty.on_bonus_eaten();
        assert_eq!(difficulty.speed_ms(), 10);
    }
}
