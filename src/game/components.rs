//! ECS components for the presentation layer.

use bevy::prelude::*;

/// Expanding or collapsing ring left behind where food was picked up.
#[derive(Component)]
pub struct PulseEffect {
    pub timer: Timer,
    pub start_scale: f32,
    pub end_scale: f32,
}

impl PulseEffect {
    pub fn new(seconds: f32, start_scale: f32, end_scale: f32) -> Self {
        PulseEffect {
            timer: Timer::from_seconds(seconds, TimerMode::Once),
            start_scale,
            end_scale,
        }
    }

    /// Current scale, linear in the elapsed fraction of the timer.
    pub fn scale(&self) -> f32 {
        self.start_scale + (self.end_scale - self.start_scale) * self.timer.fraction()
    }
}

/// Component to mark the score display UI element.
#[derive(Component)]
pub struct ScoreText;

/// Component to mark the level display UI element.
#[derive(Component)]
pub struct LevelText;

/// Component to mark the "Ready" text shown before the first move.
#[derive(Component)]
pub struct ReadyText;

/// Component to mark the "Game Over" text.
#[derive(Component)]
pub struct GameOverText;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_pulse_scale_follows_timer() {
        let mut pulse = PulseEffect::new(0.4, 2.0, 0.5);
        assert_eq!(pulse.scale(), 2.0);

        pulse.timer.tick(Duration::from_millis(200));
        assert!((pulse.scale() - 1.25).abs() < 1e-4);

        pulse.timer.tick(Duration::from_millis(200));
        assert_eq!(pulse.scale(), 0.5);
    }
}
