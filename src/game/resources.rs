//! Game resources (singleton state).

use bevy::prelude::*;
use std::time::Duration;

use super::{BLINK_DURATION, GameSession, SHAKE_DURATION};

/// The running session. Only the simulation systems mutate it.
#[derive(Resource, Deref, DerefMut)]
pub struct ActiveSession(pub GameSession);

/// Repeating timer whose period tracks the session's tick delay.
#[derive(Resource)]
pub struct TickTimer {
    pub timer: Timer,
}

impl TickTimer {
    pub fn new(speed_ms: u32) -> Self {
        TickTimer {
            timer: Timer::new(Duration::from_millis(speed_ms as u64), TimerMode::Repeating),
        }
    }

    /// Adopt a new tick delay without losing the time already accumulated.
    pub fn sync_speed(&mut self, speed_ms: u32) {
        let period = Duration::from_millis(speed_ms as u64);
        if self.timer.duration() != period {
            self.timer.set_duration(period);
        }
    }
}

/// Translucent flash over the arena after bonus food is eaten.
#[derive(Resource)]
pub struct BlinkOverlay {
    pub timer: Timer,
}

impl Default for BlinkOverlay {
    fn default() -> Self {
        let mut timer = Timer::new(BLINK_DURATION, TimerMode::Once);
        timer.tick(BLINK_DURATION);
        BlinkOverlay { timer }
    }
}

impl BlinkOverlay {
    pub fn trigger(&mut self) {
        self.timer.reset();
    }

    pub fn is_active(&self) -> bool {
        !self.timer.is_finished()
    }
}

/// Decaying camera jitter after a crash.
#[derive(Resource)]
pub struct CameraShake {
    pub timer: Timer,
    pub intensity: f32,
}

impl Default for CameraShake {
    fn default() -> Self {
        let mut timer = Timer::new(SHAKE_DURATION, TimerMode::Once);
        timer.tick(SHAKE_DURATION);
        CameraShake {
            timer,
            intensity: 0.0,
        }
    }
}

impl CameraShake {
    pub fn start(&mut self, intensity: f32) {
        self.intensity = intensity;
        self.timer.reset();
    }

    pub fn is_active(&self) -> bool {
        !self.timer.is_finished()
    }

    /// Camera offset for a jitter sample in `[-0.5, 0.5]` per axis, fading out
    /// over the shake.
    pub fn offset(&self, jitter: Vec2) -> Vec2 {
        if !self.is_active() {
            return Vec2::ZERO;
        }
        jitter * self.intensity * (1.0 - self.timer.fraction())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blink_starts_inactive_and_expires() {
        let mut blink = BlinkOverlay::default();
        assert!(!blink.is_active());

        blink.trigger();
        assert!(blink.is_active());

        blink.timer.tick(BLINK_DURATION);
        assert!(!blink.is_active());
    }

    #[test]
    fn test_camera_shake_fades_out() {
        let mut shake = CameraShake::default();
        assert_eq!(shake.offset(Vec2::splat(0.5)), Vec2::ZERO);

        shake.start(10.0);
        assert_eq!(shake.offset(Vec2::new(0.5, -0.5)), Vec2::new(5.0, -5.0));

        shake.timer.tick(SHAKE_DURATION / 2);
        assert!((shake.offset(Vec2::splat(0.5)).x - 2.5).abs() < 1e-3);

        shake.timer.tick(SHAKE_DURATION);
        assert!(!shake.is_active());
        assert_eq!(shake.offset(Vec2::splat(0.5)), Vec2::ZERO);
    }

    #[test]
    fn test_tick_timer_follows_speed() {
        let mut tick = TickTimer::new(100);
        tick.sync_speed(90);
        assert_eq!(tick.timer.duration(), Duration::from_millis(90));
        assert_eq!(tick.timer.mode(), TimerMode::Repeating);
    }
}
