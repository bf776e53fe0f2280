//! Game constants for arena size, scoring, timing, colors and rendering layers.

use bevy::prelude::*;
use std::time::Duration;

// Arena dimensions
pub const DEFAULT_ARENA_WIDTH: i32 = 40;
pub const DEFAULT_ARENA_HEIGHT: i32 = 20;
pub const MIN_ARENA_SIDE: i32 = 5;

// Scoring
pub const FOOD_SCORE: u32 = 10;
pub const BONUS_PENALTY: u32 = 10;
pub const LEVEL_THRESHOLD: u32 = 50;
pub const OBSTACLES_PER_LEVEL: usize = 3;

// Timing (tick delay in milliseconds)
pub const INITIAL_SPEED_MS: u32 = 100;
pub const SPEED_STEP_MS: u32 = 10;
pub const BONUS_SPEED_FLOOR: u32 = 10;
pub const LEVEL_SPEED_FLOOR: u32 = 20;
pub const BLINK_DURATION: Duration = Duration::from_millis(500);
pub const SHAKE_DURATION: Duration = Duration::from_millis(400);

// Visual settings
pub const DEFAULT_CELL_SIZE: f32 = 20.0;
pub const CORNER_RADIUS: f32 = 3.0;
pub const INFO_BAR_HEIGHT: f32 = 40.0;
pub const DEFAULT_FONT_PATH: &str = "fonts/FiraSans-Bold.ttf";

// Colors
pub const SNAKE_HEAD_COLOR: Color = Color::srgba(0.3, 1.0, 0.3, 1.0);
pub const SNAKE_SEGMENT_COLOR: Color = Color::srgba(0.0, 0.8, 0.0, 1.0);
pub const FOOD_COLOR: Color = Color::srgba(1.0, 0.0, 0.0, 1.0);
pub const BONUS_FOOD_COLOR: Color = Color::srgba(0.1, 0.3, 1.0, 1.0);
pub const OBSTACLE_COLOR: Color = Color::srgba(0.5, 0.5, 0.5, 1.0);
pub const ARENA_COLOR: Color = Color::srgba(0.02, 0.02, 0.02, 1.0);
pub const ARENA_BORDER_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 1.0);
pub const BLINK_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.5);
pub const FOOD_PULSE_COLOR: Color = Color::srgba(1.0, 1.0, 0.3, 0.8);
pub const BONUS_PULSE_COLOR: Color = Color::srgba(0.4, 0.6, 1.0, 0.8);
pub const BACKGROUND_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 1.0);

// Z-index constants for rendering layers
pub const Z_BACKGROUND: f32 = 0.0;
pub const Z_OBSTACLE: f32 = 0.5;
pub const Z_FOOD: f32 = 1.0;
pub const Z_SNAKE_SEGMENT: f32 = 1.5;
pub const Z_SNAKE_HEAD: f32 = 2.0;
pub const Z_OVERLAY: f32 = 5.0;
