//! Game events (messages) emitted after each tick.

use bevy::prelude::*;

use super::{Collision, Position};

/// Message triggered when red food is eaten (for visual effects).
#[derive(Message)]
pub struct FoodEatenEvent {
    pub position: Position,
}

/// Message triggered when bonus food is eaten. Drives the blink overlay.
#[derive(Message)]
pub struct BonusEatenEvent {
    pub position: Position,
}

/// Message triggered when the snake hits a wall, an obstacle or itself.
#[derive(Message)]
pub struct CrashEvent {
    pub collision: Collision,
    pub score: u32,
}
