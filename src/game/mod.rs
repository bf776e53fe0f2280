//! Core game module: the deterministic session plus the ECS glue shared by the plugins.

mod components;
mod constants;
mod difficulty;
mod events;
mod grid;
mod placement;
mod resources;
mod session;
mod snake;

pub use components::*;
pub use constants::*;
pub use events::*;
pub use grid::{Grid, Position};
pub use resources::*;
pub use session::{Collision, GameSession, InputEvent, TickOutcome};
