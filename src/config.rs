//! Command-line configuration and startup validation.

use std::path::{Path, PathBuf};

use bevy::prelude::*;
use clap::Parser;
use thiserror::Error;

use crate::game::{
    DEFAULT_ARENA_HEIGHT, DEFAULT_ARENA_WIDTH, DEFAULT_CELL_SIZE, DEFAULT_FONT_PATH, Grid,
    INFO_BAR_HEIGHT, MIN_ARENA_SIDE,
};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("arena must be at least {min}x{min} cells, got {width}x{height}")]
    ArenaTooSmall { width: i32, height: i32, min: i32 },
    #[error("cell size must be a positive number of pixels, got {0}")]
    InvalidCellSize(f32),
}

/// Errors that abort the game before a window is opened.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("font asset not found at {}", .0.display())]
    MissingFont(PathBuf),
}

/// Command-line arguments for launching the game.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Number of columns in the arena, border ring included.
    #[arg(long, value_name = "COLUMNS", default_value_t = DEFAULT_ARENA_WIDTH)]
    pub width: i32,
    /// Number of rows in the arena, border ring included.
    #[arg(long, value_name = "ROWS", default_value_t = DEFAULT_ARENA_HEIGHT)]
    pub height: i32,
    /// Edge length of one cell in pixels.
    #[arg(long = "cell-size", value_name = "PIXELS", default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: f32,
    /// Seed for food and obstacle placement. Random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Font used for score and status text, relative to the assets directory.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_FONT_PATH)]
    pub font: String,
}

/// Validated settings shared with every plugin.
#[derive(Resource, Clone, Debug)]
pub struct GameConfig {
    pub grid: Grid,
    pub cell_size: f32,
    pub seed: u64,
    pub font: String,
}

impl GameConfig {
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        if cli.width < MIN_ARENA_SIDE || cli.height < MIN_ARENA_SIDE {
            return Err(ConfigError::ArenaTooSmall {
                width: cli.width,
                height: cli.height,
                min: MIN_ARENA_SIDE,
            });
        }
        if !(cli.cell_size.is_finite() && cli.cell_size > 0.0) {
            return Err(ConfigError::InvalidCellSize(cli.cell_size));
        }

        Ok(GameConfig {
            grid: Grid::new(cli.width, cli.height),
            cell_size: cli.cell_size,
            seed: cli.seed.unwrap_or_else(rand::random),
            font: cli.font,
        })
    }

    pub fn arena_size(&self) -> Vec2 {
        Vec2::new(
            self.grid.width as f32 * self.cell_size,
            self.grid.height as f32 * self.cell_size,
        )
    }

    /// Window size: the arena plus the score strip underneath.
    pub fn window_size(&self) -> UVec2 {
        let arena = self.arena_size();
        UVec2::new(arena.x as u32, (arena.y + INFO_BAR_HEIGHT) as u32)
    }

    /// Fails if the configured font is not present under `assets_root`.
    pub fn check_font(&self, assets_root: &Path) -> Result<(), StartupError> {
        let path = assets_root.join(&self.font);
        if path.is_file() {
            Ok(())
        } else {
            Err(StartupError::MissingFont(path))
        }
    }
}
