mod config;
mod game;
mod rendering;
mod simulation;
mod ui;

use std::process::ExitCode;

use bevy::asset::io::file::FileAssetReader;
use bevy::{prelude::*, window::WindowResolution};
use bevy_vector_shapes::prelude::*;
use clap::Parser;

use config::{Cli, GameConfig, StartupError};
use game::{ActiveSession, BACKGROUND_COLOR, GameSession, TickTimer};
use rendering::RenderingPlugin;
use simulation::SimulationPlugin;
use ui::UiPlugin;

/// Validates everything that would otherwise fail after the window is up.
fn prepare(cli: Cli) -> Result<GameConfig, StartupError> {
    let config = GameConfig::from_cli(cli)?;
    config.check_font(&FileAssetReader::get_base_path().join("assets"))?;
    Ok(config)
}

fn run(config: GameConfig) -> AppExit {
    let window_size = config.window_size();
    let mut app = App::new();
    app.add_plugins((
        DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                resolution: WindowResolution::new(window_size.x, window_size.y),
                title: "Snake Game".to_string(),
                resizable: false,
                ..default()
            }),
            ..default()
        }),
        Shape2dPlugin::default(),
    ));

    let session = GameSession::with_seed(config.grid, config.seed);
    app.insert_resource(ClearColor(BACKGROUND_COLOR))
        .insert_resource(TickTimer::new(session.speed_ms()))
        .insert_resource(ActiveSession(session))
        .insert_resource(config)
        .add_plugins((SimulationPlugin, RenderingPlugin, UiPlugin))
        .run()
}

fn main() -> ExitCode {
    let config = match prepare(Cli::parse()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to start: {err}");
            return ExitCode::FAILURE;
        }
    };

    match run(config) {
        AppExit::Success => ExitCode::SUCCESS,
        AppExit::Error(code) => ExitCode::from(code.get()),
    }
}
