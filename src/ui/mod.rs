//! UI plugin - camera, score/level strip and the Ready / Game Over texts.

use bevy::prelude::*;

use crate::config::GameConfig;
use crate::game::{
    ActiveSession, GameOverText, INFO_BAR_HEIGHT, LevelText, ReadyText, ScoreText,
};

/// Plugin for UI text and status overlays.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_system).add_systems(
            Update,
            (update_info_text, update_status_text).chain(),
        );
    }
}

fn text_font(font: &Handle<Font>, font_size: f32) -> TextFont {
    TextFont {
        font: font.clone(),
        font_size,
        ..default()
    }
}

/// Spawns a text node centred horizontally over the arena.
fn spawn_status_text(
    commands: &mut Commands,
    font: &Handle<Font>,
    label: &str,
    config: &GameConfig,
    marker: impl Component,
) {
    let arena = config.arena_size();
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Px(arena.x),
                height: Val::Px(arena.y),
                top: Val::Px(0.0),
                left: Val::Px(0.0),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                ..default()
            },
            Visibility::Hidden,
            marker,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(label),
                text_font(font, 24.0),
                TextColor(Color::WHITE),
            ));
        });
}

/// Initial setup system - camera, score strip, status texts.
fn setup_system(mut commands: Commands, config: Res<GameConfig>, asset_server: Res<AssetServer>) {
    commands.spawn(Camera2d);

    let font: Handle<Font> = asset_server.load(config.font.clone());
    let arena = config.arena_size();
    let strip_top = arena.y + (INFO_BAR_HEIGHT - 24.0) / 2.0;

    commands.spawn((
        Text::new("Score: 0"),
        text_font(&font, 20.0),
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(strip_top),
            left: Val::Px(10.0),
            ..default()
        },
        ScoreText,
    ));

    commands.spawn((
        Text::new("Level: 0"),
        text_font(&font, 20.0),
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(strip_top),
            left: Val::Px(arena.x / 2.0),
            ..default()
        },
        LevelText,
    ));

    spawn_status_text(&mut commands, &font, "Ready", &config, ReadyText);
    spawn_status_text(&mut commands, &font, "Game Over", &config, GameOverText);
}

/// System to update the score and level display.
fn update_info_text(
    session: Res<ActiveSession>,
    mut score_query: Query<&mut Text, (With<ScoreText>, Without<LevelText>)>,
    mut level_query: Query<&mut Text, (With<LevelText>, Without<ScoreText>)>,
) {
    if !session.is_changed() {
        return;
    }
    let snapshot = session.snapshot();
    if let Ok(mut text) = score_query.single_mut() {
        *text = Text::from(format!("Score: {}", snapshot.score));
    }
    if let Ok(mut text) = level_query.single_mut() {
        *text = Text::from(format!("Level: {}", snapshot.level));
    }
}

fn visibility(shown: bool) -> Visibility {
    if shown {
        Visibility::Visible
    } else {
        Visibility::Hidden
    }
}

/// System to show "Ready" before the first move and "Game Over" after a crash or quit.
fn update_status_text(
    session: Res<ActiveSession>,
    mut ready_query: Query<&mut Visibility, (With<ReadyText>, Without<GameOverText>)>,
    mut game_over_query: Query<&mut Visibility, (With<GameOverText>, Without<ReadyText>)>,
) {
    let snapshot = session.snapshot();
    if let Ok(mut ready) = ready_query.single_mut() {
        *ready = visibility(snapshot.show_ready);
    }
    if let Ok(mut game_over) = game_over_query.single_mut() {
        *game_over = visibility(snapshot.game_over);
    }
}
