//! Simulation plugin - feeds input into the session and advances it at the current tick delay.

use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy::window::WindowEvent;

use crate::game::{
    ActiveSession, BonusEatenEvent, CrashEvent, FoodEatenEvent, InputEvent, TickOutcome,
    TickTimer,
};

/// Plugin for input handling and the fixed-cadence game tick.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<FoodEatenEvent>()
            .add_message::<BonusEatenEvent>()
            .add_message::<CrashEvent>()
            .add_systems(Update, (session_input, advance_session).chain());
    }
}

/// Maps a key press to a game input.
fn input_for_key(key: KeyCode) -> Option<InputEvent> {
    match key {
        KeyCode::ArrowLeft | KeyCode::KeyA => Some(InputEvent::MoveLeft),
        KeyCode::ArrowRight | KeyCode::KeyD => Some(InputEvent::MoveRight),
        KeyCode::ArrowUp | KeyCode::KeyW => Some(InputEvent::MoveUp),
        KeyCode::ArrowDown | KeyCode::KeyS => Some(InputEvent::MoveDown),
        KeyCode::Space | KeyCode::KeyR => Some(InputEvent::Reset),
        KeyCode::Escape => Some(InputEvent::Quit),
        _ => None,
    }
}

/// Maps a raw window event to a game input. Keyboard, mouse and close requests
/// share one stream so their relative order survives.
fn input_for_window_event(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::KeyboardInput(key) if key.state == ButtonState::Pressed && !key.repeat => {
            input_for_key(key.key_code)
        }
        WindowEvent::MouseButtonInput(click)
            if click.button == MouseButton::Left && click.state == ButtonState::Pressed =>
        {
            Some(InputEvent::Reset)
        }
        WindowEvent::WindowCloseRequested(_) => Some(InputEvent::Quit),
        _ => None,
    }
}

/// System to gather this frame's input, in arrival order, and hand it to the session.
fn session_input(
    mut window_events: MessageReader<WindowEvent>,
    mut session: ResMut<ActiveSession>,
    mut tick_timer: ResMut<TickTimer>,
    mut app_exit: MessageWriter<AppExit>,
) {
    let events: Vec<InputEvent> = window_events
        .read()
        .filter_map(input_for_window_event)
        .collect();
    if events.is_empty() {
        return;
    }

    let quit = events.contains(&InputEvent::Quit);
    if events.contains(&InputEvent::Reset) {
        tick_timer.timer.reset();
    }
    session.apply_inputs(events);

    if quit {
        app_exit.write(AppExit::Success);
    }
}

/// System to advance the session whenever the tick timer elapses.
fn advance_session(
    time: Res<Time>,
    mut session: ResMut<ActiveSession>,
    mut tick_timer: ResMut<TickTimer>,
    mut food_eaten_writer: MessageWriter<FoodEatenEvent>,
    mut bonus_eaten_writer: MessageWriter<BonusEatenEvent>,
    mut crash_writer: MessageWriter<CrashEvent>,
) {
    tick_timer.timer.tick(time.delta());

    // A slow frame can span several tick periods at the higher levels.
    for _ in 0..tick_timer.timer.times_finished_this_tick() {
        let report = session.tick();
        let head = session.snake().head();
        match report.outcome {
            TickOutcome::AteFood => {
                food_eaten_writer.write(FoodEatenEvent { position: head });
            }
            TickOutcome::AteBonus => {
                bonus_eaten_writer.write(BonusEatenEvent { position: head });
            }
            TickOutcome::Crashed(collision) => {
                crash_writer.write(CrashEvent {
                    collision,
                    score: session.score(),
                });
            }
            TickOutcome::Skipped | TickOutcome::Idle | TickOutcome::Moved => {}
        }
        if let Some(level) = report.level_up {
            debug!("Tick delay now {}ms at level {}", session.speed_ms(), level);
        }
    }

    let speed_ms = session.speed_ms();
    tick_timer.sync_speed(speed_ms);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::input::mouse::MouseButtonInput;
    use bevy::window::WindowCloseRequested;

    fn click(button: MouseButton, state: ButtonState) -> WindowEvent {
        WindowEvent::MouseButtonInput(MouseButtonInput {
            button,
            state,
            window: Entity::PLACEHOLDER,
        })
    }

    #[test]
    fn test_arrows_and_wasd_steer() {
        assert_eq!(input_for_key(KeyCode::ArrowLeft), Some(InputEvent::MoveLeft));
        assert_eq!(input_for_key(KeyCode::KeyD), Some(InputEvent::MoveRight));
        assert_eq!(input_for_key(KeyCode::KeyW), Some(InputEvent::MoveUp));
        assert_eq!(input_for_key(KeyCode::ArrowDown), Some(InputEvent::MoveDown));
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(input_for_key(KeyCode::Space), Some(InputEvent::Reset));
        assert_eq!(input_for_key(KeyCode::Escape), Some(InputEvent::Quit));
        assert_eq!(input_for_key(KeyCode::KeyQ), None);
    }

    #[test]
    fn test_left_click_resets() {
        let press = click(MouseButton::Left, ButtonState::Pressed);
        assert_eq!(input_for_window_event(&press), Some(InputEvent::Reset));

        let release = click(MouseButton::Left, ButtonState::Released);
        assert_eq!(input_for_window_event(&release), None);

        let right = click(MouseButton::Right, ButtonState::Pressed);
        assert_eq!(input_for_window_event(&right), None);
    }

    #[test]
    fn test_close_request_quits() {
        let close = WindowEvent::WindowCloseRequested(WindowCloseRequested {
            window: Entity::PLACEHOLDER,
        });
        assert_eq!(input_for_window_event(&close), Some(InputEvent::Quit));
    }
}
