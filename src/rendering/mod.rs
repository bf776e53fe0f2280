//! Rendering plugin - draws the session snapshot each frame and runs the visual effects.

use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;
use rand::prelude::*;

use crate::config::GameConfig;
use crate::game::{
    ARENA_BORDER_COLOR, ARENA_COLOR, ActiveSession, BLINK_COLOR, BONUS_FOOD_COLOR,
    BONUS_PULSE_COLOR, BlinkOverlay, BonusEatenEvent, CORNER_RADIUS, CameraShake, Collision,
    CrashEvent, FOOD_COLOR, FOOD_PULSE_COLOR, FoodEatenEvent, Grid, INFO_BAR_HEIGHT,
    OBSTACLE_COLOR, Position, PulseEffect, SNAKE_HEAD_COLOR, SNAKE_SEGMENT_COLOR, Z_BACKGROUND,
    Z_FOOD, Z_OBSTACLE, Z_OVERLAY, Z_SNAKE_HEAD, Z_SNAKE_SEGMENT,
};

/// Plugin for rendering and visual effects.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BlinkOverlay>()
            .init_resource::<CameraShake>()
            .add_systems(
                Update,
                (
                    draw_arena,
                    draw_session,
                    trigger_blink_on_bonus,
                    draw_blink_overlay,
                    spawn_pickup_effects,
                    pulse_effect_system,
                    trigger_camera_shake_on_crash,
                    camera_shake_system,
                )
                    .chain(),
            );
    }
}

/// Maps grid cells onto world space. Grid y grows downward, world y grows upward,
/// and the arena sits above the score strip.
#[derive(Clone, Copy, Debug)]
pub struct CellLayout {
    grid: Grid,
    cell_size: f32,
}

impl CellLayout {
    pub fn new(grid: Grid, cell_size: f32) -> Self {
        CellLayout { grid, cell_size }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.grid, config.cell_size)
    }

    /// World-space center of a cell.
    pub fn world(&self, position: Position, z: f32) -> Vec3 {
        let cell = self.cell_size;
        let x = (position.x as f32 - self.grid.width as f32 / 2.0 + 0.5) * cell;
        let y = (self.grid.height as f32 / 2.0 - position.y as f32 - 0.5) * cell
            + INFO_BAR_HEIGHT / 2.0;
        Vec3::new(x, y, z)
    }

    fn fill(&self, painter: &mut ShapePainter, position: Position, z: f32, color: Color) {
        let size = self.cell_size;
        painter.set_translation(self.world(position, z));
        painter.color = color;
        painter.hollow = false;
        // Corner radii are relative to half the shape size.
        painter.corner_radii = Vec4::splat(CORNER_RADIUS / (size / 2.0));
        painter.rect(Vec2::splat(size));
    }
}

/// System to draw the arena background, its frame and the score strip frame.
fn draw_arena(mut painter: ShapePainter, config: Res<GameConfig>) {
    let arena = config.arena_size();

    painter.corner_radii = Vec4::ZERO;
    painter.hollow = false;
    painter.color = ARENA_COLOR;
    painter.set_translation(Vec3::new(0.0, INFO_BAR_HEIGHT / 2.0, Z_BACKGROUND));
    painter.rect(arena);

    painter.hollow = true;
    painter.thickness = 1.0;
    painter.color = ARENA_BORDER_COLOR;
    painter.set_translation(Vec3::new(0.0, INFO_BAR_HEIGHT / 2.0, Z_BACKGROUND + 0.1));
    painter.rect(arena);

    painter.set_translation(Vec3::new(0.0, -arena.y / 2.0, Z_BACKGROUND + 0.1));
    painter.rect(Vec2::new(arena.x, INFO_BAR_HEIGHT));
}

/// System to draw food, obstacles and the snake from the current snapshot.
fn draw_session(mut painter: ShapePainter, config: Res<GameConfig>, session: Res<ActiveSession>) {
    let snapshot = session.snapshot();
    let layout = CellLayout::new(snapshot.grid, config.cell_size);

    layout.fill(&mut painter, snapshot.food, Z_FOOD, FOOD_COLOR);
    layout.fill(&mut painter, snapshot.bonus_food, Z_FOOD, BONUS_FOOD_COLOR);
    for obstacle in snapshot.obstacles {
        layout.fill(&mut painter, *obstacle, Z_OBSTACLE, OBSTACLE_COLOR);
    }

    let head = snapshot.snake.head();
    for segment in snapshot.snake.segments().skip(1) {
        layout.fill(&mut painter, *segment, Z_SNAKE_SEGMENT, SNAKE_SEGMENT_COLOR);
    }
    layout.fill(&mut painter, head, Z_SNAKE_HEAD, SNAKE_HEAD_COLOR);
}

fn trigger_blink_on_bonus(
    mut blink: ResMut<BlinkOverlay>,
    mut bonus_eaten_reader: MessageReader<BonusEatenEvent>,
) {
    if bonus_eaten_reader.read().next().is_some() {
        blink.trigger();
    }
}

/// System to flash the arena while the blink timer runs.
fn draw_blink_overlay(
    time: Res<Time>,
    mut blink: ResMut<BlinkOverlay>,
    mut painter: ShapePainter,
    config: Res<GameConfig>,
) {
    if !blink.is_active() {
        return;
    }
    blink.timer.tick(time.delta());

    painter.hollow = false;
    painter.corner_radii = Vec4::ZERO;
    painter.color = BLINK_COLOR;
    painter.set_translation(Vec3::new(0.0, INFO_BAR_HEIGHT / 2.0, Z_OVERLAY));
    painter.rect(config.arena_size());
}

fn pickup_ring(layout: CellLayout, position: Position, color: Color, radius: f32) -> impl Bundle {
    ShapeBundle::circle(
        &ShapeConfig {
            color,
            hollow: true,
            thickness: 2.0,
            transform: Transform::from_translation(layout.world(position, Z_FOOD + 0.5)),
            ..ShapeConfig::default_2d()
        },
        radius,
    )
}

/// System to leave a ring where food was eaten: growing for food, collapsing for bonus food.
fn spawn_pickup_effects(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut food_eaten_reader: MessageReader<FoodEatenEvent>,
    mut bonus_eaten_reader: MessageReader<BonusEatenEvent>,
) {
    let layout = CellLayout::from_config(&config);
    let radius = config.cell_size / 2.0;
    for event in food_eaten_reader.read() {
        commands.spawn((
            pickup_ring(layout, event.position, FOOD_PULSE_COLOR, radius),
            PulseEffect::new(0.3, 1.0, 2.5),
        ));
    }
    for event in bonus_eaten_reader.read() {
        commands.spawn((
            pickup_ring(layout, event.position, BONUS_PULSE_COLOR, radius),
            PulseEffect::new(0.4, 3.0, 0.5),
        ));
    }
}

fn pulse_effect_system(
    mut commands: Commands,
    time: Res<Time>,
    mut effects: Query<(Entity, &mut Transform, &mut PulseEffect)>,
) {
    for (entity, mut transform, mut effect) in effects.iter_mut() {
        if effect.timer.tick(time.delta()).is_finished() {
            commands.entity(entity).despawn();
        } else {
            transform.scale = Vec3::splat(effect.scale());
        }
    }
}

/// How hard the camera shakes for each kind of crash.
fn shake_intensity(collision: Collision) -> f32 {
    match collision {
        Collision::Wall => 8.0,
        Collision::Obstacle => 12.0,
        Collision::SelfBite => 5.0,
    }
}

fn trigger_camera_shake_on_crash(
    mut crash_reader: MessageReader<CrashEvent>,
    mut camera_shake: ResMut<CameraShake>,
) {
    if let Some(crash) = crash_reader.read().last() {
        debug!("Shaking camera for {:?} crash at score {}", crash.collision, crash.score);
        camera_shake.start(shake_intensity(crash.collision));
    }
}

/// System to jitter the camera while a shake runs and re-center it afterwards.
fn camera_shake_system(
    time: Res<Time>,
    mut camera_shake: ResMut<CameraShake>,
    mut camera_query: Query<&mut Transform, With<Camera2d>>,
) {
    if !camera_shake.is_active() {
        return;
    }
    camera_shake.timer.tick(time.delta());

    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };
    let mut rng = rand::rng();
    let jitter = Vec2::new(rng.random::<f32>() - 0.5, rng.random::<f32>() - 0.5);
    let offset = camera_shake.offset(jitter);
    camera_transform.translation.x = offset.x;
    camera_transform.translation.y = offset.y;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> CellLayout {
        CellLayout::new(Grid::new(40, 20), 20.0)
    }

    #[test]
    fn test_top_left_cell_maps_to_upper_left_of_arena() {
        let world = layout().world(Position::new(0, 0), 1.0);
        assert_eq!(world, Vec3::new(-390.0, 210.0, 1.0));
    }

    #[test]
    fn test_bottom_right_cell_sits_above_score_strip() {
        let world = layout().world(Position::new(39, 19), 0.0);
        assert_eq!(world, Vec3::new(390.0, -170.0, 0.0));
    }

    #[test]
    fn test_obstacle_crash_shakes_hardest() {
        assert!(shake_intensity(Collision::Obstacle) > shake_intensity(Collision::Wall));
        assert!(shake_intensity(Collision::Wall) > shake_intensity(Collision::SelfBite));
    }
}
