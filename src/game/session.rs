//! Per-tick state machine of a single game.

use std::collections::HashSet;

use bevy::log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::constants::{BONUS_PENALTY, FOOD_SCORE, OBSTACLES_PER_LEVEL};
use super::difficulty::Difficulty;
use super::grid::{Direction, Grid, Position};
use super::placement::Placer;
use super::snake::Snake;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    /// Waiting for the first directional input. Nothing moves.
    #[default]
    Ready,
    Running,
    /// Terminal until an explicit reset.
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collision {
    Wall,
    Obstacle,
    SelfBite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; the frame is only redrawn.
    Skipped,
    /// Running without a heading.
    Idle,
    Moved,
    AteFood,
    AteBonus,
    Crashed(Collision),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickReport {
    pub outcome: TickOutcome,
    pub level_up: Option<u32>,
}

impl TickReport {
    fn new(outcome: TickOutcome) -> Self {
        Self {
            outcome,
            level_up: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Reset,
    Quit,
}

impl InputEvent {
    pub fn direction(&self) -> Option<Direction> {
        match self {
            InputEvent::MoveLeft => Some(Direction::Left),
            InputEvent::MoveRight => Some(Direction::Right),
            InputEvent::MoveUp => Some(Direction::Up),
            InputEvent::MoveDown => Some(Direction::Down),
            InputEvent::Reset | InputEvent::Quit => None,
        }
    }
}

/// Read-only view handed to the renderer every frame.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    pub grid: Grid,
    pub snake: &'a Snake,
    pub food: Position,
    pub bonus_food: Position,
    pub obstacles: &'a [Position],
    pub score: u32,
    pub level: u32,
    pub game_over: bool,
    pub show_ready: bool,
}

pub struct GameSession<R = StdRng> {
    placer: Placer<R>,
    snake: Snake,
    direction: Direction,
    food: Position,
    bonus_food: Position,
    obstacles: Vec<Position>,
    score: u32,
    difficulty: Difficulty,
    phase: Phase,
}

impl GameSession<StdRng> {
    pub fn with_seed(grid: Grid, seed: u64) -> Self {
        info!("Starting session on {}x{} grid with seed {}", grid.width, grid.height, seed);
        Self::new(grid, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameSession<R> {
    pub fn new(grid: Grid, rng: R) -> Self {
        let center = grid.center();
        let mut session = Self {
            placer: Placer::new(grid, rng),
            snake: Snake::new(center),
            direction: Direction::None,
            food: center,
            bonus_food: center,
            obstacles: Vec::new(),
            score: 0,
            difficulty: Difficulty::default(),
            phase: Phase::Ready,
        };
        session.reset();
        session
    }

    /// Back to a one-cell snake in the middle of an empty arena, awaiting input.
    pub fn reset(&mut self) {
        let grid = self.placer.grid();
        self.snake = Snake::new(grid.center());
        self.direction = Direction::None;
        self.obstacles.clear();
        self.score = 0;
        self.difficulty = Difficulty::default();
        self.respawn_food();
        self.respawn_bonus_food();
        self.phase = Phase::Ready;
        info!("Session reset, snake at ({}, {})", grid.center().x, grid.center().y);
    }

    /// Ends the game without a collision. Ready is suppressed.
    pub fn quit(&mut self) {
        self.phase = Phase::GameOver;
        info!("Session quit with score {}", self.score);
    }

    /// Applies one frame worth of input in arrival order. A Reset drops any
    /// direction queued before it; of the directions after the last Reset
    /// only the final one counts. Quit wins over everything else.
    pub fn apply_inputs(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        let mut reset = false;
        let mut quit = false;
        let mut direction = None;
        for event in events {
            match event {
                InputEvent::Reset => {
                    reset = true;
                    direction = None;
                }
                InputEvent::Quit => quit = true,
                other => direction = other.direction(),
            }
        }

        if reset {
            self.reset();
        }
        if quit {
            self.quit();
            return;
        }
        if let Some(direction) = direction {
            self.steer(direction);
        }
    }

    pub fn steer(&mut self, direction: Direction) {
        match self.phase {
            Phase::GameOver => {}
            Phase::Ready => {
                self.direction = direction;
                if !direction.is_none() {
                    self.phase = Phase::Running;
                    info!("Game started heading {:?}", direction);
                }
            }
            Phase::Running => self.direction = direction,
        }
    }

    pub fn tick(&mut self) -> TickReport {
        if self.phase != Phase::Running {
            return TickReport::new(TickOutcome::Skipped);
        }
        if self.direction.is_none() {
            return TickReport::new(TickOutcome::Idle);
        }

        let next = self.snake.head().step(self.direction);
        if let Some(collision) = self.collision_at(next) {
            self.phase = Phase::GameOver;
            info!(
                "Game over: {:?} at ({}, {}), score {}, level {}",
                collision,
                next.x,
                next.y,
                self.score,
                self.difficulty.level()
            );
            return TickReport::new(TickOutcome::Crashed(collision));
        }

        let length_before = self.snake.len();
        self.snake.grow_head(next);

        let outcome = if next == self.food {
            self.score += FOOD_SCORE;
            self.respawn_food();
            debug!("Food eaten at ({}, {}), score {}", next.x, next.y, self.score);
            TickOutcome::AteFood
        } else if next == self.bonus_food {
            self.score = self.score.saturating_sub(BONUS_PENALTY);
            if length_before > 1 {
                self.snake.drop_second_from_end();
            }
            self.snake.drop_tail();
            self.respawn_bonus_food();
            self.difficulty.on_bonus_eaten();
            debug!(
                "Bonus eaten at ({}, {}), score {}, delay {}ms",
                next.x,
                next.y,
                self.score,
                self.difficulty.speed_ms()
            );
            TickOutcome::AteBonus
        } else {
            self.snake.drop_tail();
            TickOutcome::Moved
        };

        TickReport {
            outcome,
            level_up: self.recompute_level(),
        }
    }

    /// Raises the level if the score allows it and spawns that level's obstacles.
    pub fn recompute_level(&mut self) -> Option<u32> {
        let level = self.difficulty.advance(self.score)?;
        self.spawn_obstacles(OBSTACLES_PER_LEVEL);
        info!(
            "Level {} reached, {} obstacles, delay {}ms",
            level,
            self.obstacles.len(),
            self.difficulty.speed_ms()
        );
        Some(level)
    }

    fn collision_at(&self, next: Position) -> Option<Collision> {
        if !self.placer.grid().contains(next) {
            Some(Collision::Wall)
        } else if self.obstacles.contains(&next) {
            Some(Collision::Obstacle)
        } else if self.snake.body_contains(next) {
            Some(Collision::SelfBite)
        } else {
            None
        }
    }

    fn respawn_food(&mut self) {
        let mut exclusions: HashSet<Position> = self.obstacles.iter().copied().collect();
        exclusions.insert(self.bonus_food);
        match self.placer.place(&exclusions, true) {
            Ok(position) => self.food = position,
            Err(err) => warn!("Food stays at ({}, {}): {}", self.food.x, self.food.y, err),
        }
    }

    fn respawn_bonus_food(&mut self) {
        let mut exclusions: HashSet<Position> = self.obstacles.iter().copied().collect();
        exclusions.insert(self.food);
        match self.placer.place(&exclusions, true) {
            Ok(position) => self.bonus_food = position,
            Err(err) => warn!(
                "Bonus food stays at ({}, {}): {}",
                self.bonus_food.x, self.bonus_food.y, err
            ),
        }
    }

    fn spawn_obstacles(&mut self, count: usize) {
        for _ in 0..count {
            let mut exclusions: HashSet<Position> = self.obstacles.iter().copied().collect();
            exclusions.insert(self.food);
            exclusions.insert(self.bonus_food);
            match self.placer.place(&exclusions, true) {
                Ok(position) => self.obstacles.push(position),
                Err(err) => {
                    warn!("Obstacle spawning stopped: {}", err);
                    break;
                }
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid: self.placer.grid(),
            snake: &self.snake,
            food: self.food,
            bonus_food: self.bonus_food,
            obstacles: &self.obstacles,
            score: self.score,
            level: self.difficulty.level(),
            game_over: self.is_game_over(),
            show_ready: self.show_ready(),
        }
    }

    #[cfg(test)]
    fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn show_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    #[cfg(test)]
    fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    #[cfg(test)]
    fn level(&self) -> u32 {
        self.difficulty.level()
    }

    pub fn speed_ms(&self) -> u32 {
        self.difficulty.speed_ms()
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[cfg(test)]
    fn food(&self) -> Position {
        self.food
    }

    #[cfg(test)]
    fn bonus_food(&self) -> Position {
        self.bonus_food
    }

    #[cfg(test)]
    fn obstacles(&self) -> &[Position] {
        &self.obstacles
    }

    #[cfg(test)]
    fn grid(&self) -> Grid {
        self.placer.grid()
    }

    #[cfg(test)]
    fn set_snake(&mut self, cells: &[Position]) {
        let mut snake = Snake::new(cells[cells.len() - 1]);
        for cell in cells.iter().rev().skip(1) {
            snake.grow_head(*cell);
        }
        self.snake = snake;
    }

    #[cfg(test)]
    fn set_food(&mut self, food: Position) {
        self.food = food;
    }

    #[cfg(test)]
    fn set_bonus_food(&mut self, bonus_food: Position) {
        self.bonus_food = bonus_food;
    }

    #[cfg(test)]
    fn set_obstacles(&mut self, obstacles: Vec<Position>) {
        self.obstacles = obstacles;
    }

    #[cfg(test)]
    fn set_score(&mut self, score: u32) {
        self.score = score;
    }
}
