//! Entity model and session state
//!
//! Everything the simulation mutates lives in [`SimulationState`], which a
//! host creates once per session and passes into [`super::tick`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Circle, Rect};
use crate::config::{BrickLayout, GameConfig};

/// Fixed arena bounds, origin at top-left
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Current phase of a round
///
/// The reset itself is instantaneous: it happens inside a single tick and
/// leaves the session back in `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Active gameplay
    Playing,
    /// Grid cleared; ball and paddle hidden until the reset deadline
    RoundClearing,
}

/// Things that happened during a tick, for sound/FX collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball reflected off a side, top or bottom wall
    WallBounce,
    /// Ball reversed off the paddle
    PaddleHit,
    /// Brick at `index` (row-major) was destroyed
    BrickDestroyed { index: usize },
    /// Last brick fell; reset scheduled
    RoundCleared,
    /// Ball crossed the floor; grid and score reset
    Miss,
    /// Deferred round reset fired
    RoundReset,
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub visible: bool,
}

impl Ball {
    /// Fresh ball at arena center with the configured initial velocity
    pub fn spawn(arena: &Arena, config: &GameConfig) -> Self {
        Self {
            pos: arena.center(),
            vel: config.ball.initial_velocity,
            radius: config.ball.radius,
            visible: true,
        }
    }

    pub fn shape(&self) -> Circle {
        Circle::new(self.pos, self.radius)
    }

    /// Bounding box, used for every collision test
    pub fn bounds(&self) -> Rect {
        self.shape().bounds()
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Horizontal velocity: `-speed`, `0` or `+speed`
    pub dx: f32,
    pub speed: f32,
    pub visible: bool,
}

impl Paddle {
    /// Fresh paddle centered horizontally near the arena floor
    pub fn spawn(arena: &Arena, config: &GameConfig) -> Self {
        let p = &config.paddle;
        Self {
            pos: Vec2::new(arena.width / 2.0 - p.width / 2.0, arena.height - p.bottom_margin),
            width: p.width,
            height: p.height,
            dx: 0.0,
            speed: p.speed,
            visible: true,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    /// Apply the current velocity, then clamp inside the arena
    pub fn advance(&mut self, arena: &Arena) {
        self.pos.x += self.dx;
        if self.pos.x + self.width > arena.width {
            self.pos.x = arena.width - self.width;
        }
        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
        }
    }
}

/// A destructible brick: present or destroyed, nothing in between
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    pub visible: bool,
}

/// Fixed arrangement of bricks, generated once per session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickGrid {
    rows: usize,
    columns: usize,
    /// Row-major: brick `(i, j)` is at `i * columns + j`
    bricks: Vec<Brick>,
}

impl BrickGrid {
    pub fn new(layout: &BrickLayout) -> Self {
        let mut bricks = Vec::with_capacity(layout.brick_count());
        for i in 0..layout.rows {
            for j in 0..layout.columns {
                // Row index drives x, column index drives y
                let x = i as f32 * (layout.width + layout.padding) + layout.offset_x;
                let y = j as f32 * (layout.height + layout.padding) + layout.offset_y;
                bricks.push(Brick {
                    rect: Rect::new(x, y, layout.width, layout.height),
                    visible: true,
                });
            }
        }
        Self {
            rows: layout.rows,
            columns: layout.columns,
            bricks,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&Brick> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.bricks.get(row * self.columns + column)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    pub(crate) fn bricks_mut(&mut self) -> &mut [Brick] {
        &mut self.bricks
    }

    pub fn visible_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.visible).count()
    }

    pub fn all_destroyed(&self) -> bool {
        self.bricks.iter().all(|b| !b.visible)
    }

    /// Bring every brick back
    pub fn show_all(&mut self) {
        for brick in &mut self.bricks {
            brick.visible = true;
        }
    }
}

/// Complete session state, exclusively owned by the simulation loop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationState {
    pub config: GameConfig,
    pub arena: Arena,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
    pub score: u32,
    pub phase: RoundPhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Tick at which a pending round reset fires
    pub reset_deadline: Option<u64>,
    /// Events recorded during the most recent tick
    #[serde(skip)]
    pub(crate) events: Vec<GameEvent>,
}

impl SimulationState {
    /// Start a session: ball at center, paddle at bottom-center, full grid
    pub fn new(config: GameConfig) -> Self {
        let arena = Arena {
            width: config.arena.width,
            height: config.arena.height,
        };
        let state = Self {
            ball: Ball::spawn(&arena, &config),
            paddle: Paddle::spawn(&arena, &config),
            bricks: BrickGrid::new(&config.bricks),
            arena,
            score: 0,
            phase: RoundPhase::Playing,
            time_ticks: 0,
            reset_deadline: None,
            events: Vec::new(),
            config,
        };
        log::info!(
            "New session: arena {}x{}, {} bricks",
            state.arena.width,
            state.arena.height,
            state.bricks.len()
        );
        state
    }

    /// Bricks in a full grid
    pub fn brick_total(&self) -> usize {
        self.bricks.len()
    }

    /// Events from the most recent tick
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_layout() {
        let state = SimulationState::default();
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.ball.vel, Vec2::new(4.0, -4.0));
        assert_eq!(state.paddle.pos, Vec2::new(360.0, 580.0));
        assert_eq!(state.bricks.len(), 45);
        assert_eq!(state.bricks.visible_count(), 45);
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, RoundPhase::Playing);
        assert!(state.ball.visible && state.paddle.visible);
    }

    #[test]
    fn test_brick_grid_is_transposed() {
        let grid = BrickGrid::new(&BrickLayout::default());
        assert_eq!(grid.rows(), 9);
        assert_eq!(grid.columns(), 5);

        let first = grid.get(0, 0).unwrap();
        assert_eq!(first.rect, Rect::new(45.0, 60.0, 70.0, 20.0));

        // Row index moves right, column index moves down
        assert_eq!(grid.get(1, 0).unwrap().rect.x, 125.0);
        assert_eq!(grid.get(1, 0).unwrap().rect.y, 60.0);
        assert_eq!(grid.get(0, 1).unwrap().rect.x, 45.0);
        assert_eq!(grid.get(0, 1).unwrap().rect.y, 90.0);

        let last = grid.get(8, 4).unwrap();
        assert_eq!(last.rect.x, 8.0 * 80.0 + 45.0);
        assert_eq!(last.rect.y, 4.0 * 30.0 + 60.0);
        assert!(grid.get(9, 0).is_none());
        assert!(grid.get(0, 5).is_none());
    }

    #[test]
    fn test_show_all() {
        let mut grid = BrickGrid::new(&BrickLayout::default());
        for brick in grid.bricks_mut().iter_mut().take(10) {
            brick.visible = false;
        }
        assert_eq!(grid.visible_count(), 35);
        grid.show_all();
        assert_eq!(grid.visible_count(), 45);
        assert!(!grid.all_destroyed());
    }

    #[test]
    fn test_paddle_clamps_to_arena() {
        let arena = Arena {
            width: 800.0,
            height: 600.0,
        };
        let mut paddle = Paddle::spawn(&arena, &GameConfig::default());

        paddle.dx = 1000.0;
        paddle.advance(&arena);
        assert_eq!(paddle.pos.x, 720.0);

        paddle.dx = -1000.0;
        paddle.advance(&arena);
        assert_eq!(paddle.pos.x, 0.0);
    }
}
