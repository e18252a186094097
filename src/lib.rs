//! Brick Breaker - a fixed-step Breakout simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, entities, collisions, rounds, tick)
//! - `config`: Data-driven arena/entity dimensions
//! - `input`: Key edge tracking for the paddle command
//!
//! Rendering and the frame scheduler live outside this crate. A host calls
//! [`sim::tick`] once per frame and draws the returned [`sim::Snapshot`].

pub mod config;
pub mod input;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use input::{Key, PaddleControl};

/// Game configuration constants
pub mod consts {
    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Reference speed: vertical speed assigned on every paddle contact
    pub const BALL_SPEED: f32 = 4.0;
    pub const BALL_START_DX: f32 = 4.0;
    pub const BALL_START_DY: f32 = -4.0;

    /// Paddle defaults (spawned at bottom-center)
    pub const PADDLE_WIDTH: f32 = 80.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    pub const PADDLE_SPEED: f32 = 8.0;
    /// Distance from the paddle's top edge to the arena floor
    pub const PADDLE_BOTTOM_MARGIN: f32 = 20.0;

    /// Brick grid defaults
    pub const BRICK_ROWS: usize = 9;
    pub const BRICK_COLUMNS: usize = 5;
    pub const BRICK_WIDTH: f32 = 70.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_X: f32 = 45.0;
    pub const BRICK_OFFSET_Y: f32 = 60.0;

    /// Delay between the last brick falling and the board coming back
    pub const RESET_DELAY_MS: u32 = 500;
    /// Nominal frame rate the host drives `tick` at
    pub const TICKS_PER_SECOND: u32 = 60;
}
