//! Session configuration
//!
//! Every dimension the simulation needs, loadable from JSON. Missing fields
//! fall back to the defaults in [`crate::consts`].

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a [`GameConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// Config file is not valid JSON for this schema
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// Config parsed but describes an impossible session
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Arena bounds, fixed for the whole session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    pub radius: f32,
    /// Reference speed (vertical speed after paddle contact)
    pub speed: f32,
    /// Velocity the ball spawns with at arena center
    pub initial_velocity: Vec2,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: BALL_RADIUS,
            speed: BALL_SPEED,
            initial_velocity: Vec2::new(BALL_START_DX, BALL_START_DY),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleConfig {
    pub width: f32,
    pub height: f32,
    /// Horizontal speed applied while a direction key is held
    pub speed: f32,
    /// Gap between the paddle's top edge and the arena floor
    pub bottom_margin: f32,
}

impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed: PADDLE_SPEED,
            bottom_margin: PADDLE_BOTTOM_MARGIN,
        }
    }
}

/// Brick grid layout
///
/// Brick `(i, j)` sits at `x = i * (width + padding) + offset_x`,
/// `y = j * (height + padding) + offset_y`: the row index walks the
/// horizontal axis and the column index the vertical one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickLayout {
    pub rows: usize,
    pub columns: usize,
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Default for BrickLayout {
    fn default() -> Self {
        Self {
            rows: BRICK_ROWS,
            columns: BRICK_COLUMNS,
            width: BRICK_WIDTH,
            height: BRICK_HEIGHT,
            padding: BRICK_PADDING,
            offset_x: BRICK_OFFSET_X,
            offset_y: BRICK_OFFSET_Y,
        }
    }
}

impl BrickLayout {
    /// Number of bricks in a full grid
    pub fn brick_count(&self) -> usize {
        self.rows * self.columns
    }
}

/// Complete session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub arena: ArenaConfig,
    pub ball: BallConfig,
    pub paddle: PaddleConfig,
    pub bricks: BrickLayout,
    /// Delay between clearing the grid and the board coming back
    pub reset_delay_ms: u32,
    /// Frame rate the host drives the simulation at
    pub ticks_per_second: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena: ArenaConfig::default(),
            ball: BallConfig::default(),
            paddle: PaddleConfig::default(),
            bricks: BrickLayout::default(),
            reset_delay_ms: RESET_DELAY_MS,
            ticks_per_second: TICKS_PER_SECOND,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject configs the simulation cannot run
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("arena.width", self.arena.width),
            ("arena.height", self.arena.height),
            ("ball.radius", self.ball.radius),
            ("ball.speed", self.ball.speed),
            ("paddle.width", self.paddle.width),
            ("paddle.height", self.paddle.height),
            ("paddle.speed", self.paddle.speed),
            ("bricks.width", self.bricks.width),
            ("bricks.height", self.bricks.height),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }

        let finite = [
            ("ball.initial_velocity.x", self.ball.initial_velocity.x),
            ("ball.initial_velocity.y", self.ball.initial_velocity.y),
            ("paddle.bottom_margin", self.paddle.bottom_margin),
            ("bricks.padding", self.bricks.padding),
            ("bricks.offset_x", self.bricks.offset_x),
            ("bricks.offset_y", self.bricks.offset_y),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!("{name} must be finite")));
            }
        }

        if self.bricks.brick_count() == 0 {
            return Err(ConfigError::Invalid(
                "brick grid needs at least one row and one column".into(),
            ));
        }
        if self.paddle.width > self.arena.width {
            return Err(ConfigError::Invalid(format!(
                "paddle width {} exceeds arena width {}",
                self.paddle.width, self.arena.width
            )));
        }
        if self.ticks_per_second == 0 {
            return Err(ConfigError::Invalid("ticks_per_second must be non-zero".into()));
        }
        Ok(())
    }

    /// Round-clear delay expressed in whole ticks (rounded up, at least one)
    pub fn reset_delay_ticks(&self) -> u64 {
        let ticks = (self.reset_delay_ms as u64 * self.ticks_per_second as u64).div_ceil(1000);
        ticks.max(1)
    }
}
