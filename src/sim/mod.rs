//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, no delta-time scaling
//! - Stable iteration order (row-major bricks)
//! - No rendering, timers or platform dependencies

pub mod collision;
pub mod geometry;
pub mod round;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{CollisionOutcome, resolve};
pub use geometry::{Circle, Rect, overlaps};
pub use snapshot::{BallView, BrickView, PaddleView, Snapshot};
pub use state::{Arena, Ball, Brick, BrickGrid, GameEvent, Paddle, RoundPhase, SimulationState};
pub use tick::{TickInput, tick};
