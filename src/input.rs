//! Paddle input: key edges in, a direction command out
//!
//! The host forwards key-down / key-up transitions; no held-key polling and no
//! acceleration ramp.

use serde::{Deserialize, Serialize};

use crate::sim::TickInput;

/// Direction keys the paddle listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
}

impl Key {
    /// Map a browser-style key name
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" | "Left" => Some(Key::Left),
            "ArrowRight" | "Right" => Some(Key::Right),
            _ => None,
        }
    }
}

/// Discrete paddle command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaddleCommand {
    Left,
    #[default]
    Stop,
    Right,
}

impl PaddleCommand {
    /// Horizontal velocity for a paddle moving at `speed`
    pub fn velocity(self, speed: f32) -> f32 {
        match self {
            PaddleCommand::Left => -speed,
            PaddleCommand::Stop => 0.0,
            PaddleCommand::Right => speed,
        }
    }

    /// Snap an arbitrary velocity to the nearest of `-speed`, `0`, `+speed`.
    /// NaN means stop.
    pub fn from_velocity(dx: f32, speed: f32) -> Self {
        let half = speed.abs() / 2.0;
        if dx.is_nan() {
            PaddleCommand::Stop
        } else if dx >= half && dx > 0.0 {
            PaddleCommand::Right
        } else if dx <= -half && dx < 0.0 {
            PaddleCommand::Left
        } else {
            PaddleCommand::Stop
        }
    }
}

/// Tracks the current paddle command from key transitions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleControl {
    command: PaddleCommand,
}

impl PaddleControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        self.command = match key {
            Key::Left => PaddleCommand::Left,
            Key::Right => PaddleCommand::Right,
        };
    }

    /// Releasing either direction key stops the paddle
    pub fn key_up(&mut self, _key: Key) {
        self.command = PaddleCommand::Stop;
    }

    pub fn command(&self) -> PaddleCommand {
        self.command
    }

    /// Tick input for a paddle moving at `speed`
    pub fn tick_input(&self, speed: f32) -> TickInput {
        TickInput::from_command(self.command, speed)
    }
}
