//! Fixed-step simulation tick
//!
//! Called once per rendered frame by the host. Each call is one discrete
//! step regardless of wall-clock time.

use super::collision;
use super::round;
use super::snapshot::Snapshot;
use super::state::{RoundPhase, SimulationState};
use crate::input::PaddleCommand;

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Requested paddle velocity; snapped to `-speed`, `0` or `+speed`
    pub paddle_dx: f32,
}

impl TickInput {
    pub fn from_command(command: PaddleCommand, speed: f32) -> Self {
        Self {
            paddle_dx: command.velocity(speed),
        }
    }
}

/// Advance the session by one step and return what to draw
pub fn tick(state: &mut SimulationState, input: &TickInput) -> Snapshot {
    state.events.clear();
    state.time_ticks += 1;

    // Deferred round reset comes first; the rest of this tick then plays
    round::poll_deadline(state);

    // Ball and paddle are hidden and frozen while the board is clearing
    if state.phase == RoundPhase::Playing {
        let command = PaddleCommand::from_velocity(input.paddle_dx, state.paddle.speed);
        state.paddle.dx = command.velocity(state.paddle.speed);
        state.paddle.advance(&state.arena);

        let outcome = collision::resolve(
            &mut state.ball,
            &state.paddle,
            &mut state.bricks,
            &state.arena,
            state.config.ball.speed,
        );
        round::apply(state, &outcome);
    }

    Snapshot::capture(state)
}
