//! Round controller: scoring, grid-clear detection and reset sequencing
//!
//! Two reset paths exist and they are deliberately not symmetric:
//! - clearing the grid hides ball and paddle, then after a delay restores
//!   the grid, the score, and respawns ball and paddle
//! - a miss restores the grid and the score immediately but leaves ball and
//!   paddle where they are

use super::collision::CollisionOutcome;
use super::state::{Ball, GameEvent, Paddle, RoundPhase, SimulationState};

/// Fold one collision pass into score and round state
pub fn apply(state: &mut SimulationState, outcome: &CollisionOutcome) {
    if outcome.wall_bounce {
        state.push_event(GameEvent::WallBounce);
    }
    if outcome.paddle_hit {
        state.push_event(GameEvent::PaddleHit);
    }

    for &index in &outcome.destroyed {
        state.push_event(GameEvent::BrickDestroyed { index });
        state.score += 1;
        if state.score as usize % state.brick_total() == 0 {
            begin_clearing(state);
        }
    }

    if outcome.missed {
        miss(state);
    }
}

/// Every brick is down: hide ball and paddle and schedule the reset
pub fn begin_clearing(state: &mut SimulationState) {
    let deadline = state.time_ticks + state.config.reset_delay_ticks();
    state.ball.visible = false;
    state.paddle.visible = false;
    state.phase = RoundPhase::RoundClearing;
    // A newer clear supersedes any pending deadline
    state.reset_deadline = Some(deadline);
    state.push_event(GameEvent::RoundCleared);
    log::debug!(
        "Round cleared at tick {} (score {}), reset at tick {}",
        state.time_ticks,
        state.score,
        deadline
    );
}

/// Ball went through the floor: restore grid and score only
pub fn miss(state: &mut SimulationState) {
    log::debug!("Miss at tick {} with score {}", state.time_ticks, state.score);
    state.bricks.show_all();
    state.score = 0;
    state.push_event(GameEvent::Miss);
}

/// Fire the pending reset if its deadline has come. Returns true if it fired.
pub fn poll_deadline(state: &mut SimulationState) -> bool {
    match state.reset_deadline {
        Some(deadline) if state.time_ticks >= deadline => {
            reset_round(state);
            true
        }
        _ => false,
    }
}

/// Full reset: grid, score, ball and paddle back to their starting state
pub fn reset_round(state: &mut SimulationState) {
    state.bricks.show_all();
    state.score = 0;
    state.ball = Ball::spawn(&state.arena, &state.config);
    state.paddle = Paddle::spawn(&state.arena, &state.config);
    state.phase = RoundPhase::Playing;
    state.reset_deadline = None;
    state.push_event(GameEvent::RoundReset);
    log::debug!("Round reset at tick {}", state.time_ticks);
}
