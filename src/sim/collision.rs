//! Collision detection and response
//!
//! One pass per tick, in a fixed order: integrate, side walls, top/bottom
//! walls, paddle, bricks. Later steps may overwrite earlier ones (a brick hit
//! flips the `dy` the paddle just assigned).

use super::geometry::overlaps;
use super::state::{Arena, Ball, BrickGrid, Paddle};

/// What happened during one collision pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionOutcome {
    /// Ball reflected off any wall
    pub wall_bounce: bool,
    /// Ball's leading edge passed the floor
    pub missed: bool,
    pub paddle_hit: bool,
    /// Row-major indices of bricks destroyed this pass, in hit order
    pub destroyed: Vec<usize>,
}

/// Advance the ball one step and resolve every contact
pub fn resolve(
    ball: &mut Ball,
    paddle: &Paddle,
    bricks: &mut BrickGrid,
    arena: &Arena,
    reference_speed: f32,
) -> CollisionOutcome {
    let mut outcome = CollisionOutcome::default();

    ball.pos += ball.vel;

    let r = ball.radius;

    // Side walls: flip only, no position correction
    if ball.pos.x + r > arena.width || ball.pos.x - r < 0.0 {
        ball.vel.x = -ball.vel.x;
        outcome.wall_bounce = true;
    }

    // Top and bottom walls; the floor also signals a miss
    let past_floor = ball.pos.y + r > arena.height;
    if past_floor || ball.pos.y - r < 0.0 {
        ball.vel.y = -ball.vel.y;
        outcome.wall_bounce = true;
    }
    outcome.missed = past_floor;

    let ball_box = ball.bounds();

    // Paddle: hard renormalization to the reference speed, upward
    let paddle_box = paddle.bounds();
    if ball_box.within_horizontally(&paddle_box) && ball_box.bottom() > paddle_box.top() {
        ball.vel.y = -reference_speed;
        outcome.paddle_hit = true;
    }

    // Bricks: every hit flips dy, no early exit
    for (index, brick) in bricks.bricks_mut().iter_mut().enumerate() {
        if !brick.visible {
            continue;
        }
        if ball_box.within_horizontally(&brick.rect) && overlaps(&ball_box, &brick.rect) {
            ball.vel.y = -ball.vel.y;
            brick.visible = false;
            outcome.destroyed.push(index);
        }
    }

    outcome
}
