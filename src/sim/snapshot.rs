//! Read-only view of a session for the renderer

use serde::Serialize;

use super::state::{GameEvent, RoundPhase, SimulationState};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BallView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaddleView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrickView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub visible: bool,
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub phase: RoundPhase,
    pub score: u32,
    pub ball: BallView,
    pub paddle: PaddleView,
    /// Row-major, same order as the grid
    pub bricks: Vec<BrickView>,
    /// Events from the tick that produced this snapshot
    pub events: Vec<GameEvent>,
}

impl Snapshot {
    pub fn capture(state: &SimulationState) -> Self {
        let ball = &state.ball;
        let paddle = &state.paddle;
        Self {
            tick: state.time_ticks,
            phase: state.phase,
            score: state.score,
            ball: BallView {
                x: ball.pos.x,
                y: ball.pos.y,
                radius: ball.radius,
                visible: ball.visible,
            },
            paddle: PaddleView {
                x: paddle.pos.x,
                y: paddle.pos.y,
                width: paddle.width,
                height: paddle.height,
                visible: paddle.visible,
            },
            bricks: state
                .bricks
                .iter()
                .map(|b| BrickView {
                    x: b.rect.x,
                    y: b.rect.y,
                    width: b.rect.width,
                    height: b.rect.height,
                    visible: b.visible,
                })
                .collect(),
            events: state.events().to_vec(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Bricks still standing
    pub fn visible_bricks(&self) -> usize {
        self.bricks.iter().filter(|b| b.visible).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_fresh_session() {
        let state = SimulationState::default();
        let snap = Snapshot::capture(&state);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.phase, RoundPhase::Playing);
        assert_eq!(
            snap.ball,
            BallView {
                x: 400.0,
                y: 300.0,
                radius: 10.0,
                visible: true
            }
        );
        assert_eq!(snap.paddle.x, 360.0);
        assert_eq!(snap.paddle.width, 80.0);
        assert_eq!(snap.bricks.len(), 45);
        assert_eq!(snap.visible_bricks(), 45);
    }

    #[test]
    fn test_json_shape() {
        let snap = Snapshot::capture(&SimulationState::default());
        let value: serde_json::Value = serde_json::from_str(&snap.to_json().unwrap()).unwrap();
        assert_eq!(value["score"], 0);
        assert_eq!(value["phase"], "Playing");
        assert_eq!(value["ball"]["x"], 400.0);
        assert_eq!(value["paddle"]["visible"], true);
        assert_eq!(value["bricks"].as_array().map(|b| b.len()), Some(45));
    }
}
