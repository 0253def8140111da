//! Trajectory forecast
//!
//! Replays the live physics pipeline on a private copy of the start
//! conditions to preview where a launch will go.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::LineSegment;
use super::state::Ball;
use super::tick::advance;
use crate::consts::{PREDICTION_HORIZON, STATIC_THRESHOLD};
use crate::settings::SimulationConfig;

/// Forecast ball positions, one per frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictedPath {
    points: Vec<Vec2>,
    /// True if the horizon ran out before the ball slowed to a stop
    truncated: bool,
}

impl PredictedPath {
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn last(&self) -> Option<Vec2> {
        self.points.last().copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec2> {
        self.points.iter()
    }
}

/// Simulate up to [`PREDICTION_HORIZON`] frames from `start_pos`/`start_vel`
///
/// Stops early once both velocity components drop under the static
/// threshold. Point `i` is exactly the position live stepping reaches on
/// frame `i + 1` from the same start.
pub fn predict(
    start_pos: Vec2,
    start_vel: Vec2,
    obstacles: &[LineSegment],
    config: &SimulationConfig,
) -> PredictedPath {
    let mut ball = Ball::new(start_pos, start_vel);
    let mut points = Vec::with_capacity(PREDICTION_HORIZON);

    for _ in 0..PREDICTION_HORIZON {
        let motion = advance(&ball, obstacles, config);
        ball.pos = motion.pos;
        ball.vel = motion.vel;
        points.push(ball.pos);

        if ball.vel.x.abs() < STATIC_THRESHOLD && ball.vel.y.abs() < STATIC_THRESHOLD {
            return PredictedPath {
                points,
                truncated: false,
            };
        }
    }

    PredictedPath {
        points,
        truncated: true,
    }
}
