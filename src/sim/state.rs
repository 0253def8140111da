//! Simulation state types
//!
//! Everything the stepper consumes and produces lives here as plain values,
//! so a frame is a pure function of the previous state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::LineSegment;
use crate::consts::*;

/// Whether the ball is moving or has settled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    /// Integrating normally, simulated time advancing
    Active,
    /// Settled; velocity held at zero until the next launch
    Resting,
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            radius: BALL_RADIUS,
        }
    }

    /// A stationary ball at `pos`
    pub fn at(pos: Vec2) -> Self {
        Self::new(pos, Vec2::ZERO)
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::at(DEFAULT_BALL_POSITION)
    }
}

/// Position and velocity threaded through the resolvers within one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Set once any line correction happened this frame
    pub collided: bool,
}

impl MotionState {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            collided: false,
        }
    }
}

/// Debounced rest detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RestState {
    /// Consecutive frames with displacement under [`STATIC_THRESHOLD`]
    pub low_speed_frames: u32,
    pub at_rest: bool,
}

impl RestState {
    /// Already settled (a freshly created session)
    pub fn resting() -> Self {
        Self {
            low_speed_frames: STATIC_FRAME_COUNT,
            at_rest: true,
        }
    }

    /// Feed one frame's displacement
    ///
    /// Returns true on the frame the ball comes to rest.
    pub fn observe(&mut self, displacement: f32) -> bool {
        if self.at_rest {
            return false;
        }
        if displacement < STATIC_THRESHOLD {
            self.low_speed_frames += 1;
            if self.low_speed_frames >= STATIC_FRAME_COUNT {
                self.at_rest = true;
                return true;
            }
        } else {
            self.low_speed_frames = 0;
        }
        false
    }

    pub fn phase(&self) -> SimPhase {
        if self.at_rest {
            SimPhase::Resting
        } else {
            SimPhase::Active
        }
    }
}

/// Live simulation state: the value `step` transforms each frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimState {
    pub ball: Ball,
    pub rest: RestState,
    /// Frames spent Active since the last launch
    pub active_frames: u64,
}

impl Default for SimState {
    fn default() -> Self {
        Self {
            ball: Ball::default(),
            rest: RestState::resting(),
            active_frames: 0,
        }
    }
}

impl SimState {
    /// Fresh state for a ball placed at `pos`
    ///
    /// Velocity, rest detection and simulated time all start over.
    pub fn launched(pos: Vec2) -> Self {
        Self {
            ball: Ball::at(pos),
            rest: RestState::default(),
            active_frames: 0,
        }
    }

    pub fn phase(&self) -> SimPhase {
        self.rest.phase()
    }

    /// Simulated milliseconds since the last launch
    pub fn elapsed_ms(&self) -> f64 {
        self.active_frames as f64 * FRAME_DURATION_MS
    }
}

/// Line obstacles in the order they were drawn
///
/// Append or clear only; segments are never edited in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSet {
    segments: Vec<LineSegment>,
}

impl ObstacleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, segment: LineSegment) {
        self.segments.push(segment);
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LineSegment> {
        self.segments.iter()
    }

    pub fn as_slice(&self) -> &[LineSegment] {
        &self.segments
    }
}

impl FromIterator<LineSegment> for ObstacleSet {
    fn from_iter<I: IntoIterator<Item = LineSegment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ObstacleSet {
    type Item = &'a LineSegment;
    type IntoIter = std::slice::Iter<'a, LineSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
