//! Fixed-frame simulation step
//!
//! `advance` is the one physics pipeline; live stepping and trajectory
//! prediction both call it so they can never drift apart.

use glam::Vec2;

use super::boundary::{WallContact, resolve_boundary};
use super::collision::resolve_line_collisions;
use super::forces::apply_gravity_and_friction;
use super::geometry::LineSegment;
use super::state::{Ball, MotionState, ObstacleSet, SimState};
use crate::settings::SimulationConfig;

/// Motion produced by one frame of physics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMotion {
    pub pos: Vec2,
    pub vel: Vec2,
    pub line_contact: bool,
    pub walls: WallContact,
}

/// Run one frame of physics for `ball`
///
/// Order matters: gravity first so collisions can correct this frame's
/// overshoot, walls last so the result is always inside the field.
pub fn advance(ball: &Ball, obstacles: &[LineSegment], config: &SimulationConfig) -> FrameMotion {
    let vel = apply_gravity_and_friction(ball.vel, config);
    let tentative = MotionState::new(ball.pos + vel, vel);

    let resolved = resolve_line_collisions(tentative, ball.pos, obstacles, ball.radius, config);
    let (bounded, walls) =
        resolve_boundary(resolved, &config.boundary, ball.radius, config.restitution);

    FrameMotion {
        pos: bounded.pos,
        vel: bounded.vel,
        line_contact: resolved.collided,
        walls,
    }
}

/// What happened during one step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    pub state: SimState,
    pub line_contact: bool,
    pub walls: WallContact,
    /// The ball settled on this frame
    pub came_to_rest: bool,
}

/// Advance the live state by one frame
///
/// A resting ball stays put with zero velocity and its clock stopped; only
/// a launch wakes it. An active ball runs [`advance`], then rest detection
/// compares the new position against the previous one.
pub fn step(state: &SimState, obstacles: &ObstacleSet, config: &SimulationConfig) -> StepOutcome {
    let mut next = *state;

    if next.rest.at_rest {
        next.ball.vel = Vec2::ZERO;
        return StepOutcome {
            state: next,
            line_contact: false,
            walls: WallContact::default(),
            came_to_rest: false,
        };
    }

    let motion = advance(&state.ball, obstacles.as_slice(), config);
    let displacement = motion.pos.distance(state.ball.pos);

    next.ball.pos = motion.pos;
    next.ball.vel = motion.vel;

    let came_to_rest = next.rest.observe(displacement);
    if came_to_rest {
        next.ball.vel = Vec2::ZERO;
    } else {
        next.active_frames += 1;
    }

    StepOutcome {
        state: next,
        line_contact: motion.line_contact,
        walls: motion.walls,
        came_to_rest,
    }
}
