//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Fixed frame step only
//! - Stable iteration order (obstacles in insertion order)
//! - No rendering or platform dependencies

pub mod boundary;
pub mod collision;
pub mod forces;
pub mod geometry;
pub mod predict;
pub mod state;
pub mod tick;

pub use boundary::{WallContact, resolve_boundary};
pub use collision::{CollisionResult, ball_segment_collision, resolve_line_collisions};
pub use forces::apply_gravity_and_friction;
pub use geometry::{LineSegment, Rect};
pub use predict::{PredictedPath, predict};
pub use state::{Ball, MotionState, ObstacleSet, RestState, SimPhase, SimState};
pub use tick::{FrameMotion, StepOutcome, advance, step};
