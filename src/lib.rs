//! Ramp Ball - a ball dropped onto hand-drawn ramps
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, collisions, rest detection, prediction)
//! - `session`: The live simulation session driven by the host UI
//! - `settings`: Data-driven physics configuration
//! - `course`: Seeded demo courses for the headless runner

pub mod course;
pub mod error;
pub mod session;
pub mod settings;
pub mod sim;

pub use error::{ConfigError, EngineError};
pub use session::{FrameReport, Session};
pub use settings::SimulationConfig;

use glam::Vec2;

/// Simulation constants
pub mod consts {
    use glam::Vec2;

    /// Collision radius of the ball (fixed for every ball)
    pub const BALL_RADIUS: f32 = 5.0;
    /// Where the ball sits before the first launch (top-left of the play-field interior)
    pub const DEFAULT_BALL_POSITION: Vec2 = Vec2::new(55.0, 45.0);

    /// Gravity added to vertical velocity each frame, before the mass factor
    pub const BASE_GRAVITY: f32 = 0.5;
    pub const DEFAULT_MASS_FACTOR: f32 = 0.7;
    /// Mass factor slider range
    pub const MASS_FACTOR_MIN: f32 = 0.1;
    pub const MASS_FACTOR_MAX: f32 = 3.0;

    /// Fraction of normal speed kept after a bounce (sign is reversed)
    pub const RESTITUTION: f32 = 0.7;
    /// Per-frame multiplicative velocity decay
    pub const FRICTION: f32 = 0.99;

    /// Per-frame displacement below which the ball counts as still
    pub const STATIC_THRESHOLD: f32 = 0.1;
    /// Consecutive still frames before the ball is considered at rest
    pub const STATIC_FRAME_COUNT: u32 = 5;

    /// Simulated milliseconds per frame (~60 Hz)
    pub const FRAME_DURATION_MS: f64 = 16.666;

    /// Line-collision correction passes per frame
    pub const MAX_COLLISION_PASSES: usize = 2;
    /// Maximum number of points in a predicted path
    pub const PREDICTION_HORIZON: usize = 400;

    /// Play-field rectangle (screen coordinates, +y is down)
    pub const FIELD_LEFT: f32 = 50.0;
    pub const FIELD_TOP: f32 = 40.0;
    pub const FIELD_RIGHT: f32 = 550.0;
    pub const FIELD_BOTTOM: f32 = 360.0;
}

/// 2D cross product (z component of the 3D cross)
#[inline]
pub fn cross(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

/// True if both components are finite
#[inline]
pub fn is_finite_vec(v: Vec2) -> bool {
    v.x.is_finite() && v.y.is_finite()
}

/// Format simulated milliseconds as `seconds:centiseconds` for the timer readout
///
/// Seconds wrap every minute, matching the on-screen stopwatch.
pub fn format_elapsed(ms: f64) -> String {
    let ms = ms.max(0.0);
    let seconds = (ms / 1000.0).floor() as u64 % 60;
    let centis = ((ms % 1000.0) / 10.0).floor() as u64;
    format!("{}:{:02}", seconds, centis)
}
