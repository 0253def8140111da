//! Per-frame gravity and drag

use glam::Vec2;

use crate::settings::SimulationConfig;

/// Apply one frame of gravity and horizontal drag
///
/// Horizontal velocity decays by the friction factor; vertical velocity
/// gains gravity scaled by the live mass factor.
#[inline]
pub fn apply_gravity_and_friction(vel: Vec2, config: &SimulationConfig) -> Vec2 {
    Vec2::new(vel.x * config.friction, vel.y + config.effective_gravity())
}
