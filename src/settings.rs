//! Physics configuration
//!
//! Loaded from JSON; any field left out keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::Rect;

/// Tunable physics parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Base gravity (px/frame²) before the mass factor
    pub gravity: f32,
    /// Live multiplier on gravity (the mass slider)
    pub mass_factor: f32,
    /// Fraction of normal speed kept on a bounce
    pub restitution: f32,
    /// Per-frame velocity decay
    pub friction: f32,
    /// Play-field walls
    pub boundary: Rect,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity: BASE_GRAVITY,
            mass_factor: DEFAULT_MASS_FACTOR,
            restitution: RESTITUTION,
            friction: FRICTION,
            boundary: Rect::new(FIELD_LEFT, FIELD_TOP, FIELD_RIGHT, FIELD_BOTTOM),
        }
    }
}

impl SimulationConfig {
    /// Gravity actually applied each frame
    #[inline]
    pub fn effective_gravity(&self) -> f32 {
        self.gravity * self.mass_factor
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded simulation config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every field is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("gravity", self.gravity),
            ("mass_factor", self.mass_factor),
            ("restitution", self.restitution),
            ("friction", self.friction),
            ("boundary.left", self.boundary.left),
            ("boundary.top", self.boundary.top),
            ("boundary.right", self.boundary.right),
            ("boundary.bottom", self.boundary.bottom),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(invalid(field, format!("must be finite, got {}", value)));
            }
        }

        if !(MASS_FACTOR_MIN..=MASS_FACTOR_MAX).contains(&self.mass_factor) {
            return Err(invalid(
                "mass_factor",
                format!(
                    "must be within [{}, {}], got {}",
                    MASS_FACTOR_MIN, MASS_FACTOR_MAX, self.mass_factor
                ),
            ));
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(invalid(
                "restitution",
                format!("must be within [0, 1], got {}", self.restitution),
            ));
        }
        if !(0.0..=1.0).contains(&self.friction) {
            return Err(invalid(
                "friction",
                format!("must be within [0, 1], got {}", self.friction),
            ));
        }

        let inner = self.boundary.interior(BALL_RADIUS);
        if inner.width() < 0.0 || inner.height() < 0.0 {
            return Err(invalid(
                "boundary",
                format!(
                    "{}x{} field is too small for a ball of radius {}",
                    self.boundary.width(),
                    self.boundary.height(),
                    BALL_RADIUS
                ),
            ));
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
