//! Error types
//!
//! The physics itself is total; errors only arise at the session boundary
//! (malformed host input) and when loading configuration.

/// Failure to load or validate a [`crate::SimulationConfig`]
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Input rejected by a [`crate::Session`]
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    #[error("launch position must be finite, got ({x}, {y})")]
    NonFiniteLaunch { x: f32, y: f32 },

    #[error("obstacle endpoints must be finite")]
    NonFiniteObstacle,

    #[error("mass factor must be finite, got {0}")]
    InvalidMassFactor(f32),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
