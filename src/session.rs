//! Live simulation session
//!
//! Owns the ball, the obstacles and the current forecast. The host calls
//! `on_frame` once per animation frame and forwards UI actions to the other
//! methods. Everything takes `&mut self`, so a launch can never interleave
//! with a step.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{MASS_FACTOR_MAX, MASS_FACTOR_MIN};
use crate::error::EngineError;
use crate::is_finite_vec;
use crate::settings::SimulationConfig;
use crate::sim::{LineSegment, ObstacleSet, PredictedPath, SimPhase, SimState, predict, step};

/// Per-frame snapshot for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameReport {
    pub frame: u64,
    pub position: Vec2,
    pub velocity: Vec2,
    pub at_rest: bool,
    /// Simulated milliseconds since the last launch
    pub elapsed_ms: f64,
    /// A line obstacle corrected the ball this frame
    pub line_contact: bool,
    /// A wall clamped the ball this frame
    pub wall_contact: bool,
}

/// One independently owned simulation
#[derive(Debug, Clone)]
pub struct Session {
    state: SimState,
    obstacles: ObstacleSet,
    config: SimulationConfig,
    predicted: PredictedPath,
    frame: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::with_valid_config(SimulationConfig::default())
    }
}

impl Session {
    pub fn new(config: SimulationConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: SimulationConfig) -> Self {
        Self {
            state: SimState::default(),
            obstacles: ObstacleSet::new(),
            config,
            predicted: PredictedPath::default(),
            frame: 0,
        }
    }

    /// Advance one frame and report where the ball is
    pub fn on_frame(&mut self) -> FrameReport {
        let outcome = step(&self.state, &self.obstacles, &self.config);
        self.state = outcome.state;
        self.frame += 1;

        if outcome.came_to_rest {
            log::info!(
                "Ball at rest at ({:.1}, {:.1}) after {}",
                self.state.ball.pos.x,
                self.state.ball.pos.y,
                crate::format_elapsed(self.state.elapsed_ms())
            );
        }

        FrameReport {
            frame: self.frame,
            position: self.state.ball.pos,
            velocity: self.state.ball.vel,
            at_rest: self.state.rest.at_rest,
            elapsed_ms: self.state.elapsed_ms(),
            line_contact: outcome.line_contact,
            wall_contact: outcome.walls.any(),
        }
    }

    /// Add a drawn line; zero-length lines are kept but never collide
    pub fn add_obstacle(&mut self, segment: LineSegment) -> Result<(), EngineError> {
        if !is_finite_vec(segment.p1) || !is_finite_vec(segment.p2) {
            log::warn!("Rejected obstacle with non-finite endpoint: {:?}", segment);
            return Err(EngineError::NonFiniteObstacle);
        }
        self.obstacles.push(segment);
        log::debug!("Obstacle {} added: {:?}", self.obstacles.len(), segment);
        Ok(())
    }

    pub fn clear_obstacles(&mut self) {
        log::info!("Cleared {} obstacles", self.obstacles.len());
        self.obstacles.clear();
    }

    /// Place the ball at `position` and forecast its path
    ///
    /// Velocity, rest detection and the timer restart from zero.
    pub fn launch(&mut self, position: Vec2) -> Result<&PredictedPath, EngineError> {
        if !is_finite_vec(position) {
            log::warn!("Rejected launch at non-finite position {:?}", position);
            return Err(EngineError::NonFiniteLaunch {
                x: position.x,
                y: position.y,
            });
        }

        self.state = SimState::launched(position);
        self.predicted = predict(
            position,
            self.state.ball.vel,
            self.obstacles.as_slice(),
            &self.config,
        );

        log::info!("Launched at ({:.1}, {:.1})", position.x, position.y);
        log::debug!(
            "Predicted {} frames{}",
            self.predicted.len(),
            if self.predicted.is_truncated() {
                " (horizon reached)"
            } else {
                ""
            }
        );
        Ok(&self.predicted)
    }

    /// Change the mass slider; takes effect from the next frame
    ///
    /// Values outside the slider range are clamped. The current forecast is
    /// left as it was.
    pub fn set_mass_factor(&mut self, mass_factor: f32) -> Result<(), EngineError> {
        if !mass_factor.is_finite() {
            log::warn!("Rejected mass factor {}", mass_factor);
            return Err(EngineError::InvalidMassFactor(mass_factor));
        }
        let clamped = mass_factor.clamp(MASS_FACTOR_MIN, MASS_FACTOR_MAX);
        if clamped != mass_factor {
            log::warn!("Mass factor {} clamped to {}", mass_factor, clamped);
        }
        self.config.mass_factor = clamped;
        log::info!("Mass factor set to {:.1}", clamped);
        Ok(())
    }

    pub fn predicted_path(&self) -> &PredictedPath {
        &self.predicted
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn phase(&self) -> SimPhase {
        self.state.phase()
    }

    pub fn obstacles(&self) -> &ObstacleSet {
        &self.obstacles
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}
