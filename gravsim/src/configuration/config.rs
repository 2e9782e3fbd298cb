//! Configuration types for describing a simulation scenario.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. The crate never reads files itself; the host deserializes these
//! from whatever format it likes and hands them to
//! [`build_scenario`](crate::simulation::scenario::build_scenario).
//!
//! - [`ParametersConfig`] – physical constants
//! - [`WorldConfig`]      – domain size, wall bounce and the frame `dt` cap
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper
//!
//! # YAML format
//! The reference scenario written as YAML:
//!
//! ```yaml
//! parameters:
//!   G: 200.0            # gravitational constant
//!   softening: 1.0      # minimum effective separation
//!   f_max: 100000.0     # optional, per-pair force clamp
//!
//! world:
//!   width: 500.0
//!   height: 500.0
//!   bounce: 0.95        # wall damping, (0, 1]
//!   max_dt: 0.3333333   # optional, frame dt cap
//!
//! bodies:
//!   - x: [300.0, 200.0]
//!     v: [10.0, -10.0]
//!     m: 800.0
//!     radius: 5.0
//!     color: [0, 0, 255]  # optional, white if missing
//!   - x: [250.0, 250.0]
//!     v: [0.0, 0.0]
//!     m: 100000.0
//!     radius: 10.0
//!     color: [255, 255, 0]
//! ```

use serde::Deserialize;

use crate::simulation::params::REFERENCE_F_MAX;
use crate::simulation::states::Color;

pub const DEFAULT_MAX_DT: f64 = 1.0 / 3.0;

fn default_f_max() -> f64 {
    REFERENCE_F_MAX
}

fn default_max_dt() -> f64 {
    DEFAULT_MAX_DT
}

/// Physical constants for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub G: f64,         // gravitational constant
    pub softening: f64, // softening floor - prevents singular forces at small separations
    #[serde(default = "default_f_max")]
    pub f_max: f64,     // force clamp per pair
}

/// The rectangle bodies live in and how the driver steps it
#[derive(Deserialize, Debug, Clone)]
pub struct WorldConfig {
    pub width: f64,  // domain extent along x
    pub height: f64, // domain extent along y
    pub bounce: f64, // velocity kept after a wall hit
    #[serde(default = "default_max_dt")]
    pub max_dt: f64, // upper bound on a single frame's dt
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: Vec<f64>, // initial position, two components
    pub v: Vec<f64>, // initial velocity, two components
    pub m: f64,      // mass
    pub radius: f64, // draw radius and softening contribution
    #[serde(default)]
    pub color: Color,
}

/// Top-level scenario configuration
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    pub world: WorldConfig,
    pub bodies: Vec<BodyConfig>,
}
