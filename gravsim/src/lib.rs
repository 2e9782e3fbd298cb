//! Real-time 2D gravitational N-body kernel
//!
//! A small fixed set of bodies under pairwise softened Newtonian gravity,
//! integrated with semi-implicit Euler and reflected off the walls of a
//! rectangular domain. Rendering and the event loop belong to the host;
//! [`FrameDriver`] is the seam between them and the engine.

pub mod simulation;
pub mod configuration;
pub mod driver;

pub use simulation::states::{Body, Color, System, NVec2};
pub use simulation::params::Parameters;
pub use simulation::forces::PairwiseGravity;
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::walls::{apply_walls, Domain};
pub use simulation::engine::{step, Engine};
pub use simulation::scenario::{build_scenario, Scenario, World};

pub use configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig, WorldConfig};

pub use driver::frame::{FrameDriver, TrailSegment};
