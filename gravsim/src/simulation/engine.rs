//! Per-frame physics step
//!
//! One step is: forces from the state at the start of the step, then per
//! body snapshot the trail start, integrate, and reflect off the walls.
//! The engine never clamps `dt`; drivers must hand it a bounded value.

use log::trace;

use super::forces::PairwiseGravity;
use super::integrator::semi_implicit_euler;
use super::params::Parameters;
use super::states::{Body, System};
use super::walls::{apply_walls, Domain};

/// Advance `bodies` by one step of `dt` inside [0, width] x [0, height]
pub fn step(bodies: &mut [Body], params: &Parameters, dt: f64, width: f64, height: f64, bounce: f64) {
    // All forces come from the pre-step positions
    let forces = PairwiseGravity::new(params).compute_pairwise_forces(bodies);

    for (b, f) in bodies.iter_mut().zip(forces) {
        b.previous_position = b.position;
        semi_implicit_euler(b, f, dt);
        apply_walls(b, width, height, bounce);
    }
}

/// Owns the bodies and the constants they evolve under
#[derive(Debug, Clone)]
pub struct Engine {
    pub parameters: Parameters,
    pub system: System,
}

impl Engine {
    pub fn new(parameters: Parameters, bodies: Vec<Body>) -> Self {
        Self {
            parameters,
            system: System::new(bodies),
        }
    }

    /// Run one step and advance the simulated clock by `dt`
    pub fn step(&mut self, dt: f64, width: f64, height: f64, bounce: f64) {
        trace!("step: t={:.4} dt={:.4} bodies={}", self.system.t, dt, self.system.bodies.len());

        step(&mut self.system.bodies, &self.parameters, dt, width, height, bounce);
        self.system.t += dt;
    }

    /// Same as [`Engine::step`] with the bounds taken from `domain`
    pub fn step_in(&mut self, dt: f64, domain: Domain, bounce: f64) {
        self.step(dt, domain.width, domain.height, bounce);
    }

    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }
}
