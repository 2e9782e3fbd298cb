//! Frame driver: turns wall-clock frame time into engine steps
//!
//! The renderer's loop calls [`FrameDriver::advance`] once per frame with
//! the raw elapsed time, then draws from [`FrameDriver::trail_segments`].

use log::debug;

use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, Color, NVec2};

/// What the renderer needs from one body after a step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailSegment {
    pub from: NVec2, // previous_position
    pub to: NVec2,   // position
    pub radius: f64,
    pub color: Color,
}

impl From<&Body> for TrailSegment {
    fn from(b: &Body) -> Self {
        Self {
            from: b.previous_position,
            to: b.position,
            radius: b.radius,
            color: b.color,
        }
    }
}

pub struct FrameDriver {
    scenario: Scenario,
}

impl FrameDriver {
    pub fn new(scenario: Scenario) -> Self {
        Self { scenario }
    }

    /// Bound a raw frame time to `[0, max_dt]`
    /// NaN and negative values become 0, infinity becomes `max_dt`
    pub fn clamp_dt(&self, elapsed: f64) -> f64 {
        let max_dt = self.scenario.world.max_dt;
        // f64::max drops NaN in favour of the other operand
        let dt = elapsed.max(0.0).min(max_dt);
        if dt != elapsed {
            debug!("frame dt {elapsed} clamped to {dt}");
        }
        dt
    }

    /// Step the simulation for one frame, returns the dt actually used
    pub fn advance(&mut self, elapsed: f64) -> f64 {
        let dt = self.clamp_dt(elapsed);
        let world = self.scenario.world;
        self.scenario.engine.step_in(dt, world.domain, world.bounce);
        dt
    }

    pub fn trail_segments(&self) -> impl Iterator<Item = TrailSegment> + '_ {
        self.bodies().iter().map(TrailSegment::from)
    }

    pub fn bodies(&self) -> &[Body] {
        self.scenario.engine.bodies()
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn time(&self) -> f64 {
        self.scenario.engine.system.t
    }
}
