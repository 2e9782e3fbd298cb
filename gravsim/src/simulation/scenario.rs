//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (serde-facing) and produces a runtime
//! `Scenario` containing:
//! - the engine (`Parameters` + `System` with bodies at t = 0)
//! - the world the driver steps it in (`Domain`, bounce, dt cap)
//!
//! Malformed configuration is rejected here. Past this point the physics
//! assumes valid input.

use anyhow::{bail, ensure, Context, Result};
use log::info;

use crate::configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig, WorldConfig, DEFAULT_MAX_DT};
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, Color, NVec2};
use crate::simulation::walls::Domain;

pub const REFERENCE_WIDTH: f64 = 500.0;
pub const REFERENCE_HEIGHT: f64 = 500.0;
pub const REFERENCE_BOUNCE: f64 = 0.95;

/// Where the bodies live and how each frame is stepped
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct World {
    pub domain: Domain,
    pub bounce: f64, // wall damping, (0, 1]
    pub max_dt: f64, // driver-side dt cap
}

impl Default for World {
    fn default() -> Self {
        Self {
            domain: Domain::new(REFERENCE_WIDTH, REFERENCE_HEIGHT),
            bounce: REFERENCE_BOUNCE,
            max_dt: DEFAULT_MAX_DT,
        }
    }
}

/// A runnable simulation: engine state plus its world
#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub world: World,
}

impl Scenario {
    pub fn new(engine: Engine, world: World) -> Self {
        Self { engine, world }
    }

    /// Three light bodies around a heavy central one in a 500 x 500 box
    pub fn reference() -> Self {
        let bodies = vec![
            Body::new(800.0, 5.0, NVec2::new(300.0, 200.0), NVec2::new(10.0, -10.0), Color::BLUE),
            Body::new(800.0, 5.0, NVec2::new(200.0, 300.0), NVec2::new(10.0, -10.0), Color::RED),
            Body::new(800.0, 5.0, NVec2::new(300.0, 250.0), NVec2::new(0.0, 10.0), Color::GREEN),
            Body::new(100_000.0, 10.0, NVec2::new(250.0, 250.0), NVec2::zeros(), Color::YELLOW),
        ];

        Self::new(Engine::new(Parameters::default(), bodies), World::default())
    }
}

/// Convert and validate a `ScenarioConfig`
pub fn build_scenario(cfg: ScenarioConfig) -> Result<Scenario> {
    let parameters = build_parameters(&cfg.parameters)?;
    let world = build_world(&cfg.world)?;

    // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
    let bodies = cfg
        .bodies
        .iter()
        .enumerate()
        .map(|(i, bc)| build_body(bc).with_context(|| format!("invalid body #{i}")))
        .collect::<Result<Vec<Body>>>()?;

    for (i, b) in bodies.iter().enumerate() {
        ensure!(
            2.0 * b.radius < world.domain.width && 2.0 * b.radius < world.domain.height,
            "body #{i}: radius {} does not fit in a {} x {} domain",
            b.radius,
            world.domain.width,
            world.domain.height
        );
    }

    info!(
        "scenario: {} bodies in {} x {} (bounce {}, G {}, softening {})",
        bodies.len(),
        world.domain.width,
        world.domain.height,
        world.bounce,
        parameters.G,
        parameters.softening
    );

    Ok(Scenario::new(Engine::new(parameters, bodies), world))
}

fn build_parameters(cfg: &ParametersConfig) -> Result<Parameters> {
    ensure!(cfg.G > 0.0, "G must be positive, got {}", cfg.G);
    ensure!(cfg.softening > 0.0, "softening must be positive, got {}", cfg.softening);
    ensure!(cfg.f_max > 0.0, "f_max must be positive, got {}", cfg.f_max);

    Ok(Parameters {
        G: cfg.G,
        softening: cfg.softening,
        f_max: cfg.f_max,
    })
}

fn build_world(cfg: &WorldConfig) -> Result<World> {
    ensure!(
        cfg.width > 0.0 && cfg.height > 0.0,
        "domain must have positive extent, got {} x {}",
        cfg.width,
        cfg.height
    );
    ensure!(cfg.bounce > 0.0 && cfg.bounce <= 1.0, "bounce must be in (0, 1], got {}", cfg.bounce);
    ensure!(cfg.max_dt > 0.0, "max_dt must be positive, got {}", cfg.max_dt);

    Ok(World {
        domain: Domain::new(cfg.width, cfg.height),
        bounce: cfg.bounce,
        max_dt: cfg.max_dt,
    })
}

fn build_body(bc: &BodyConfig) -> Result<Body> {
    ensure!(bc.m > 0.0, "mass must be positive, got {}", bc.m);
    ensure!(bc.radius > 0.0, "radius must be positive, got {}", bc.radius);

    Ok(Body::new(
        bc.m,
        bc.radius,
        vec2(&bc.x).context("position")?,
        vec2(&bc.v).context("velocity")?,
        bc.color,
    ))
}

fn vec2(components: &[f64]) -> Result<NVec2> {
    match components {
        [x, y] => Ok(NVec2::new(*x, *y)),
        other => bail!("expected 2 components, got {}", other.len()),
    }
}
