//! Core state types for the N-body simulation.
//!
//! - `Body`   a point mass with size, colour and the position it held
//!            at the end of the previous step (for trails)
//! - `System` the ordered list of bodies and the elapsed simulated time `t`
//!
//! Bodies are created once and live as long as the system. Nothing merges,
//! splits or removes them.

use nalgebra::Vector2;
use serde::Deserialize;

pub type NVec2 = Vector2<f64>;

/// Display colour of a body. Opaque to the physics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "[u8; 3]")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color::rgb(r, g, b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub mass: f64, // > 0, fixed after creation
    pub radius: f64, // > 0, draw size and softening contribution
    pub position: NVec2, // current position
    pub velocity: NVec2, // current velocity
    pub previous_position: NVec2, // position before the last step, trail start
    pub color: Color,
}

impl Body {
    /// New body at rest in its own trail: `previous_position == position`
    pub fn new(mass: f64, radius: f64, position: NVec2, velocity: NVec2, color: Color) -> Self {
        Self {
            mass,
            radius,
            position,
            velocity,
            previous_position: position,
            color,
        }
    }

    pub fn momentum(&self) -> NVec2 {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.norm_squared()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (other.position - self.position).norm()
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>, // stable order, used for pair iteration
    pub t: f64, // simulated time
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    pub fn total_momentum(&self) -> NVec2 {
        self.bodies.iter().map(Body::momentum).sum()
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// Mass-weighted mean position, `None` for an empty or massless system
    pub fn center_of_mass(&self) -> Option<NVec2> {
        let total: f64 = self.bodies.iter().map(|b| b.mass).sum();
        if total <= 0.0 {
            return None;
        }
        let weighted: NVec2 = self.bodies.iter().map(|b| b.position * b.mass).sum();
        Some(weighted / total)
    }
}
