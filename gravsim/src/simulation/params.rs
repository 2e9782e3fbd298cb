//! Physical constants for the simulation
//!
//! `Parameters` is fixed for an engine's lifetime:
//! - gravitational constant `G`,
//! - softening floor (a minimum separation, not squared),
//! - per-pair force magnitude cap `f_max`

pub const REFERENCE_G: f64 = 200.0;
pub const REFERENCE_SOFTENING: f64 = 1.0;
pub const REFERENCE_F_MAX: f64 = 1e5;

#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub softening: f64, // minimum effective separation
    pub f_max: f64, // force clamp per pair
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G: REFERENCE_G,
            softening: REFERENCE_SOFTENING,
            f_max: REFERENCE_F_MAX,
        }
    }
}
