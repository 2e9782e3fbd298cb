//! Pairwise softened Newtonian gravity
//!
//! Direct O(n^2) summation over unordered pairs. Each pair's force is
//! softened by a per-pair minimum separation and clamped in magnitude,
//! then applied equal and opposite to the two bodies.

use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2};
use crate::simulation::vector::{clamp_magnitude, scale, squared_length, subtract};

/// 2D Newtonian gravity with softening and a force cap
/// Uses the mean radius of the pair or the global softening floor,
/// whichever is larger, as the minimum effective separation
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy)]
pub struct PairwiseGravity {
    pub G: f64, // gravitational constant
    pub softening: f64, // softening floor
    pub f_max: f64, // force clamp per pair
}

impl PairwiseGravity {
    pub fn new(params: &Parameters) -> Self {
        Self {
            G: params.G,
            softening: params.softening,
            f_max: params.f_max,
        }
    }

    /// Force on `bi` due to `bj`, already clamped
    /// The force on `bj` due to `bi` is the negation of this value
    pub fn pair_force(&self, bi: &Body, bj: &Body) -> NVec2 {
        // r points from i to j, so i is pulled along +r
        let r = subtract(bj.position, bi.position);

        // Overlapping or touching bodies never get closer than their mean radius
        let cap = self.softening.max(0.5 * (bi.radius + bj.radius));

        // 1 / |r_soft|, finite even at r = 0
        let dist_inv = (squared_length(r) + cap * cap).sqrt().recip();
        let inv_r3 = dist_inv * dist_inv * dist_inv;

        // G m_i m_j r / |r_soft|^3
        let mag = self.G * bi.mass * bj.mass * inv_r3;

        clamp_magnitude(scale(r, mag), self.f_max)
    }

    /// Net force on every body, same order and length as `bodies`
    /// Reads positions only, so it must run before anything moves
    pub fn compute_pairwise_forces(&self, bodies: &[Body]) -> Vec<NVec2> {
        let n = bodies.len();
        let mut out = vec![NVec2::zeros(); n];

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let bi = &bodies[i];
            for j in (i + 1)..n {
                let f = self.pair_force(bi, &bodies[j]);
                out[i] += f;
                out[j] -= f;
            }
        }

        out
    }
}

impl From<&Parameters> for PairwiseGravity {
    fn from(params: &Parameters) -> Self {
        Self::new(params)
    }
}
