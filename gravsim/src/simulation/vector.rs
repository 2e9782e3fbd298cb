//! 2D vector helpers used by the force law, the integrator and the walls
//!
//! Thin free functions over [`NVec2`]. nalgebra already provides the
//! arithmetic operators; these keep the physics code reading in the
//! same vocabulary as the force law (`scale`, `squared_length`, ...)

use super::states::NVec2;

/// Componentwise `a + b`
#[inline]
pub fn add(a: NVec2, b: NVec2) -> NVec2 {
    a + b
}

/// Componentwise `a - b`
#[inline]
pub fn subtract(a: NVec2, b: NVec2) -> NVec2 {
    a - b
}

/// `(a.x * k, a.y * k)`
#[inline]
pub fn scale(a: NVec2, k: f64) -> NVec2 {
    a * k
}

/// `a.x^2 + a.y^2`, no square root
#[inline]
pub fn squared_length(a: NVec2) -> f64 {
    a.x * a.x + a.y * a.y
}

/// Limit the magnitude of `v` to `max_mag`, keeping its direction
///
/// Vectors already within the limit (including the zero vector) are
/// returned unchanged. The early exit runs before any division, so the
/// zero vector never divides by its own length
pub fn clamp_magnitude(v: NVec2, max_mag: f64) -> NVec2 {
    let n2 = squared_length(v);
    if n2 <= max_mag * max_mag {
        return v;
    }
    scale(v, max_mag / n2.sqrt())
}
