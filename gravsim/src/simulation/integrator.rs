//! Semi-implicit (symplectic) Euler
//!
//! Velocity is kicked first, then position drifts with the *new*
//! velocity. Swapping the two lines gives explicit Euler, which drifts
//! in energy and is not what the engine runs.

use super::states::{Body, NVec2};
use super::vector::{add, scale};

/// Advance one body by `dt` under a constant `force`
/// `body.mass` must be positive
pub fn semi_implicit_euler(body: &mut Body, force: NVec2, dt: f64) {
    let a = scale(force, body.mass.recip());

    // v_n+1 = v_n + a dt
    body.velocity = add(body.velocity, scale(a, dt));

    // x_n+1 = x_n + v_n+1 dt
    body.position = add(body.position, scale(body.velocity, dt));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::states::Color;
    use approx::assert_relative_eq;

    #[test]
    fn position_uses_updated_velocity() {
        let g = 9.81;
        let mass = 2.0;
        let dt = 0.1;
        let mut b = Body::new(mass, 1.0, NVec2::new(3.0, 7.0), NVec2::zeros(), Color::WHITE);

        semi_implicit_euler(&mut b, NVec2::new(0.0, -g * mass), dt);

        assert_relative_eq!(b.velocity.x, 0.0);
        assert_relative_eq!(b.velocity.y, -g * dt, epsilon = 1e-12);
        assert_relative_eq!(b.position.x, 3.0);
        // explicit Euler would leave y at 7.0 here
        assert_relative_eq!(b.position.y, 7.0 - g * dt * dt, epsilon = 1e-12);
    }

    #[test]
    fn zero_force_drifts_in_a_straight_line() {
        let mut b = Body::new(1.0, 1.0, NVec2::new(0.0, 0.0), NVec2::new(2.0, -1.0), Color::WHITE);

        semi_implicit_euler(&mut b, NVec2::zeros(), 0.5);

        assert_eq!(b.velocity, NVec2::new(2.0, -1.0));
        assert_eq!(b.position, NVec2::new(1.0, -0.5));
    }

    #[test]
    fn does_not_touch_previous_position() {
        let start = NVec2::new(10.0, 10.0);
        let mut b = Body::new(5.0, 1.0, start, NVec2::new(1.0, 0.0), Color::RED);

        semi_implicit_euler(&mut b, NVec2::new(5.0, 0.0), 1.0);

        assert_eq!(b.previous_position, start);
    }
}
