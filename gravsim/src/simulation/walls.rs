//! Inelastic reflection against the rectangle [0, width] x [0, height]

use super::states::Body;

/// Rectangular simulation region with its origin at (0, 0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub width: f64,
    pub height: f64,
}

impl Domain {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Push `body` back inside the domain, treating its radius as its extent
///
/// Each violated axis is clamped to the boundary and its velocity
/// component is reversed and scaled by `bounce`. Both axes are checked on
/// every call, so a body in a corner gets both corrections at once.
/// Width and height must exceed twice the radius.
pub fn apply_walls(body: &mut Body, width: f64, height: f64, bounce: f64) {
    let r = body.radius;

    if body.position.x < r {
        body.position.x = r;
        body.velocity.x = -body.velocity.x * bounce;
    } else if body.position.x > width - r {
        body.position.x = width - r;
        body.velocity.x = -body.velocity.x * bounce;
    }

    if body.position.y < r {
        body.position.y = r;
        body.velocity.y = -body.velocity.y * bounce;
    } else if body.position.y > height - r {
        body.position.y = height - r;
        body.velocity.y = -body.velocity.y * bounce;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::states::{Color, NVec2};
    use approx::assert_relative_eq;

    fn body_at(x: f64, y: f64, vx: f64, vy: f64) -> Body {
        Body::new(1.0, 5.0, NVec2::new(x, y), NVec2::new(vx, vy), Color::WHITE)
    }

    #[test]
    fn left_wall_clamps_and_damps() {
        let mut b = body_at(4.0, 50.0, 5.0, 0.0);
        apply_walls(&mut b, 100.0, 100.0, 0.9);

        assert_eq!(b.position.x, 5.0);
        assert_relative_eq!(b.velocity.x, -4.5, epsilon = 1e-12);
        assert_eq!(b.position.y, 50.0);
        assert_eq!(b.velocity.y, 0.0);
    }

    #[test]
    fn far_walls_use_width_and_height() {
        let mut b = body_at(99.0, 120.0, 3.0, 8.0);
        apply_walls(&mut b, 100.0, 200.0, 0.5);
        assert_eq!(b.position.x, 95.0);
        assert_relative_eq!(b.velocity.x, -1.5);
        assert_eq!(b.position.y, 120.0);
        assert_eq!(b.velocity.y, 8.0);

        let mut c = body_at(50.0, 199.0, 0.0, 8.0);
        apply_walls(&mut c, 100.0, 200.0, 0.5);
        assert_eq!(c.position.y, 195.0);
        assert_relative_eq!(c.velocity.y, -4.0);
    }

    #[test]
    fn inside_body_is_untouched() {
        let mut b = body_at(50.0, 50.0, -7.0, 3.0);
        let before = b.clone();
        apply_walls(&mut b, 100.0, 100.0, 0.9);

        assert_eq!(b.position, before.position);
        assert_eq!(b.velocity, before.velocity);
    }

    #[test]
    fn corner_corrects_both_axes() {
        let mut b = body_at(-3.0, 104.0, -2.0, 6.0);
        apply_walls(&mut b, 100.0, 100.0, 0.8);

        assert_eq!(b.position, NVec2::new(5.0, 95.0));
        assert_relative_eq!(b.velocity.x, 1.6, epsilon = 1e-12);
        assert_relative_eq!(b.velocity.y, -4.8, epsilon = 1e-12);
    }

    #[test]
    fn clamped_body_stays_put_on_second_call() {
        let mut b = body_at(4.0, 4.0, -1.0, -1.0);
        apply_walls(&mut b, 100.0, 100.0, 0.9);
        let once = b.clone();
        apply_walls(&mut b, 100.0, 100.0, 0.9);

        assert_eq!(b.position, once.position);
        assert_eq!(b.velocity, once.velocity);
    }
}
