//! Velocity reflection at the viewport edges
//!
//! After a particle's position advances for the frame, each axis is
//! inspected independently: a disc whose edge has reached the near or far
//! side of the domain while still moving toward it has that velocity
//! component negated. Both edges use the same inclusive bound, and the
//! direction guard makes a second application on the same tick a no-op.

use crate::geometry::Viewport;
use crate::particle::Particle;

/// Reflect a particle's velocity components at the domain edges
///
/// Produces a mirror bounce: position is left where integration put it
/// (even slightly past the edge) and only the velocity sign flips, so the
/// next frame carries the particle back into the domain.
pub fn reflect(particle: &mut Particle, viewport: Viewport) {
    let p = particle.position();
    let r = particle.radius();
    let mut v = particle.velocity();

    if (p.x() - r <= 0.0 && v.x() < 0.0) || (p.x() + r >= viewport.width() && v.x() > 0.0) {
        v.set_x(-v.x());
    }
    if (p.y() - r <= 0.0 && v.y() < 0.0) || (p.y() + r >= viewport.height() && v.y() > 0.0) {
        v.set_y(-v.y());
    }

    particle.set_velocity(v);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vec2;
    use crate::render::Color;

    fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
        Particle::new(
            Vec2::new(x, y),
            Vec2::new(vx, vy),
            25.0,
            10.0,
            Color::rgb(0, 0, 0),
        )
        .unwrap()
    }

    #[test]
    fn test_near_edge_reflection() {
        // Disc protruding past the left edge and moving further out
        let mut p = particle(5.0, 300.0, -3.0, 0.0);
        reflect(&mut p, Viewport::new(800.0, 600.0));
        assert_eq!(p.velocity(), Vec2::new(3.0, 0.0));
    }

    #[test]
    fn test_far_edge_reflection() {
        let mut p = particle(790.0, 300.0, 2.0, 1.0);
        reflect(&mut p, Viewport::new(800.0, 600.0));
        assert_eq!(p.velocity(), Vec2::new(-2.0, 1.0));
    }

    #[test]
    fn test_axes_reflect_independently() {
        // Corner contact flips both components
        let mut p = particle(10.0, 590.0, -1.0, 1.0);
        reflect(&mut p, Viewport::new(800.0, 600.0));
        assert_eq!(p.velocity(), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn test_interior_particle_untouched() {
        let mut p = particle(400.0, 300.0, -2.0, 2.0);
        reflect(&mut p, Viewport::new(800.0, 600.0));
        assert_eq!(p.velocity(), Vec2::new(-2.0, 2.0));
    }

    #[test]
    fn test_reflection_is_idempotent_within_a_tick() {
        // Exactly on the boundary and moving outward: one flip, not two
        let mut p = particle(25.0, 300.0, -3.0, 0.0);
        reflect(&mut p, Viewport::new(800.0, 600.0));
        assert_eq!(p.velocity(), Vec2::new(3.0, 0.0));
        reflect(&mut p, Viewport::new(800.0, 600.0));
        assert_eq!(p.velocity(), Vec2::new(3.0, 0.0));
    }

    #[test]
    fn test_inward_motion_at_edge_not_reflected() {
        let mut p = particle(5.0, 300.0, 3.0, 0.0);
        reflect(&mut p, Viewport::new(800.0, 600.0));
        assert_eq!(p.velocity(), Vec2::new(3.0, 0.0));
    }
}
