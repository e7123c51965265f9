// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Pairwise overlap detection and elastic resolution
//!
//! Detection is an exhaustive pairwise scan: every particle is compared
//! against every other exactly once per frame, quadratic in the population
//! size. Resolution reduces each overlapping 2D pair to a 1D elastic
//! collision along the line joining the two centers via a rotated reference
//! frame, which is physically exact for smooth discs: only the velocity
//! components along the contact axis exchange, the perpendicular components
//! pass through unchanged.

use crate::geometry::{distance, rotate, Vec2};
use crate::particle::Particle;

/// Report whether two particles' discs overlap
///
/// The threshold is the sum of both radii, so the check stays correct if
/// per-particle radii are ever configured.
pub fn overlaps(a: &Particle, b: &Particle) -> bool {
    distance(a.position(), b.position()) < a.radius() + b.radius()
}

/// Resolve an elastic collision between two overlapping particles
///
/// Velocities are reassigned in place to emulate a 2D elastic collision
/// with general masses; position, radius, mass, and emphasis are never
/// touched. Two cases skip resolution and return `false`:
///
/// - the pair is already separating (negative closing velocity), so
///   resolving again on residual overlap would stutter
/// - the centers coincide exactly, leaving the contact axis undefined
///
/// Returns `true` when velocities were reassigned.
///
/// # Examples
///
/// ```
/// use particle_arena::collision::resolve_elastic;
/// use particle_arena::{Color, Particle, Vec2};
///
/// let color = Color::rgb(0, 0, 0);
/// let mut a = Particle::new(Vec2::new(0.0, 0.0), Vec2::new(2.0, 0.0), 25.0, 10.0, color).unwrap();
/// let mut b = Particle::new(Vec2::new(40.0, 0.0), Vec2::new(-2.0, 0.0), 25.0, 10.0, color).unwrap();
///
/// assert!(resolve_elastic(&mut a, &mut b));
/// // Equal-mass head-on collision exchanges velocities.
/// assert_eq!(a.velocity(), Vec2::new(-2.0, 0.0));
/// assert_eq!(b.velocity(), Vec2::new(2.0, 0.0));
/// ```
pub fn resolve_elastic(a: &mut Particle, b: &mut Particle) -> bool {
    let dx = b.position().x() - a.position().x();
    let dy = b.position().y() - a.position().y();
    let dvx = a.velocity().x() - b.velocity().x();
    let dvy = a.velocity().y() - b.velocity().y();

    // Separating pair: leave residual overlap to drift apart on its own
    if dvx * dx + dvy * dy < 0.0 {
        return false;
    }

    // Coincident centers leave atan2 undefined; skip this frame
    if dx == 0.0 && dy == 0.0 {
        return false;
    }

    let angle = dy.atan2(dx);

    // Velocities in the frame where the center line is the x-axis
    let u1 = rotate(a.velocity(), -angle);
    let u2 = rotate(b.velocity(), -angle);

    let m1 = a.mass();
    let m2 = b.mass();
    let total = m1 + m2;

    // 1D elastic collision along x; y passes through unchanged
    let v1 = Vec2::new((u1.x() * (m1 - m2) + 2.0 * m2 * u2.x()) / total, u1.y());
    let v2 = Vec2::new((u2.x() * (m2 - m1) + 2.0 * m1 * u1.x()) / total, u2.y());

    a.set_velocity(rotate(v1, angle));
    b.set_velocity(rotate(v2, angle));
    true
}

/// Detect and resolve collisions between one particle and the rest
///
/// Examines every other particle exactly once (never the reference itself)
/// and resolves each overlapping pair as it is found. Pairs are handled
/// sequentially in population order, so resolving (A, B) may change A's
/// velocity before the (A, C) check runs: one frame's worth of
/// discrete-time sequential resolution.
///
/// Returns the number of pairs whose velocities were reassigned.
pub fn collide_with_neighbors(particles: &mut [Particle], index: usize) -> usize {
    let mut resolved = 0;
    for other in 0..particles.len() {
        if other == index {
            continue;
        }
        let (a, b) = pair_mut(particles, index, other);
        if overlaps(a, b) && resolve_elastic(a, b) {
            resolved += 1;
        }
    }
    resolved
}

/// Split a slice into simultaneous mutable references to two entries
fn pair_mut(particles: &mut [Particle], i: usize, j: usize) -> (&mut Particle, &mut Particle) {
    debug_assert_ne!(i, j);
    if i < j {
        let (head, tail) = particles.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = particles.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Color;

    fn particle(x: f64, y: f64, vx: f64, vy: f64, radius: f64, mass: f64) -> Particle {
        Particle::new(
            Vec2::new(x, y),
            Vec2::new(vx, vy),
            radius,
            mass,
            Color::rgb(0, 0, 0),
        )
        .unwrap()
    }

    #[test]
    fn test_overlaps_uses_radius_sum() {
        let a = particle(0.0, 0.0, 0.0, 0.0, 25.0, 10.0);
        let near = particle(49.0, 0.0, 0.0, 0.0, 25.0, 10.0);
        let touching = particle(50.0, 0.0, 0.0, 0.0, 25.0, 10.0);
        assert!(overlaps(&a, &near));
        // Touching discs are not overlapping
        assert!(!overlaps(&a, &touching));
    }

    #[test]
    fn test_overlaps_mixed_radii() {
        let big = particle(0.0, 0.0, 0.0, 0.0, 30.0, 10.0);
        let small = particle(0.0, 35.0, 0.0, 0.0, 10.0, 10.0);
        assert!(overlaps(&big, &small));
        let far_small = particle(0.0, 41.0, 0.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(&big, &far_small));
    }

    #[test]
    fn test_separating_pair_untouched() {
        let mut a = particle(0.0, 0.0, -1.0, 0.0, 25.0, 10.0);
        let mut b = particle(30.0, 0.0, 1.0, 0.0, 25.0, 10.0);
        assert!(!resolve_elastic(&mut a, &mut b));
        assert_eq!(a.velocity(), Vec2::new(-1.0, 0.0));
        assert_eq!(b.velocity(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_coincident_centers_skipped() {
        let mut a = particle(10.0, 10.0, 1.0, 0.0, 25.0, 10.0);
        let mut b = particle(10.0, 10.0, -1.0, 0.0, 25.0, 10.0);
        assert!(!resolve_elastic(&mut a, &mut b));
        assert_eq!(a.velocity(), Vec2::new(1.0, 0.0));
        assert_eq!(b.velocity(), Vec2::new(-1.0, 0.0));
        assert!(a.velocity().is_valid());
        assert!(b.velocity().is_valid());
    }

    #[test]
    fn test_resolution_never_moves_particles() {
        let mut a = particle(0.0, 0.0, 2.0, 1.0, 25.0, 10.0);
        let mut b = particle(30.0, 10.0, -2.0, 0.5, 25.0, 30.0);
        assert!(resolve_elastic(&mut a, &mut b));
        assert_eq!(a.position(), Vec2::new(0.0, 0.0));
        assert_eq!(b.position(), Vec2::new(30.0, 10.0));
        assert_eq!(a.mass(), 10.0);
        assert_eq!(b.mass(), 30.0);
    }

    #[test]
    fn test_collide_with_neighbors_skips_self_and_far() {
        let mut particles = vec![
            particle(0.0, 0.0, 1.0, 0.0, 25.0, 10.0),
            particle(500.0, 0.0, -1.0, 0.0, 25.0, 10.0),
        ];
        assert_eq!(collide_with_neighbors(&mut particles, 0), 0);
        assert_eq!(particles[0].velocity(), Vec2::new(1.0, 0.0));
        assert_eq!(particles[1].velocity(), Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_collide_with_neighbors_resolves_overlap() {
        let mut particles = vec![
            particle(0.0, 0.0, 2.0, 0.0, 25.0, 10.0),
            particle(40.0, 0.0, -2.0, 0.0, 25.0, 10.0),
        ];
        assert_eq!(collide_with_neighbors(&mut particles, 0), 1);
        assert_eq!(particles[0].velocity(), Vec2::new(-2.0, 0.0));
        assert_eq!(particles[1].velocity(), Vec2::new(2.0, 0.0));
    }

    #[test]
    fn test_pair_mut_both_orders() {
        let mut particles = vec![
            particle(0.0, 0.0, 0.0, 0.0, 1.0, 1.0),
            particle(10.0, 0.0, 0.0, 0.0, 1.0, 1.0),
        ];
        let (a, b) = pair_mut(&mut particles, 0, 1);
        assert_eq!(a.position().x(), 0.0);
        assert_eq!(b.position().x(), 10.0);
        let (a, b) = pair_mut(&mut particles, 1, 0);
        assert_eq!(a.position().x(), 10.0);
        assert_eq!(b.position().x(), 0.0);
    }
}
