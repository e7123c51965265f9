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
//! The particle entity
//!
//! Particles are plain data: a disc with position, velocity, radius, mass,
//! a visual emphasis accumulator, and a color. All behavior lives in the
//! free-function systems ([`crate::collision`], [`crate::boundary`],
//! [`crate::highlight`]) so each stays independently testable. Radius and
//! mass are fixed for a particle's lifetime; there are no setters for them.

use crate::error::{Error, Result};
use crate::geometry::Vec2;
use crate::render::Color;

/// A circular, massed particle in the bounded 2D domain
///
/// # Examples
///
/// ```
/// use particle_arena::{Color, Particle, Vec2};
///
/// let p = Particle::new(
///     Vec2::new(100.0, 100.0),
///     Vec2::new(1.0, -1.0),
///     25.0,
///     10.0,
///     Color::rgb(0x38, 0x3F, 0x51),
/// )
/// .unwrap();
/// assert_eq!(p.radius(), 25.0);
/// assert_eq!(p.emphasis(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    position: Vec2,
    velocity: Vec2,
    radius: f64,
    mass: f64,
    emphasis: f64,
    color: Color,
}

impl Particle {
    /// Create a new particle after validating its invariants
    ///
    /// Emphasis starts at zero and is driven entirely by the proximity
    /// highlighter afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParam`] if `radius` or `mass` is
    /// non-positive or non-finite, or if any position or velocity component
    /// is NaN or infinite.
    pub fn new(position: Vec2, velocity: Vec2, radius: f64, mass: f64, color: Color) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidParam("radius must be finite and > 0".into()));
        }
        if !mass.is_finite() || mass <= 0.0 {
            return Err(Error::InvalidParam("mass must be finite and > 0".into()));
        }
        if !position.is_valid() {
            return Err(Error::InvalidParam("position must be finite".into()));
        }
        if !velocity.is_valid() {
            return Err(Error::InvalidParam("velocity must be finite".into()));
        }
        Ok(Particle {
            position,
            velocity,
            radius,
            mass,
            emphasis: 0.0,
            color,
        })
    }

    /// Get the position
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Get the velocity
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Get the collision radius
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Get the mass
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Get the visual emphasis accumulator
    pub fn emphasis(&self) -> f64 {
        self.emphasis
    }

    /// Get the draw color
    pub fn color(&self) -> Color {
        self.color
    }

    /// Set the position
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Set the velocity
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Set the visual emphasis accumulator
    pub fn set_emphasis(&mut self, emphasis: f64) {
        self.emphasis = emphasis;
    }

    /// Advance the position by one frame's worth of velocity
    ///
    /// The frame is the unit of time: `position += velocity` per tick.
    pub fn integrate(&mut self) {
        self.position = Vec2::new(
            self.position.x() + self.velocity.x(),
            self.position.y() + self.velocity.y(),
        );
    }

    /// Kinetic energy: `0.5 * m * |v|^2`
    pub fn kinetic_energy(&self) -> f64 {
        let v = self.velocity.magnitude();
        0.5 * self.mass * v * v
    }

    /// Momentum vector: `m * v`
    pub fn momentum(&self) -> Vec2 {
        Vec2::new(self.mass * self.velocity.x(), self.mass * self.velocity.y())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_color() -> Color {
        Color::rgb(0x2E, 0x40, 0x57)
    }

    #[test]
    fn test_particle_creation() {
        let p = Particle::new(
            Vec2::new(1.0, 2.0),
            Vec2::new(-0.5, 0.5),
            25.0,
            10.0,
            test_color(),
        )
        .unwrap();
        assert_eq!(p.position(), Vec2::new(1.0, 2.0));
        assert_eq!(p.velocity(), Vec2::new(-0.5, 0.5));
        assert_eq!(p.radius(), 25.0);
        assert_eq!(p.mass(), 10.0);
        assert_eq!(p.emphasis(), 0.0);
        assert_eq!(p.color(), test_color());
    }

    #[test]
    fn test_invalid_radius_rejected() {
        let err = Particle::new(Vec2::zero(), Vec2::zero(), 0.0, 10.0, test_color()).unwrap_err();
        assert!(err.to_string().contains("radius"));
    }

    #[test]
    fn test_invalid_mass_rejected() {
        let err = Particle::new(Vec2::zero(), Vec2::zero(), 25.0, -1.0, test_color()).unwrap_err();
        assert!(err.to_string().contains("mass"));
    }

    #[test]
    fn test_non_finite_position_rejected() {
        let err = Particle::new(
            Vec2::new(f64::NAN, 0.0),
            Vec2::zero(),
            25.0,
            10.0,
            test_color(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("position"));
    }

    #[test]
    fn test_integrate_advances_position() {
        let mut p = Particle::new(
            Vec2::new(10.0, 20.0),
            Vec2::new(2.0, -3.0),
            25.0,
            10.0,
            test_color(),
        )
        .unwrap();
        p.integrate();
        assert_eq!(p.position(), Vec2::new(12.0, 17.0));
        p.integrate();
        assert_eq!(p.position(), Vec2::new(14.0, 14.0));
    }

    #[test]
    fn test_kinetic_energy_and_momentum() {
        let p = Particle::new(
            Vec2::zero(),
            Vec2::new(3.0, 4.0),
            25.0,
            2.0,
            test_color(),
        )
        .unwrap();
        // |v| = 5, KE = 0.5 * 2 * 25
        assert!((p.kinetic_energy() - 25.0).abs() < 1e-12);
        assert_eq!(p.momentum(), Vec2::new(6.0, 8.0));
    }
}
