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
//! Simulation configuration
//!
//! All recognized tuning knobs for the engine, with defaults matching the
//! reference configuration: 100 particles of radius 25 and mass 10, a
//! 130-unit proximity radius, and a 0.3 emphasis increment and baseline.

use crate::error::{Error, Result};
use crate::render::Color;

/// Default palette from which particle colors are drawn
pub const DEFAULT_PALETTE: [Color; 5] = [
    Color::rgb(0x38, 0x3F, 0x51),
    Color::rgb(0xDD, 0xDB, 0xF1),
    Color::rgb(0x3C, 0x4F, 0x76),
    Color::rgb(0x2E, 0x40, 0x57),
    Color::rgb(0x29, 0x33, 0x5C),
];

/// Configuration for a [`crate::Simulation`]
///
/// # Examples
///
/// ```
/// use particle_arena::SimConfig;
///
/// let config = SimConfig::new()
///     .with_population(50)
///     .with_radius(10.0)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of particles in the population
    pub population: usize,
    /// Collision radius shared by every particle
    pub radius: f64,
    /// Mass shared by every particle
    pub mass: f64,
    /// Largest magnitude of an initial velocity component
    pub max_start_speed: f64,
    /// Pointer distance within which emphasis accumulates
    pub proximity_radius: f64,
    /// Emphasis added per frame while the pointer is near
    pub emphasis_increment: f64,
    /// Emphasis a particle resets to while the pointer is far or absent
    pub emphasis_baseline: f64,
    /// Colors particles draw from uniformly at random; must be non-empty
    pub palette: Vec<Color>,
    /// Placement attempts per particle before initialization fails
    pub max_placement_attempts: u32,
    /// RNG seed for deterministic runs; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            population: 100,
            radius: 25.0,
            mass: 10.0,
            max_start_speed: 2.0,
            proximity_radius: 130.0,
            emphasis_increment: 0.3,
            emphasis_baseline: 0.3,
            palette: DEFAULT_PALETTE.to_vec(),
            max_placement_attempts: 1000,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Create a configuration with the default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the population size
    pub fn with_population(mut self, population: usize) -> Self {
        self.population = population;
        self
    }

    /// Set the shared particle radius
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Set the shared particle mass
    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Set the proximity radius for pointer highlighting
    pub fn with_proximity_radius(mut self, proximity_radius: f64) -> Self {
        self.proximity_radius = proximity_radius;
        self
    }

    /// Set the palette particles draw their colors from
    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        self.palette = palette;
        self
    }

    /// Set the RNG seed for a deterministic run
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that every knob is inside its legal range
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParam`] naming the offending field when a
    /// scalar is non-positive or non-finite where it must not be, when the
    /// palette is empty, or when the placement attempt budget is zero.
    pub fn validate(&self) -> Result<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(Error::InvalidParam("radius must be finite and > 0".into()));
        }
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(Error::InvalidParam("mass must be finite and > 0".into()));
        }
        if !self.max_start_speed.is_finite() || self.max_start_speed < 0.0 {
            return Err(Error::InvalidParam(
                "max_start_speed must be finite and >= 0".into(),
            ));
        }
        if !self.proximity_radius.is_finite() || self.proximity_radius < 0.0 {
            return Err(Error::InvalidParam(
                "proximity_radius must be finite and >= 0".into(),
            ));
        }
        if !self.emphasis_increment.is_finite() || self.emphasis_increment < 0.0 {
            return Err(Error::InvalidParam(
                "emphasis_increment must be finite and >= 0".into(),
            ));
        }
        if !self.emphasis_baseline.is_finite() || self.emphasis_baseline < 0.0 {
            return Err(Error::InvalidParam(
                "emphasis_baseline must be finite and >= 0".into(),
            ));
        }
        if self.palette.is_empty() {
            return Err(Error::InvalidParam("palette must not be empty".into()));
        }
        if self.max_placement_attempts == 0 {
            return Err(Error::InvalidParam(
                "max_placement_attempts must be >= 1".into(),
            ));
        }
        Ok(())
    }
}
