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
//! # Particle Arena
//!
//! A 2D particle simulation core for a fixed population of circular, massed
//! particles bouncing inside a bounded viewport, with elastic pairwise
//! collisions and pointer-proximity highlighting.
//!
//! ## Features
//!
//! - **Entity-system split**: particles are plain data; detection,
//!   resolution, boundary reflection, and highlighting are free functions
//!   over the population
//! - **Elastic collisions**: 2D pairs reduced to 1D along the contact axis
//!   via a rotated reference frame, conserving momentum and kinetic energy
//! - **Bounded domain**: mirror reflection of velocity components at the
//!   viewport edges
//! - **External rendering**: the core computes draw parameters and hands
//!   them to a [`render::Renderer`] implementation once per particle per frame
//! - **Deterministic seeding**: optional RNG seed for reproducible runs
//!
//! ## Example
//!
//! ```rust
//! use particle_arena::{SimConfig, Simulation};
//!
//! let config = SimConfig::new().with_population(10).with_seed(7);
//! let mut sim = Simulation::new(config, 800.0, 600.0).expect("valid config");
//!
//! sim.set_pointer(400.0, 300.0);
//! for _ in 0..60 {
//!     sim.step();
//! }
//! assert_eq!(sim.particles().len(), 10);
//! ```

#![warn(missing_docs)]

/// Scalar and vector geometry helpers
pub mod geometry;

/// The particle entity
pub mod particle;

/// Simulation configuration
pub mod config;

/// Crate-wide error type
pub mod error;

/// Pairwise overlap detection and elastic resolution
pub mod collision;

/// Velocity reflection at the viewport edges
pub mod boundary;

/// Pointer-proximity emphasis accumulation
pub mod highlight;

/// Non-overlapping population initialization
pub mod spawn;

/// Draw parameters and the external renderer boundary
pub mod render;

/// The simulation context and frame loop
pub mod sim;

pub use config::SimConfig;
pub use error::{Error, Result};
pub use geometry::{Vec2, Viewport};
pub use particle::Particle;
pub use render::{Color, Renderer};
pub use sim::Simulation;
