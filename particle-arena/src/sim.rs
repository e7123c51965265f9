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
//! The simulation context and frame loop
//!
//! [`Simulation`] is the composition root: it owns the particle population,
//! the viewport extents, the pointer snapshot, and the RNG, and it sequences
//! the per-frame systems. It holds no physics of its own.
//!
//! The core is single-threaded and synchronous: one frame runs to
//! completion before the next begins, driven by whatever periodic trigger
//! the host supplies (typically the rendering surface's frame clock).
//! Pointer updates from the input source land in a snapshot that the frame
//! reads; a multi-threaded host must guard that snapshot itself, e.g. with
//! an atomic coordinate pair, before feeding it in.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::boundary;
use crate::collision;
use crate::config::SimConfig;
use crate::error::{Error, Result};
use crate::geometry::{Vec2, Viewport};
use crate::highlight;
use crate::particle::Particle;
use crate::render::Renderer;
use crate::spawn::spawn_population;

/// The simulation context: population, viewport, pointer, and sequencing
///
/// # Examples
///
/// ```
/// use particle_arena::{SimConfig, Simulation};
///
/// let config = SimConfig::new().with_population(5).with_seed(1);
/// let mut sim = Simulation::new(config, 640.0, 480.0).unwrap();
/// sim.step();
/// assert_eq!(sim.frame(), 1);
/// ```
#[derive(Debug)]
pub struct Simulation {
    config: SimConfig,
    viewport: Viewport,
    pointer: Option<Vec2>,
    particles: Vec<Particle>,
    rng: StdRng,
    frame: u64,
}

impl Simulation {
    /// Create a simulation and spawn its initial population
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParam`] for an invalid configuration or
    /// non-positive viewport extents, and [`Error::PlacementExhausted`]
    /// when the population cannot be placed without overlap.
    pub fn new(config: SimConfig, width: f64, height: f64) -> Result<Self> {
        config.validate()?;
        let viewport = Viewport::try_new(width, height).ok_or_else(|| {
            Error::InvalidParam(format!(
                "viewport extents must be positive and finite, got {width}x{height}"
            ))
        })?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let particles = spawn_population(&config, viewport, &mut rng)?;
        Ok(Simulation {
            config,
            viewport,
            pointer: None,
            particles,
            rng,
            frame: 0,
        })
    }

    /// Advance the simulation by one frame
    ///
    /// For every particle in population order: detect and resolve
    /// collisions against all others, integrate position from velocity,
    /// reflect at the domain edges, then update pointer emphasis. All work
    /// is synchronous; the step cannot fail.
    pub fn step(&mut self) {
        for index in 0..self.particles.len() {
            collision::collide_with_neighbors(&mut self.particles, index);
            let particle = &mut self.particles[index];
            particle.integrate();
            boundary::reflect(particle, self.viewport);
            highlight::update_emphasis(particle, self.pointer, &self.config);
        }
        self.frame += 1;
    }

    /// Run one complete frame: physics step, then render hand-off
    ///
    /// Convenience for hosts whose scheduler delivers one callback per
    /// display refresh; equivalent to [`Simulation::step`] followed by
    /// [`Simulation::render`].
    pub fn tick(&mut self, renderer: &mut impl Renderer) {
        self.step();
        self.render(renderer);
    }

    /// Hand the current state to the external renderer
    ///
    /// Invokes the draw primitive once per particle with fill and stroke
    /// set to the particle's color and opacity set to its raw emphasis.
    pub fn render(&self, renderer: &mut impl Renderer) {
        for particle in &self.particles {
            renderer.draw_circle(
                particle.position(),
                particle.radius(),
                particle.color(),
                particle.color(),
                particle.emphasis(),
            );
        }
    }

    /// Handle a resize signal: re-read extents, replace the population
    ///
    /// Prior particle state is discarded wholesale; the new population is
    /// spawned fresh inside the new extents. On error the previous
    /// population and viewport are left untouched.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Simulation::new`].
    pub fn resize(&mut self, width: f64, height: f64) -> Result<()> {
        let viewport = Viewport::try_new(width, height).ok_or_else(|| {
            Error::InvalidParam(format!(
                "viewport extents must be positive and finite, got {width}x{height}"
            ))
        })?;
        let particles = spawn_population(&self.config, viewport, &mut self.rng)?;
        self.viewport = viewport;
        self.particles = particles;
        Ok(())
    }

    /// Record a pointer movement
    ///
    /// Non-finite coordinates are ignored, leaving the previous snapshot in
    /// place.
    pub fn set_pointer(&mut self, x: f64, y: f64) {
        let pointer = Vec2::new(x, y);
        if pointer.is_valid() {
            self.pointer = Some(pointer);
        }
    }

    /// Forget the pointer, as when it leaves the surface
    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    /// Get the current pointer snapshot, if any movement has been observed
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Get the particle population
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Get the active configuration
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get the current viewport extents
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Number of frames stepped so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Total kinetic energy of the population
    ///
    /// Elastic resolution and mirror reflection both preserve speed, so
    /// this is constant across frames up to floating-point drift, which
    /// makes it a useful invariant for host diagnostics.
    pub fn total_kinetic_energy(&self) -> f64 {
        self.particles.iter().map(Particle::kinetic_energy).sum()
    }

    /// Total momentum of the population
    pub fn total_momentum(&self) -> Vec2 {
        let mut total = Vec2::zero();
        for p in &self.particles {
            let m = p.momentum();
            total.set_x(total.x() + m.x());
            total.set_y(total.y() + m.y());
        }
        total
    }
}
