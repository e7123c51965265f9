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
//! Non-overlapping population initialization
//!
//! Rejection sampling: candidate centers are drawn uniformly from the
//! viewport inset by the particle radius, and a candidate overlapping any
//! already-placed particle is discarded and redrawn. The search is bounded
//! per particle so termination is provable: a population too dense for its
//! domain surfaces as an error instead of an endless loop.

use rand::Rng;

use crate::config::SimConfig;
use crate::error::{Error, Result};
use crate::geometry::{distance, Vec2, Viewport};
use crate::particle::Particle;

/// Uniformly distributed integer in `[min, max]` inclusive
///
/// Position jitter helper for hosts that configure integer-grid placement.
pub fn random_in_range<R: Rng>(rng: &mut R, min: i32, max: i32) -> i32 {
    rng.gen_range(min..=max)
}

/// Populate the domain with non-overlapping particles
///
/// Produces exactly `config.population` particles. Each receives a center
/// sampled uniformly within the viewport inset by the radius on all sides
/// (so no particle starts across a boundary), a velocity with components
/// uniform in `±config.max_start_speed`, and a palette color chosen
/// uniformly at random. Overlap against already-placed particles uses the
/// same radius-sum threshold as the collision detector.
///
/// # Errors
///
/// - [`Error::InvalidParam`] if the configuration fails
///   [`SimConfig::validate`] or the viewport cannot contain even a single
///   inset disc
/// - [`Error::PlacementExhausted`] if a non-overlapping position cannot be
///   found within `config.max_placement_attempts` tries
pub fn spawn_population<R: Rng>(
    config: &SimConfig,
    viewport: Viewport,
    rng: &mut R,
) -> Result<Vec<Particle>> {
    config.validate()?;
    let r = config.radius;
    if viewport.width() < 2.0 * r || viewport.height() < 2.0 * r {
        return Err(Error::InvalidParam(format!(
            "viewport {}x{} cannot contain a particle of radius {}",
            viewport.width(),
            viewport.height(),
            r
        )));
    }

    let mut particles = Vec::with_capacity(config.population);
    for index in 0..config.population {
        let position = place_candidate(config, viewport, &particles, rng)
            .ok_or(Error::PlacementExhausted {
                index,
                attempts: config.max_placement_attempts,
            })?;

        let velocity = Vec2::new(
            rng.gen_range(-config.max_start_speed..=config.max_start_speed),
            rng.gen_range(-config.max_start_speed..=config.max_start_speed),
        );
        let color = config.palette[rng.gen_range(0..config.palette.len())];

        particles.push(Particle::new(position, velocity, r, config.mass, color)?);
    }
    Ok(particles)
}

/// Draw candidate centers until one clears every placed particle
fn place_candidate<R: Rng>(
    config: &SimConfig,
    viewport: Viewport,
    placed: &[Particle],
    rng: &mut R,
) -> Option<Vec2> {
    let r = config.radius;
    for _ in 0..config.max_placement_attempts {
        let candidate = Vec2::new(
            rng.gen_range(r..=viewport.width() - r),
            rng.gen_range(r..=viewport.height() - r),
        );
        let clear = placed
            .iter()
            .all(|p| distance(candidate, p.position()) >= r + p.radius());
        if clear {
            return Some(candidate);
        }
    }
    None
}
