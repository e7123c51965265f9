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
//! Pointer-proximity emphasis accumulation
//!
//! Particles near the externally supplied pointer grow their emphasis
//! accumulator every frame; everything else resets to a visible baseline so
//! a newly approached particle fades in from a minimum rather than from
//! full transparency. The accumulator is intentionally unclamped; the
//! renderer clamps opacity to its displayable range.

use crate::config::SimConfig;
use crate::geometry::{distance, Vec2};
use crate::particle::Particle;

/// Update a particle's emphasis from the current pointer snapshot
///
/// With no pointer observed yet (`None`), the particle is treated as
/// infinitely far from it and resets to `config.emphasis_baseline`. Within
/// `config.proximity_radius` of the pointer, emphasis grows by
/// `config.emphasis_increment`; outside, it resets to the baseline.
pub fn update_emphasis(particle: &mut Particle, pointer: Option<Vec2>, config: &SimConfig) {
    let near = pointer
        .map(|m| distance(m, particle.position()) < config.proximity_radius)
        .unwrap_or(false);

    if near {
        particle.set_emphasis(particle.emphasis() + config.emphasis_increment);
    } else {
        particle.set_emphasis(config.emphasis_baseline);
    }
}
