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
//! Headless Bouncing Particles Example
//!
//! Drives the full frame loop without a real rendering surface. It
//! showcases:
//!
//! - Deterministic seeding for reproducible runs
//! - Kinetic energy tracking across elastic collisions and wall bounces
//! - A synthetic pointer orbiting the viewport to exercise highlighting
//! - The renderer boundary, implemented here as a draw-call tally
//!
//! # Running
//!
//! ```bash
//! cargo run --example bouncing --release
//! ```

use particle_arena::{Color, Renderer, SimConfig, Simulation, Vec2};

const WIDTH: f64 = 1280.0;
const HEIGHT: f64 = 720.0;
const FRAMES: u64 = 600;
const REPORT_EVERY: u64 = 100;

/// Stand-in rendering surface that tallies draw calls and peak opacity
struct TallyRenderer {
    draw_calls: u64,
    peak_opacity: f64,
}

impl TallyRenderer {
    fn new() -> Self {
        TallyRenderer {
            draw_calls: 0,
            peak_opacity: 0.0,
        }
    }
}

impl Renderer for TallyRenderer {
    fn draw_circle(
        &mut self,
        _center: Vec2,
        _radius: f64,
        _fill: Color,
        _stroke: Color,
        opacity: f64,
    ) {
        self.draw_calls += 1;
        // A real surface would clamp opacity to [0, 1] here
        if opacity > self.peak_opacity {
            self.peak_opacity = opacity;
        }
    }
}

fn main() {
    let config = SimConfig::new().with_population(100).with_seed(12345);
    let mut sim = match Simulation::new(config, WIDTH, HEIGHT) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("Failed to initialize simulation: {e}");
            std::process::exit(1);
        }
    };

    println!("Bouncing particles: {} in {}x{}", sim.particles().len(), WIDTH, HEIGHT);
    let ke_initial = sim.total_kinetic_energy();
    println!("Initial kinetic energy: {ke_initial:.6}");

    let mut renderer = TallyRenderer::new();
    for frame in 0..FRAMES {
        // Sweep the pointer around the viewport center
        let angle = frame as f64 * 0.02;
        sim.set_pointer(
            WIDTH / 2.0 + 300.0 * angle.cos(),
            HEIGHT / 2.0 + 200.0 * angle.sin(),
        );

        sim.tick(&mut renderer);

        if (frame + 1) % REPORT_EVERY == 0 {
            let ke = sim.total_kinetic_energy();
            let momentum = sim.total_momentum();
            println!(
                "frame {:4}: KE = {:.6} (drift {:+.2e}), momentum = ({:+.3}, {:+.3})",
                frame + 1,
                ke,
                (ke - ke_initial) / ke_initial,
                momentum.x(),
                momentum.y()
            );
        }
    }

    println!(
        "Done: {} frames, {} draw calls, peak emphasis {:.1}",
        sim.frame(),
        renderer.draw_calls,
        renderer.peak_opacity
    );
}
