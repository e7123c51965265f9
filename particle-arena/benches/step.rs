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
//! Benchmarks for the frame step at several population sizes
//!
//! Detection is an exhaustive pairwise scan, so throughput is expected to
//! fall off quadratically with population size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use particle_arena::{SimConfig, Simulation};

fn setup_simulation(population: usize) -> Simulation {
    let config = SimConfig::new().with_population(population).with_seed(12345);
    Simulation::new(config, 1920.0, 1080.0).expect("benchmark population must fit the viewport")
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation_step");

    for population in [50, 100, 250] {
        group.throughput(Throughput::Elements(population as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(population),
            &population,
            |b, &population| {
                let mut sim = setup_simulation(population);
                b.iter(|| {
                    sim.step();
                    black_box(sim.frame());
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
