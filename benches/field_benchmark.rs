/*
 * Particle Field Benchmark
 *
 * This file contains benchmarks for the particle field hot paths. The
 * connection scan is an O(n²) pairwise pass, fine at the default population
 * of 40-50; these measurements show where it stops being fine if the
 * population knob grows.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use plexus::params::SimulationParams;
use plexus::{field, renderer, spawner};

// Benchmark the pairwise connection scan
fn bench_connections(c: &mut Criterion) {
    let mut group = c.benchmark_group("connections");
    let params = SimulationParams::default();
    let window = vec2(1280.0, 720.0);

    // Benchmark different population sizes
    for population in [50, 200, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(population),
            population,
            |b, &n| {
                let mut rng = StdRng::seed_from_u64(42);
                let particles = spawner::area(&mut rng, window, n, &params);

                b.iter(|| renderer::connections(black_box(&particles), params.connection_distance));
            },
        );
    }

    group.finish();
}

// Benchmark one full simulation tick (advance + replenish)
fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");
    let params = SimulationParams::default();
    let window = vec2(1280.0, 720.0);

    for population in [50, 200, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(population),
            population,
            |b, &n| {
                let mut rng = StdRng::seed_from_u64(42);
                let particles = spawner::area(&mut rng, window, n, &params);

                b.iter(|| {
                    let mut advanced =
                        field::advance(window, 16.0, black_box(particles.clone()), &params);
                    field::replenish(&mut rng, window, &mut advanced, &params);
                    advanced
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_connections, bench_tick);
criterion_main!(benches);
