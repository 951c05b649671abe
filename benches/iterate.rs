//! Benchmarks for the simulation loop. Every iteration builds a fresh simulation.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use langtons_ant::{BoundaryPolicy, Simulation, SimulationConfig};

fn bench_fixed_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_grid");
    group.throughput(Throughput::Elements(10_000));

    group.bench_function("size_2000_n_10000", |b| {
        let config = SimulationConfig::new(2000, 10_000, BoundaryPolicy::Extend);
        b.iter(|| black_box(Simulation::new(black_box(config)).run()));
    });

    group.finish();
}

fn bench_growing_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("growing_grid");

    for n in [1_000u64, 11_000] {
        group.throughput(Throughput::Elements(n));
        group.bench_function(format!("size_10_n_{n}"), |b| {
            let config = SimulationConfig::new(10, n, BoundaryPolicy::Extend);
            b.iter(|| black_box(Simulation::new(black_box(config)).run()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fixed_grid, bench_growing_grid);
criterion_main!(benches);
