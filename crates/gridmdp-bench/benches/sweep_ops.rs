//! Criterion micro-benchmarks for sweeps and full solves.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gridmdp_arena::UtilityArena;
use gridmdp_bench::{maze_profile, reference_profile, stress_profile};
use gridmdp_engine::bellman::backup;
use gridmdp_engine::{SolverConfig, ValueIteration};

/// Benchmark: one Bellman backup on every cell of the reference field.
fn bench_backup_10k(c: &mut Criterion) {
    let grid = reference_profile(42);
    let utilities = grid.utilities();

    c.bench_function("backup_10k", |b| {
        b.iter(|| {
            for r in 0..grid.nrows() {
                for col in 0..grid.ncols() {
                    black_box(backup(&grid, &utilities, r, col));
                }
            }
        });
    });
}

/// Benchmark: begin/publish cycle of the ping-pong arena without any work.
fn bench_arena_cycle(c: &mut Criterion) {
    let mut arena = UtilityArena::new(vec![0.0; 100_000]).unwrap();

    c.bench_function("arena_cycle_100k", |b| {
        b.iter(|| {
            let guard = arena.begin_sweep();
            black_box(&guard.published[0]);
            arena.publish().unwrap();
        });
    });
}

/// Benchmark: single sweep on the stress field, serial vs row bands.
fn bench_sweep_workers(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep_stress");
    for workers in [1usize, 2, 4, 8] {
        let config = SolverConfig {
            workers: Some(workers),
            ..SolverConfig::default()
        };
        let mut solver = ValueIteration::new(stress_profile(42), config).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(workers), &workers, |b, _| {
            b.iter(|| black_box(solver.sweep().unwrap()));
        });
    }
    group.finish();
}

/// Benchmark: solve the reference field to convergence.
fn bench_solve_reference(c: &mut Criterion) {
    let grid = reference_profile(42);

    c.bench_function("solve_reference", |b| {
        b.iter(|| {
            let mut solver = ValueIteration::new(grid.clone(), SolverConfig::default()).unwrap();
            black_box(solver.run().unwrap())
        });
    });
}

/// Benchmark: solve a 41x40 serpentine maze.
fn bench_solve_maze(c: &mut Criterion) {
    let grid = maze_profile(41, 40);

    c.bench_function("solve_maze_41x40", |b| {
        b.iter(|| {
            let mut solver = ValueIteration::new(grid.clone(), SolverConfig::default()).unwrap();
            black_box(solver.run().unwrap())
        });
    });
}

criterion_group!(
    benches,
    bench_backup_10k,
    bench_arena_cycle,
    bench_sweep_workers,
    bench_solve_reference,
    bench_solve_maze,
);
criterion_main!(benches);
