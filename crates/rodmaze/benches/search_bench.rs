//! Criterion benchmarks for the rod search.
//! Focus sizes: n×n grids with n in {10, 20, 40}, 20% blocked.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p rodmaze

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rodmaze::fixtures::FIXTURES;
use rodmaze::prelude::*;

fn bench_fixtures(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixtures");
    for fx in FIXTURES.iter() {
        let g = fx.grid().unwrap();
        group.bench_function(fx.name, |b| {
            b.iter(|| solve(&g, DEFAULT_START).unwrap().move_count())
        });
    }
    group.finish();
}

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("random");
    for &n in &[10usize, 20, 40] {
        let cfg = RandomGridCfg {
            rows: n,
            cols: n,
            blocked_ratio: 0.2,
            clear_corners: true,
        };
        let grids: Vec<Grid> = (0..16)
            .map(|i| draw_grid(cfg, ReplayToken::new(43, i)))
            .collect();
        group.bench_with_input(BenchmarkId::new("astar", n), &grids, |b, grids| {
            b.iter(|| {
                grids
                    .iter()
                    .map(|g| solve(g, DEFAULT_START).unwrap().expanded())
                    .sum::<usize>()
            })
        });
        group.bench_with_input(BenchmarkId::new("bfs", n), &grids, |b, grids| {
            b.iter(|| {
                grids
                    .iter()
                    .flat_map(|g| goals(g).map(|goal| (g, goal)))
                    .filter_map(|(g, goal)| bfs_path(g, DEFAULT_START, goal).unwrap())
                    .count()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fixtures, bench_random);
criterion_main!(benches);
