//! Performance measurement for backtracking solves at varying board sizes

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use wavetile::algorithm::executor::solve_grid;
use wavetile::algorithm::selection::RandomSelector;
use wavetile::io::progress::SolveProgress;
use wavetile::render::motifs;
use wavetile::spatial::grid::{Grid, Topology};

/// Measures full solve cost as the board grows
fn bench_solve_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_grid");

    let mut tile_set = motifs::pipes(2, 1.0);
    tile_set.build_adjacency_rules();

    for size in &[4usize, 8, 12] {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let Ok(grid) = Grid::new(&tile_set, size, size, Topology::Clamped) else {
                    return;
                };
                let mut selector = RandomSelector::new(7);
                let mut progress: Option<SolveProgress> = None;
                black_box(solve_grid(grid, &mut selector, &mut progress));
            });
        });
    }

    group.finish();
}

/// Measures the propagation-dominated cost of a single collapse cascade
fn bench_first_collapse(c: &mut Criterion) {
    let mut tile_set = motifs::pipes(3, 1.0);
    tile_set.build_adjacency_rules();

    c.bench_function("first_collapse_16x16", |b| {
        b.iter(|| {
            let Ok(mut grid) = Grid::new(&tile_set, 16, 16, Topology::Clamped) else {
                return;
            };
            grid.collapse_cell([8, 8], 0);
            wavetile::algorithm::propagation::reduce_from(&mut grid, [8, 8]);
            black_box(grid.unresolved_cells());
        });
    });
}

criterion_group!(benches, bench_solve_grid, bench_first_collapse);
criterion_main!(benches);
