//! Performance measurement for route carving over randomized grids

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use cavegen::algorithm::carver::carve_route;
use cavegen::spatial::grid::TileGrid;
use criterion::{Criterion, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::StdRng};
use std::hint::black_box;

/// Measures one corner-to-corner carve across a half-filled grid
fn bench_carve_96x64(c: &mut Criterion) {
    c.bench_function("carve_96x64", |b| {
        b.iter(|| {
            let Ok(mut grid) = TileGrid::new(96, 64) else {
                return;
            };
            let mut rng = StdRng::seed_from_u64(777);
            grid.randomize(0.5, &mut rng);
            let outcome = carve_route(&mut grid, [3, 2], [92, 60]);
            black_box(outcome.cost);
        });
    });
}

criterion_group!(benches, bench_carve_96x64);
criterion_main!(benches);
