//! Performance measurement for complete level generation

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use cavegen::algorithm::generator::{GeneratorConfig, LevelGenerator};
use cavegen::algorithm::reshape::MajorityRule;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

/// Measures a full pipeline run: randomize, two reshape passes, partition,
/// route selection, and carving
fn bench_generate_64x48(c: &mut Criterion) {
    let config = GeneratorConfig {
        width: 64,
        height: 48,
        fill_probability: 0.45,
        neighborhood_radius: 1,
        reshape_steps: 2,
    };

    c.bench_function("generate_64x48", |b| {
        b.iter(|| {
            let Ok(mut generator) = LevelGenerator::new(config, 12345) else {
                return;
            };
            let decision = MajorityRule::default();
            let outcome = generator.generate(Some(&decision));
            black_box(outcome.carve.path.len());
        });
    });
}

criterion_group!(benches, bench_generate_64x48);
criterion_main!(benches);
