use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use termsweep_core::*;

fn gen_tiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let tiers = [
        ("beginner", GameConfig::BEGINNER),
        ("expert", GameConfig::EXPERT),
        ("classic", GameConfig::CLASSIC),
        // dense boards make rejection sampling retry a lot
        ("dense", GameConfig::new_unchecked((64, 64), 64 * 64 - 64)),
    ];

    for (name, config) in tiers {
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, &config| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                RandomMinefieldGenerator::new(seed).generate(black_box(config))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, gen_tiers);
criterion_main!(benches);
