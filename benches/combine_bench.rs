//! Criterion benchmarks for gene-set combination.
//!
//! Uses synthetic dense and sparse gene sets to measure pure combinator
//! overhead independent of any fitness function.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use traitor::combine::{CombinerConfig, GeneCombiner};
use traitor::genes::{GeneSet, NovelResult, Probability, Trait};
use traitor::random::RngSource;

// ===========================================================================
// Fixtures
// ===========================================================================

/// `parents` gene sets of `traits` traits each; every `stride`-th key
/// is shared across all of them.
fn population(parents: usize, traits: usize, stride: usize) -> Vec<GeneSet<u32, f64>> {
    (0..parents)
        .map(|p| {
            (0..traits)
                .map(|i| {
                    let key = if i % stride == 0 { i } else { p * traits + i };
                    Trait::new(key as u32, (p * i) as f64)
                })
                .collect()
        })
        .collect()
}

fn next_free_key(used: &[&u32]) -> NovelResult<u32, f64> {
    let key = used.iter().map(|&&k| k).max().map_or(0, |k| k + 1);
    NovelResult::add(key, 0.0)
}

fn combiner() -> GeneCombiner<u32, f64> {
    let config = CombinerConfig::default()
        .with_mutation_chance(Probability::one_in(10))
        .with_novel_trait_chance(Probability::one_in(20))
        .with_seed(42);
    GeneCombiner::from_config(&config, next_free_key, |v: f64| v + 1.0)
        .expect("valid benchmark config")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_combine(c: &mut Criterion) {
    let mut group = c.benchmark_group("combine");
    let combiner = combiner();

    for (parents, traits, stride) in [(2usize, 16usize, 1usize), (2, 256, 1), (4, 256, 4), (8, 64, 2)] {
        let sets = population(parents, traits, stride);
        group.bench_with_input(
            BenchmarkId::new(format!("p{}_s{}", parents, stride), traits),
            &sets,
            |b, sets| {
                let rest: Vec<&GeneSet<u32, f64>> = sets[1..].iter().collect();
                b.iter(|| {
                    let child = combiner.combine(black_box(&sets[0]), black_box(&rest));
                    black_box(child)
                })
            },
        );
    }
    group.finish();
}

fn bench_random_sets(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_sets");
    let combiner = GeneCombiner::new(
        RngSource::seeded(7),
        next_free_key,
        |v: f64| v,
        Probability::ZERO,
        Probability::ZERO,
    )
    .expect("valid benchmark config");

    for &max in &[8usize, 64] {
        group.bench_with_input(BenchmarkId::from_parameter(max), &max, |b, &max| {
            b.iter(|| {
                let sets: Vec<_> = combiner
                    .create_random_sets(1, max)
                    .expect("bounds are ordered")
                    .take(100)
                    .collect();
                black_box(sets)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_combine, bench_random_sets);
criterion_main!(benches);
