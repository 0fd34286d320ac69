//! Benchmarks comparing the two membership deciders.
//!
//! Covers the scenarios that matter for harness budgets:
//! - Members vs non-members (the deciders exit along different paths)
//! - Word length scaling (the backtracking decider degrades much faster)
//! - The regex oracle on short words (the cost that motivates the oracle
//!   ceiling in the differential harness)
//! - Sample generation itself

use copylang::membership::{fast_decompose, naive_decompose};
use copylang::oracle::RegexOracle;
use copylang::sample::SampleGenerator;
use copylang::word::Word;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// ============================================================================
// Test Data Generation
// ============================================================================

const BATCH: usize = 8;

fn member_batch(length: usize) -> Vec<Word> {
    let mut generator = SampleGenerator::new(1);
    (0..BATCH)
        .map(|_| generator.positive(length).unwrap())
        .collect()
}

fn non_member_batch(length: usize) -> Vec<Word> {
    let mut generator = SampleGenerator::new(1);
    (0..BATCH)
        .map(|_| generator.negative(length).unwrap())
        .collect()
}

// ============================================================================
// Decider Scaling Benchmarks
// ============================================================================

fn bench_deciders_on_members(c: &mut Criterion) {
    let mut group = c.benchmark_group("deciders/members");

    for length in [50, 100, 200, 400] {
        let words = member_batch(length);
        group.throughput(Throughput::Elements(words.len() as u64));

        group.bench_with_input(BenchmarkId::new("naive", length), &words, |b, words| {
            b.iter(|| {
                for word in words {
                    black_box(naive_decompose(black_box(word)));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("fast", length), &words, |b, words| {
            b.iter(|| {
                for word in words {
                    black_box(fast_decompose(black_box(word)));
                }
            });
        });
    }

    group.finish();
}

fn bench_deciders_on_non_members(c: &mut Criterion) {
    let mut group = c.benchmark_group("deciders/non_members");

    for length in [50, 100, 200, 400] {
        let words = non_member_batch(length);
        group.throughput(Throughput::Elements(words.len() as u64));

        group.bench_with_input(BenchmarkId::new("naive", length), &words, |b, words| {
            b.iter(|| {
                for word in words {
                    black_box(naive_decompose(black_box(word)));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("fast", length), &words, |b, words| {
            b.iter(|| {
                for word in words {
                    black_box(fast_decompose(black_box(word)));
                }
            });
        });
    }

    group.finish();
}

// ============================================================================
// Oracle Benchmarks
// ============================================================================

fn bench_oracle_short_words(c: &mut Criterion) {
    let mut group = c.benchmark_group("oracle/short_words");

    let oracle = RegexOracle::new().unwrap();
    let mut generator = SampleGenerator::new(1);

    for length in [10, 20, 30, 40] {
        let member = generator.positive(length).unwrap().to_string();
        let non_member = generator.negative(length).unwrap().to_string();

        group.bench_with_input(BenchmarkId::new("member", length), &member, |b, text| {
            b.iter(|| oracle.matches(black_box(text)).unwrap());
        });

        group.bench_with_input(
            BenchmarkId::new("non_member", length),
            &non_member,
            |b, text| {
                b.iter(|| oracle.matches(black_box(text)).unwrap());
            },
        );
    }

    group.finish();
}

// ============================================================================
// Sample Generation Benchmarks
// ============================================================================

fn bench_sample_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");

    for length in [50, 200, 500] {
        group.bench_with_input(
            BenchmarkId::new("positive", length),
            &length,
            |b, &length| {
                let mut generator = SampleGenerator::new(1);
                b.iter(|| generator.positive(black_box(length)).unwrap());
            },
        );

        group.bench_with_input(
            BenchmarkId::new("negative", length),
            &length,
            |b, &length| {
                let mut generator = SampleGenerator::new(1);
                b.iter(|| generator.negative(black_box(length)).unwrap());
            },
        );
    }

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_deciders_on_members,
    bench_deciders_on_non_members,
    bench_oracle_short_words,
    bench_sample_generation,
);

criterion_main!(benches);
