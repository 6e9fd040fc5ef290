//! Benchmarks for chain growth and validation.
//!
//! Run with: `cargo bench --bench chain_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use votechain::Chain;

fn build_chain(n: usize) -> Chain {
    let mut chain = Chain::new();
    for i in 0..n {
        chain
            .append(format!("{:03}.000.000-00", i % 1000), (i % 16) as i64)
            .expect("append");
    }
    chain
}

fn bench_append(c: &mut Criterion) {
    c.bench_function("chain_append_single", |b| {
        let mut chain = Chain::new();
        b.iter(|| {
            chain
                .append(black_box("000.000.000-00"), black_box(22))
                .expect("append")
                .position
        });
    });
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_validate");
    for &n in &[10usize, 100, 1_000] {
        let chain = build_chain(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &chain, |b, chain| {
            b.iter(|| black_box(chain.validate()));
        });
    }
    group.finish();
}

fn bench_to_json(c: &mut Criterion) {
    let chain = build_chain(100);
    c.bench_function("chain_to_json_100", |b| {
        b.iter(|| chain.to_json().expect("to_json"));
    });
}

criterion_group!(benches, bench_append, bench_validate, bench_to_json);
criterion_main!(benches);
