//! Benchmark suite for shotrecall-algo
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shotrecall_algo::truth::{order_for_side, TruthGenerator};
use shotrecall_algo::types::{ScoreInput, Side};
use shotrecall_algo::{batch_score, enforce_strict, project, score, DriftEngine};

fn anchors(n: usize) -> Vec<i32> {
    (0..n).map(|i| ((i * 5) % 100) as i32 + 5).collect()
}

fn bench_project(c: &mut Criterion) {
    let a = anchors(64);
    let order = order_for_side(&a, Side::Left);
    let values: Vec<i32> = a.iter().map(|v| (v + 15).min(100)).collect();
    let lo: Vec<i32> = a.iter().map(|v| (v - 20).max(0)).collect();
    let hi: Vec<i32> = a.iter().map(|v| (v + 20).min(100)).collect();
    let sentinel: Vec<bool> = a.iter().map(|&v| v == 0).collect();
    c.bench_function("project_64", |b| {
        b.iter(|| project(black_box(&values), &lo, &hi, &order, &sentinel))
    });
}

fn bench_enforce_strict(c: &mut Criterion) {
    let a = anchors(64);
    let order = order_for_side(&a, Side::Left);
    let values = vec![50; 64];
    c.bench_function("enforce_strict_64", |b| {
        b.iter(|| enforce_strict(black_box(&values), &a, &order))
    });
}

fn bench_generate(c: &mut Criterion) {
    let a = anchors(64);
    let order = order_for_side(&a, Side::Left);
    let mut gen = TruthGenerator::with_seed(42);
    c.bench_function("generate_64", |b| {
        b.iter(|| gen.generate(black_box(&a), &order, Side::Left, 2))
    });
}

fn bench_drift(c: &mut Criterion) {
    let a = anchors(64);
    let order = order_for_side(&a, Side::Left);
    let base = TruthGenerator::with_seed(42).generate(&a, &order, Side::Left, 2);
    let mut engine = DriftEngine::with_seed(7);
    c.bench_function("drift_64", |b| {
        b.iter(|| engine.drift(black_box(&base), &a, &order, Side::Left, 1))
    });
}

fn bench_score(c: &mut Criterion) {
    c.bench_function("score_single", |b| {
        b.iter(|| score(black_box(55), black_box(50), None))
    });
}

fn bench_batch_score(c: &mut Criterion) {
    let inputs: Vec<ScoreInput> = (0..1000)
        .map(|i| ScoreInput {
            input: ((i * 5) % 105) as i32,
            truth: 50,
            previous: None,
        })
        .collect();
    c.bench_function("batch_score_1000", |b| {
        b.iter(|| batch_score(black_box(&inputs)))
    });
}

criterion_group!(
    benches,
    bench_project,
    bench_enforce_strict,
    bench_generate,
    bench_drift,
    bench_score,
    bench_batch_score
);
criterion_main!(benches);
