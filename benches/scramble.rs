//! Benchmarks for scramble generation and move replay.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use scrambler::{clock::ClockState, cuboid::CuboidState, scramble, Variant};

/// Benchmark generating a verified 3x3x2 scramble (25 moves, full replay).
fn bench_generate_3x3x2(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    c.bench_function("generate_3x3x2", |b| {
        b.iter(|| scramble::generate(black_box(Variant::Cuboid3x3x2), &mut rng).unwrap())
    });
}

/// Benchmark generating a Pentagonal clock scramble.
fn bench_generate_pentagonal(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    c.bench_function("generate_pentagonal", |b| {
        b.iter(|| scramble::generate(black_box(Variant::Pentagonal), &mut rng).unwrap())
    });
}

/// Benchmark replaying a fixed cuboid sequence against a solved state.
fn bench_apply_cuboid_sequence(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let sequence = scramble::generate(Variant::Cuboid3x3x2, &mut rng).unwrap();
    let solved = CuboidState::solved(Variant::Cuboid3x3x2);

    c.bench_function("apply_cuboid_sequence", |b| {
        b.iter(|| {
            let mut state = solved.clone();
            state.apply_sequence(black_box(&sequence));
            state
        })
    });
}

/// Benchmark replaying a fixed dial sequence.
fn bench_apply_dial_sequence(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let sequence = scramble::generate(Variant::SuperPentagonal, &mut rng).unwrap();
    let mut state = ClockState::solved(Variant::SuperPentagonal);

    c.bench_function("apply_dial_sequence", |b| {
        b.iter(|| state.apply_sequence(black_box(&sequence)))
    });
}

criterion_group!(
    benches,
    bench_generate_3x3x2,
    bench_generate_pentagonal,
    bench_apply_cuboid_sequence,
    bench_apply_dial_sequence
);
criterion_main!(benches);
