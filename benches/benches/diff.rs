//! Benchmarks for edit script computation and rendering.
//!
//! Performance-critical paths:
//! - `compute`: the forward search and backtrace, sensitive to how much
//!   the inputs have in common
//! - `render`: turning a finished script into its inline form

#![allow(missing_docs)]

use chardiff_engine::{Edit, diff, render};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

/// Builds a script that cycles through all three edit kinds.
fn synthetic_script(len: usize) -> Vec<Edit> {
    (0..len)
        .map(|i| {
            let value = char::from(b'a' + u8::try_from(i % 26).unwrap());
            match i % 3 {
                0 => Edit::keep(value),
                1 => Edit::insert(value),
                _ => Edit::delete(value),
            }
        })
        .collect()
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff/render");

    let sizes = [10usize, 100, 1000, 10000];

    for size in sizes {
        let script = synthetic_script(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{size}_edits")),
            &script,
            |b, script| b.iter(|| render(black_box(script))),
        );
    }

    group.finish();
}

fn bench_compute_identical(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff/compute_identical");

    let sizes = [1000usize, 10000];

    for size in sizes {
        let text: String = (0..size)
            .map(|i| char::from(b'a' + u8::try_from(i % 26).unwrap()))
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{size}_chars")),
            &text,
            |b, text| b.iter(|| diff(black_box(text), black_box(text))),
        );
    }

    group.finish();
}

fn bench_compute_single_substitution(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff/compute_substitution");

    let sizes = [1000usize, 10000];

    for size in sizes {
        let padding = "a".repeat(size / 2);
        let old = format!("{padding}x{padding}");
        let new = format!("{padding}y{padding}");

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{size}_chars")),
            &(old, new),
            |b, (old, new)| b.iter(|| diff(black_box(old), black_box(new))),
        );
    }

    group.finish();
}

fn bench_compute_disjoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff/compute_disjoint");

    // Worst case: no common content, so the search visits every distance
    let sizes = [100usize, 1000];

    for size in sizes {
        let old = "a".repeat(size);
        let new = "b".repeat(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{size}_chars")),
            &(old, new),
            |b, (old, new)| b.iter(|| diff(black_box(old), black_box(new))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compute_identical,
    bench_compute_single_substitution,
    bench_compute_disjoint,
    bench_render
);
criterion_main!(benches);
