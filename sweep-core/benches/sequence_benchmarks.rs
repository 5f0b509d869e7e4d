//! Throughput benchmarks for the linear-time scans and the merge sort
//!
//! Run with: cargo bench --bench sequence_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use sweep_core::{
    eval, fixed_window_max_sum, longest_substring_at_most_k_distinct, longest_substring_no_repeat,
    max_container_area, merge_sort, shortest_subarray_at_least, two_sum_unsorted,
};

/// Deterministic pseudo-random values in `0..modulus`
fn generate_values(len: usize, modulus: u32) -> Vec<i32> {
    let mut state: u32 = 0x9e37_79b9;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state % modulus) as i32
        })
        .collect()
}

fn generate_text(len: usize) -> String {
    generate_values(len, 26)
        .into_iter()
        .map(|v| char::from(b'a' + v as u8))
        .collect()
}

/// Window width must not change the cost of a full scan
fn bench_fixed_window_widths(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_window_widths");
    let seq = generate_values(1_000_000, 1000);

    for width in [1, 100, 10_000, 500_000] {
        group.throughput(Throughput::Elements(seq.len() as u64));
        group.bench_with_input(BenchmarkId::new("max_sum", width), &width, |b, &width| {
            b.iter(|| fixed_window_max_sum(black_box(&seq), width).unwrap());
        });
    }

    group.finish();
}

fn bench_variable_windows(c: &mut Criterion) {
    let mut group = c.benchmark_group("variable_windows");

    for size in [1_000, 100_000, 1_000_000] {
        let seq = generate_values(size, 100);
        let text = generate_text(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("shortest_at_least", size), &seq, |b, seq| {
            b.iter(|| shortest_subarray_at_least(black_box(seq), 5_000).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("k_distinct", size), &text, |b, text| {
            b.iter(|| longest_substring_at_most_k_distinct(black_box(text), 5));
        });
        group.bench_with_input(BenchmarkId::new("no_repeat", size), &text, |b, text| {
            b.iter(|| longest_substring_no_repeat(black_box(text)));
        });
    }

    group.finish();
}

fn bench_two_pointer(c: &mut Criterion) {
    let mut group = c.benchmark_group("two_pointer");
    let seq = generate_values(1_000_000, 1_000_000);
    let heights: Vec<u32> = seq.iter().map(|&v| v as u32).collect();

    group.throughput(Throughput::Elements(seq.len() as u64));
    group.bench_function("two_sum_unsorted_miss", |b| {
        b.iter(|| two_sum_unsorted(black_box(&seq), -1));
    });
    group.bench_function("max_container_area", |b| {
        b.iter(|| max_container_area(black_box(&heights)));
    });

    group.finish();
}

fn bench_merge_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_sort");

    for size in [1_000, 100_000] {
        let seq = generate_values(size, u32::MAX);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("i32", size), &seq, |b, seq| {
            b.iter(|| merge_sort(black_box(seq)));
        });
    }

    group.finish();
}

fn bench_expression(c: &mut Criterion) {
    let expr = vec!["(12*3+4)/2"; 1_000].join("-");
    c.bench_function("eval_long_expression", |b| {
        b.iter(|| eval(black_box(&expr)));
    });
}

criterion_group!(
    benches,
    bench_fixed_window_widths,
    bench_variable_windows,
    bench_two_pointer,
    bench_merge_sort,
    bench_expression
);
criterion_main!(benches);
