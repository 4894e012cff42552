//! Criterion benchmarks for SU2 configuration parsing and writing.

use std::fmt::Write as _;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use su2run_core::su2_config::Su2Config;

/// A config with `entries` keys, one list value in every four.
fn sample_config(entries: usize) -> String {
    let mut text = String::from("% generated\n");
    for i in 0..entries {
        if i % 4 == 0 {
            let _ = writeln!(text, "MARKER_{i}= ( Wing, Fuselage, Tail_{i} )");
        } else {
            let _ = writeln!(text, "KEY_{i}= {}", i as f64 * 0.5);
        }
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("Su2Config::parse");
    for &entries in &[50usize, 500, 5_000] {
        let text = sample_config(entries);
        group.bench_with_input(BenchmarkId::from_parameter(entries), &text, |b, text| {
            b.iter(|| Su2Config::parse(text).unwrap());
        });
    }
    group.finish();
}

fn bench_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("Su2Config::to_string");
    for &entries in &[50usize, 500, 5_000] {
        let cfg = Su2Config::parse(&sample_config(entries)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(entries), &cfg, |b, cfg| {
            b.iter(|| cfg.to_string());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_write);
criterion_main!(benches);
