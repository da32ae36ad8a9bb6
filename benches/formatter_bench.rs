//! Performance benchmarks for per-keystroke field formatting.
//!
//! # Run Benchmarks
//!
//! ```sh
//! cargo bench --bench formatter_bench
//! cargo bench --bench formatter_bench -- brand_lookup
//! ```

use ccform_core::{DisplayFields, FormInputValues};
use ccform_formatter::{
    BrandLookup, BuiltinBrandLookup, FieldFormatter, FormatterConfig, GroupingMode,
    format_expiry, format_number,
};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

/// Benchmark brand resolution on partial and complete numbers.
fn bench_brand_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("brand_lookup");
    group.throughput(Throughput::Elements(1));

    let numbers = [
        ("partial", "4"),
        ("visa", "4111111111111111"),
        ("elo", "6362970000457013"),
        ("unknown", "9999999999999999"),
    ];

    for (name, number) in numbers {
        group.bench_with_input(BenchmarkId::new("builtin", name), &number, |b, &number| {
            b.iter(|| black_box(BuiltinBrandLookup.lookup(black_box(number))));
        });
    }

    group.finish();
}

/// Benchmark the individual field rules.
fn bench_fields(c: &mut Criterion) {
    let mut group = c.benchmark_group("fields");
    group.throughput(Throughput::Elements(1));

    group.bench_function("number", |b| {
        b.iter(|| black_box(format_number(black_box("4111 1111 1111 1111 "), 19)));
    });

    group.bench_function("expiry", |b| {
        b.iter(|| black_box(format_expiry(black_box("12/30"), 4)));
    });

    group.finish();
}

/// Benchmark a full form reformat in both grouping modes.
fn bench_format_values(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_values");
    group.throughput(Throughput::Elements(1));

    let values = FormInputValues {
        number: Some("5555 5555 5555 4444".to_string()),
        expiry: Some("1230".to_string()),
        cvc: Some("123".to_string()),
        name: Some("Ana Souza".to_string()),
        postal_code: Some("01310-100".to_string()),
        doc: Some("11222333000181".to_string()),
    };

    for grouping in [GroupingMode::FixedWidth, GroupingMode::BrandGaps] {
        let config = FormatterConfig::new(DisplayFields::all()).grouping(grouping);
        let Ok(formatter) = FieldFormatter::with_config(config, BuiltinBrandLookup) else {
            continue;
        };
        group.bench_function(BenchmarkId::new("all_fields", grouping), |b| {
            b.iter(|| black_box(formatter.format_values(black_box(&values))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_brand_lookup, bench_fields, bench_format_values);
criterion_main!(benches);
