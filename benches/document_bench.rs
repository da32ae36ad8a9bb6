//! Performance benchmarks for CPF/CNPJ validation and punctuation.
//!
//! Validation runs on every keystroke of a document field, so it must stay
//! well below a frame budget even for pasted, oversized input.
//!
//! # Run Benchmarks
//!
//! ```sh
//! # Run all document benchmarks
//! cargo bench --bench document_bench
//!
//! # Run a specific group
//! cargo bench --bench document_bench -- validation
//!
//! # Compare against a saved baseline
//! cargo bench --bench document_bench -- --save-baseline main
//! cargo bench --bench document_bench -- --baseline main
//! ```

use ccform_document::{check_digits_weighted_sum, classify, format_document, is_valid_document};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

/// Benchmark the check-digit primitive on CPF and CNPJ bases.
fn bench_check_digits(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_digits");
    group.throughput(Throughput::Elements(1));

    let cases = [("cpf_base", "111444777", 10), ("cnpj_base", "112223330001", 5)];

    for (name, base, weight) in cases {
        group.bench_with_input(BenchmarkId::new("weighted_sum", name), &base, |b, &base| {
            b.iter(|| black_box(check_digits_weighted_sum(black_box(base), weight, 0)));
        });
    }

    group.finish();
}

/// Benchmark full validation across valid, invalid and unclassified input.
fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");
    group.throughput(Throughput::Elements(1));

    let scenarios = [
        ("cpf_bare", "11144477735"),
        ("cpf_punctuated", "111.444.777-35"),
        ("cpf_invalid", "111.444.777-36"),
        ("cnpj_punctuated", "11.222.333/0001-81"),
        ("unclassified", "1234"),
        ("empty", ""),
    ];

    for (name, input) in scenarios {
        group.bench_function(name, |b| {
            b.iter(|| black_box(is_valid_document(black_box(input))));
        });
    }

    group.finish();
}

/// Benchmark classification and punctuation, the per-keystroke path.
fn bench_display(c: &mut Criterion) {
    let mut group = c.benchmark_group("display");
    group.throughput(Throughput::Elements(1));

    group.bench_function("classify_cnpj", |b| {
        b.iter(|| black_box(classify(black_box("11.222.333/0001-81"))));
    });

    group.bench_function("format_cpf", |b| {
        b.iter(|| black_box(format_document(black_box(Some("11144477735")))));
    });

    let pasted = "1".repeat(1024);
    group.bench_function("format_oversized", |b| {
        b.iter(|| black_box(format_document(black_box(Some(pasted.as_str())))));
    });

    group.finish();
}

criterion_group!(benches, bench_check_digits, bench_validation, bench_display);
criterion_main!(benches);
