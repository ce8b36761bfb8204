//! Benchmarks for cc_display performance testing.
//!
//! Run with: cargo bench

use cc_display::{
    cvc::format_cvc, detect::detect_type, expiry::format_expiry, format::format_number,
    CardDisplayState, CardFields, CardType,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

// Test card numbers
const VISA: &str = "4111111111111111";
const MASTERCARD_2SERIES: &str = "2221000000000009";
const AMEX: &str = "378282246310005";

/// Benchmark network detection
fn bench_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("detection");

    group.bench_function("visa", |b| b.iter(|| detect_type(black_box(VISA))));
    group.bench_function("mastercard_2series", |b| {
        b.iter(|| detect_type(black_box(MASTERCARD_2SERIES)))
    });
    group.bench_function("unmatched", |b| {
        b.iter(|| detect_type(black_box("9999999999999999")))
    });
    group.bench_function("empty", |b| b.iter(|| detect_type(black_box(""))));

    group.finish();
}

/// Benchmark number formatting
fn bench_number_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("number_formatting");

    group.bench_function("visa_full", |b| {
        b.iter(|| format_number(black_box(Some(VISA)), CardType::Visa))
    });
    group.bench_function("amex_full", |b| {
        b.iter(|| format_number(black_box(Some(AMEX)), CardType::Amex))
    });
    group.bench_function("partial", |b| {
        b.iter(|| format_number(black_box(Some("4111")), CardType::Visa))
    });
    group.bench_function("absent", |b| {
        b.iter(|| format_number(black_box(None), CardType::Unknown))
    });

    group.finish();
}

/// Benchmark the small field formatters
fn bench_field_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_formatting");

    group.bench_function("expiry_digits", |b| {
        b.iter(|| format_expiry(black_box("1225")))
    });
    group.bench_function("expiry_invalid", |b| {
        b.iter(|| format_expiry(black_box("13/ab")))
    });
    group.bench_function("cvc", |b| b.iter(|| format_cvc(black_box(Some("123")))));

    group.finish();
}

/// Benchmark a full render pass, the per-keystroke unit of work
fn bench_render(c: &mut Criterion) {
    let mut state = CardDisplayState::new();
    let fields = CardFields {
        number: Some(VISA.to_string()),
        name: "Jane Doe".to_string(),
        expiry: "1225".to_string(),
        cvc: Some("123".to_string()),
    };
    state.set_number(fields.number.as_deref());

    c.bench_function("render_full_card", |b| {
        b.iter(|| black_box(&state).render(black_box(&fields)))
    });
}

criterion_group!(
    benches,
    bench_detection,
    bench_number_formatting,
    bench_field_formatting,
    bench_render
);
criterion_main!(benches);
