//! Benchmarks for chatlens parsing and aggregation.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- parse`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatlens::parser::ChatParser;
use chatlens::report::ChatReport;

// =============================================================================
// Test Data Generator
// =============================================================================

fn generate_export(count: usize) -> String {
    let mut out = String::from("Messages and calls are end-to-end encrypted.\n");
    for i in 0..count {
        let sender = if i % 2 == 0 { "Alice" } else { "Bob" };
        out.push_str(&format!(
            "[{:02}/{:02}/2021, {:02}:{:02}:00] {}: message number {} with a few more words\n",
            (i % 28) + 1,
            (i % 12) + 1,
            i % 24,
            i % 60,
            sender,
            i
        ));
    }
    out
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_parse(c: &mut Criterion) {
    let parser = ChatParser::new();
    let mut group = c.benchmark_group("parse");

    for count in [100, 1_000, 10_000] {
        let raw = generate_export(count);
        group.throughput(Throughput::Bytes(raw.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &raw, |b, raw| {
            b.iter(|| parser.parse_str(black_box(raw)).unwrap());
        });
    }

    group.finish();
}

fn bench_report(c: &mut Criterion) {
    let parser = ChatParser::new();
    let mut group = c.benchmark_group("report");

    for count in [100, 1_000, 10_000] {
        let raw = generate_export(count);
        let messages = parser.parse_str(&raw).unwrap();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &messages,
            |b, messages| {
                b.iter(|| ChatReport::build(black_box(messages)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_report);
criterion_main!(benches);
