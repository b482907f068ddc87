// ============================================================================
// Rewrite Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Single line - token-free fast path vs. lines with 1..8 tokens
// 2. Stream - a block of mixed lines through the line filter
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fixlog::prelude::*;

fn line_with_tokens(count: usize) -> String {
    let mut line = String::from("INFO  [imu] sample");
    for i in 0..count {
        line.push_str(&format!(" ch{}=f16u{}", i, 32_768 + i * 4_096));
    }
    line.push('\n');
    line
}

// ============================================================================
// Single Line Benchmarks
// ============================================================================

fn benchmark_rewrite_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("rewrite_line");
    let rewriter = TokenRewriter::default();

    for tokens in [0usize, 1, 4, 8].iter() {
        let line = line_with_tokens(*tokens);
        group.bench_with_input(BenchmarkId::new("tokens", tokens), &line, |b, line| {
            b.iter(|| black_box(rewriter.rewrite(black_box(line.as_bytes()))));
        });
    }

    // Same literal repeated: converted once per line
    let repeated = "x=f16u32768 ".repeat(8);
    group.bench_function("repeated_literal", |b| {
        b.iter(|| black_box(rewriter.rewrite(black_box(repeated.as_bytes()))));
    });

    group.finish();
}

// ============================================================================
// Stream Benchmarks
// ============================================================================

fn benchmark_filter_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_stream");

    let input: String = (0..1_000).map(|i| line_with_tokens(i % 4)).collect();
    let buffered = LineFilter::new(
        FilterConfig::new().with_line_buffered(false),
        TokenRewriter::default(),
    )
    .unwrap();
    let flushing = LineFilter::new(FilterConfig::new(), TokenRewriter::default()).unwrap();

    for (name, filter) in [("buffered", &buffered), ("line_buffered", &flushing)] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut out = Vec::with_capacity(input.len());
                filter
                    .run(&mut input.as_bytes(), &mut out, &InputSource::Stdin)
                    .unwrap();
                black_box(out)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_rewrite_line, benchmark_filter_stream);
criterion_main!(benches);
