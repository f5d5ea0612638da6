//! Command path construction benchmarks.
//!
//! Measures wire-path encoding at different argument counts and argument
//! sizes.
//!
//! Run with: cargo bench --bench command_path
//! Results saved to: target/criterion/

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use selenium_rc::{CommandRequest, SessionId};

// ============================================================================
// Benchmark Parameters
// ============================================================================

const ARG_COUNTS: &[usize] = &[0, 1, 4, 8];

/// Locator-shaped argument, mostly percent-encoded on the wire.
const SAMPLE_ARG: &str = "css=div.results > a[href*='/item?id=42&tab=specs']";

// ============================================================================
// Benchmark: Path Encoding
// ============================================================================

fn bench_path_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("command_path");

    for &count in ARG_COUNTS {
        let request = CommandRequest::with_args("click", vec![SAMPLE_ARG; count]);

        group.bench_with_input(BenchmarkId::new("args", count), &request, |b, request| {
            b.iter(|| request.path(None));
        });
    }

    group.finish();
}

fn bench_path_with_session(c: &mut Criterion) {
    let session_id = SessionId::new("a7f3c9d2e5b14860");
    let request = CommandRequest::with_args("type", [SAMPLE_ARG, "hello world"]);

    c.bench_function("command_path/with_session", |b| {
        b.iter(|| request.path(Some(&session_id)));
    });
}

// ============================================================================
// Harness
// ============================================================================

criterion_group!(benches, bench_path_encoding, bench_path_with_session);
criterion_main!(benches);
