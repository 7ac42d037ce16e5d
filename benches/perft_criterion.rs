//! Perft timing over the shared reference positions.
//!
//! `CHESS_PERFT_MAX_DEPTH` caps the depth per position (default 3). Each depth
//! is checked against its known node count once before it is timed.

use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chess_rules::move_generation::perft::{perft, REFERENCE_POSITIONS};

const DEFAULT_MAX_DEPTH: u8 = 3;

fn max_depth() -> u8 {
    std::env::var("CHESS_PERFT_MAX_DEPTH")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(DEFAULT_MAX_DEPTH)
        .max(1)
}

fn bench_reference_positions(c: &mut Criterion) {
    let max_depth = max_depth();
    let mut group = c.benchmark_group("perft");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for reference in REFERENCE_POSITIONS {
        let board = reference.board().expect("reference diagram should parse");
        let side = reference.side_to_move;

        for (depth, &expected) in (1..=max_depth).zip(reference.nodes) {
            let counted = perft(&board, side, None, depth).expect("perft should run");
            assert_eq!(
                counted.nodes, expected,
                "{} depth {depth} disagrees with the reference count",
                reference.name
            );

            group.throughput(Throughput::Elements(expected as u64));
            group.bench_with_input(
                BenchmarkId::new(reference.name, depth),
                &depth,
                |b, &depth| {
                    b.iter(|| {
                        perft(black_box(&board), side, None, black_box(depth))
                            .map(|counts| counts.nodes)
                            .expect("perft should run")
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(perft_benches, bench_reference_positions);
criterion_main!(perft_benches);
