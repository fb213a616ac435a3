use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use sci_damath::game_state::board::Board;
use sci_damath::game_state::damath_rules::RulesConfig;
use sci_damath::game_state::damath_types::Side;
use sci_damath::move_generation::move_generator::{CaptureFirstGenerator, MayorDamaGenerator};
use sci_damath::move_generation::perft::perft;
use sci_damath::utils::board_notation::parse_board;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    board: &'static str,
    side: Side,
    depths: &'static [u8],
    /// Known node counts for the leading depths, checked before timing.
    expected_nodes: &'static [usize],
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "standard",
        board: "",
        side: Side::Red,
        depths: &[2, 4, 6],
        expected_nodes: &[7, 49],
    },
    BenchCase {
        name: "kings_midgame",
        board: "b2 . . . b8 . . . / \
                . . . b10 . . . b0 / \
                . . . . . . b6 . / \
                . B-3 . . . . . . / \
                . . . . R5 . . . / \
                . r-9 . . . . . . / \
                r0 . . . r10 . . . / \
                . . . r8 . . . r2",
        side: Side::Red,
        depths: &[2, 4],
        expected_nodes: &[],
    },
];

fn case_board(case: &BenchCase) -> Board {
    if case.board.is_empty() {
        Board::standard()
    } else {
        parse_board(case.board).expect("benchmark board should parse")
    }
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    let mayor_dama = MayorDamaGenerator {
        rules: RulesConfig::default(),
    };

    for case in CASES {
        let board = case_board(case);

        // Correctness guard before benchmarking.
        for (depth_idx, expected) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;
            let counts = perft(&mayor_dama, &board, case.side, depth).expect("perft should run");
            assert_eq!(counts.nodes, *expected, "node mismatch for {} depth {}", case.name, depth);
        }

        for &depth in case.depths {
            group.bench_with_input(
                BenchmarkId::new(format!("{}_mayor_dama", case.name), depth),
                &depth,
                |b, &depth| {
                    b.iter(|| {
                        let counts = perft(&mayor_dama, black_box(&board), case.side, black_box(depth))
                            .expect("perft benchmark run should succeed");
                        black_box(counts.nodes)
                    });
                },
            );
            group.bench_with_input(
                BenchmarkId::new(format!("{}_capture_first", case.name), depth),
                &depth,
                |b, &depth| {
                    b.iter(|| {
                        let counts =
                            perft(&CaptureFirstGenerator, black_box(&board), case.side, black_box(depth))
                                .expect("perft benchmark run should succeed");
                        black_box(counts.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
