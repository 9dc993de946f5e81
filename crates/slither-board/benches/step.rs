//! Benchmarks the exclusive step section against a seeded board.
//!
//! `step` is the only lock-held work in the system, so its latency
//! bounds how many workers one board can serve.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use slither_board::{Board, MoveOutcome};
use slither_core::{Direction, Position, Snake};

fn bench_step(c: &mut Criterion) {
    let board = Board::with_seed(60, 36, 42).expect("valid dimensions");
    let snake = Snake::new(Position::new(10, 10), Direction::Right);
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    c.bench_function("board_step", |b| {
        b.iter(|| {
            let outcome = board.step(black_box(&snake), &mut rng);
            if outcome == MoveOutcome::HitObstacle {
                snake.turn(Direction::Down);
            }
            outcome
        })
    });

    c.bench_function("board_snapshots", |b| {
        b.iter(|| {
            (
                black_box(board.mice_snapshot()),
                black_box(board.obstacles_snapshot()),
                black_box(board.turbo_snapshot()),
            )
        })
    });
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
