//! End-to-end race: clock, pool of workers, pause toggle, shutdown.
//!
//! Exercises the whole stack the way an embedding application would:
//! everything wired through the facade, renderer-side reads via
//! snapshots and the clock's tick channel only.

use slither::{
    Board, Direction, GameClock, Position, RunnerConfig, RunnerPool, Snake, INITIAL_MICE,
    INITIAL_TURBO,
};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[test]
fn full_race_runs_pauses_and_shuts_down_clean() {
    let board = Arc::new(Board::with_seed(40, 24, 7).expect("valid dimensions"));
    let clock = GameClock::new(Duration::from_millis(10));
    let ticks = clock.ticks();

    let snakes: Vec<Arc<Snake>> = (0..4)
        .map(|i| {
            Arc::new(Snake::new(
                Position::new(1 + i * 9, 1 + i * 5),
                Direction::ALL[i as usize % 4],
            ))
        })
        .collect();

    let config = RunnerConfig {
        base_delay: Duration::from_millis(5),
        turbo_delay: Duration::from_millis(2),
        ..RunnerConfig::default()
    };
    let mut pool = RunnerPool::new();
    for (i, snake) in snakes.iter().enumerate() {
        pool.spawn(
            Arc::clone(snake),
            Arc::clone(&board),
            clock.gate(),
            config.clone(),
            i as u64,
        );
    }

    // Renderer's view: ticks arrive and snapshots are always coherent.
    let mut seen_ticks = 0;
    for _ in 0..5 {
        if ticks.recv_timeout(Duration::from_secs(2)).is_ok() {
            seen_ticks += 1;
        }
        assert_eq!(board.mice_snapshot().len(), INITIAL_MICE);
        for snake in &snakes {
            let body = snake.snapshot();
            assert!(!body.is_empty());
            assert!(body.len() <= snake.max_length());
        }
    }
    assert!(seen_ticks > 0, "clock never ticked");

    // Toggle a pause through the clock's control surface.
    clock.pause();
    thread::sleep(Duration::from_millis(100));
    let frozen_steps = board.metrics().steps;
    thread::sleep(Duration::from_millis(150));
    assert_eq!(board.metrics().steps, frozen_steps);

    clock.resume();
    thread::sleep(Duration::from_millis(150));
    assert!(board.metrics().steps > frozen_steps);

    // Item invariants held across the whole run.
    let metrics = board.metrics();
    assert_eq!(board.mice_snapshot().len(), INITIAL_MICE);
    assert_eq!(board.turbo_snapshot().len(), INITIAL_TURBO);
    assert!(metrics.steps > 0);

    let report = pool.shutdown();
    assert_eq!(report.workers_joined, 4);
    assert_eq!(report.workers_panicked, 0);
    clock.shutdown();

    // Workers are gone; the board settles for good.
    let final_steps = board.metrics().steps;
    thread::sleep(Duration::from_millis(50));
    assert_eq!(board.metrics().steps, final_steps);
}
