//! Per-snake worker loop.

use crate::PauseGate;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use slither_board::{Board, MoveOutcome};
use slither_core::{Direction, Snake};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::debug;

/// Granularity of the pacing sleep; bounds cancellation latency while
/// a worker is sleeping between steps.
const SLEEP_SLICE: Duration = Duration::from_millis(10);

/// Tuning knobs for a snake worker.
#[derive(Clone, Debug)]
pub struct RunnerConfig {
    /// Delay between steps at normal speed.
    pub base_delay: Duration,
    /// Delay between steps while a turbo boost is active.
    pub turbo_delay: Duration,
    /// Chance of a spontaneous random turn per iteration.
    pub turn_probability: f64,
    /// Spontaneous-turn chance while boosted (steadier at speed).
    pub boosted_turn_probability: f64,
    /// Boost ticks granted per consumed turbo tile.
    pub turbo_extension: u32,
    /// Upper bound on accumulated boost ticks.
    pub turbo_cap: u32,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            base_delay: Duration::from_millis(80),
            turbo_delay: Duration::from_millis(40),
            turn_probability: 0.10,
            boosted_turn_probability: 0.05,
            turbo_extension: 60,
            turbo_cap: 200,
        }
    }
}

/// The control loop driving one snake against one board.
///
/// Runs until the snake dies or the shared cancellation flag is
/// raised. Each iteration: wait at the pause gate, maybe issue a
/// random turn, invoke the board's atomic step, react to the outcome
/// (bounce off obstacles, accumulate turbo boost), then sleep for
/// this iteration's pacing delay. The gate wait and the sleep are the
/// only suspension points, and both are cancellation-aware.
///
/// The runner owns its RNG, so the board's exclusive section never
/// touches shared random state.
pub struct SnakeRunner {
    snake: Arc<Snake>,
    board: Arc<Board>,
    gate: Arc<PauseGate>,
    cancel: Arc<AtomicBool>,
    config: RunnerConfig,
    rng: ChaCha8Rng,
    turbo_ticks: u32,
}

impl SnakeRunner {
    /// Create a runner. `cancel` is shared with whatever supervises
    /// this worker (normally a [`RunnerPool`](crate::RunnerPool));
    /// `seed` makes the worker's turn decisions reproducible.
    pub fn new(
        snake: Arc<Snake>,
        board: Arc<Board>,
        gate: Arc<PauseGate>,
        cancel: Arc<AtomicBool>,
        config: RunnerConfig,
        seed: u64,
    ) -> Self {
        Self {
            snake,
            board,
            gate,
            cancel,
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            turbo_ticks: 0,
        }
    }

    /// Drive the loop to completion on the calling thread.
    pub fn run(mut self) {
        let id = self.snake.id();
        debug!(snake = %id, "runner started");

        while self.snake.is_alive() && !self.cancel.load(Ordering::Acquire) {
            if !self.gate.wait_if_paused(&self.cancel) {
                break;
            }

            self.maybe_turn();
            match self.board.step(&self.snake, &mut self.rng) {
                MoveOutcome::HitObstacle => {
                    // Reactive bounce: no movement this tick, just a
                    // fresh heading for the next attempt.
                    self.random_turn();
                }
                MoveOutcome::AteTurbo => {
                    self.turbo_ticks = self
                        .turbo_ticks
                        .saturating_add(self.config.turbo_extension)
                        .min(self.config.turbo_cap);
                }
                MoveOutcome::AteMouse | MoveOutcome::Moved => {}
            }

            let delay = if self.turbo_ticks > 0 {
                self.turbo_ticks -= 1;
                self.config.turbo_delay
            } else {
                self.config.base_delay
            };
            if !interruptible_sleep(delay, &self.cancel) {
                break;
            }
        }

        debug!(snake = %id, alive = self.snake.is_alive(), "runner stopped");
    }

    fn maybe_turn(&mut self) {
        let p = if self.turbo_ticks > 0 {
            self.config.boosted_turn_probability
        } else {
            self.config.turn_probability
        };
        if self.rng.gen_bool(p.clamp(0.0, 1.0)) {
            self.random_turn();
        }
    }

    fn random_turn(&mut self) {
        let dir = Direction::ALL[self.rng.gen_range(0..Direction::ALL.len())];
        self.snake.turn(dir);
    }
}

/// Sleep for `duration`, polling `cancel` every [`SLEEP_SLICE`].
///
/// Returns `false` if cancelled before the full duration elapsed.
pub(crate) fn interruptible_sleep(duration: Duration, cancel: &AtomicBool) -> bool {
    let deadline = Instant::now() + duration;
    loop {
        if cancel.load(Ordering::Acquire) {
            return false;
        }
        let now = Instant::now();
        if now >= deadline {
            return true;
        }
        thread::sleep((deadline - now).min(SLEEP_SLICE));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slither_core::Position;

    fn fast_config() -> RunnerConfig {
        RunnerConfig {
            base_delay: Duration::from_millis(2),
            turbo_delay: Duration::from_millis(1),
            ..RunnerConfig::default()
        }
    }

    #[test]
    fn sleep_completes_when_not_cancelled() {
        let cancel = AtomicBool::new(false);
        let start = Instant::now();
        assert!(interruptible_sleep(Duration::from_millis(30), &cancel));
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn sleep_exits_early_on_cancel() {
        let cancel = Arc::new(AtomicBool::new(false));
        let handle = {
            let cancel = Arc::clone(&cancel);
            thread::spawn(move || {
                let start = Instant::now();
                let finished = interruptible_sleep(Duration::from_secs(10), &cancel);
                (finished, start.elapsed())
            })
        };
        thread::sleep(Duration::from_millis(30));
        cancel.store(true, Ordering::Release);
        let (finished, elapsed) = handle.join().expect("sleeper panicked");
        assert!(!finished);
        assert!(elapsed < Duration::from_secs(1));
    }

    #[test]
    fn runner_exits_when_snake_is_killed() {
        let board = Arc::new(Board::empty(20, 20).expect("valid dimensions"));
        let snake = Arc::new(Snake::new(Position::new(5, 5), Direction::Right));
        let gate = Arc::new(PauseGate::new());
        let cancel = Arc::new(AtomicBool::new(false));

        let runner = SnakeRunner::new(
            Arc::clone(&snake),
            board,
            gate,
            Arc::clone(&cancel),
            fast_config(),
            1,
        );
        let handle = thread::spawn(move || runner.run());

        thread::sleep(Duration::from_millis(40));
        snake.kill();
        handle.join().expect("runner panicked");
        assert!(!snake.is_alive());
    }

    #[test]
    fn runner_advances_the_snake() {
        let board = Arc::new(Board::empty(20, 20).expect("valid dimensions"));
        let snake = Arc::new(Snake::new(Position::new(5, 5), Direction::Right));
        let gate = Arc::new(PauseGate::new());
        let cancel = Arc::new(AtomicBool::new(false));

        let runner = SnakeRunner::new(
            Arc::clone(&snake),
            Arc::clone(&board),
            gate,
            Arc::clone(&cancel),
            fast_config(),
            2,
        );
        let handle = thread::spawn(move || runner.run());

        thread::sleep(Duration::from_millis(100));
        cancel.store(true, Ordering::Release);
        handle.join().expect("runner panicked");

        assert!(board.metrics().steps > 0);
        // At least one advance happened, so the body grew past its
        // starting single cell.
        assert!(snake.length() > 1);
    }
}
