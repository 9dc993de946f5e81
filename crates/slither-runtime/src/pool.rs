//! Supervisor for snake worker threads.

use crate::{PauseGate, RunnerConfig, SnakeRunner};
use slither_board::Board;
use slither_core::{Snake, SnakeId};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;
use tracing::{debug, error};

/// Report from joining all workers at shutdown.
#[derive(Debug)]
pub struct ShutdownReport {
    /// Workers that ran to a clean exit.
    pub workers_joined: usize,
    /// Workers whose thread panicked. A panicked worker only stops
    /// its own snake; the rest of the simulation is unaffected.
    pub workers_panicked: usize,
    /// Total time spent in the shutdown sequence, in milliseconds.
    pub total_ms: u64,
}

/// Owns the shared cancellation flag and one thread per snake.
///
/// Each [`spawn`](RunnerPool::spawn) starts a named worker thread
/// (`slither-runner-<id>`) driving one [`SnakeRunner`].
/// [`shutdown`](RunnerPool::shutdown) raises the flag and joins
/// everyone; workers notice at their next suspension point (gate wait
/// or pacing sleep), so the join completes within one poll interval
/// plus any in-flight step.
#[derive(Debug, Default)]
pub struct RunnerPool {
    cancel: Arc<AtomicBool>,
    workers: Vec<(SnakeId, JoinHandle<()>)>,
}

impl RunnerPool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of workers spawned so far.
    pub fn len(&self) -> usize {
        self.workers.len()
    }

    /// Whether the pool has no workers.
    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    /// Start a worker thread driving `snake` against `board`.
    ///
    /// `seed` feeds the worker's private RNG; distinct seeds keep the
    /// workers' turn decisions independent and reproducible.
    pub fn spawn(
        &mut self,
        snake: Arc<Snake>,
        board: Arc<Board>,
        gate: Arc<PauseGate>,
        config: RunnerConfig,
        seed: u64,
    ) {
        let id = snake.id();
        let runner = SnakeRunner::new(
            snake,
            board,
            gate,
            Arc::clone(&self.cancel),
            config,
            seed,
        );
        let handle = thread::Builder::new()
            .name(format!("slither-runner-{id}"))
            .spawn(move || runner.run())
            .expect("failed to spawn runner thread");
        debug!(snake = %id, "worker spawned");
        self.workers.push((id, handle));
    }

    /// Raise the cancellation flag and join every worker.
    ///
    /// Failure policy for a panicked worker is report-and-continue:
    /// the panic is logged, counted in the report, and does not stop
    /// the join of the rest.
    pub fn shutdown(self) -> ShutdownReport {
        let start = Instant::now();
        self.cancel.store(true, Ordering::Release);

        let mut joined = 0;
        let mut panicked = 0;
        for (id, handle) in self.workers {
            match handle.join() {
                Ok(()) => joined += 1,
                Err(_) => {
                    panicked += 1;
                    error!(snake = %id, "worker thread panicked");
                }
            }
        }

        ShutdownReport {
            workers_joined: joined,
            workers_panicked: panicked,
            total_ms: start.elapsed().as_millis() as u64,
        }
    }
}
