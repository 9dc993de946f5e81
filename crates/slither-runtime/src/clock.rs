//! Game clock: pause/resume entry points plus tick notifications.

use crate::{interruptible_sleep, PauseGate};
use crossbeam_channel::{Receiver, Sender};
use slither_core::TickId;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::debug;

/// Periodic ticking and pause/resume signaling for the simulation.
///
/// The clock owns the shared [`PauseGate`] and a dedicated ticker
/// thread that publishes [`TickId`]s on a bounded channel for an
/// external renderer. The channel holds a single tick and new ticks
/// are dropped while the consumer lags, so a slow renderer can never
/// back up the ticker. Ticks keep flowing while paused — pause
/// suspends agents, not presentation — and nothing in the simulation
/// core depends on tick cadence for correctness.
#[derive(Debug)]
pub struct GameClock {
    gate: Arc<PauseGate>,
    tick_rx: Receiver<TickId>,
    shutdown: Arc<AtomicBool>,
    ticker: Option<JoinHandle<()>>,
}

impl GameClock {
    /// Create a clock and spawn its ticker thread.
    pub fn new(tick_period: Duration) -> Self {
        let gate = Arc::new(PauseGate::new());
        let shutdown = Arc::new(AtomicBool::new(false));
        let (tick_tx, tick_rx) = crossbeam_channel::bounded(1);

        let ticker_shutdown = Arc::clone(&shutdown);
        let ticker = thread::Builder::new()
            .name("slither-clock".into())
            .spawn(move || run_ticker(tick_period, &tick_tx, &ticker_shutdown))
            .expect("failed to spawn clock thread");

        Self {
            gate,
            tick_rx,
            shutdown,
            ticker: Some(ticker),
        }
    }

    /// The pause gate shared with every worker.
    pub fn gate(&self) -> Arc<PauseGate> {
        Arc::clone(&self.gate)
    }

    /// Suspend all workers at their next gate check.
    pub fn pause(&self) {
        self.gate.set_paused(true);
    }

    /// Release all parked workers.
    pub fn resume(&self) {
        self.gate.set_paused(false);
    }

    /// Whether the simulation is currently paused.
    pub fn is_paused(&self) -> bool {
        self.gate.is_paused()
    }

    /// Block while paused; returns `false` if `cancel` was raised.
    /// Workers may call this instead of holding the gate directly.
    pub fn wait_if_paused(&self, cancel: &AtomicBool) -> bool {
        self.gate.wait_if_paused(cancel)
    }

    /// Tick notifications for the renderer. The receiver is cloneable;
    /// each tick is delivered to at most one consumer.
    pub fn ticks(&self) -> Receiver<TickId> {
        self.tick_rx.clone()
    }

    /// Stop the ticker thread and join it.
    pub fn shutdown(mut self) {
        self.stop_ticker();
    }

    fn stop_ticker(&mut self) {
        self.shutdown.store(true, Ordering::Release);
        if let Some(handle) = self.ticker.take() {
            if handle.join().is_err() {
                debug!("clock ticker panicked during shutdown");
            }
        }
    }
}

impl Drop for GameClock {
    fn drop(&mut self) {
        self.stop_ticker();
    }
}

/// Ticker loop: sleep one period, publish the next tick, repeat.
/// `try_send` on the length-1 channel implements newest-wins delivery.
fn run_ticker(period: Duration, tick_tx: &Sender<TickId>, shutdown: &AtomicBool) {
    let mut current = TickId(0);
    while interruptible_sleep(period, shutdown) {
        current = TickId(current.0 + 1);
        let _ = tick_tx.try_send(current);
    }
    debug!(last_tick = %current, "clock ticker stopped");
}
