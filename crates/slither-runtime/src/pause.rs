//! Cooperative global pause primitive.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Condvar, Mutex, PoisonError};
use std::time::Duration;

/// How often a parked worker re-checks its cancellation flag. Bounds
/// the shutdown latency of a worker parked at the gate.
const CANCEL_POLL: Duration = Duration::from_millis(25);

/// A cooperative suspension point shared by every worker.
///
/// Workers call [`wait_if_paused`](PauseGate::wait_if_paused) at the
/// top of each iteration, before touching the board. While the flag is
/// set they park on a condvar; clearing it broadcasts to all of them
/// at once. Setting the flag never interrupts anyone: a worker that
/// already passed the gate finishes its full iteration first, so no
/// tick is lost or doubled across a pause transition and no board
/// mutation is ever suspended midway.
#[derive(Debug, Default)]
pub struct PauseGate {
    paused: Mutex<bool>,
    resumed: Condvar,
}

impl PauseGate {
    /// Create an unpaused gate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or clear the pause flag.
    ///
    /// Clearing releases every parked worker; they proceed on their
    /// own schedule. Setting is discovered by each worker at its next
    /// gate check.
    pub fn set_paused(&self, paused: bool) {
        let mut flag = self.lock_flag();
        *flag = paused;
        if !paused {
            self.resumed.notify_all();
        }
    }

    /// Non-blocking observation of the flag.
    pub fn is_paused(&self) -> bool {
        *self.lock_flag()
    }

    /// Park the caller while the gate is paused.
    ///
    /// Returns `true` once the gate is open, or `false` if `cancel`
    /// was raised while waiting; the poll interval bounds how long a
    /// cancelled worker can stay parked. Spurious wakeups re-check the
    /// flag and go back to sleep.
    pub fn wait_if_paused(&self, cancel: &AtomicBool) -> bool {
        let mut flag = self.lock_flag();
        while *flag {
            if cancel.load(Ordering::Acquire) {
                return false;
            }
            let (guard, _timeout) = self
                .resumed
                .wait_timeout(flag, CANCEL_POLL)
                .unwrap_or_else(PoisonError::into_inner);
            flag = guard;
        }
        true
    }

    fn lock_flag(&self) -> std::sync::MutexGuard<'_, bool> {
        self.paused.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
