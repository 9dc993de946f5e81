//! Strongly-typed identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`SnakeId`] allocation.
static SNAKE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-process identifier for a snake.
///
/// Allocated from a monotonic atomic counter via [`SnakeId::next`];
/// two snakes never share an ID within one process. Used for worker
/// thread naming and log fields, never for board logic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SnakeId(u64);

impl SnakeId {
    /// Allocate a fresh, unique ID. Thread-safe.
    pub fn next() -> Self {
        Self(SNAKE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SnakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonically increasing clock tick counter.
///
/// Emitted by the game clock for the renderer; the simulation core
/// never depends on tick values for correctness.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
