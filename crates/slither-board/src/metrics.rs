//! Cumulative board counters.
//!
//! [`BoardMetrics`] is an owned sample of the board's atomic counters,
//! taken without touching the item lock. Counters only ever increase;
//! consumers diff successive samples for rates.

use std::sync::atomic::{AtomicU64, Ordering};

/// Live counters owned by the board. Incremented with relaxed stores
/// inside (or right after) the step critical section; sampling races
/// with in-flight steps by at most one increment per counter.
#[derive(Debug, Default)]
pub(crate) struct MetricCounters {
    pub steps: AtomicU64,
    pub mice_eaten: AtomicU64,
    pub turbo_eaten: AtomicU64,
    pub obstacle_hits: AtomicU64,
    pub teleports_taken: AtomicU64,
    pub spawn_fallbacks: AtomicU64,
}

impl MetricCounters {
    /// Take an owned snapshot of all counters.
    pub fn sample(&self) -> BoardMetrics {
        BoardMetrics {
            steps: self.steps.load(Ordering::Relaxed),
            mice_eaten: self.mice_eaten.load(Ordering::Relaxed),
            turbo_eaten: self.turbo_eaten.load(Ordering::Relaxed),
            obstacle_hits: self.obstacle_hits.load(Ordering::Relaxed),
            teleports_taken: self.teleports_taken.load(Ordering::Relaxed),
            spawn_fallbacks: self.spawn_fallbacks.load(Ordering::Relaxed),
        }
    }
}

/// Cumulative counters sampled from a [`Board`](crate::Board).
///
/// `spawn_fallbacks` counts random-empty-cell searches that exhausted
/// their retry budget and fell back to the origin cell. A non-zero
/// value is not an error, but a steadily climbing one means the board
/// is too small or too crowded for its spawn rate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardMetrics {
    /// Total `step` calls, including no-op steps of dead snakes.
    pub steps: u64,
    /// Mice consumed (each one respawned a mouse and an obstacle).
    pub mice_eaten: u64,
    /// Turbo tiles consumed (each one respawned elsewhere).
    pub turbo_eaten: u64,
    /// Steps rejected by an obstacle in the target cell.
    pub obstacle_hits: u64,
    /// Steps that landed through a teleport pair.
    pub teleports_taken: u64,
    /// Random-placement searches that fell back to the origin cell.
    pub spawn_fallbacks: u64,
}
