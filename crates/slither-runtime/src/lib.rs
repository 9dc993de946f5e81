//! Pause gate, game clock, and per-snake worker runtime.
//!
//! Each snake is driven by its own [`SnakeRunner`] on a dedicated
//! thread: wait at the shared [`PauseGate`], maybe turn, invoke the
//! board's atomic step, react to the outcome, sleep. The
//! [`RunnerPool`] supervises those threads and the [`GameClock`]
//! provides pause/resume entry points plus tick notifications for an
//! external renderer.
//!
//! The only suspension points in a worker's life are the gate wait and
//! the pacing sleep; both poll the shared cancellation flag, so
//! shutdown never has to force a thread down and never interrupts a
//! board mutation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod clock;
mod pause;
mod pool;
mod runner;

pub use clock::GameClock;
pub use pause::PauseGate;
pub use pool::{RunnerPool, ShutdownReport};
pub use runner::{RunnerConfig, SnakeRunner};

pub(crate) use runner::interruptible_sleep;
