//! Slither: a concurrent snake-race simulation core.
//!
//! N autonomous snakes move independently over one shared toroidal
//! board holding mice (food), obstacles, turbo tiles, and symmetric
//! teleport pairs. Every snake is driven by its own worker thread;
//! all board mutation funnels through one atomic step protocol, while
//! renderers pull independent snapshots without blocking the workers.
//! A cooperative pause gate suspends and resumes the whole field
//! without losing or doubling a tick.
//!
//! This is the top-level facade crate re-exporting the public API from
//! the Slither sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use slither::{
//!     Board, Direction, GameClock, Position, RunnerConfig, RunnerPool, Snake,
//! };
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let board = Arc::new(Board::with_seed(60, 36, 42).unwrap());
//! let clock = GameClock::new(Duration::from_millis(40));
//!
//! let mut pool = RunnerPool::new();
//! for i in 0..2 {
//!     let snake = Arc::new(Snake::new(Position::new(10 + i * 20, 18), Direction::Right));
//!     pool.spawn(
//!         Arc::clone(&snake),
//!         Arc::clone(&board),
//!         clock.gate(),
//!         RunnerConfig::default(),
//!         i as u64,
//!     );
//! }
//!
//! // A renderer would draw from snapshots on each clock tick; the
//! // workers keep running regardless of whether anyone is watching.
//! assert_eq!(board.mice_snapshot().len(), slither::INITIAL_MICE);
//!
//! clock.pause();
//! clock.resume();
//!
//! let report = pool.shutdown();
//! assert_eq!(report.workers_panicked, 0);
//! clock.shutdown();
//! ```
//!
//! # Crates
//!
//! | Module source | Contents |
//! |---------------|----------|
//! | `slither-core` | [`Position`], [`Direction`], [`Snake`], identifiers, [`BoardError`] |
//! | `slither-board` | [`Board`], [`MoveOutcome`], [`BoardMetrics`] |
//! | `slither-runtime` | [`PauseGate`], [`GameClock`], [`SnakeRunner`], [`RunnerPool`] |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use slither_board::{
    Board, BoardMetrics, MoveOutcome, INITIAL_MICE, INITIAL_OBSTACLES, INITIAL_TURBO,
};
pub use slither_core::{
    BoardError, Direction, Position, Snake, SnakeId, TickId, INITIAL_MAX_LENGTH,
};
pub use slither_runtime::{
    GameClock, PauseGate, RunnerConfig, RunnerPool, ShutdownReport, SnakeRunner,
};
