//! Shared toroidal board and the atomic step protocol.
//!
//! The [`Board`] is the single resource shared by every snake worker
//! and by the renderer. All mutation funnels through one exclusive
//! write-lock section ([`Board::step`] and the item mutators); reads
//! take the shared side and return independent copies, so snapshot
//! consumers never block each other and never observe partial state.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod board;
mod metrics;

pub use board::{Board, MoveOutcome, INITIAL_MICE, INITIAL_OBSTACLES, INITIAL_TURBO};
pub use metrics::BoardMetrics;
