//! Error types for board construction and mutation.

use crate::Position;
use std::error::Error;
use std::fmt;

/// Errors from board construction and item placement.
///
/// These are the only fail-fast conditions in the system: a zero
/// dimension or an out-of-bounds placement aborts setup. Everything
/// that can go wrong mid-run (a cancelled wait, a near-full grid) is
/// recovered locally and never surfaced through this type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// A board dimension was zero.
    ZeroDimension {
        /// Which axis was zero: `"width"` or `"height"`.
        axis: &'static str,
    },
    /// An explicitly placed item or teleport endpoint lies outside the
    /// grid.
    OutOfBounds {
        /// The offending position.
        position: Position,
        /// Board width at the time of the call.
        width: u32,
        /// Board height at the time of the call.
        height: u32,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { axis } => {
                write!(f, "board {axis} must be positive")
            }
            Self::OutOfBounds {
                position,
                width,
                height,
            } => {
                write!(
                    f,
                    "position {position} outside board bounds [0, {width}) x [0, {height})"
                )
            }
        }
    }
}

impl Error for BoardError {}
