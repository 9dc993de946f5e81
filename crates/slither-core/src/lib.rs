//! Core value types and the snake entity for the Slither simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the grid primitives ([`Position`], [`Direction`]), identifier types
//! ([`SnakeId`], [`TickId`]), the thread-safe [`Snake`] entity, and the
//! construction-time error type [`BoardError`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod error;
mod id;
mod position;
mod snake;

pub use error::BoardError;
pub use id::{SnakeId, TickId};
pub use position::{Direction, Position};
pub use snake::{Snake, INITIAL_MAX_LENGTH};
