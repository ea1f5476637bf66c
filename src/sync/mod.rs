//! Reconciliation ordering layer.
//!
//! Implements:
//! - Per-entity monotonic sequence numbers for mutation intents
//! - Last-write-wins settlement (by sequence, not arrival time)
//! - Settlement classification exposed to the view layer

mod seq;
mod settle;

pub use seq::*;
pub use settle::*;
