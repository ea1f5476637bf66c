//! Comment thread manager.
//!
//! Ordered, append-only comment lists with a submission lifecycle guard.
//! The async half (submit-then-refetch) lives in the hub.

mod thread;

pub use thread::*;
