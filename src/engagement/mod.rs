//! Engagement store.
//!
//! Owns the mutual-exclusion invariant for like/dislike reactions and the
//! count consistency that goes with it. The async half (request issue,
//! optimistic apply, rollback) lives in the hub; this module is the pure
//! state machine it drives.

mod state;

pub use state::*;
