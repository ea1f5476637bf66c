//! Follow relationship tracker.
//!
//! Per-author follow/unfollow state with lockstep follower counts.
//! Self-follow rejection and the async toggle live in the hub.

mod state;

pub use state::*;
