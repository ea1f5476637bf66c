//! View synchronizer.
//!
//! Implements:
//! - A process-wide engagement cache keyed by post and author
//! - View bindings with watch-channel subscriber notification
//! - Uniform optimistic-update-then-confirm-or-rollback for every
//!   mutation kind
//! - Sequence-guarded, last-write-wins settlement ordering
//! - The user-visible notice stream

mod binding;
mod cell;
#[allow(clippy::module_inception)]
mod hub;
mod notice;

pub use binding::*;
pub use hub::*;
pub use notice::*;
