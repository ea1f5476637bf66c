//! # Kudos Client
//!
//! A client-side engagement engine for a social posting platform. It keeps
//! one authoritative copy of every post's and author's interaction state in
//! a process-wide [`hub::Hub`] and lets any number of views subscribe to it:
//!
//! - **Reactions**: mutually exclusive like/dislike toggles with optimistic
//!   counts and rollback on failure
//! - **Follows**: follow/unfollow with lockstep follower counts and local
//!   self-follow rejection
//! - **Comments**: append-only threads with a busy guard against duplicate
//!   submission
//! - **Consistency**: per-entity sequence tracking so stale responses never
//!   overwrite newer intent, regardless of arrival order
//!
//! ## Feature Flags
//!
//! - `http` (default): HTTP backend implementing [`api::KudosApi`] over
//!   `reqwest`
//!
//! ## Modules
//!
//! - [`core`]: Domain types and error types (always included)
//! - [`api`]: Backend trait, wire DTOs, and the HTTP client
//! - [`sync`]: Sequence tracking and settlement outcomes
//! - [`engagement`]: Like/dislike state transitions
//! - [`follow`]: Follow relationship state
//! - [`comments`]: Comment thread state
//! - [`hub`]: The shared cache, bindings, and notices
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use kudos_client::prelude::*;
//!
//! # async fn run() -> Result<(), ClientError> {
//! let api = HttpApi::builder()
//!     .base_url("http://127.0.0.1:8000")
//!     .build()?;
//! let hub = Hub::new(Arc::new(api), UserId(1));
//!
//! // Load the feed, then interact with a post from any view.
//! hub.load_posts().await?;
//! if let Some(binding) = hub.bind_post(PostId(42)).await {
//!     hub.toggle_like(PostId(42)).await?;
//!     let view = binding.snapshot();
//!     println!("{} likes", view.post.like_count);
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Core module (always included)
pub mod core;

// Backend trait, wire types, HTTP client
pub mod api;

// Sequence tracking and settlement outcomes
pub mod sync;

// Per-domain state machines
pub mod comments;
pub mod engagement;
pub mod follow;

// Shared cache, bindings, notices
pub mod hub;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::api::{KudosApi, StaticToken, TokenProvider};
    #[cfg(feature = "http")]
    pub use crate::api::{HttpApi, HttpApiBuilder, HttpConfig};
    pub use crate::core::*;
    pub use crate::hub::{
        AuthorBinding, AuthorView, Hub, Notice, NoticeLevel, PostBinding, PostView,
    };
    pub use crate::sync::{Settlement, SkipReason};
}

// Re-export commonly used items at crate root
pub use core::{ApiError, ClientError, Comment, Post, PostId, Profile, Reaction, UserId};

pub use hub::{Hub, Notice, NoticeLevel, PostBinding, PostView};
pub use sync::{Settlement, SkipReason};
