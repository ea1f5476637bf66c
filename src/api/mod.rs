//! API layer.
//!
//! The [`KudosApi`] trait is the engine's only seam to the server: the
//! hub drives it, the `http` feature provides the reqwest-backed
//! implementation, and tests script their own. Bearer credentials come
//! from an external session-storage collaborator through [`TokenProvider`].

mod wire;

#[cfg(feature = "http")]
#[cfg_attr(docsrs, doc(cfg(feature = "http")))]
mod http;

pub use wire::*;

#[cfg(feature = "http")]
pub use http::*;

use async_trait::async_trait;

use crate::core::{ApiError, AuthorPost, Comment, FollowAck, Post, PostId, Profile, Reaction, UserId};

/// Supplier of the viewer's bearer credential.
///
/// Session storage is an external collaborator; the engine never validates
/// the credential locally. A `None` credential is sent as an unauthenticated
/// request and the server is authoritative on the resulting auth failure.
pub trait TokenProvider: Send + Sync {
    /// The current access token, if a session exists.
    fn access_token(&self) -> Option<String>;
}

/// A fixed token, for tools and tests.
#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

impl TokenProvider for StaticToken {
    fn access_token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// The Kudos REST API surface the engine consumes.
///
/// One method per server operation; paths and shapes are the server's
/// contract and live in the implementation, not here.
#[async_trait]
pub trait KudosApi: Send + Sync {
    /// Fetch the feed of all posts.
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError>;

    /// Fetch the viewer's reaction to a post.
    async fn interaction_status(&self, post: PostId) -> Result<Reaction, ApiError>;

    /// Toggle the viewer's like on a post. The server recomputes counts.
    async fn toggle_like(&self, post: PostId) -> Result<(), ApiError>;

    /// Toggle the viewer's dislike on a post. The server recomputes counts.
    async fn toggle_dislike(&self, post: PostId) -> Result<(), ApiError>;

    /// Fetch a post's ordered comment list. No auth required.
    async fn comments(&self, post: PostId) -> Result<Vec<Comment>, ApiError>;

    /// Add a comment to a post.
    async fn add_comment(&self, post: PostId, content: &str) -> Result<(), ApiError>;

    /// Toggle the viewer's follow relationship with an author.
    async fn toggle_follow(&self, author: UserId) -> Result<FollowAck, ApiError>;

    /// Fetch a user's profile.
    async fn profile(&self, user: UserId) -> Result<Profile, ApiError>;

    /// Fetch a user's posts with nested comment previews.
    async fn author_posts(&self, user: UserId) -> Result<Vec<AuthorPost>, ApiError>;
}
