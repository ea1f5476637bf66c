//! Shared entity types.
//!
//! These are the client-side projections of server entities. The client
//! never constructs a new `Post` except as a render projection of data the
//! server returned; counts are authoritative from the server and only
//! mutated optimistically between a request and its settlement.

use serde::{Deserialize, Serialize};

/// Identifier of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u64);

/// Identifier of a user (viewer or author).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

/// Identifier of a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(pub u64);

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for CommentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A viewer's reaction to a single post.
///
/// Exactly one variant holds at any time; a viewer cannot simultaneously
/// like and dislike the same post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reaction {
    /// No reaction registered.
    #[default]
    None,
    /// Post is liked by the viewer.
    Like,
    /// Post is disliked by the viewer.
    Dislike,
}

/// A post as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// Server-assigned post id.
    pub id: PostId,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Id of the authoring user.
    pub author_id: UserId,
    /// Display name of the authoring user.
    pub author_name: String,
    /// Number of likes (server-authoritative).
    pub like_count: u32,
    /// Number of dislikes (server-authoritative).
    pub dislike_count: u32,
    /// Number of comments (server-authoritative).
    pub comment_count: u32,
}

/// A comment on a post.
///
/// Append-only from the client's perspective: created via submission,
/// never locally edited or deleted. Ordering is the server's insertion
/// order and is never re-sorted client-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Server-assigned comment id.
    pub id: CommentId,
    /// Post the comment belongs to.
    pub post_id: PostId,
    /// Username of the commenting user.
    pub author_username: String,
    /// Comment text.
    pub content: String,
    /// Server-side creation timestamp (RFC 3339 string as received).
    pub created_at: String,
}

/// A lightweight comment as nested inside an author-posts response.
///
/// The server omits ids and timestamps on nested comments, so these are
/// display-only and never merged into a post's comment thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentPreview {
    /// Username of the commenting user.
    pub author_username: String,
    /// Comment text.
    pub content: String,
}

/// A user profile as returned by the profile endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Username of the profiled user.
    pub username: String,
    /// Email of the profiled user.
    pub email: String,
    /// Number of users following this profile (server-authoritative).
    pub followers_count: u32,
    /// Number of users this profile follows (server-authoritative).
    pub following_count: u32,
    /// Whether the viewer currently follows this profile.
    pub is_following: bool,
}

/// A post with its nested comment previews, as returned by the
/// author-posts endpoint.
///
/// The endpoint omits author fields (the author is the profiled user), so
/// this carries the post data verbatim rather than a synthesized [`Post`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorPost {
    /// Server-assigned post id.
    pub id: PostId,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Number of likes.
    pub like_count: u32,
    /// Number of dislikes.
    pub dislike_count: u32,
    /// Number of comments.
    pub comment_count: u32,
    /// Nested comment previews (display-only).
    pub comments: Vec<CommentPreview>,
}

/// Server acknowledgment of a follow toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowAck {
    /// Human-readable message from the server.
    pub message: String,
    /// The follow state the server settled on.
    pub following: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reaction_default_is_none() {
        assert_eq!(Reaction::default(), Reaction::None);
    }

    #[test]
    fn test_reaction_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Reaction::Like).unwrap(), "\"like\"");
        assert_eq!(
            serde_json::from_str::<Reaction>("\"dislike\"").unwrap(),
            Reaction::Dislike
        );
        assert_eq!(
            serde_json::from_str::<Reaction>("\"none\"").unwrap(),
            Reaction::None
        );
    }

    #[test]
    fn test_id_display() {
        assert_eq!(PostId(42).to_string(), "42");
        assert_eq!(UserId(7).to_string(), "7");
    }
}
