//! Wire DTOs for the Kudos REST API.
//!
//! Field names follow the server's snake_case JSON contract. Each DTO
//! converts into the corresponding `core` type; conversions that need
//! request context (the post id for a comment list, for instance) take it
//! as a parameter.

use serde::Deserialize;

use crate::core::{
    AuthorPost, Comment, CommentId, CommentPreview, FollowAck, Post, PostId, Profile, Reaction,
    UserId,
};

/// Response of the interaction-status endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct InteractionStatusDto {
    /// The viewer's reaction: `like`, `dislike`, or `none`.
    pub interaction_type: Reaction,
}

/// A post as returned by the feed endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedPostDto {
    /// Post id.
    pub id: u64,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Author display name.
    pub author: String,
    /// Author user id.
    pub user: u64,
    /// Like count.
    pub like_count: u32,
    /// Dislike count.
    pub dislike_count: u32,
    /// Comment count (absent on older server versions).
    #[serde(default)]
    pub comment_count: u32,
}

impl FeedPostDto {
    /// Convert into a [`Post`].
    pub fn into_post(self) -> Post {
        Post {
            id: PostId(self.id),
            title: self.title,
            content: self.content,
            author_id: UserId(self.user),
            author_name: self.author,
            like_count: self.like_count,
            dislike_count: self.dislike_count,
            comment_count: self.comment_count,
        }
    }
}

/// A comment as returned by the comments endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentDto {
    /// Comment id.
    pub id: u64,
    /// Commenting user's username.
    pub author_username: String,
    /// Comment text.
    pub content: String,
    /// Creation timestamp as the server formatted it.
    #[serde(default)]
    pub created_at: String,
}

impl CommentDto {
    /// Convert into a [`Comment`] belonging to `post_id`.
    pub fn into_comment(self, post_id: PostId) -> Comment {
        Comment {
            id: CommentId(self.id),
            post_id,
            author_username: self.author_username,
            content: self.content,
            created_at: self.created_at,
        }
    }
}

/// Response of the follow-toggle endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct FollowAckDto {
    /// Human-readable confirmation message.
    pub message: String,
    /// The follow state the server settled on.
    pub following: bool,
}

impl FollowAckDto {
    /// Convert into a [`FollowAck`].
    pub fn into_ack(self) -> FollowAck {
        FollowAck {
            message: self.message,
            following: self.following,
        }
    }
}

/// Response of the profile endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileDto {
    /// Username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Follower count.
    pub followers_count: u32,
    /// Following count.
    pub following_count: u32,
    /// Whether the viewer follows this user.
    pub is_following: bool,
}

impl ProfileDto {
    /// Convert into a [`Profile`].
    pub fn into_profile(self) -> Profile {
        Profile {
            username: self.username,
            email: self.email,
            followers_count: self.followers_count,
            following_count: self.following_count,
            is_following: self.is_following,
        }
    }
}

/// Envelope of the author-posts endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorPostsDto {
    /// The author's posts.
    pub posts: Vec<AuthorPostDto>,
}

/// A post nested inside an author-posts response.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorPostDto {
    /// Post id.
    pub id: u64,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Like count.
    pub like_count: u32,
    /// Dislike count.
    pub dislike_count: u32,
    /// Comment count (absent on older server versions).
    #[serde(default)]
    pub comment_count: Option<u32>,
    /// Nested comments.
    #[serde(default)]
    pub comments: Vec<NestedCommentDto>,
}

/// A comment nested inside an author-posts response.
#[derive(Debug, Clone, Deserialize)]
pub struct NestedCommentDto {
    /// The commenting user.
    pub user: NestedUserDto,
    /// Comment text.
    pub content: String,
}

/// The user object nested inside an author-posts comment.
#[derive(Debug, Clone, Deserialize)]
pub struct NestedUserDto {
    /// Username.
    pub username: String,
}

impl AuthorPostDto {
    /// Convert into an [`AuthorPost`].
    pub fn into_author_post(self) -> AuthorPost {
        let comment_count = self
            .comment_count
            .unwrap_or(self.comments.len() as u32);
        AuthorPost {
            id: PostId(self.id),
            title: self.title,
            content: self.content,
            like_count: self.like_count,
            dislike_count: self.dislike_count,
            comment_count,
            comments: self
                .comments
                .into_iter()
                .map(|c| CommentPreview {
                    author_username: c.user.username,
                    content: c.content,
                })
                .collect(),
        }
    }
}

/// Error body shapes the server is known to produce.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBodyDto {
    /// `message` field, when present.
    #[serde(default)]
    pub message: Option<String>,
    /// `detail` field, when present.
    #[serde(default)]
    pub detail: Option<String>,
}

impl ErrorBodyDto {
    /// The server-provided message, if the body carried one.
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interaction_status_decode() {
        let dto: InteractionStatusDto =
            serde_json::from_str(r#"{"interaction_type":"like"}"#).unwrap();
        assert_eq!(dto.interaction_type, Reaction::Like);

        let dto: InteractionStatusDto =
            serde_json::from_str(r#"{"interaction_type":"none"}"#).unwrap();
        assert_eq!(dto.interaction_type, Reaction::None);
    }

    #[test]
    fn test_feed_post_decode() {
        let json = r#"{
            "id": 3, "title": "t", "content": "c",
            "author": "ada", "user": 9,
            "like_count": 5, "dislike_count": 2
        }"#;
        let post = serde_json::from_str::<FeedPostDto>(json).unwrap().into_post();
        assert_eq!(post.id, PostId(3));
        assert_eq!(post.author_id, UserId(9));
        assert_eq!(post.author_name, "ada");
        assert_eq!(post.comment_count, 0);
    }

    #[test]
    fn test_author_posts_decode() {
        let json = r#"{"posts":[{
            "id": 1, "title": "t", "content": "c",
            "like_count": 1, "dislike_count": 0,
            "comments": [{"user":{"username":"bob"},"content":"nice"}]
        }]}"#;
        let envelope: AuthorPostsDto = serde_json::from_str(json).unwrap();
        let post = envelope.posts.into_iter().next().unwrap().into_author_post();
        assert_eq!(post.comment_count, 1);
        assert_eq!(post.comments[0].author_username, "bob");
    }

    #[test]
    fn test_error_body_prefers_message() {
        let body: ErrorBodyDto =
            serde_json::from_str(r#"{"message":"m","detail":"d"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("m"));

        let body: ErrorBodyDto = serde_json::from_str(r#"{"detail":"d"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("d"));

        let body: ErrorBodyDto = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(body.into_message(), None);
    }
}
