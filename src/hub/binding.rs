//! View bindings.
//!
//! A binding is a view instance's subscription to one entity's state in
//! the hub. Every binding over the same entity observes the same cell, so
//! a like registered through a detail view is immediately visible to a
//! list view bound to the same post. Dropping a binding unsubscribes it;
//! a dropped binding can never receive a late reconciliation.

use tokio::sync::watch;

use crate::core::{Comment, Post, PostId, Reaction, UserId};
use crate::follow::FollowState;

/// Snapshot of one post's state, as a view renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostView {
    /// The post, with counts already reconciled against local optimistic
    /// state.
    pub post: Post,
    /// The viewer's reaction.
    pub reaction: Reaction,
    /// The comment thread, in server order.
    pub comments: Vec<Comment>,
    /// Whether a comment submission is in flight (busy guard for the
    /// input affordance).
    pub submitting: bool,
}

/// Snapshot of one author's state, as a profile view renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorView {
    /// The author's user id.
    pub author_id: UserId,
    /// Username, empty until a profile load has completed.
    pub username: String,
    /// Email, empty until a profile load has completed.
    pub email: String,
    /// The viewer's follow relationship and the author's counts.
    pub follow: FollowState,
}

/// A view's subscription to one post.
#[derive(Debug)]
pub struct PostBinding {
    pub(super) rx: watch::Receiver<PostView>,
}

impl PostBinding {
    /// The current snapshot.
    pub fn snapshot(&self) -> PostView {
        self.rx.borrow().clone()
    }

    /// The id of the bound post.
    pub fn post_id(&self) -> PostId {
        self.rx.borrow().post.id
    }

    /// Wait for the next reconciliation of the bound post.
    ///
    /// Returns `false` once the post has been evicted from the hub, after
    /// which no further changes will ever arrive.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }
}

/// A view's subscription to one author.
#[derive(Debug)]
pub struct AuthorBinding {
    pub(super) rx: watch::Receiver<AuthorView>,
}

impl AuthorBinding {
    /// The current snapshot.
    pub fn snapshot(&self) -> AuthorView {
        self.rx.borrow().clone()
    }

    /// The id of the bound author.
    pub fn author_id(&self) -> UserId {
        self.rx.borrow().author_id
    }

    /// Wait for the next reconciliation of the bound author.
    ///
    /// Returns `false` once the author has been evicted from the hub.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }
}
