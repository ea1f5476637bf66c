//! Hub-internal entity cells.
//!
//! One cell per tracked post or author: the authoritative-plus-optimistic
//! state, the sequence tracker that orders its settlements, and the watch
//! channel its bindings subscribe to.

use tokio::sync::watch;

use super::binding::{AuthorView, PostView};
use crate::comments::CommentThread;
use crate::engagement::EngagementState;
use crate::follow::FollowState;
use crate::core::{Post, Profile, UserId};
use crate::sync::SeqTracker;

/// State for one tracked post.
#[derive(Debug)]
pub(super) struct PostCell {
    /// Render projection of the post. `comment_count` is maintained here;
    /// like/dislike counts are owned by `engagement` and merged into the
    /// projection on publish.
    pub post: Post,
    /// Reaction plus like/dislike counts.
    pub engagement: EngagementState,
    /// Comment thread and submission guard.
    pub thread: CommentThread,
    /// Mutation ordering for this post.
    pub seq: SeqTracker,
    tx: watch::Sender<PostView>,
}

impl PostCell {
    pub fn new(post: Post) -> Self {
        let engagement = EngagementState {
            reaction: Default::default(),
            like_count: post.like_count,
            dislike_count: post.dislike_count,
        };
        let thread = CommentThread::new();
        let view = Self::render(&post, &engagement, &thread);
        let (tx, _) = watch::channel(view);
        Self {
            post,
            engagement,
            thread,
            seq: SeqTracker::new(),
            tx,
        }
    }

    fn render(post: &Post, engagement: &EngagementState, thread: &CommentThread) -> PostView {
        let mut post = post.clone();
        post.like_count = engagement.like_count;
        post.dislike_count = engagement.dislike_count;
        PostView {
            post,
            reaction: engagement.reaction,
            comments: thread.entries().to_vec(),
            submitting: thread.is_submitting(),
        }
    }

    /// Publish the current state to every binding.
    pub fn publish(&self) {
        self.tx
            .send_replace(Self::render(&self.post, &self.engagement, &self.thread));
    }

    /// Subscribe a new binding.
    pub fn subscribe(&self) -> watch::Receiver<PostView> {
        self.tx.subscribe()
    }
}

/// State for one tracked author.
#[derive(Debug)]
pub(super) struct AuthorCell {
    pub author_id: UserId,
    pub username: String,
    pub email: String,
    /// Follow relationship and counts.
    pub follow: FollowState,
    /// Mutation ordering for this author.
    pub seq: SeqTracker,
    tx: watch::Sender<AuthorView>,
}

impl AuthorCell {
    pub fn new(author_id: UserId, profile: &Profile) -> Self {
        let follow = FollowState::from_profile(profile);
        let view = AuthorView {
            author_id,
            username: profile.username.clone(),
            email: profile.email.clone(),
            follow: follow.clone(),
        };
        let (tx, _) = watch::channel(view);
        Self {
            author_id,
            username: profile.username.clone(),
            email: profile.email.clone(),
            follow,
            seq: SeqTracker::new(),
            tx,
        }
    }

    /// Publish the current state to every binding.
    pub fn publish(&self) {
        self.tx.send_replace(AuthorView {
            author_id: self.author_id,
            username: self.username.clone(),
            email: self.email.clone(),
            follow: self.follow.clone(),
        });
    }

    /// Subscribe a new binding.
    pub fn subscribe(&self) -> watch::Receiver<AuthorView> {
        self.tx.subscribe()
    }
}
