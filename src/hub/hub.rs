//! The engagement hub.
//!
//! Process-wide cache of engagement state keyed by post and author, with
//! subscriber notification. Every view binds to the hub instead of holding
//! its own copy of server state, so a mutation reconciled once is visible
//! to every binding over the same entity.
//!
//! Mutation policy, uniform across all three mutation kinds:
//! optimistic local apply, one request, then settle. A confirmed request
//! keeps the optimistic change; a failed one rolls back to the pre-intent
//! snapshot and emits an error [`Notice`]. Settlements apply in sequence
//! order per entity, never arrival order; stale settlements are discarded.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{RwLock, broadcast};
use tracing::{debug, warn};

use super::binding::{AuthorBinding, PostBinding};
use super::cell::{AuthorCell, PostCell};
use super::notice::Notice;
use crate::api::KudosApi;
use crate::comments::normalize_comment;
use crate::core::{AuthorPost, ClientError, Post, PostId, Profile, Reaction, UserId};
use crate::sync::{Settlement, SkipReason};

/// Capacity of the notice broadcast channel.
const NOTICE_CHANNEL_CAPACITY: usize = 64;

/// Which reaction a toggle targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ToggleKind {
    Like,
    Dislike,
}

/// Process-wide engagement state cache and view synchronizer.
///
/// Generic over nothing and cheap to share: wrap it in an [`Arc`] and hand
/// clones to every view.
pub struct Hub {
    api: Arc<dyn KudosApi>,
    viewer: UserId,
    posts: RwLock<HashMap<PostId, PostCell>>,
    authors: RwLock<HashMap<UserId, AuthorCell>>,
    notices: broadcast::Sender<Notice>,
}

impl Hub {
    /// Create a hub for the given viewer over the given API client.
    pub fn new(api: Arc<dyn KudosApi>, viewer: UserId) -> Self {
        let (notices, _) = broadcast::channel(NOTICE_CHANNEL_CAPACITY);
        Self {
            api,
            viewer,
            posts: RwLock::new(HashMap::new()),
            authors: RwLock::new(HashMap::new()),
            notices,
        }
    }

    /// The viewer this hub acts as.
    pub fn viewer(&self) -> UserId {
        self.viewer
    }

    /// Subscribe to user-visible notices.
    pub fn notices(&self) -> broadcast::Receiver<Notice> {
        self.notices.subscribe()
    }

    fn notify(&self, notice: Notice) {
        // Nobody listening is fine; notices are best-effort.
        let _ = self.notices.send(notice);
    }

    // ------------------------------------------------------------------
    // Loads
    // ------------------------------------------------------------------

    /// Fetch the feed and track every post in it.
    ///
    /// Returns the ids in feed order.
    pub async fn load_posts(&self) -> Result<Vec<PostId>, ClientError> {
        let posts = match self.api.list_posts().await {
            Ok(posts) => posts,
            Err(err) => {
                self.notify(Notice::error("Failed to load posts!"));
                return Err(err.into());
            }
        };
        let ids = posts.iter().map(|p| p.id).collect();
        for post in posts {
            self.insert_post(post).await;
        }
        self.notify(Notice::success("Posts loaded successfully!"));
        Ok(ids)
    }

    /// Track a post fetched elsewhere, or refresh one already tracked.
    ///
    /// A refresh applies the server's counts unless a mutation is in
    /// flight for the post, in which case the optimistic counts stand
    /// until that mutation settles.
    pub async fn insert_post(&self, post: Post) {
        let mut posts = self.posts.write().await;
        match posts.get_mut(&post.id) {
            Some(cell) => {
                if !cell.seq.in_flight() {
                    cell.engagement.apply_counts(post.like_count, post.dislike_count);
                }
                cell.post = post;
                cell.publish();
            }
            None => {
                posts.insert(post.id, PostCell::new(post));
            }
        }
    }

    /// Fetch the viewer's reaction to a post and record it.
    ///
    /// Called once per post view, before the first toggle. Skipped
    /// silently if the post is untracked or has a mutation in flight.
    pub async fn prime_interaction(&self, post: PostId) -> Result<(), ClientError> {
        let reaction = self.api.interaction_status(post).await?;
        let mut posts = self.posts.write().await;
        if let Some(cell) = posts.get_mut(&post) {
            if !cell.seq.in_flight() {
                cell.engagement.reaction = reaction;
                cell.publish();
            }
        }
        Ok(())
    }

    /// Fetch a post's comment thread and replace the local copy wholesale.
    ///
    /// The comment count follows the refreshed thread length. Never merges
    /// or diffs.
    pub async fn load_comments(&self, post: PostId) -> Result<(), ClientError> {
        let comments = self.api.comments(post).await?;
        let mut posts = self.posts.write().await;
        if let Some(cell) = posts.get_mut(&post) {
            cell.post.comment_count = comments.len() as u32;
            cell.thread.replace(comments);
            cell.publish();
        }
        Ok(())
    }

    /// Fetch an author's profile, tracking the author if new.
    pub async fn load_profile(&self, author: UserId) -> Result<Profile, ClientError> {
        let profile = self.api.profile(author).await?;
        let mut authors = self.authors.write().await;
        match authors.get_mut(&author) {
            Some(cell) => {
                cell.username = profile.username.clone();
                cell.email = profile.email.clone();
                if !cell.seq.in_flight() {
                    cell.follow.apply_profile(&profile);
                }
                cell.publish();
            }
            None => {
                authors.insert(author, AuthorCell::new(author, &profile));
            }
        }
        Ok(profile)
    }

    /// Fetch an author's posts and track each of them.
    ///
    /// Nested comment previews are returned for display but never merged
    /// into tracked comment threads (they carry no ids).
    pub async fn load_author_posts(&self, author: UserId) -> Result<Vec<AuthorPost>, ClientError> {
        let author_posts = self.api.author_posts(author).await?;

        let author_name = {
            let authors = self.authors.read().await;
            authors
                .get(&author)
                .map(|c| c.username.clone())
                .unwrap_or_default()
        };

        let mut posts = self.posts.write().await;
        for ap in &author_posts {
            match posts.get_mut(&ap.id) {
                Some(cell) => {
                    if !cell.seq.in_flight() {
                        cell.engagement.apply_counts(ap.like_count, ap.dislike_count);
                    }
                    cell.post.comment_count = ap.comment_count;
                    cell.publish();
                }
                None => {
                    let post = Post {
                        id: ap.id,
                        title: ap.title.clone(),
                        content: ap.content.clone(),
                        author_id: author,
                        author_name: author_name.clone(),
                        like_count: ap.like_count,
                        dislike_count: ap.dislike_count,
                        comment_count: ap.comment_count,
                    };
                    posts.insert(ap.id, PostCell::new(post));
                }
            }
        }
        Ok(author_posts)
    }

    // ------------------------------------------------------------------
    // Bindings and eviction
    // ------------------------------------------------------------------

    /// Bind a view to a tracked post.
    pub async fn bind_post(&self, post: PostId) -> Option<PostBinding> {
        let posts = self.posts.read().await;
        posts.get(&post).map(|cell| PostBinding {
            rx: cell.subscribe(),
        })
    }

    /// Bind a view to a tracked author.
    pub async fn bind_author(&self, author: UserId) -> Option<AuthorBinding> {
        let authors = self.authors.read().await;
        authors.get(&author).map(|cell| AuthorBinding {
            rx: cell.subscribe(),
        })
    }

    /// Stop tracking a post.
    ///
    /// Existing bindings keep their last snapshot and observe no further
    /// changes; settlements still in flight for the post are discarded
    /// when they arrive.
    pub async fn evict_post(&self, post: PostId) {
        self.posts.write().await.remove(&post);
    }

    /// Stop tracking an author. Same late-settlement policy as
    /// [`evict_post`](Hub::evict_post).
    pub async fn evict_author(&self, author: UserId) {
        self.authors.write().await.remove(&author);
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Toggle the viewer's like on a post.
    ///
    /// Like -> None, Dislike -> Like (both counts move atomically),
    /// None -> Like. Optimistic; rolled back if the request fails.
    pub async fn toggle_like(&self, post: PostId) -> Result<Settlement, ClientError> {
        self.toggle_reaction(post, ToggleKind::Like).await
    }

    /// Toggle the viewer's dislike on a post (mirror of
    /// [`toggle_like`](Hub::toggle_like)).
    pub async fn toggle_dislike(&self, post: PostId) -> Result<Settlement, ClientError> {
        self.toggle_reaction(post, ToggleKind::Dislike).await
    }

    async fn toggle_reaction(
        &self,
        post: PostId,
        kind: ToggleKind,
    ) -> Result<Settlement, ClientError> {
        // Optimistic apply under the write lock; remember the pre-intent
        // snapshot for rollback.
        let (seq, snapshot, previous) = {
            let mut posts = self.posts.write().await;
            let Some(cell) = posts.get_mut(&post) else {
                return Ok(Settlement::Skipped(SkipReason::UnknownPost));
            };
            let snapshot = cell.engagement;
            let seq = cell.seq.issue();
            let previous = match kind {
                ToggleKind::Like => cell.engagement.toggle_like(),
                ToggleKind::Dislike => cell.engagement.toggle_dislike(),
            };
            cell.publish();
            (seq, snapshot, previous)
        };

        debug!(post = %post, seq, ?kind, "reaction toggle issued");

        let result = match kind {
            ToggleKind::Like => self.api.toggle_like(post).await,
            ToggleKind::Dislike => self.api.toggle_dislike(post).await,
        };

        let mut posts = self.posts.write().await;
        let Some(cell) = posts.get_mut(&post) else {
            debug!(post = %post, seq, "settlement for evicted post discarded");
            return Ok(Settlement::Superseded);
        };
        if !cell.seq.try_settle(seq) {
            warn!(post = %post, seq, "stale reaction settlement discarded");
            return Ok(Settlement::Superseded);
        }

        match result {
            Ok(()) => {
                self.notify(match (kind, previous) {
                    (ToggleKind::Like, Reaction::Like) => Notice::success("Unliked post"),
                    (ToggleKind::Like, _) => Notice::success("Liked post"),
                    (ToggleKind::Dislike, Reaction::Dislike) => {
                        Notice::warning("Removed dislike")
                    }
                    (ToggleKind::Dislike, _) => Notice::warning("Disliked post"),
                });
                Ok(Settlement::Confirmed)
            }
            Err(err) => {
                // Roll back only if no newer intent is in flight; a newer
                // toggle already owns the optimistic state.
                if cell.seq.is_latest(seq) {
                    cell.engagement = snapshot;
                    cell.publish();
                }
                warn!(post = %post, seq, error = %err, "reaction toggle rolled back");
                self.notify(Notice::error(err.surface_message()));
                Err(err.into())
            }
        }
    }

    /// Toggle the viewer's follow relationship with an author.
    ///
    /// Self-follow is rejected locally and issues no request. On
    /// confirmation the author's counts are re-synchronized from an
    /// authoritative profile fetch; on failure the optimistic flip and
    /// count delta both revert.
    pub async fn toggle_follow(&self, author: UserId) -> Result<Settlement, ClientError> {
        if author == self.viewer {
            debug!(author = %author, "self-follow rejected locally");
            return Ok(Settlement::Skipped(SkipReason::SelfFollow));
        }

        let (seq, snapshot) = {
            let mut authors = self.authors.write().await;
            let Some(cell) = authors.get_mut(&author) else {
                return Ok(Settlement::Skipped(SkipReason::UnknownAuthor));
            };
            let snapshot = cell.follow.clone();
            let seq = cell.seq.issue();
            cell.follow.toggle();
            cell.publish();
            (seq, snapshot)
        };

        debug!(author = %author, seq, "follow toggle issued");

        let result = self.api.toggle_follow(author).await;

        {
            let mut authors = self.authors.write().await;
            let Some(cell) = authors.get_mut(&author) else {
                return Ok(Settlement::Superseded);
            };
            if !cell.seq.try_settle(seq) {
                warn!(author = %author, seq, "stale follow settlement discarded");
                return Ok(Settlement::Superseded);
            }
            match result {
                Ok(ack) => {
                    self.notify(Notice::success(ack.message));
                }
                Err(err) => {
                    if cell.seq.is_latest(seq) {
                        cell.follow = snapshot;
                        cell.publish();
                    }
                    warn!(author = %author, seq, error = %err, "follow toggle rolled back");
                    self.notify(Notice::error(err.surface_message()));
                    return Err(err.into());
                }
            }
        }

        // Authoritative refresh: correct for concurrent follows by other
        // viewers. Failure here is non-fatal; the optimistic counts stand.
        match self.api.profile(author).await {
            Ok(profile) => {
                let mut authors = self.authors.write().await;
                if let Some(cell) = authors.get_mut(&author) {
                    if cell.seq.is_latest(seq) {
                        cell.username = profile.username.clone();
                        cell.email = profile.email.clone();
                        cell.follow.apply_profile(&profile);
                        cell.publish();
                    }
                }
            }
            Err(err) => {
                warn!(author = %author, error = %err, "post-follow profile refresh failed");
            }
        }

        Ok(Settlement::Confirmed)
    }

    /// Submit a comment on a post.
    ///
    /// Not optimistic: the thread only changes when the post-confirmation
    /// refresh lands, so the server-assigned id is never guessed and the
    /// new comment can never appear twice. Empty-after-trim text is a
    /// local no-op.
    pub async fn submit_comment(
        &self,
        post: PostId,
        text: &str,
    ) -> Result<Settlement, ClientError> {
        let Some(content) = normalize_comment(text) else {
            debug!(post = %post, "empty comment skipped");
            return Ok(Settlement::Skipped(SkipReason::EmptyComment));
        };

        {
            let mut posts = self.posts.write().await;
            let Some(cell) = posts.get_mut(&post) else {
                return Ok(Settlement::Skipped(SkipReason::UnknownPost));
            };
            if !cell.thread.begin_submission() {
                debug!(post = %post, "duplicate submission while in flight skipped");
                return Ok(Settlement::Skipped(SkipReason::SubmissionInFlight));
            }
            cell.publish();
        }

        let result = self.api.add_comment(post, content).await;

        {
            let mut posts = self.posts.write().await;
            let Some(cell) = posts.get_mut(&post) else {
                return Ok(Settlement::Superseded);
            };
            cell.thread.finish_submission();
            cell.publish();
        }

        match result {
            Ok(()) => {
                // The submission stands even if the refresh fails; the
                // thread just stays stale until the next load.
                if let Err(err) = self.load_comments(post).await {
                    warn!(post = %post, error = %err, "post-submit comment refresh failed");
                }
                Ok(Settlement::Confirmed)
            }
            Err(err) => {
                self.notify(Notice::error(err.surface_message()));
                Err(err.into())
            }
        }
    }
}
