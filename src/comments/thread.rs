//! Per-post comment thread.
//!
//! Append-only from the client's perspective: the thread only ever changes
//! by wholesale replacement with the server's ordered list, never by local
//! append, merge, or diff. Submission is guarded so identical content
//! cannot be submitted twice while a request is in flight.

use crate::core::Comment;

/// Ordered comment list for one post, plus submission lifecycle state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentThread {
    entries: Vec<Comment>,
    submitting: bool,
}

impl CommentThread {
    /// Create an empty thread.
    pub fn new() -> Self {
        Self::default()
    }

    /// The comments, in the order the server returned them.
    pub fn entries(&self) -> &[Comment] {
        &self.entries
    }

    /// Number of comments in the thread.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the thread has no comments.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a submission is currently in flight.
    ///
    /// Views use this to disable the input affordance while a request is
    /// pending.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Mark a submission as in flight.
    ///
    /// Returns `false` if one already is, in which case the caller must
    /// skip the duplicate submission.
    pub fn begin_submission(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    /// Mark the in-flight submission as finished (confirmed or failed).
    pub fn finish_submission(&mut self) {
        self.submitting = false;
    }

    /// Replace the thread wholesale with the server's ordered list.
    pub fn replace(&mut self, entries: Vec<Comment>) {
        self.entries = entries;
    }
}

/// Trim comment text for submission.
///
/// Returns `None` if the text is empty after trimming, in which case no
/// request may be issued and the intent is a no-op rather than an error.
pub fn normalize_comment(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CommentId, PostId};

    fn comment(id: u64, content: &str) -> Comment {
        Comment {
            id: CommentId(id),
            post_id: PostId(1),
            author_username: "ada".to_string(),
            content: content.to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut thread = CommentThread::new();
        thread.replace(vec![comment(1, "first"), comment(2, "second")]);
        assert_eq!(thread.len(), 2);

        // A second replace never merges with the previous contents
        thread.replace(vec![comment(3, "only")]);
        assert_eq!(thread.len(), 1);
        assert_eq!(thread.entries()[0].content, "only");
    }

    #[test]
    fn test_replace_keeps_server_order() {
        let mut thread = CommentThread::new();
        thread.replace(vec![comment(9, "z"), comment(1, "a")]);

        let ids: Vec<u64> = thread.entries().iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![9, 1]);
    }

    #[test]
    fn test_submission_guard() {
        let mut thread = CommentThread::new();
        assert!(!thread.is_submitting());

        assert!(thread.begin_submission());
        assert!(thread.is_submitting());

        // Duplicate submission while in flight is refused
        assert!(!thread.begin_submission());

        thread.finish_submission();
        assert!(thread.begin_submission());
    }

    #[test]
    fn test_normalize_comment() {
        assert_eq!(normalize_comment("  hello  "), Some("hello"));
        assert_eq!(normalize_comment("hello"), Some("hello"));
        assert_eq!(normalize_comment("   "), None);
        assert_eq!(normalize_comment(""), None);
        assert_eq!(normalize_comment("\n\t"), None);
    }
}
