//! Settlement classification for mutation intents.
//!
//! Every intent (`toggle_like`, `toggle_dislike`, `toggle_follow`,
//! `submit_comment`) resolves to a [`Settlement`] on the success path.
//! Local precondition rejections are settlements, not errors: no request
//! was issued and no state changed.

/// How a mutation intent settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// The server confirmed the mutation; the optimistic change was kept.
    Confirmed,

    /// A local precondition rejected the intent before any request was
    /// issued. State is unchanged.
    Skipped(SkipReason),

    /// The response arrived after a newer intent for the same entity had
    /// already settled, or after the entity was evicted. The stale
    /// settlement was discarded without touching state.
    Superseded,
}

/// Local precondition that rejected an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Comment text was empty after trimming.
    EmptyComment,

    /// The viewer attempted to follow themselves.
    SelfFollow,

    /// A comment submission for this post is already in flight.
    SubmissionInFlight,

    /// The post is not tracked by the hub.
    UnknownPost,

    /// The author is not tracked by the hub.
    UnknownAuthor,
}

impl Settlement {
    /// Whether the server confirmed the mutation.
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Settlement::Confirmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_confirmed() {
        assert!(Settlement::Confirmed.is_confirmed());
        assert!(!Settlement::Superseded.is_confirmed());
        assert!(!Settlement::Skipped(SkipReason::SelfFollow).is_confirmed());
    }
}
