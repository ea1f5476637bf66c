//! Per-post engagement state machine.
//!
//! Pure, synchronous core of the engagement store: the viewer's reaction
//! plus the post's aggregate counts, with mutually exclusive like/dislike
//! transitions. Count moves that cross Like<->Dislike happen in a single
//! transition so no intermediate state is observable.

use crate::core::Reaction;

/// A viewer's engagement with one post: reaction plus aggregate counts.
///
/// Invariant: at most one of {liked, disliked} holds, and every transition
/// keeps counts consistent with the reaction change that produced it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngagementState {
    /// The viewer's current reaction.
    pub reaction: Reaction,
    /// Aggregate like count.
    pub like_count: u32,
    /// Aggregate dislike count.
    pub dislike_count: u32,
}

impl EngagementState {
    /// Create a state with the given counts and no reaction.
    pub fn new(like_count: u32, dislike_count: u32) -> Self {
        Self {
            reaction: Reaction::None,
            like_count,
            dislike_count,
        }
    }

    /// Apply a like toggle.
    ///
    /// - `Like` -> `None`, like count -1
    /// - `Dislike` -> `Like`, dislike count -1 and like count +1 atomically
    /// - `None` -> `Like`, like count +1
    ///
    /// Returns the reaction held before the toggle.
    pub fn toggle_like(&mut self) -> Reaction {
        let previous = self.reaction;
        match previous {
            Reaction::Like => {
                self.reaction = Reaction::None;
                self.like_count = self.like_count.saturating_sub(1);
            }
            Reaction::Dislike => {
                self.reaction = Reaction::Like;
                self.dislike_count = self.dislike_count.saturating_sub(1);
                self.like_count += 1;
            }
            Reaction::None => {
                self.reaction = Reaction::Like;
                self.like_count += 1;
            }
        }
        previous
    }

    /// Apply a dislike toggle (mirror of [`toggle_like`]).
    ///
    /// Returns the reaction held before the toggle.
    ///
    /// [`toggle_like`]: EngagementState::toggle_like
    pub fn toggle_dislike(&mut self) -> Reaction {
        let previous = self.reaction;
        match previous {
            Reaction::Dislike => {
                self.reaction = Reaction::None;
                self.dislike_count = self.dislike_count.saturating_sub(1);
            }
            Reaction::Like => {
                self.reaction = Reaction::Dislike;
                self.like_count = self.like_count.saturating_sub(1);
                self.dislike_count += 1;
            }
            Reaction::None => {
                self.reaction = Reaction::Dislike;
                self.dislike_count += 1;
            }
        }
        previous
    }

    /// Replace the aggregate counts with server-authoritative values,
    /// keeping the viewer's reaction.
    pub fn apply_counts(&mut self, like_count: u32, dislike_count: u32) {
        self.like_count = like_count;
        self.dislike_count = dislike_count;
    }
}
