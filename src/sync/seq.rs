//! Per-entity mutation sequence tracking.
//!
//! Every mutation intent against a post or author is tagged with a
//! monotonically increasing sequence number for that entity. Settlements
//! (success or failure) apply in sequence order, not arrival order: a
//! response whose sequence is at or below one already settled is discarded.
//! Last user intent wins.

/// Sequence tracker for a single entity (one post, or one author).
///
/// Tracks:
/// - `issued`: highest sequence number handed out to an intent
/// - `settled`: highest sequence number whose settlement was applied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeqTracker {
    /// Highest sequence handed out (monotonic).
    issued: u64,
    /// Highest sequence whose settlement was applied.
    settled: u64,
}

impl SeqTracker {
    /// Create a new tracker with no intents issued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next sequence number for a new intent.
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Highest sequence handed out.
    pub fn issued(&self) -> u64 {
        self.issued
    }

    /// Highest sequence settled.
    pub fn settled(&self) -> u64 {
        self.settled
    }

    /// Whether any intent is still awaiting settlement.
    pub fn in_flight(&self) -> bool {
        self.issued > self.settled
    }

    /// Attempt to settle the given sequence.
    ///
    /// Returns `true` and records the sequence if it is newer than every
    /// settlement applied so far; returns `false` for stale out-of-order
    /// responses, which the caller must discard.
    pub fn try_settle(&mut self, seq: u64) -> bool {
        if seq > self.settled {
            self.settled = seq;
            true
        } else {
            false
        }
    }

    /// Whether the given sequence is the most recently issued intent.
    ///
    /// Rollback is only safe for the latest intent: reverting an older
    /// one would clobber a newer optimistic change still in flight.
    pub fn is_latest(&self, seq: u64) -> bool {
        seq == self.issued
    }

    /// Reset the tracker.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tracker() {
        let tracker = SeqTracker::new();
        assert_eq!(tracker.issued(), 0);
        assert_eq!(tracker.settled(), 0);
        assert!(!tracker.in_flight());
    }

    #[test]
    fn test_issue_is_monotonic() {
        let mut tracker = SeqTracker::new();
        assert_eq!(tracker.issue(), 1);
        assert_eq!(tracker.issue(), 2);
        assert_eq!(tracker.issue(), 3);
        assert!(tracker.in_flight());
    }

    #[test]
    fn test_settle_in_order() {
        let mut tracker = SeqTracker::new();
        let a = tracker.issue();
        let b = tracker.issue();

        assert!(tracker.try_settle(a));
        assert!(tracker.try_settle(b));
        assert!(!tracker.in_flight());
    }

    #[test]
    fn test_out_of_order_settlement_discarded() {
        let mut tracker = SeqTracker::new();
        let a = tracker.issue();
        let b = tracker.issue();

        // Response for b arrives first
        assert!(tracker.try_settle(b));
        // Late response for a must be discarded
        assert!(!tracker.try_settle(a));
        assert_eq!(tracker.settled(), b);
    }

    #[test]
    fn test_duplicate_settlement_discarded() {
        let mut tracker = SeqTracker::new();
        let a = tracker.issue();
        assert!(tracker.try_settle(a));
        assert!(!tracker.try_settle(a));
    }

    #[test]
    fn test_is_latest() {
        let mut tracker = SeqTracker::new();
        let a = tracker.issue();
        assert!(tracker.is_latest(a));

        let b = tracker.issue();
        assert!(!tracker.is_latest(a));
        assert!(tracker.is_latest(b));
    }

    #[test]
    fn test_reset() {
        let mut tracker = SeqTracker::new();
        tracker.issue();
        tracker.issue();
        tracker.try_settle(1);

        tracker.reset();
        assert_eq!(tracker.issued(), 0);
        assert_eq!(tracker.settled(), 0);
    }
}
