//! Per-author follow relationship state.
//!
//! The follow boolean and the author's follower/following counts move in
//! lockstep: a follow transition is always +-1 on `followers_count`, never
//! an independent count edit.

use crate::core::Profile;

/// The viewer's follow relationship with one author, plus that author's
/// profile counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FollowState {
    /// Whether the viewer follows this author.
    pub following: bool,
    /// Number of users following the author.
    pub followers_count: u32,
    /// Number of users the author follows.
    pub following_count: u32,
}

impl FollowState {
    /// Build the state from an authoritative profile response.
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            following: profile.is_following,
            followers_count: profile.followers_count,
            following_count: profile.following_count,
        }
    }

    /// Flip the follow relationship, moving `followers_count` with it.
    ///
    /// Returns the new `following` value.
    pub fn toggle(&mut self) -> bool {
        if self.following {
            self.following = false;
            self.followers_count = self.followers_count.saturating_sub(1);
        } else {
            self.following = true;
            self.followers_count += 1;
        }
        self.following
    }

    /// Replace counts and follow flag with server-authoritative values.
    ///
    /// Used after a confirmed toggle to correct for concurrent follows or
    /// unfollows by other viewers.
    pub fn apply_profile(&mut self, profile: &Profile) {
        self.following = profile.is_following;
        self.followers_count = profile.followers_count;
        self.following_count = profile.following_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(followers: u32, following: u32, is_following: bool) -> Profile {
        Profile {
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            followers_count: followers,
            following_count: following,
            is_following,
        }
    }

    #[test]
    fn test_from_profile() {
        let state = FollowState::from_profile(&profile(12, 3, true));
        assert!(state.following);
        assert_eq!(state.followers_count, 12);
        assert_eq!(state.following_count, 3);
    }

    #[test]
    fn test_toggle_moves_count_in_lockstep() {
        let mut state = FollowState::from_profile(&profile(10, 0, false));

        assert!(state.toggle());
        assert_eq!(state.followers_count, 11);

        assert!(!state.toggle());
        assert_eq!(state.followers_count, 10);
    }

    #[test]
    fn test_unfollow_never_underflows() {
        let mut state = FollowState {
            following: true,
            followers_count: 0,
            following_count: 0,
        };
        state.toggle();
        assert_eq!(state.followers_count, 0);
    }

    #[test]
    fn test_apply_profile_corrects_concurrent_drift() {
        let mut state = FollowState::from_profile(&profile(10, 2, false));
        state.toggle();

        // Another viewer followed concurrently; the server says 12.
        state.apply_profile(&profile(12, 2, true));
        assert_eq!(state.followers_count, 12);
        assert!(state.following);
    }
}
