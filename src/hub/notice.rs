//! User-facing notices.
//!
//! The engine never renders notifications itself; it emits [`Notice`]
//! events on a broadcast channel and the presentation layer delivers
//! them (toasts, banners, whatever it likes). Every notice is
//! dismissible and none is fatal.

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// A mutation was confirmed.
    Success,
    /// Informational.
    Info,
    /// A confirmed but cautionary outcome (a registered dislike, say).
    Warning,
    /// A recoverable failure; local state has been rolled back.
    Error,
}

/// A user-visible, dismissible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity.
    pub level: NoticeLevel,
    /// Message text, preferring server-provided wording where available.
    pub message: String,
}

impl Notice {
    /// Build a success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    /// Build an info notice.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    /// Build a warning notice.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    /// Build an error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_level() {
        assert_eq!(Notice::success("ok").level, NoticeLevel::Success);
        assert_eq!(Notice::warning("hm").level, NoticeLevel::Warning);
        assert_eq!(Notice::error("no").level, NoticeLevel::Error);
        assert_eq!(Notice::info("fyi").message, "fyi");
    }
}
