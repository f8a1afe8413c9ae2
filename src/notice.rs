//! User-visible Notices
//!
//! Transient toast messages raised by failed or completed actions.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

impl NoticeLevel {
    pub fn css_class(self) -> &'static str {
        match self {
            NoticeLevel::Success => "toast success",
            NoticeLevel::Error => "toast error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub description: Option<String>,
    pub level: NoticeLevel,
    pub duration: Duration,
}

const SHORT: Duration = Duration::from_secs(3);
const LONG: Duration = Duration::from_secs(5);

impl Notice {
    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
            level: NoticeLevel::Error,
            duration: SHORT,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            level: NoticeLevel::Success,
            duration: SHORT,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Overview-page notices stay up longer
    pub fn long(self) -> Self {
        self.with_duration(LONG)
    }

    // Feed notices

    pub fn unauthenticated() -> Self {
        Self::error("Error", "You must be connected to label posts.")
    }

    pub fn fetch_failed() -> Self {
        Self::error("Error fetching posts", "Please try again later.")
    }

    pub fn submit_failed() -> Self {
        Self::error("Error", "Failed to submit label. Please try again.")
    }

    pub fn nothing_to_label() -> Self {
        Self::error("Error", "There is no post to label yet.")
    }
}

/// A notice with its display slot id
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_notices_are_short_errors() {
        for notice in [Notice::unauthenticated(), Notice::fetch_failed(), Notice::submit_failed()] {
            assert_eq!(notice.level, NoticeLevel::Error);
            assert_eq!(notice.duration, Duration::from_secs(3));
        }
    }

    #[test]
    fn test_long_notice() {
        let notice = Notice::error("Error", "Failed to fetch your datasets.").long();
        assert_eq!(notice.duration, Duration::from_secs(5));
        assert_eq!(notice.level.css_class(), "toast error");
    }
}
