// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Feed(FeedError),
    Image(String),
}

/// Specific failures while reading the posts feed.
/// Used to pick a localized message for the startup notice.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedError {
    /// The feed is not valid JSON or not an array of posts
    Malformed(String),

    /// The feed parsed but holds no compare post
    NoComparePosts,

    /// A compare post has no `media` field
    MissingMedia {
        /// Position of the post in the feed
        index: usize,
    },

    /// A compare post has no second media source (`media2` / `mediaAlt`)
    MissingSecondMedia {
        /// Position of the post in the feed
        index: usize,
    },
}

impl FeedError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FeedError::Malformed(_) => "error-feed-malformed",
            FeedError::NoComparePosts => "error-feed-no-compare-posts",
            FeedError::MissingMedia { .. } => "error-feed-missing-media",
            FeedError::MissingSecondMedia { .. } => "error-feed-missing-second-media",
        }
    }
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::Malformed(msg) => write!(f, "Malformed feed: {}", msg),
            FeedError::NoComparePosts => write!(f, "Feed contains no compare post"),
            FeedError::MissingMedia { index } => write!(f, "Compare post #{} has no media", index),
            FeedError::MissingSecondMedia { index } => {
                write!(f, "Compare post #{} has no second media", index)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Feed(e) => write!(f, "Feed Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<FeedError> for Error {
    fn from(err: FeedError) -> Self {
        Error::Feed(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Feed(FeedError::Malformed(err.to_string()))
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn json_error_becomes_malformed_feed() {
        let json_err = serde_json::from_str::<Vec<u32>>("{ nope").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Feed(FeedError::Malformed(_))));
    }

    #[test]
    fn feed_error_i18n_keys() {
        assert_eq!(
            FeedError::NoComparePosts.i18n_key(),
            "error-feed-no-compare-posts"
        );
        assert_eq!(
            FeedError::MissingSecondMedia { index: 3 }.i18n_key(),
            "error-feed-missing-second-media"
        );
    }

    #[test]
    fn feed_error_display_names_post_index() {
        let err = Error::from(FeedError::MissingSecondMedia { index: 4 });
        assert_eq!(
            format!("{}", err),
            "Feed Error: Compare post #4 has no second media"
        );
    }
}
