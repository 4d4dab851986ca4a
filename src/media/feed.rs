// SPDX-License-Identifier: MPL-2.0
//! Posts feed parsing.
//!
//! The feed is a JSON array of post records. Only compare posts are kept;
//! every other post kind is ignored, as are unknown fields.
//!
//! ```json
//! [
//!   { "type": "compare", "media": "a.png", "media2": "b.png",
//!     "caption": "Denoise", "mediaBoxW": "420px", "mediaBoxH": 300 }
//! ]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::pair::MediaPair;
use crate::error::{Error, FeedError, Result};

/// Post kind that selects the compare widget.
const COMPARE_KIND: &str = "compare";

/// One record of the feed, as written by hand.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub layout: Option<String>,
    pub media: Option<String>,
    pub media2: Option<String>,
    pub media_alt: Option<String>,
    pub caption: Option<String>,
    pub media_box_w: Option<BoxLength>,
    pub media_box_h: Option<BoxLength>,
}

impl Post {
    /// True for `"type": "compare"` or `"layout": "compare"`, any case.
    #[must_use]
    pub fn is_compare(&self) -> bool {
        [&self.kind, &self.layout]
            .into_iter()
            .flatten()
            .any(|value| value.trim().eq_ignore_ascii_case(COMPARE_KIND))
    }

    /// `media2`, falling back to `mediaAlt`. Empty strings count as absent.
    #[must_use]
    pub fn second_media(&self) -> Option<&str> {
        non_empty(self.media2.as_deref()).or_else(|| non_empty(self.media_alt.as_deref()))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// A container dimension: a bare number or a CSS length string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BoxLength {
    Number(f32),
    Css(String),
}

impl BoxLength {
    /// Pixel size, or `None` for lengths that fill the available space
    /// (`"60%"`, `"auto"`, non-positive values).
    #[must_use]
    pub fn pixels(&self) -> Option<f32> {
        let value = match self {
            BoxLength::Number(n) => *n,
            BoxLength::Css(s) => {
                let s = s.trim();
                let digits = s.strip_suffix("px").unwrap_or(s).trim();
                digits.parse::<f32>().ok()?
            }
        };
        (value.is_finite() && value > 0.0).then_some(value)
    }
}

/// A compare post ready to become a widget.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparePost {
    pub pair: MediaPair,
    pub caption: Option<String>,
    /// Fixed container width in pixels; `None` fills.
    pub box_width: Option<f32>,
    /// Fixed container height in pixels; `None` fills.
    pub box_height: Option<f32>,
}

/// Compare posts of a feed plus the posts that had to be skipped.
#[derive(Debug, Clone, Default)]
pub struct FeedSelection {
    pub posts: Vec<ComparePost>,
    pub skipped: Vec<FeedError>,
}

/// Parses feed JSON text.
///
/// # Errors
///
/// Returns [`FeedError::Malformed`] if the text is not an array of posts.
pub fn parse_feed(json: &str) -> Result<Vec<Post>> {
    let posts = serde_json::from_str::<Vec<Post>>(json)?;
    Ok(posts)
}

/// Keeps the compare posts, resolving relative media paths against `base_dir`.
#[must_use]
pub fn select_compare_posts(posts: &[Post], base_dir: &Path) -> FeedSelection {
    let mut selection = FeedSelection::default();

    for (index, post) in posts.iter().enumerate().filter(|(_, p)| p.is_compare()) {
        let Some(first) = non_empty(post.media.as_deref()) else {
            selection.skipped.push(FeedError::MissingMedia { index });
            continue;
        };
        let Some(second) = post.second_media() else {
            selection.skipped.push(FeedError::MissingSecondMedia { index });
            continue;
        };

        selection.posts.push(ComparePost {
            pair: MediaPair::new(resolve(base_dir, first), resolve(base_dir, second)),
            caption: non_empty(post.caption.as_deref()).map(str::to_owned),
            box_width: post.media_box_w.as_ref().and_then(BoxLength::pixels),
            box_height: post.media_box_h.as_ref().and_then(BoxLength::pixels),
        });
    }

    selection
}

/// Reads a feed file and selects its compare posts.
///
/// # Errors
///
/// - [`Error::Io`] if the file cannot be read
/// - [`FeedError::Malformed`] for invalid JSON
/// - [`FeedError::NoComparePosts`] if the feed has no compare post at all
pub fn load_feed<P: AsRef<Path>>(path: P) -> Result<FeedSelection> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|e| Error::Io(format!("{}: {e}", path.display())))?;
    let posts = parse_feed(&json)?;

    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    let selection = select_compare_posts(&posts, base_dir);
    if selection.posts.is_empty() && selection.skipped.is_empty() {
        return Err(FeedError::NoComparePosts.into());
    }
    Ok(selection)
}

/// Reads and selects the feed on the blocking pool.
pub async fn load_feed_async(path: PathBuf) -> Result<FeedSelection> {
    tokio::task::spawn_blocking(move || load_feed(path))
        .await
        .map_err(|e| Error::Io(format!("feed load task failed: {e}")))?
}

fn resolve(base_dir: &Path, source: &str) -> PathBuf {
    let source = Path::new(source);
    if source.is_absolute() {
        source.to_path_buf()
    } else {
        base_dir.join(source)
    }
}
