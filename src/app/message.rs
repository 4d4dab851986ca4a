// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and startup flags.

use std::path::PathBuf;

use crate::error::Error;
use crate::media::{FeedSelection, MediaPair};
use crate::ui::compare;
use iced::window;

#[derive(Debug, Clone)]
pub enum Message {
    /// Message for the compare panel at `index`.
    Compare {
        index: usize,
        message: compare::Message,
    },
    FeedLoaded(Result<FeedSelection, Error>),
    WindowCloseRequested(window::Id),
}

/// What to compare, as given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Source {
    #[default]
    None,
    /// A posts feed; one panel per compare post.
    Feed(PathBuf),
    /// Two images; a single panel.
    Pair(MediaPair),
}

/// Runtime flags passed in from the launcher.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_COMPARE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Initial divider fraction; overrides the config file.
    pub fraction: Option<f32>,
    /// Where to write the diagnostics report when the window closes.
    pub diagnostics_out: Option<PathBuf>,
    pub source: Source,
}
