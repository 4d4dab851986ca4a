// SPDX-License-Identifier: MPL-2.0
//! The two image sources shown by one compare widget.

use std::path::{Path, PathBuf};

use crate::domain::compare::ImageSlot;

/// Before/after image sources. Read-only once a widget is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaPair {
    before: PathBuf,
    after: PathBuf,
}

impl MediaPair {
    #[must_use]
    pub fn new(before: impl Into<PathBuf>, after: impl Into<PathBuf>) -> Self {
        Self {
            before: before.into(),
            after: after.into(),
        }
    }

    #[must_use]
    pub fn before(&self) -> &Path {
        &self.before
    }

    #[must_use]
    pub fn after(&self) -> &Path {
        &self.after
    }

    /// Path of the image in `slot`.
    #[must_use]
    pub fn path(&self, slot: ImageSlot) -> &Path {
        match slot {
            ImageSlot::Before => &self.before,
            ImageSlot::After => &self.after,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_selects_slot() {
        let pair = MediaPair::new("a.png", "b.png");
        assert_eq!(pair.path(ImageSlot::Before), Path::new("a.png"));
        assert_eq!(pair.path(ImageSlot::After), Path::new("b.png"));
    }
}
