// SPDX-License-Identifier: MPL-2.0
//! Compare panel component: one before/after widget with its images,
//! caption and accessible status line.
//!
//! Follows the "state down, messages up" pattern: the app routes
//! [`Message`]s to a [`ComparePanel`], which updates its slider and returns
//! an [`Effect`] describing what happened for diagnostics.

pub mod input;
pub mod panel;
pub mod view;

pub use panel::{ComparePanel, PanelSettings, SliderAccessibility};
pub use view::ViewContext;

use crate::domain::compare::{DragSummary, ImageSlot, LockedSize, PointerId};
use crate::error::Error;
use crate::media::ImageData;
use crate::ui::widgets::compare_area::AreaEvent;

#[derive(Debug, Clone)]
pub enum Message {
    /// Input reported by the panel's compare area.
    Area(AreaEvent),
    /// An image finished decoding, successfully or not.
    ImageLoaded {
        slot: ImageSlot,
        result: Result<ImageData, Error>,
    },
}

/// Side effects a panel reports back to the app.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    ImageLoaded(ImageSlot),
    ImageFailed { slot: ImageSlot, message: String },
    /// Both images and the container are ready; images locked to `size`.
    InitialLayout(LockedSize),
    /// The container changed size after layout.
    Resized(LockedSize),
    DragStarted(PointerId),
    DragEnded { summary: DragSummary, percent: u8 },
    KeyboardStep { percent: u8 },
}
