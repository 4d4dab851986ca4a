// SPDX-License-Identifier: MPL-2.0
//! Before/after compare slider domain types.
//!
//! Everything here is independent of the GUI toolkit: positions are plain
//! `f32` window coordinates and keys arrive as [`KeyCommand`] values.

pub mod geometry;
pub mod keyboard;
pub mod newtypes;
pub mod pointer;
pub mod slider;

// Re-export commonly used types
pub use geometry::{ContainerRect, LockedSize};
pub use keyboard::{KeyCommand, KeyboardSteps};
pub use newtypes::{keyboard_step_bounds, reveal_bounds, KeyboardStep, RevealFraction};
pub use pointer::{DragSummary, PointerId, PointerSession};
pub use slider::{CompareSlider, CompareState, ImageSlot, LoadStatus, ResizeOutcome};
