// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Follows the Elm-style "state down, messages up" pattern.
//!
//! - [`compare`] - One before/after panel: state, input mapping and view
//! - [`widgets`] - Custom Iced widgets (compare area, reveal clip)
//! - [`styles`] - Container styles for divider, grip and placeholder
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod compare;
pub mod design_tokens;
pub mod styles;
pub mod widgets;
