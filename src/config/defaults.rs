// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Reveal**: Initial divider position of the compare slider
//! - **Keyboard**: Arrow key step sizes
//! - **Diagnostics**: Event buffer sizing

use crate::domain::compare::{keyboard_step_bounds, reveal_bounds};
use crate::domain::diagnostics::buffer_capacity_bounds;

// ==========================================================================
// Reveal Defaults
// ==========================================================================

/// Initial divider fraction before any user interaction.
///
/// 0.25 keeps both images visibly represented on first display.
pub const DEFAULT_REVEAL_FRACTION: f32 = reveal_bounds::DEFAULT;

/// Smallest valid reveal fraction.
pub const MIN_REVEAL_FRACTION: f32 = reveal_bounds::MIN;

/// Largest valid reveal fraction.
pub const MAX_REVEAL_FRACTION: f32 = reveal_bounds::MAX;

// ==========================================================================
// Keyboard Defaults
// ==========================================================================

/// Arrow key step in percentage points.
pub const DEFAULT_KEYBOARD_STEP_PERCENT: f32 = keyboard_step_bounds::DEFAULT;

/// Arrow key step with Shift held, in percentage points.
pub const DEFAULT_KEYBOARD_LARGE_STEP_PERCENT: f32 = keyboard_step_bounds::DEFAULT_LARGE;

/// Minimum keyboard step in percentage points.
pub const MIN_KEYBOARD_STEP_PERCENT: f32 = keyboard_step_bounds::MIN;

/// Maximum keyboard step in percentage points.
pub const MAX_KEYBOARD_STEP_PERCENT: f32 = keyboard_step_bounds::MAX;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_CAPACITY: usize = buffer_capacity_bounds::DEFAULT;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_CAPACITY: usize = buffer_capacity_bounds::MIN;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_CAPACITY: usize = buffer_capacity_bounds::MAX;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_default_is_inside_bounds() {
        assert!(DEFAULT_REVEAL_FRACTION >= MIN_REVEAL_FRACTION);
        assert!(DEFAULT_REVEAL_FRACTION <= MAX_REVEAL_FRACTION);
    }

    #[test]
    fn keyboard_defaults_are_inside_bounds() {
        assert!(DEFAULT_KEYBOARD_STEP_PERCENT >= MIN_KEYBOARD_STEP_PERCENT);
        assert!(DEFAULT_KEYBOARD_LARGE_STEP_PERCENT <= MAX_KEYBOARD_STEP_PERCENT);
        assert!(DEFAULT_KEYBOARD_STEP_PERCENT < DEFAULT_KEYBOARD_LARGE_STEP_PERCENT);
    }
}
