// SPDX-License-Identifier: MPL-2.0
//! Compare slider newtypes.
//!
//! Type-safe wrappers for the reveal position and keyboard step sizes,
//! ensuring they are always within valid ranges.

// =============================================================================
// Reveal Bounds
// =============================================================================

/// Reveal fraction bounds (0.0 to 1.0).
pub mod reveal_bounds {
    /// Fully "before" (divider at the left edge).
    pub const MIN: f32 = 0.0;
    /// Fully "after" (divider at the right edge).
    pub const MAX: f32 = 1.0;
    /// Initial fraction, chosen so both images are visible before interaction.
    pub const DEFAULT: f32 = 0.25;
}

/// Keyboard step bounds, in percentage points.
pub mod keyboard_step_bounds {
    /// Minimum step.
    pub const MIN: f32 = 0.5;
    /// Maximum step.
    pub const MAX: f32 = 50.0;
    /// Default arrow key step.
    pub const DEFAULT: f32 = 2.0;
    /// Default arrow key step with Shift held.
    pub const DEFAULT_LARGE: f32 = 10.0;
}

// =============================================================================
// RevealFraction
// =============================================================================

/// Normalized horizontal divider position, guaranteed to be within `[0, 1]`.
///
/// Non-finite input maps to `0.0`.
///
/// # Example
///
/// ```
/// use iced_compare::domain::compare::RevealFraction;
///
/// let half = RevealFraction::new(0.5);
/// assert_eq!(half.percent(), 50);
///
/// // Values outside range are clamped
/// assert_eq!(RevealFraction::new(1.7).value(), 1.0);
/// assert_eq!(RevealFraction::new(-3.0).value(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct RevealFraction(f32);

impl RevealFraction {
    /// Left edge.
    pub const MIN: Self = Self(reveal_bounds::MIN);
    /// Right edge.
    pub const MAX: Self = Self(reveal_bounds::MAX);

    /// Creates a new fraction, clamping to the valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_finite() {
            Self(value.clamp(reveal_bounds::MIN, reveal_bounds::MAX))
        } else {
            Self::MIN
        }
    }

    /// Creates a fraction from a percentage (0–100).
    #[must_use]
    pub fn from_percent(percent: f32) -> Self {
        Self::new(percent / 100.0)
    }

    /// Returns the raw fraction.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the rounded integer percentage (0–100), as exposed by the
    /// accessible slider value.
    #[must_use]
    pub fn percent(self) -> u8 {
        // Clamped to [0, 1] so the cast cannot truncate.
        (self.0 * 100.0).round() as u8
    }

    /// Moves the fraction by `points` percentage points, clamping to range.
    #[must_use]
    pub fn offset_by_points(self, points: f32) -> Self {
        Self::new(self.0 + points / 100.0)
    }

    /// Returns true if the divider is at the left edge.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= reveal_bounds::MIN
    }

    /// Returns true if the divider is at the right edge.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= reveal_bounds::MAX
    }
}

impl Default for RevealFraction {
    fn default() -> Self {
        Self(reveal_bounds::DEFAULT)
    }
}

// =============================================================================
// KeyboardStep
// =============================================================================

/// Arrow key step in percentage points (0.5–50).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyboardStep(f32);

impl KeyboardStep {
    /// Creates a new step, clamping to the valid range.
    #[must_use]
    pub fn new(points: f32) -> Self {
        if points.is_finite() {
            Self(points.clamp(keyboard_step_bounds::MIN, keyboard_step_bounds::MAX))
        } else {
            Self::default()
        }
    }

    /// Default step used while Shift is held.
    #[must_use]
    pub fn large() -> Self {
        Self(keyboard_step_bounds::DEFAULT_LARGE)
    }

    /// Returns the step in percentage points.
    #[must_use]
    pub fn points(self) -> f32 {
        self.0
    }
}

impl Default for KeyboardStep {
    fn default() -> Self {
        Self(keyboard_step_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_abs_diff_eq!(RevealFraction::new(-0.5).value(), 0.0);
        assert_abs_diff_eq!(RevealFraction::new(1.5).value(), 1.0);
        assert_abs_diff_eq!(RevealFraction::new(0.4).value(), 0.4);
    }

    #[test]
    fn non_finite_maps_to_min() {
        assert_eq!(RevealFraction::new(f32::NAN), RevealFraction::MIN);
        assert_eq!(RevealFraction::new(f32::INFINITY), RevealFraction::MIN);
    }

    #[test]
    fn default_is_quarter() {
        assert_abs_diff_eq!(RevealFraction::default().value(), 0.25);
    }

    #[test]
    fn percent_rounds_to_integer() {
        assert_eq!(RevealFraction::new(0.0).percent(), 0);
        assert_eq!(RevealFraction::new(0.254).percent(), 25);
        assert_eq!(RevealFraction::new(0.257).percent(), 26);
        assert_eq!(RevealFraction::new(1.0).percent(), 100);
    }

    #[test]
    fn offset_by_points_clamps() {
        let near_end = RevealFraction::new(0.95);
        assert!(near_end.offset_by_points(10.0).is_max());
        let near_start = RevealFraction::new(0.01);
        assert!(near_start.offset_by_points(-2.0).is_min());
        assert_abs_diff_eq!(
            RevealFraction::new(0.5).offset_by_points(2.0).value(),
            0.52,
            epsilon = 1e-6
        );
    }

    #[test]
    fn from_percent_scales() {
        assert_abs_diff_eq!(RevealFraction::from_percent(75.0).value(), 0.75);
        assert!(RevealFraction::from_percent(250.0).is_max());
    }

    #[test]
    fn keyboard_step_clamps_and_defaults() {
        assert_abs_diff_eq!(KeyboardStep::default().points(), 2.0);
        assert_abs_diff_eq!(KeyboardStep::large().points(), 10.0);
        assert_abs_diff_eq!(KeyboardStep::new(0.0).points(), keyboard_step_bounds::MIN);
        assert_abs_diff_eq!(KeyboardStep::new(99.0).points(), keyboard_step_bounds::MAX);
        assert_eq!(KeyboardStep::new(f32::NAN), KeyboardStep::default());
    }
}
