// SPDX-License-Identifier: MPL-2.0
//! Container geometry for the compare slider.
//!
//! Converts between absolute pointer coordinates, container-relative
//! offsets and reveal fractions. Pixel positions are always derived from
//! the fraction and the current width, never cached.

use super::newtypes::RevealFraction;

/// Region bounding one compare widget, in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ContainerRect {
    #[must_use]
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Returns true if `x` lies inside the horizontal extent of the container.
    #[must_use]
    pub fn contains_x(&self, x: f32) -> bool {
        x >= self.left && x <= self.left + self.width
    }

    /// Container-relative offset of an absolute pointer x, clamped to `[0, width]`.
    #[must_use]
    pub fn clamped_offset(&self, pointer_x: f32) -> f32 {
        (pointer_x - self.left).clamp(0.0, self.width)
    }

    /// Fraction corresponding to an absolute pointer x.
    ///
    /// A zero-width container has no meaningful position and yields `0`.
    #[must_use]
    pub fn fraction_at(&self, pointer_x: f32) -> RevealFraction {
        if self.width <= 0.0 {
            return RevealFraction::MIN;
        }
        RevealFraction::new(self.clamped_offset(pointer_x) / self.width)
    }

    /// Divider offset from the left edge, rounded to whole pixels.
    #[must_use]
    pub fn divider_offset(&self, fraction: RevealFraction) -> f32 {
        (fraction.value() * self.width).round()
    }

    /// Size images are locked to so dragging never triggers a relayout.
    #[must_use]
    pub fn locked_size(&self) -> LockedSize {
        LockedSize {
            width: self.width,
            height: self.height,
        }
    }

    /// True if width or height differ by at least half a pixel.
    #[must_use]
    pub fn size_differs(&self, other: &ContainerRect) -> bool {
        (self.width - other.width).abs() >= 0.5 || (self.height - other.height).abs() >= 0.5
    }
}

/// Display size both images are pinned to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LockedSize {
    pub width: f32,
    pub height: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn fraction_inside_bounds_is_linear() {
        let rect = ContainerRect::new(50.0, 0.0, 400.0, 300.0);
        for x in [50.0_f32, 100.0, 250.0, 449.0, 450.0] {
            let expected = (x - 50.0).clamp(0.0, 400.0) / 400.0;
            assert_abs_diff_eq!(rect.fraction_at(x).value(), expected);
        }
    }

    #[test]
    fn fraction_outside_bounds_clamps_exactly() {
        let rect = ContainerRect::new(50.0, 0.0, 400.0, 300.0);
        assert_eq!(rect.fraction_at(-1000.0).value(), 0.0);
        assert_eq!(rect.fraction_at(49.0).value(), 0.0);
        assert_eq!(rect.fraction_at(451.0).value(), 1.0);
        assert_eq!(rect.fraction_at(9000.0).value(), 1.0);
    }

    #[test]
    fn zero_width_container_yields_min() {
        let rect = ContainerRect::new(10.0, 0.0, 0.0, 0.0);
        assert_eq!(rect.fraction_at(15.0), RevealFraction::MIN);
    }

    #[test]
    fn negative_sizes_are_floored() {
        let rect = ContainerRect::new(0.0, 0.0, -5.0, -1.0);
        assert_abs_diff_eq!(rect.width, 0.0);
        assert_abs_diff_eq!(rect.height, 0.0);
    }

    #[test]
    fn divider_offset_rounds() {
        let rect = ContainerRect::new(0.0, 0.0, 333.0, 100.0);
        assert_abs_diff_eq!(rect.divider_offset(RevealFraction::new(0.5)), 167.0);
        assert_abs_diff_eq!(rect.divider_offset(RevealFraction::MAX), 333.0);
    }

    #[test]
    fn contains_x_includes_edges() {
        let rect = ContainerRect::new(10.0, 0.0, 100.0, 50.0);
        assert!(rect.contains_x(10.0));
        assert!(rect.contains_x(110.0));
        assert!(!rect.contains_x(110.5));
    }

    #[test]
    fn size_differs_ignores_subpixel_jitter() {
        let a = ContainerRect::new(0.0, 0.0, 400.0, 300.0);
        let b = ContainerRect::new(20.0, 5.0, 400.2, 300.0);
        let c = ContainerRect::new(0.0, 0.0, 401.0, 300.0);
        assert!(!a.size_differs(&b));
        assert!(a.size_differs(&c));
    }
}
