// SPDX-License-Identifier: MPL-2.0
//! Keyboard affordance for a focused compare divider.

use super::newtypes::{KeyboardStep, RevealFraction};

/// Divider movement requested from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// ArrowLeft / ArrowDown; `large` when Shift is held.
    Decrease { large: bool },
    /// ArrowRight / ArrowUp; `large` when Shift is held.
    Increase { large: bool },
    /// Home
    Start,
    /// End
    End,
}

/// Step sizes used for arrow keys.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyboardSteps {
    pub small: KeyboardStep,
    pub large: KeyboardStep,
}

impl Default for KeyboardSteps {
    fn default() -> Self {
        Self {
            small: KeyboardStep::default(),
            large: KeyboardStep::large(),
        }
    }
}

impl KeyboardSteps {
    fn points(&self, large: bool) -> f32 {
        if large {
            self.large.points()
        } else {
            self.small.points()
        }
    }

    /// Fraction reached by applying `command` to `current`.
    #[must_use]
    pub fn apply(&self, current: RevealFraction, command: KeyCommand) -> RevealFraction {
        match command {
            KeyCommand::Decrease { large } => current.offset_by_points(-self.points(large)),
            KeyCommand::Increase { large } => current.offset_by_points(self.points(large)),
            KeyCommand::Start => RevealFraction::MIN,
            KeyCommand::End => RevealFraction::MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn arrows_step_by_two_points() {
        let steps = KeyboardSteps::default();
        let half = RevealFraction::new(0.5);
        assert_abs_diff_eq!(
            steps.apply(half, KeyCommand::Increase { large: false }).value(),
            0.52,
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            steps.apply(half, KeyCommand::Decrease { large: false }).value(),
            0.48,
            epsilon = 1e-6
        );
    }

    #[test]
    fn shift_steps_by_ten_points() {
        let steps = KeyboardSteps::default();
        let half = RevealFraction::new(0.5);
        assert_abs_diff_eq!(
            steps.apply(half, KeyCommand::Increase { large: true }).value(),
            0.6,
            epsilon = 1e-6
        );
    }

    #[test]
    fn home_and_end_ignore_start_value() {
        let steps = KeyboardSteps::default();
        for start in [0.0, 0.3, 1.0] {
            let f = RevealFraction::new(start);
            assert_eq!(steps.apply(f, KeyCommand::End).value(), 1.0);
            assert_eq!(steps.apply(f, KeyCommand::Start).value(), 0.0);
        }
    }

    #[test]
    fn steps_clamp_at_edges() {
        let steps = KeyboardSteps::default();
        assert!(steps
            .apply(RevealFraction::new(0.99), KeyCommand::Increase { large: true })
            .is_max());
        assert!(steps
            .apply(RevealFraction::MIN, KeyCommand::Decrease { large: false })
            .is_min());
    }
}
