// SPDX-License-Identifier: MPL-2.0
//! Conversions from Iced input types to compare domain types.

use crate::domain::compare::{ContainerRect, KeyCommand, PointerId};
use iced::keyboard::{self, key};
use iced::touch;
use iced::Rectangle;

/// Maps a key press to a divider command.
///
/// Left/Down decrease, Right/Up increase, Shift selects the large step.
#[must_use]
pub fn key_command(key: &keyboard::Key, modifiers: keyboard::Modifiers) -> Option<KeyCommand> {
    let large = modifiers.shift();
    match key {
        keyboard::Key::Named(key::Named::ArrowLeft | key::Named::ArrowDown) => {
            Some(KeyCommand::Decrease { large })
        }
        keyboard::Key::Named(key::Named::ArrowRight | key::Named::ArrowUp) => {
            Some(KeyCommand::Increase { large })
        }
        keyboard::Key::Named(key::Named::Home) => Some(KeyCommand::Start),
        keyboard::Key::Named(key::Named::End) => Some(KeyCommand::End),
        _ => None,
    }
}

/// Widget bounds as a slider container.
#[must_use]
pub fn container_rect(bounds: Rectangle) -> ContainerRect {
    ContainerRect::new(bounds.x, bounds.y, bounds.width, bounds.height)
}

#[must_use]
pub fn finger(id: touch::Finger) -> PointerId {
    PointerId::Finger(id.0)
}
