// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Vertical divider line drawn at the reveal position.
pub fn divider(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::DIVIDER,
            ..palette::WHITE
        })),
        ..Default::default()
    }
}

/// Round grip centered on the divider. Highlighted while dragging.
pub fn handle(dragging: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let fill = if dragging {
            palette::PRIMARY_400
        } else {
            palette::WHITE
        };
        container::Style {
            background: Some(Background::Color(fill)),
            border: Border {
                color: Color {
                    a: opacity::OVERLAY_STRONG,
                    ..palette::BLACK
                },
                width: 1.0,
                radius: radius::FULL.into(),
            },
            ..Default::default()
        }
    }
}

/// Backdrop behind the before/after corner labels.
pub fn slot_label(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Surface behind a panel whose images are not laid out yet.
///
/// Derived from the active theme so it reads in light and dark modes.
pub fn placeholder(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(base)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Focus ring around a panel that receives arrow keys.
pub fn focus_ring(focused: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        border: Border {
            color: if focused {
                palette::PRIMARY_500
            } else {
                Color::TRANSPARENT
            },
            width: 2.0,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}
