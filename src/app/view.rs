// SPDX-License-Identifier: MPL-2.0
//! Top-level layout: startup notice, then one compare panel per post.
//!
//! Panels share the window height; a panel with a fixed box height from
//! the feed keeps it.

use super::{App, Message};
use crate::ui::compare::{self, ViewContext};
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let mut column = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill);

    if let Some(notice) = &app.notice {
        column = column.push(
            Text::new(notice.as_str())
                .size(typography::BODY)
                .color(palette::GRAY_400),
        );
    }

    if app.panels.is_empty() {
        let label = if app.feed_pending {
            app.i18n.tr("compare-loading")
        } else {
            app.i18n.tr("compare-empty")
        };
        return column
            .push(
                Container::new(Text::new(label).size(typography::TITLE_SM))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(alignment::Horizontal::Center)
                    .align_y(alignment::Vertical::Center),
            )
            .into();
    }

    for (index, panel) in app.panels.iter().enumerate() {
        let panel_view = compare::view::view(panel, ViewContext { i18n: &app.i18n })
            .map(move |message| Message::Compare { index, message });
        column = column.push(panel_view);
    }

    column.into()
}
