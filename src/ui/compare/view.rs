// SPDX-License-Identifier: MPL-2.0
//! Rendering of a compare panel.
//!
//! The "before" image sits at the bottom of a stack; the "after" image is
//! drawn on top, clipped to the divider offset. Both are pinned to the
//! locked container size so moving the divider never relayouts the images.

use iced::widget::{container, image, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};

use super::panel::ComparePanel;
use super::Message;
use crate::domain::compare::{ImageSlot, LoadStatus, LockedSize};
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::compare_area::compare_area;
use crate::ui::widgets::reveal_clip::reveal_clip;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub fn view<'a>(panel: &'a ComparePanel, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let width = panel.box_width().map_or(Length::Fill, Length::Fixed);
    let height = panel.box_height().map_or(Length::Fill, Length::Fixed);

    let slider = panel.slider();
    let content: Element<'a, Message> = match (
        slider.locked_size(),
        slider.divider_offset(),
        panel.image(ImageSlot::Before),
        panel.image(ImageSlot::After),
    ) {
        (Some(size), Some(offset), Some(before), Some(after)) => stacked(
            before,
            after,
            size,
            offset,
            slider.is_dragging(),
            ctx.i18n,
            width,
            height,
        ),
        _ => placeholder(panel, ctx.i18n, width, height),
    };

    let area = Container::new(compare_area(content, panel.area_status(), Message::Area))
        .padding(sizing::DIVIDER_WIDTH)
        .style(styles::container::focus_ring(slider.is_focused()));

    let mut column = Column::new().spacing(spacing::XXS).push(area);
    if let Some(caption) = panel.caption() {
        column = column.push(Text::new(caption).size(typography::BODY));
    }
    // The box size belongs to the image area; caption and status line sit
    // below it.
    column
        .push(status_line(panel, ctx.i18n))
        .width(outer(width))
        .height(outer(height))
        .into()
}

/// Column length around content of length `inner`.
fn outer(inner: Length) -> Length {
    match inner {
        Length::Fixed(_) => Length::Shrink,
        other => other,
    }
}

fn stacked<'a>(
    before: &'a ImageData,
    after: &'a ImageData,
    size: LockedSize,
    offset: f32,
    dragging: bool,
    i18n: &I18n,
    width: Length,
    height: Length,
) -> Element<'a, Message> {
    let pinned = |data: &'a ImageData| {
        image(data.handle.clone())
            .width(Length::Fixed(size.width))
            .height(Length::Fixed(size.height))
            .content_fit(ContentFit::Fill)
    };

    let after_clip = reveal_clip(pinned(after), offset, size.height);

    let divider = Row::new()
        .push(Space::new().width(Length::Fixed(
            (offset - sizing::DIVIDER_WIDTH / 2.0).max(0.0),
        )))
        .push(
            container(Space::new())
                .width(Length::Fixed(sizing::DIVIDER_WIDTH))
                .height(Length::Fill)
                .style(styles::container::divider),
        );

    let grip = Container::new(
        Row::new()
            .push(Space::new().width(Length::Fixed(
                (offset - sizing::HANDLE_SIZE / 2.0).max(0.0),
            )))
            .push(
                container(Space::new())
                    .width(Length::Fixed(sizing::HANDLE_SIZE))
                    .height(Length::Fixed(sizing::HANDLE_SIZE))
                    .style(styles::container::handle(dragging)),
            ),
    )
    .height(Length::Fill)
    .align_y(alignment::Vertical::Center);

    Container::new(
        Stack::new()
            .width(width)
            .height(height)
            .push(pinned(before))
            .push(after_clip)
            .push(divider)
            .push(grip)
            .push(slot_labels(i18n)),
    )
    .width(width)
    .height(height)
    .clip(true)
    .into()
}

/// "Before" in the top-left corner, "After" in the top-right.
fn slot_labels<'a>(i18n: &I18n) -> Element<'a, Message> {
    let tag = |key: &str| {
        Container::new(
            Text::new(i18n.tr(key))
                .size(typography::CAPTION)
                .color(palette::WHITE),
        )
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::slot_label)
    };

    Row::new()
        .push(tag("compare-before"))
        .push(Space::new().width(Length::Fill))
        .push(tag("compare-after"))
        .width(Length::Fill)
        .padding(spacing::XS)
        .into()
}

/// Static surface shown until the initial layout pass. A failed image
/// leaves it blank for good.
fn placeholder<'a>(
    panel: &ComparePanel,
    i18n: &I18n,
    width: Length,
    height: Length,
) -> Element<'a, Message> {
    let failed = ImageSlot::ALL
        .iter()
        .any(|slot| panel.slider().load_status(*slot) == LoadStatus::Failed);

    let label = if failed {
        String::new()
    } else {
        i18n.tr("compare-loading")
    };

    Container::new(
        Text::new(label)
            .size(typography::TITLE_SM)
            .color(palette::GRAY_400),
    )
    .width(width)
    .height(height)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(styles::container::placeholder)
    .into()
}

/// Accessible slider description: label and current position.
fn status_line<'a>(panel: &ComparePanel, i18n: &I18n) -> Element<'a, Message> {
    let a11y = panel.accessibility(i18n);
    let position = i18n.tr_with_number("compare-position", "percent", f64::from(a11y.value_now));

    let mut row = Row::new()
        .spacing(spacing::SM)
        .push(Text::new(a11y.label).size(typography::CAPTION))
        .push(Text::new(position).size(typography::CAPTION));

    if panel.slider().is_focused() {
        row = row.push(
            Text::new(i18n.tr("compare-keyboard-hint"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    }
    row.into()
}
