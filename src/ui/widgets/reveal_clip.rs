// SPDX-License-Identifier: MPL-2.0
//! A clip window over content laid out at its full size.
//!
//! Containers shrink their children to fit, which would squeeze the "after"
//! image instead of cropping it. The clip is built on a horizontal
//! scrollable with a zero-width scrollbar, whose child keeps its full
//! width, and is wrapped in a widget that swallows every event so the
//! scroll offset stays at zero.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::renderer;
use iced::advanced::text;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::widget::scrollable::{self, Scrollable};
use iced::{Element, Event, Length, Rectangle, Size};

/// Shows the left `width` pixels of its content and ignores all input.
pub struct RevealClip<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
}

impl<'a, Message, Theme, Renderer> RevealClip<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: scrollable::Catalog + 'a,
    Renderer: renderer::Renderer + text::Renderer + 'a,
{
    /// Creates a clip `width` x `height` over `content`.
    pub fn new(
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
        width: f32,
        height: f32,
    ) -> Self {
        let hidden = scrollable::Scrollbar::new().width(0.0).scroller_width(0.0);
        let window = Scrollable::with_direction(content, scrollable::Direction::Horizontal(hidden))
            .width(Length::Fixed(width.max(0.0)))
            .height(Length::Fixed(height.max(0.0)));

        Self {
            content: window.into(),
        }
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for RevealClip<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn update(
        &mut self,
        _tree: &mut widget::Tree,
        _event: &Event,
        _layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        _shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        // Input belongs to the enclosing compare area.
    }

    fn mouse_interaction(
        &self,
        _tree: &widget::Tree,
        _layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        mouse::Interaction::None
    }
}

impl<'a, Message, Theme, Renderer> From<RevealClip<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(clip: RevealClip<'a, Message, Theme, Renderer>) -> Self {
        Self::new(clip)
    }
}

/// Helper function to create a reveal clip.
pub fn reveal_clip<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    width: f32,
    height: f32,
) -> RevealClip<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: scrollable::Catalog + 'a,
    Renderer: renderer::Renderer + text::Renderer + 'a,
{
    RevealClip::new(content, width, height)
}
