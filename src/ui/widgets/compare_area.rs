// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that turns pointer, touch and keyboard events into
//! compare slider inputs.
//!
//! Iced delivers every event to every widget, so once a drag has started the
//! area keeps receiving moves and releases even when the pointer leaves its
//! bounds. The area also watches its own layout bounds and reports a resize
//! whenever they differ from what the slider last saw.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{keyboard, touch, window};
use iced::{Element, Event, Length, Point, Rectangle, Size};

use crate::domain::compare::{ContainerRect, KeyCommand, PointerId};
use crate::ui::compare::input::{container_rect, finger, key_command};

/// Slider input produced by a [`CompareArea`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AreaEvent {
    /// Layout bounds differ from the last known container.
    Resized(ContainerRect),
    /// Primary press or finger down inside the area.
    Pressed { pointer: PointerId, x: f32 },
    /// Move of the pointer that owns the drag.
    Moved { pointer: PointerId, x: f32 },
    /// Release or loss of the pointer that owns the drag.
    Released { pointer: PointerId },
    /// Press outside the area while it had focus.
    Blurred,
    /// Arrow/Home/End while focused.
    Key(KeyCommand),
}

/// What the area needs to know about its slider to filter events.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AreaStatus {
    pub container: Option<ContainerRect>,
    pub active_pointer: Option<PointerId>,
    pub focused: bool,
    pub laid_out: bool,
}

/// A widget that wraps the stacked images of one compare panel.
pub struct CompareArea<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    status: AreaStatus,
    on_event: Box<dyn Fn(AreaEvent) -> Message + 'a>,
}

impl<'a, Message, Theme, Renderer> CompareArea<'a, Message, Theme, Renderer> {
    /// Creates a new `CompareArea` wrapping the given content.
    pub fn new(
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
        status: AreaStatus,
        on_event: impl Fn(AreaEvent) -> Message + 'a,
    ) -> Self {
        Self {
            content: content.into(),
            status,
            on_event: Box::new(on_event),
        }
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for CompareArea<'_, Message, Theme, Renderer>
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
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();

        if let Some(rect) = resized(bounds, &self.status) {
            shell.publish((self.on_event)(AreaEvent::Resized(rect)));
        }

        if let Some(area_event) = translate(event, bounds, cursor.position(), &self.status) {
            shell.publish((self.on_event)(area_event));
            if captures(&area_event) {
                shell.capture_event();
                return;
            }
        }

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        let dragging = self.status.active_pointer.is_some();
        if dragging || (self.status.laid_out && cursor.is_over(layout.bounds())) {
            return mouse::Interaction::ResizingHorizontally;
        }
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<CompareArea<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(area: CompareArea<'a, Message, Theme, Renderer>) -> Self {
        Self::new(area)
    }
}

/// Helper function to create a compare area wrapper.
pub fn compare_area<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    status: AreaStatus,
    on_event: impl Fn(AreaEvent) -> Message + 'a,
) -> CompareArea<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    CompareArea::new(content, status, on_event)
}

/// Returns the new container if `bounds` differ from the known one.
fn resized(bounds: Rectangle, status: &AreaStatus) -> Option<ContainerRect> {
    let rect = container_rect(bounds);
    (status.container != Some(rect)).then_some(rect)
}

/// Presses, drag moves and keys are consumed; the rest keep propagating.
fn captures(event: &AreaEvent) -> bool {
    matches!(
        event,
        AreaEvent::Pressed { .. } | AreaEvent::Moved { .. } | AreaEvent::Key(_)
    )
}

fn translate(
    event: &Event,
    bounds: Rectangle,
    cursor: Option<Point>,
    status: &AreaStatus,
) -> Option<AreaEvent> {
    let owns = |pointer: PointerId| status.active_pointer == Some(pointer);

    match event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            let position = cursor?;
            press(bounds, position, PointerId::Mouse, status)
        }
        Event::Touch(touch::Event::FingerPressed { id, position }) => {
            press(bounds, *position, finger(*id), status)
        }
        Event::Mouse(mouse::Event::CursorMoved { position }) if owns(PointerId::Mouse) => {
            Some(AreaEvent::Moved {
                pointer: PointerId::Mouse,
                x: position.x,
            })
        }
        Event::Touch(touch::Event::FingerMoved { id, position }) if owns(finger(*id)) => {
            Some(AreaEvent::Moved {
                pointer: finger(*id),
                x: position.x,
            })
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            if owns(PointerId::Mouse) =>
        {
            Some(AreaEvent::Released {
                pointer: PointerId::Mouse,
            })
        }
        Event::Touch(
            touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. },
        ) if owns(finger(*id)) => Some(AreaEvent::Released {
            pointer: finger(*id),
        }),
        Event::Window(window::Event::Unfocused) => status
            .active_pointer
            .map(|pointer| AreaEvent::Released { pointer }),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. })
            if status.focused && status.laid_out =>
        {
            key_command(key, *modifiers).map(AreaEvent::Key)
        }
        _ => None,
    }
}

fn press(
    bounds: Rectangle,
    position: Point,
    pointer: PointerId,
    status: &AreaStatus,
) -> Option<AreaEvent> {
    if bounds.contains(position) {
        Some(AreaEvent::Pressed {
            pointer,
            x: position.x,
        })
    } else if status.focused {
        Some(AreaEvent::Blurred)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::key;

    fn bounds() -> Rectangle {
        Rectangle::new(Point::new(100.0, 50.0), Size::new(400.0, 300.0))
    }

    fn laid_out() -> AreaStatus {
        AreaStatus {
            container: Some(container_rect(bounds())),
            laid_out: true,
            ..AreaStatus::default()
        }
    }

    fn left_press() -> Event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
    }

    #[test]
    fn first_layout_reports_resize() {
        let status = AreaStatus::default();
        assert_eq!(
            resized(bounds(), &status),
            Some(ContainerRect::new(100.0, 50.0, 400.0, 300.0))
        );
    }

    #[test]
    fn unchanged_bounds_do_not_report_resize() {
        assert_eq!(resized(bounds(), &laid_out()), None);
    }

    #[test]
    fn press_inside_begins_drag() {
        let event = translate(
            &left_press(),
            bounds(),
            Some(Point::new(200.0, 100.0)),
            &laid_out(),
        );
        assert_eq!(
            event,
            Some(AreaEvent::Pressed {
                pointer: PointerId::Mouse,
                x: 200.0
            })
        );
        assert!(event.as_ref().is_some_and(captures));
    }

    #[test]
    fn press_outside_blurs_only_when_focused() {
        let outside = Some(Point::new(10.0, 10.0));
        assert_eq!(translate(&left_press(), bounds(), outside, &laid_out()), None);

        let focused = AreaStatus {
            focused: true,
            ..laid_out()
        };
        assert_eq!(
            translate(&left_press(), bounds(), outside, &focused),
            Some(AreaEvent::Blurred)
        );
    }

    #[test]
    fn moves_are_ignored_without_drag() {
        let event = Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(250.0, 100.0),
        });
        assert_eq!(translate(&event, bounds(), None, &laid_out()), None);
    }

    #[test]
    fn moves_outside_bounds_continue_drag() {
        let dragging = AreaStatus {
            active_pointer: Some(PointerId::Mouse),
            ..laid_out()
        };
        let event = Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(900.0, 100.0),
        });
        assert_eq!(
            translate(&event, bounds(), None, &dragging),
            Some(AreaEvent::Moved {
                pointer: PointerId::Mouse,
                x: 900.0
            })
        );
    }

    #[test]
    fn other_finger_cannot_move_divider() {
        let dragging = AreaStatus {
            active_pointer: Some(PointerId::Finger(1)),
            ..laid_out()
        };
        let event = Event::Touch(touch::Event::FingerMoved {
            id: touch::Finger(2),
            position: Point::new(300.0, 100.0),
        });
        assert_eq!(translate(&event, bounds(), None, &dragging), None);
    }

    #[test]
    fn finger_lost_releases_drag() {
        let dragging = AreaStatus {
            active_pointer: Some(PointerId::Finger(7)),
            ..laid_out()
        };
        let event = Event::Touch(touch::Event::FingerLost {
            id: touch::Finger(7),
            position: Point::new(0.0, 0.0),
        });
        assert_eq!(
            translate(&event, bounds(), None, &dragging),
            Some(AreaEvent::Released {
                pointer: PointerId::Finger(7)
            })
        );
    }

    #[test]
    fn keys_require_focus() {
        let event = Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(key::Named::End),
            modified_key: keyboard::Key::Named(key::Named::End),
            physical_key: keyboard::key::Physical::Code(keyboard::key::Code::End),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::empty(),
            text: None,
            repeat: false,
        });
        assert_eq!(translate(&event, bounds(), None, &laid_out()), None);

        let focused = AreaStatus {
            focused: true,
            ..laid_out()
        };
        assert_eq!(
            translate(&event, bounds(), None, &focused),
            Some(AreaEvent::Key(KeyCommand::End))
        );
    }
}
