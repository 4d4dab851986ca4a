// SPDX-License-Identifier: MPL-2.0
//! State of one compare panel.

use iced::Task;

use super::{Effect, Message};
use crate::domain::compare::{
    CompareSlider, ImageSlot, KeyboardSteps, ResizeOutcome, RevealFraction,
};
use crate::i18n::fluent::I18n;
use crate::media::{load_image_async, ComparePost, ImageData, MediaPair};
use crate::ui::widgets::compare_area::{AreaEvent, AreaStatus};

/// Per-panel settings resolved from the config file and command line.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PanelSettings {
    pub initial_fraction: RevealFraction,
    pub keyboard_steps: KeyboardSteps,
}

/// Accessible slider description shown in the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderAccessibility {
    pub role: &'static str,
    pub label: String,
    pub value_min: u8,
    pub value_max: u8,
    pub value_now: u8,
}

/// One before/after widget instance.
#[derive(Debug, Clone)]
pub struct ComparePanel {
    pair: MediaPair,
    caption: Option<String>,
    box_width: Option<f32>,
    box_height: Option<f32>,
    slider: CompareSlider,
    images: [Option<ImageData>; 2],
}

impl ComparePanel {
    #[must_use]
    pub fn new(post: ComparePost, settings: PanelSettings) -> Self {
        Self {
            pair: post.pair,
            caption: post.caption,
            box_width: post.box_width,
            box_height: post.box_height,
            slider: CompareSlider::new(settings.initial_fraction)
                .with_keyboard_steps(settings.keyboard_steps),
            images: [None, None],
        }
    }

    /// Panel for two images given on the command line.
    #[must_use]
    pub fn from_pair(pair: MediaPair, settings: PanelSettings) -> Self {
        Self::new(
            ComparePost {
                pair,
                caption: None,
                box_width: None,
                box_height: None,
            },
            settings,
        )
    }

    #[must_use]
    pub fn pair(&self) -> &MediaPair {
        &self.pair
    }

    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    #[must_use]
    pub fn box_width(&self) -> Option<f32> {
        self.box_width
    }

    #[must_use]
    pub fn box_height(&self) -> Option<f32> {
        self.box_height
    }

    #[must_use]
    pub fn slider(&self) -> &CompareSlider {
        &self.slider
    }

    #[must_use]
    pub fn image(&self, slot: ImageSlot) -> Option<&ImageData> {
        match slot {
            ImageSlot::Before => self.images[0].as_ref(),
            ImageSlot::After => self.images[1].as_ref(),
        }
    }

    /// Snapshot the compare area filters events with.
    #[must_use]
    pub fn area_status(&self) -> AreaStatus {
        AreaStatus {
            container: self.slider.container(),
            active_pointer: self.slider.active_pointer(),
            focused: self.slider.is_focused(),
            laid_out: self.slider.is_laid_out(),
        }
    }

    #[must_use]
    pub fn accessibility(&self, i18n: &I18n) -> SliderAccessibility {
        SliderAccessibility {
            role: "slider",
            label: i18n.tr("compare-slider-label"),
            value_min: 0,
            value_max: 100,
            value_now: self.slider.accessible_value(),
        }
    }

    /// Starts decoding both images. Completions may arrive in any order.
    pub fn load_images(&self) -> Task<Message> {
        Task::batch(ImageSlot::ALL.map(|slot| {
            let path = self.pair.path(slot).to_path_buf();
            Task::perform(load_image_async(path), move |result| {
                Message::ImageLoaded { slot, result }
            })
        }))
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::ImageLoaded { slot, result } => match result {
                Ok(data) => {
                    self.store_image(slot, data);
                    if self.slider.image_loaded(slot) {
                        self.initial_layout_effect()
                    } else {
                        Effect::ImageLoaded(slot)
                    }
                }
                Err(err) => {
                    self.slider.image_failed(slot);
                    Effect::ImageFailed {
                        slot,
                        message: format!("{}: {err}", self.pair.path(slot).display()),
                    }
                }
            },
            Message::Area(event) => self.handle_area_event(event),
        }
    }

    fn handle_area_event(&mut self, event: AreaEvent) -> Effect {
        match event {
            AreaEvent::Resized(rect) => match self.slider.on_container_resize(rect) {
                ResizeOutcome::InitialLayout => self.initial_layout_effect(),
                ResizeOutcome::Resized => self
                    .slider
                    .locked_size()
                    .map_or(Effect::None, Effect::Resized),
                ResizeOutcome::Stored => Effect::None,
            },
            AreaEvent::Pressed { pointer, x } => {
                if self.slider.begin_drag(pointer, x) {
                    Effect::DragStarted(pointer)
                } else {
                    Effect::None
                }
            }
            AreaEvent::Moved { pointer, x } => {
                self.slider.on_pointer_move(pointer, x);
                Effect::None
            }
            AreaEvent::Released { pointer } => match self.slider.end_drag_for(pointer) {
                Some(summary) => Effect::DragEnded {
                    summary,
                    percent: self.slider.accessible_value(),
                },
                None => Effect::None,
            },
            AreaEvent::Blurred => {
                self.slider.blur();
                Effect::None
            }
            AreaEvent::Key(command) => match self.slider.handle_key(command) {
                Some(fraction) => Effect::KeyboardStep {
                    percent: fraction.percent(),
                },
                None => Effect::None,
            },
        }
    }

    fn store_image(&mut self, slot: ImageSlot, data: ImageData) {
        let entry = match slot {
            ImageSlot::Before => &mut self.images[0],
            ImageSlot::After => &mut self.images[1],
        };
        if entry.is_none() {
            *entry = Some(data);
        }
    }

    fn initial_layout_effect(&self) -> Effect {
        self.slider
            .locked_size()
            .map_or(Effect::None, Effect::InitialLayout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::compare::{ContainerRect, KeyCommand, LockedSize, PointerId};
    use crate::error::Error;

    fn panel() -> ComparePanel {
        ComparePanel::from_pair(MediaPair::new("a.png", "b.png"), PanelSettings::default())
    }

    fn pixel() -> ImageData {
        ImageData::from_rgba(1, 1, vec![0, 0, 0, 255])
    }

    fn loaded(slot: ImageSlot) -> Message {
        Message::ImageLoaded {
            slot,
            result: Ok(pixel()),
        }
    }

    fn resized(width: f32, height: f32) -> Message {
        Message::Area(AreaEvent::Resized(ContainerRect::new(0.0, 0.0, width, height)))
    }

    #[test]
    fn initial_layout_after_both_images_in_any_order() {
        let mut panel = panel();
        assert_eq!(panel.handle_message(resized(400.0, 300.0)), Effect::None);
        assert_eq!(
            panel.handle_message(loaded(ImageSlot::After)),
            Effect::ImageLoaded(ImageSlot::After)
        );
        assert_eq!(
            panel.handle_message(loaded(ImageSlot::Before)),
            Effect::InitialLayout(LockedSize {
                width: 400.0,
                height: 300.0
            })
        );
        assert_eq!(panel.slider().divider_offset(), Some(100.0));
        assert!(panel.image(ImageSlot::Before).is_some());
    }

    #[test]
    fn failed_image_keeps_placeholder() {
        let mut panel = panel();
        panel.handle_message(resized(400.0, 300.0));
        panel.handle_message(loaded(ImageSlot::Before));
        let effect = panel.handle_message(Message::ImageLoaded {
            slot: ImageSlot::After,
            result: Err(Error::Image("truncated".into())),
        });

        assert!(matches!(effect, Effect::ImageFailed { slot: ImageSlot::After, .. }));
        assert!(!panel.slider().is_laid_out());
        assert!(!panel.area_status().laid_out);
    }

    #[test]
    fn drag_then_release_reports_summary() {
        let mut panel = panel();
        panel.handle_message(resized(400.0, 300.0));
        panel.handle_message(loaded(ImageSlot::Before));
        panel.handle_message(loaded(ImageSlot::After));

        let start = panel.handle_message(Message::Area(AreaEvent::Pressed {
            pointer: PointerId::Mouse,
            x: 200.0,
        }));
        assert_eq!(start, Effect::DragStarted(PointerId::Mouse));
        panel.handle_message(Message::Area(AreaEvent::Moved {
            pointer: PointerId::Mouse,
            x: 300.0,
        }));

        match panel.handle_message(Message::Area(AreaEvent::Released {
            pointer: PointerId::Mouse,
        })) {
            Effect::DragEnded { summary, percent } => {
                assert_eq!(percent, 75);
                assert_eq!(summary.moves, 1);
            }
            other => panic!("expected DragEnded, got {other:?}"),
        }
        assert!(panel.slider().is_focused());
    }

    #[test]
    fn keys_move_divider_after_focus() {
        let mut panel = panel();
        panel.handle_message(resized(400.0, 300.0));
        panel.handle_message(loaded(ImageSlot::Before));
        panel.handle_message(loaded(ImageSlot::After));

        let ignored = panel.handle_message(Message::Area(AreaEvent::Key(KeyCommand::End)));
        assert_eq!(ignored, Effect::None);

        panel.handle_message(Message::Area(AreaEvent::Pressed {
            pointer: PointerId::Mouse,
            x: 200.0,
        }));
        panel.handle_message(Message::Area(AreaEvent::Released {
            pointer: PointerId::Mouse,
        }));
        assert_eq!(
            panel.handle_message(Message::Area(AreaEvent::Key(KeyCommand::Increase {
                large: true
            }))),
            Effect::KeyboardStep { percent: 60 }
        );

        panel.handle_message(Message::Area(AreaEvent::Blurred));
        assert_eq!(
            panel.handle_message(Message::Area(AreaEvent::Key(KeyCommand::Start))),
            Effect::None
        );
    }

    #[test]
    fn resize_after_layout_is_reported() {
        let mut panel = panel();
        panel.handle_message(resized(400.0, 300.0));
        panel.handle_message(loaded(ImageSlot::Before));
        panel.handle_message(loaded(ImageSlot::After));

        assert_eq!(
            panel.handle_message(resized(800.0, 600.0)),
            Effect::Resized(LockedSize {
                width: 800.0,
                height: 600.0
            })
        );
        assert_eq!(panel.slider().divider_offset(), Some(200.0));
    }

    #[test]
    fn accessibility_contract() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let a11y = panel().accessibility(&i18n);
        assert_eq!(a11y.role, "slider");
        assert_eq!(a11y.label, "Before/after comparison");
        assert_eq!((a11y.value_min, a11y.value_max, a11y.value_now), (0, 100, 25));
    }
}
