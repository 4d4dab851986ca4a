// SPDX-License-Identifier: MPL-2.0
//! Compare slider state machine.
//!
//! One [`CompareSlider`] owns the reveal state of one compare widget. It is
//! driven by pointer, keyboard, image-load and resize inputs, and derives
//! every pixel position from the stored fraction and the current container.
//!
//! The slider is Idle until a pointer acquires a [`PointerSession`] and
//! Dragging until that session is released. Pointer and keyboard input are
//! ignored until the initial layout pass has run, which requires both images
//! to be loaded and the container to have a non-empty size.

use super::geometry::{ContainerRect, LockedSize};
use super::keyboard::{KeyCommand, KeyboardSteps};
use super::newtypes::RevealFraction;
use super::pointer::{DragSummary, PointerId, PointerSession};

/// Which image of the pair an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSlot {
    Before,
    After,
}

impl ImageSlot {
    pub const ALL: [ImageSlot; 2] = [ImageSlot::Before, ImageSlot::After];

    fn index(self) -> usize {
        match self {
            ImageSlot::Before => 0,
            ImageSlot::After => 1,
        }
    }
}

/// Load progress of one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Pending,
    Loaded,
    Failed,
}

/// Reveal state exposed to views.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompareState {
    pub fraction: RevealFraction,
    pub dragging: bool,
}

/// Result of reporting new container bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeOutcome {
    /// Bounds stored; size unchanged or nothing laid out yet.
    Stored,
    /// Laid-out slider re-locked to a new size.
    Resized,
    /// These bounds completed the initial layout pass.
    InitialLayout,
}

#[derive(Debug, Clone)]
pub struct CompareSlider {
    state: CompareState,
    session: Option<PointerSession>,
    initial_fraction: RevealFraction,
    steps: KeyboardSteps,
    container: Option<ContainerRect>,
    images: [LoadStatus; 2],
    laid_out: bool,
    focused: bool,
}

impl Default for CompareSlider {
    fn default() -> Self {
        Self::new(RevealFraction::default())
    }
}

impl CompareSlider {
    #[must_use]
    pub fn new(initial_fraction: RevealFraction) -> Self {
        Self {
            state: CompareState {
                fraction: initial_fraction,
                dragging: false,
            },
            session: None,
            initial_fraction,
            steps: KeyboardSteps::default(),
            container: None,
            images: [LoadStatus::Pending; 2],
            laid_out: false,
            focused: false,
        }
    }

    #[must_use]
    pub fn with_keyboard_steps(mut self, steps: KeyboardSteps) -> Self {
        self.steps = steps;
        self
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn state(&self) -> CompareState {
        self.state
    }

    #[must_use]
    pub fn fraction(&self) -> RevealFraction {
        self.state.fraction
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.dragging
    }

    /// Pointer currently holding the drag session, if any.
    #[must_use]
    pub fn active_pointer(&self) -> Option<PointerId> {
        self.session.as_ref().map(PointerSession::pointer)
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the initial layout pass has run.
    #[must_use]
    pub fn is_laid_out(&self) -> bool {
        self.laid_out
    }

    #[must_use]
    pub fn container(&self) -> Option<ContainerRect> {
        self.container
    }

    #[must_use]
    pub fn load_status(&self, slot: ImageSlot) -> LoadStatus {
        self.images[slot.index()]
    }

    #[must_use]
    pub fn loaded_count(&self) -> usize {
        self.images
            .iter()
            .filter(|status| **status == LoadStatus::Loaded)
            .count()
    }

    /// Display size both images are locked to, once laid out.
    #[must_use]
    pub fn locked_size(&self) -> Option<LockedSize> {
        self.laid_out_container().map(|rect| rect.locked_size())
    }

    /// Divider offset from the container's left edge, in whole pixels.
    #[must_use]
    pub fn divider_offset(&self) -> Option<f32> {
        self.laid_out_container()
            .map(|rect| rect.divider_offset(self.state.fraction))
    }

    /// Width of the visible part of the "after" image.
    #[must_use]
    pub fn clip_width(&self) -> Option<f32> {
        self.divider_offset()
    }

    /// Integer percentage exposed as the accessible slider value.
    #[must_use]
    pub fn accessible_value(&self) -> u8 {
        self.state.fraction.percent()
    }

    fn laid_out_container(&self) -> Option<ContainerRect> {
        if self.laid_out {
            self.container
        } else {
            None
        }
    }

    // -------------------------------------------------------------------------
    // Loading and layout
    // -------------------------------------------------------------------------

    /// Records that `slot` finished loading.
    ///
    /// Returns true if this completion ran the initial layout pass. Repeated
    /// reports for the same slot are ignored.
    pub fn image_loaded(&mut self, slot: ImageSlot) -> bool {
        let status = &mut self.images[slot.index()];
        if *status != LoadStatus::Pending {
            return false;
        }
        *status = LoadStatus::Loaded;
        self.try_initial_layout()
    }

    /// Records that `slot` failed to load. The initial layout pass will
    /// never run for this slider.
    pub fn image_failed(&mut self, slot: ImageSlot) {
        let status = &mut self.images[slot.index()];
        if *status == LoadStatus::Pending {
            *status = LoadStatus::Failed;
        }
    }

    /// Stores new container bounds and re-derives pixel positions from the
    /// preserved fraction.
    pub fn on_container_resize(&mut self, rect: ContainerRect) -> ResizeOutcome {
        let previous = self.container.replace(rect);

        if self.try_initial_layout() {
            return ResizeOutcome::InitialLayout;
        }

        match previous {
            Some(prev) if self.laid_out && prev.size_differs(&rect) => ResizeOutcome::Resized,
            _ => ResizeOutcome::Stored,
        }
    }

    fn try_initial_layout(&mut self) -> bool {
        if self.laid_out || self.loaded_count() < ImageSlot::ALL.len() {
            return false;
        }
        let Some(rect) = self.container else {
            return false;
        };
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return false;
        }
        self.state.fraction = self.initial_fraction;
        self.laid_out = true;
        true
    }

    // -------------------------------------------------------------------------
    // Positioning
    // -------------------------------------------------------------------------

    /// Moves the divider under an absolute pointer x.
    ///
    /// Returns the new divider offset, or `None` before the initial layout pass.
    pub fn set_position_from_pointer(&mut self, pointer_x: f32) -> Option<f32> {
        let rect = self.laid_out_container()?;
        self.state.fraction = rect.fraction_at(pointer_x);
        self.divider_offset()
    }

    /// Moves the divider to `fraction`.
    ///
    /// The fraction is stored even before layout; the returned offset is
    /// `None` until the slider is laid out.
    pub fn set_position_from_fraction(&mut self, fraction: RevealFraction) -> Option<f32> {
        self.state.fraction = fraction;
        self.divider_offset()
    }

    /// Jumps the divider to a click or tap location without starting a drag.
    pub fn click_at(&mut self, pointer_x: f32) -> Option<f32> {
        let offset = self.set_position_from_pointer(pointer_x)?;
        self.focused = true;
        Some(offset)
    }

    // -------------------------------------------------------------------------
    // Drag gesture
    // -------------------------------------------------------------------------

    /// Starts a drag for `pointer` and repositions immediately.
    ///
    /// Returns false if the slider is not laid out yet or another pointer
    /// already holds the session.
    pub fn begin_drag(&mut self, pointer: PointerId, pointer_x: f32) -> bool {
        if !self.laid_out {
            return false;
        }
        if let Some(session) = &self.session {
            if !session.owns(pointer) {
                return false;
            }
        }
        self.session = Some(PointerSession::acquire(pointer, pointer_x));
        self.state.dragging = true;
        self.focused = true;
        self.set_position_from_pointer(pointer_x);
        true
    }

    /// Continues the drag owned by `pointer`. No-op while Idle.
    pub fn on_pointer_move(&mut self, pointer: PointerId, pointer_x: f32) -> Option<f32> {
        let session = self.session.as_mut()?;
        if !session.owns(pointer) {
            return None;
        }
        session.record_move(pointer_x);
        self.set_position_from_pointer(pointer_x)
    }

    /// Ends any drag in progress. Safe to call while Idle.
    pub fn end_drag(&mut self) -> Option<DragSummary> {
        self.state.dragging = false;
        self.session.take().map(PointerSession::release)
    }

    /// Ends the drag only if `pointer` owns it.
    pub fn end_drag_for(&mut self, pointer: PointerId) -> Option<DragSummary> {
        match &self.session {
            Some(session) if session.owns(pointer) => self.end_drag(),
            _ => None,
        }
    }

    // -------------------------------------------------------------------------
    // Focus and keyboard
    // -------------------------------------------------------------------------

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Applies a keyboard command while focused.
    ///
    /// Returns the new fraction, or `None` if the key was not handled.
    pub fn handle_key(&mut self, command: KeyCommand) -> Option<RevealFraction> {
        if !self.focused || !self.laid_out {
            return None;
        }
        let next = self.steps.apply(self.state.fraction, command);
        self.state.fraction = next;
        Some(next)
    }
}
