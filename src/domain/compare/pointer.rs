// SPDX-License-Identifier: MPL-2.0
//! Pointer session for drag gestures.
//!
//! A [`PointerSession`] is acquired when a drag starts and consumed by
//! [`PointerSession::release`] when it ends. Only the pointer that acquired
//! the session can move or end it, so a second finger landing mid-drag
//! cannot hijack the divider.

/// Source of a pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerId {
    Mouse,
    Finger(u64),
}

/// Capture held for the duration of one drag gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerSession {
    pointer: PointerId,
    origin_x: f32,
    last_x: f32,
    moves: u32,
}

/// What a finished drag did, returned when the session is released.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSummary {
    pub pointer: PointerId,
    pub origin_x: f32,
    pub last_x: f32,
    pub moves: u32,
}

impl PointerSession {
    /// Acquires a session for `pointer` starting at absolute `x`.
    #[must_use]
    pub fn acquire(pointer: PointerId, x: f32) -> Self {
        Self {
            pointer,
            origin_x: x,
            last_x: x,
            moves: 0,
        }
    }

    #[must_use]
    pub fn pointer(&self) -> PointerId {
        self.pointer
    }

    /// Returns true if `pointer` owns this session.
    #[must_use]
    pub fn owns(&self, pointer: PointerId) -> bool {
        self.pointer == pointer
    }

    pub fn record_move(&mut self, x: f32) {
        self.last_x = x;
        self.moves = self.moves.saturating_add(1);
    }

    /// Ends the session.
    #[must_use]
    pub fn release(self) -> DragSummary {
        DragSummary {
            pointer: self.pointer,
            origin_x: self.origin_x,
            last_x: self.last_x,
            moves: self.moves,
        }
    }
}
