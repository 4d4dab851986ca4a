// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// User-initiated actions on a compare widget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// A pointer acquired the drag session.
    BeginDrag {
        slider: usize,
        /// `mouse` or `finger`.
        pointer: String,
    },

    /// The drag session was released.
    EndDrag {
        slider: usize,
        /// Divider position when the drag ended (0–100).
        percent: u8,
        /// Pointer moves seen during the drag.
        moves: u32,
    },

    /// Arrow/Home/End key moved the divider.
    KeyboardStep { slider: usize, percent: u8 },
}

/// Layout and loading milestones.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AppStateEvent {
    /// Feed parsed.
    FeedLoaded { compare_posts: usize },

    /// One image of a pair finished decoding.
    ImageLoaded {
        slider: usize,
        /// `before` or `after`.
        slot: String,
    },

    /// Both images loaded and the container measured.
    InitialLayout { slider: usize, width: f32, height: f32 },

    /// A laid-out container changed size.
    ContainerResized { slider: usize, width: f32, height: f32 },
}

/// A single captured event.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock).
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction { action: UserAction },
    AppState { state: AppStateEvent },
    /// Non-fatal problem, e.g. an image that failed to decode.
    Warning { message: String },
    /// Failure surfaced to the user.
    Error { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_action_serializes_with_tags() {
        let kind = DiagnosticEventKind::UserAction {
            action: UserAction::EndDrag {
                slider: 1,
                percent: 40,
                moves: 12,
            },
        };
        let json = serde_json::to_value(&kind).expect("serialize");
        assert_eq!(json["type"], "user_action");
        assert_eq!(json["action"]["action"], "end_drag");
        assert_eq!(json["action"]["percent"], 40);
    }

    #[test]
    fn state_event_round_trips() {
        let kind = DiagnosticEventKind::AppState {
            state: AppStateEvent::InitialLayout {
                slider: 0,
                width: 400.0,
                height: 300.0,
            },
        };
        let json = serde_json::to_string(&kind).expect("serialize");
        let back: DiagnosticEventKind = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, kind);
    }
}
