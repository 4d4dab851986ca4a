// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting and exporting activity reports.
//!
//! Captures drag, keyboard and layout events from every compare widget,
//! stores them in a memory-bounded circular buffer and exports them as a
//! JSON report when the window closes.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: A timestamped event
//! - [`DiagnosticsCollector`]: Owns the buffer and writes the report
//! - [`DiagnosticsHandle`]: Cloneable sender usable from async tasks

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{AppStateEvent, DiagnosticEvent, DiagnosticEventKind, UserAction};
