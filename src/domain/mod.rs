// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and rules.
//! It depends on nothing but `std` so it can be tested without a window.
//!
//! # Modules
//!
//! - [`compare`]: Compare slider state machine and geometry
//!   ([`CompareSlider`](compare::CompareSlider), [`RevealFraction`](compare::RevealFraction))
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))

pub mod compare;
pub mod diagnostics;
