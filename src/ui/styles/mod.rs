// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the compare panels.

pub mod container;
