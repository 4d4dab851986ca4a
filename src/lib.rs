// SPDX-License-Identifier: MPL-2.0
//! `iced_compare` is a before/after image comparison viewer built with the
//! Iced GUI framework.
//!
//! Each comparison stacks two images of the same scene and exposes a
//! draggable vertical divider. Pairs come from the command line or from
//! the compare posts of a JSON posts feed. The crate also provides
//! internationalization with Fluent, user preferences stored as TOML and
//! an in-memory diagnostics log.

#![doc(html_root_url = "https://docs.rs/iced_compare/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;

#[cfg(test)]
mod test_utils;
