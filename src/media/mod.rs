// SPDX-License-Identifier: MPL-2.0
//! Media sources for compare widgets: decoded images, image pairs and the
//! posts feed that lists them.

pub mod feed;
pub mod image;
pub mod pair;

pub use feed::{load_feed, load_feed_async, BoxLength, ComparePost, FeedSelection, Post};
pub use image::{load_image, load_image_async, ImageData};
pub use pair::MediaPair;
