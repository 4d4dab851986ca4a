// SPDX-License-Identifier: MPL-2.0
pub mod compare_area;
pub mod reveal_clip;

pub use compare_area::{AreaEvent, AreaStatus, CompareArea};
pub use reveal_clip::RevealClip;
