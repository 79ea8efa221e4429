//! arca-tags: tag and category aggregation.
//!
//! Keeps the derived tag collections consistent with the ground truth (tag
//! strings embedded on content items) via full recompute, and derives filter
//! option sets from current data.

pub mod aggregate;
pub mod options;
pub mod palette;

pub use aggregate::*;
pub use options::*;
pub use palette::*;
