//! Derived tag aggregates.
//!
//! Tags live in two places: as free-text strings embedded on content items
//! (the ground truth) and as these derived aggregate rows with usage counts.
//! Counts are only ever recomputed from scratch by rescanning items; they are
//! never incremented or decremented independently.

use serde::{Deserialize, Serialize};

use crate::item::new_item_id;

/// A derived tag row with a usage count and a stable display color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
    /// Recomputed from scratch on every aggregation pass.
    #[serde(default)]
    pub count: u32,
    /// Assigned once at creation, stable thereafter.
    pub color: String,
}

impl Tag {
    /// Create a tag with count 0 and the given color.
    pub fn new(name: &str, color: &str) -> Self {
        Self {
            id: new_item_id(),
            name: name.to_string(),
            count: 0,
            color: color.to_string(),
        }
    }
}
