//! Image ↔ note associations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::item::new_item_id;

/// A many-to-many join row linking an image to a note.
///
/// Nothing prevents duplicate rows for the same pair, and deleting a note
/// does not remove rows referencing it. Both are preserved behavior of the
/// original contract and are covered by tests as known gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageNoteAssociation {
    pub id: String,
    pub image_id: String,
    pub note_id: String,
    pub created_at: DateTime<Utc>,
}

impl ImageNoteAssociation {
    pub fn new(image_id: &str, note_id: &str) -> Self {
        Self {
            id: new_item_id(),
            image_id: image_id.to_string(),
            note_id: note_id.to_string(),
            created_at: Utc::now(),
        }
    }
}
