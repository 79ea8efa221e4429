//! Image categories.

use serde::{Deserialize, Serialize};

use crate::item::new_item_id;

/// Well-known id of the seeded category. It cannot be deleted; images from
/// deleted categories are reassigned to it.
pub const GENERAL_CATEGORY_ID: &str = "general";

/// A named grouping of images, distinct from tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub icon: String,
}

impl Category {
    /// Create a user category with a fresh id.
    pub fn new(name: &str) -> Self {
        Self {
            id: new_item_id(),
            name: name.to_string(),
            description: String::new(),
            color: String::new(),
            icon: String::new(),
        }
    }

    /// The seeded `general` category.
    pub fn general() -> Self {
        Self {
            id: GENERAL_CATEGORY_ID.to_string(),
            name: "General".to_string(),
            description: "Uncategorized images".to_string(),
            color: "#6b7280".to_string(),
            icon: "fas fa-folder".to_string(),
        }
    }

    /// Whether this is the immutable seed category.
    pub fn is_seed(&self) -> bool {
        self.id == GENERAL_CATEGORY_ID
    }
}

/// Field patch applied by `Repository::update_category`. `None` leaves the
/// existing value untouched. The id is never patchable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
}
