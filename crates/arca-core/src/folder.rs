//! Link folders, optionally password-gated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::item::new_item_id;

/// Well-known id of the seeded default folder. Exactly one folder is the
/// default; it cannot be deleted and is the reassignment target when other
/// folders are removed.
pub const DEFAULT_FOLDER_ID: &str = "default";

/// A named grouping of links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub is_encrypted: bool,
    /// Password checksum (see `access::password_checksum`), never plaintext.
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
    /// Derived; recomputed from the link collection, never trusted from
    /// storage.
    #[serde(default)]
    pub link_count: u32,
}

impl Folder {
    /// Create a plain (unencrypted) user folder.
    pub fn new(name: &str) -> Self {
        Self {
            id: new_item_id(),
            name: name.to_string(),
            description: String::new(),
            color: "#3b82f6".to_string(),
            icon: "fas fa-folder".to_string(),
            is_encrypted: false,
            password: None,
            is_default: false,
            created_at: Utc::now(),
            link_count: 0,
        }
    }

    /// Create an encrypted folder gated by the given password checksum.
    pub fn new_encrypted(name: &str, password_checksum: String) -> Self {
        let mut folder = Self::new(name);
        folder.is_encrypted = true;
        folder.password = Some(password_checksum);
        folder
    }

    /// The seeded default folder.
    ///
    /// Exactly one folder carries `is_default`; it cannot be deleted and
    /// `Repository::update_folder` never clears the flag.
    pub fn default_folder() -> Self {
        Self {
            id: DEFAULT_FOLDER_ID.to_string(),
            name: "Default".to_string(),
            description: "Unfiled links".to_string(),
            color: "#6b7280".to_string(),
            icon: "fas fa-inbox".to_string(),
            is_encrypted: false,
            password: None,
            is_default: true,
            created_at: Utc::now(),
            link_count: 0,
        }
    }
}

/// Field patch applied by `Repository::update_folder`. `None` leaves the
/// existing value untouched. Deliberately carries no `is_default` field:
/// the default flag can never be moved or cleared through an update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FolderPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
}
