//! The persistence adapter.
//!
//! Round-trips the repository through a key-value backend, tolerating
//! structural drift between what is stored and what the current schema
//! expects. There is no schema version field: migrations key off field
//! presence (currently one — links without a `folder_id` are back-filled to
//! the default folder). New migrations hook into `migrate` the same way.
//!
//! Saving degrades gracefully by design: a serialization or storage failure
//! is logged as a warning and swallowed, so the in-memory operation still
//! succeeds from the user's perspective. The cost is that data may not be
//! durable after a failed save; callers that need certainty can check
//! `last_saved`.

use chrono::{DateTime, Utc};

use arca_core::Repository;

use crate::keys::{DATA_KEY, LAST_SAVED_KEY};
use crate::kv::KeyValueStore;

/// Persists and restores the repository through a key-value backend.
pub struct PersistenceAdapter<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> PersistenceAdapter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying backend (for the side-channel keys: theme,
    /// image order, audit log).
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Serialize the full repository under the data key and stamp the
    /// last-saved record. Never fails to the caller.
    pub fn save(&mut self, repo: &Repository) {
        let json = match serde_json::to_string(repo) {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(error = %err, "repository serialization failed; data not saved");
                return;
            }
        };
        if let Err(err) = self.store.set(DATA_KEY, &json) {
            tracing::warn!(error = %err, "storage write failed; data not saved");
            return;
        }
        if let Err(err) = self.store.set(LAST_SAVED_KEY, &Utc::now().to_rfc3339()) {
            tracing::warn!(error = %err, "failed to stamp last-saved timestamp");
        }
    }

    /// Restore the repository from the data key.
    ///
    /// Absent or unreadable records yield a freshly seeded repository.
    /// Collections missing from the stored record default to empty (serde
    /// field defaults give the field-wise merge), then `migrate` repairs
    /// seed rows, back-fills link folder ids, and recomputes derived counts.
    pub fn load(&self) -> Repository {
        let repo = match self.store.get(DATA_KEY) {
            None => Repository::new(),
            Some(json) => match serde_json::from_str::<Repository>(&json) {
                Ok(repo) => repo,
                Err(err) => {
                    tracing::warn!(error = %err, "stored repository unreadable; starting fresh");
                    Repository::new()
                }
            },
        };
        migrate(repo)
    }

    /// Timestamp of the last successful save, if any.
    pub fn last_saved(&self) -> Option<DateTime<Utc>> {
        let raw = self.store.get(LAST_SAVED_KEY)?;
        DateTime::parse_from_rfc3339(&raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Post-load repairs. Keyed off field presence, not a version number.
fn migrate(mut repo: Repository) -> Repository {
    repo.ensure_seeds();
    let default_id = repo.default_folder().id.clone();
    for link in repo.links.iter_mut() {
        if link.folder_id.is_none() {
            link.folder_id = Some(default_id.clone());
        }
    }
    repo.recompute_link_counts();
    repo
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;
    use arca_core::{LinkItem, NoteItem, DEFAULT_FOLDER_ID};

    #[test]
    fn load_without_saved_data_is_seeded() {
        let adapter = PersistenceAdapter::new(MemoryStore::new());
        let repo = adapter.load();
        assert_eq!(repo.default_folder().id, DEFAULT_FOLDER_ID);
        assert!(adapter.last_saved().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut adapter = PersistenceAdapter::new(MemoryStore::new());
        let mut repo = Repository::new();
        repo.add_note(NoteItem::new("N", "<p>x</p>"));
        let mut link = LinkItem::new("https://a.example", "A", DEFAULT_FOLDER_ID);
        link.tags = vec!["x".into()];
        let link_id = link.id.clone();
        repo.add_link(link);

        adapter.save(&repo);
        let loaded = adapter.load();

        assert_eq!(loaded.notes.len(), 1);
        assert_eq!(loaded.links.len(), 1);
        assert_eq!(loaded.links[0].id, link_id);
        assert!(adapter.last_saved().is_some());
    }

    #[test]
    fn corrupt_record_degrades_to_fresh_repository() {
        let mut store = MemoryStore::new();
        store.set(DATA_KEY, "not json at all").unwrap();
        let adapter = PersistenceAdapter::new(store);
        let repo = adapter.load();
        assert_eq!(repo.item_count(), 0);
        assert_eq!(repo.default_folder().id, DEFAULT_FOLDER_ID);
    }

    #[test]
    fn legacy_links_get_the_default_folder() {
        // A record saved before folders existed: no folders array, links
        // without folder_id.
        let legacy = r#"{
            "links": [
                {"id": "l1", "url": "https://a.example", "title": "A",
                 "created_at": "2024-01-01T00:00:00Z"}
            ]
        }"#;
        let mut store = MemoryStore::new();
        store.set(DATA_KEY, legacy).unwrap();

        let repo = PersistenceAdapter::new(store).load();
        assert_eq!(repo.links[0].folder_id.as_deref(), Some(DEFAULT_FOLDER_ID));
        assert_eq!(repo.default_folder().link_count, 1);
    }

    #[test]
    fn stored_link_counts_are_not_trusted() {
        let record = r#"{
            "folders": [
                {"id": "default", "name": "Default", "is_default": true,
                 "created_at": "2024-01-01T00:00:00Z", "link_count": 42}
            ],
            "links": []
        }"#;
        let mut store = MemoryStore::new();
        store.set(DATA_KEY, record).unwrap();

        let repo = PersistenceAdapter::new(store).load();
        assert_eq!(repo.default_folder().link_count, 0);
    }

    #[test]
    fn unlocked_folders_stay_unlocked_across_reload() {
        // UX continuity: the access map is persisted with the repository.
        let mut adapter = PersistenceAdapter::new(MemoryStore::new());
        let mut repo = Repository::new();
        let folder = arca_core::Folder::new_encrypted(
            "Private",
            arca_core::password_checksum("pw"),
        );
        let folder_id = folder.id.clone();
        repo.add_folder(folder).unwrap();
        repo.verify_password(&folder_id, "pw").unwrap();

        adapter.save(&repo);
        let loaded = adapter.load();
        assert!(!loaded.requires_unlock(&folder_id));
    }
}
