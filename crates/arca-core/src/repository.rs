//! The in-memory content repository.
//!
//! Single authoritative structure holding every collection: content items,
//! taxonomy (categories, tags, folders), cross-references (image↔note
//! associations, folder access state), and search history. All reads and
//! writes in the system go through it.
//!
//! The repository is a dumb store: domain validation (URL shape, tag caps,
//! upload acceptance) is the caller's responsibility via the `validation`
//! module. The only integrity it enforces itself are the two reassignment
//! rules: deleting a category moves its images to `general`, and deleting a
//! folder moves its links to the default folder.

use std::collections::HashMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::association::ImageNoteAssociation;
use crate::category::{Category, CategoryPatch, GENERAL_CATEGORY_ID};
use crate::error::{ArcaError, Result, ValidationError};
use crate::folder::{Folder, FolderPatch, DEFAULT_FOLDER_ID};
use crate::history::{self, SearchHistoryEntry};
use crate::item::{
    DocumentItem, DocumentPatch, ImageItem, ImagePatch, LinkItem, LinkPatch, NoteItem, NotePatch,
    VideoItem, VideoPatch,
};
use crate::tag::Tag;

/// The whole knowledge base, as persisted under the data key.
///
/// Every field carries `#[serde(default)]` so that records saved before a
/// collection existed deserialize with that collection empty; the persistence
/// adapter repairs seed rows afterwards. This field-wise merge is the schema
/// evolution mechanism — there is no version number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Repository {
    pub documents: Vec<DocumentItem>,
    pub images: Vec<ImageItem>,
    pub videos: Vec<VideoItem>,
    pub links: Vec<LinkItem>,
    pub notes: Vec<NoteItem>,

    pub categories: Vec<Category>,
    pub image_tags: Vec<Tag>,
    pub link_tags: Vec<Tag>,
    pub folders: Vec<Folder>,

    pub associations: Vec<ImageNoteAssociation>,
    /// Folder id → unlocked this session. Persisted for UX continuity only;
    /// this is not a security boundary.
    pub folder_access: HashMap<String, bool>,
    pub search_history: Vec<SearchHistoryEntry>,
}

impl Default for Repository {
    fn default() -> Self {
        Self {
            documents: Vec::new(),
            images: Vec::new(),
            videos: Vec::new(),
            links: Vec::new(),
            notes: Vec::new(),
            categories: Vec::new(),
            image_tags: Vec::new(),
            link_tags: Vec::new(),
            folders: Vec::new(),
            associations: Vec::new(),
            folder_access: HashMap::new(),
            search_history: Vec::new(),
        }
    }
}

impl Repository {
    /// A fresh repository with the seed rows in place.
    pub fn new() -> Self {
        let mut repo = Self::default();
        repo.ensure_seeds();
        repo
    }

    /// Make sure the `general` category and default folder exist. Called on
    /// construction and after every load/import.
    pub fn ensure_seeds(&mut self) {
        if !self.categories.iter().any(|c| c.id == GENERAL_CATEGORY_ID) {
            self.categories.insert(0, Category::general());
        }
        if !self.folders.iter().any(|f| f.is_default) {
            self.folders.insert(0, Folder::default_folder());
        }
    }

    // ==================== Content items ====================

    pub fn add_document(&mut self, item: DocumentItem) {
        self.documents.push(item);
    }

    pub fn add_image(&mut self, item: ImageItem) {
        self.images.push(item);
    }

    pub fn add_video(&mut self, item: VideoItem) {
        self.videos.push(item);
    }

    /// Append a link. Duplicate URLs are permitted; any dedup is the
    /// caller's policy.
    pub fn add_link(&mut self, item: LinkItem) {
        self.links.push(item);
    }

    pub fn add_note(&mut self, item: NoteItem) {
        self.notes.push(item);
    }

    /// Remove by id. Silent no-op when the id is not present.
    pub fn remove_document(&mut self, id: &str) {
        self.documents.retain(|d| d.id != id);
    }

    pub fn remove_image(&mut self, id: &str) {
        self.images.retain(|i| i.id != id);
    }

    pub fn remove_video(&mut self, id: &str) {
        self.videos.retain(|v| v.id != id);
    }

    pub fn remove_link(&mut self, id: &str) {
        self.links.retain(|l| l.id != id);
    }

    /// Remove a note. Associations referencing the note are deliberately
    /// left in place (preserved behavior; see the association module).
    pub fn remove_note(&mut self, id: &str) {
        self.notes.retain(|n| n.id != id);
    }

    pub fn update_document(&mut self, id: &str, patch: DocumentPatch) -> Result<()> {
        let item = self
            .documents
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| ArcaError::NotFound(id.to_string()))?;
        if let Some(name) = patch.name {
            item.name = name;
        }
        if let Some(tags) = patch.tags {
            item.tags = tags;
        }
        item.updated_at = Some(Utc::now());
        Ok(())
    }

    pub fn update_image(&mut self, id: &str, patch: ImagePatch) -> Result<()> {
        let item = self
            .images
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| ArcaError::NotFound(id.to_string()))?;
        if let Some(name) = patch.name {
            item.name = name;
        }
        if let Some(description) = patch.description {
            item.description = description;
        }
        if let Some(category_id) = patch.category_id {
            item.category_id = category_id;
        }
        if let Some(tags) = patch.tags {
            item.tags = tags;
        }
        if let Some(data_url) = patch.data_url {
            item.data_url = data_url;
        }
        if let Some(compressed) = patch.compressed {
            item.compressed = compressed;
        }
        item.updated_at = Some(Utc::now());
        Ok(())
    }

    pub fn update_video(&mut self, id: &str, patch: VideoPatch) -> Result<()> {
        let item = self
            .videos
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or_else(|| ArcaError::NotFound(id.to_string()))?;
        if let Some(name) = patch.name {
            item.name = name;
        }
        if let Some(tags) = patch.tags {
            item.tags = tags;
        }
        item.updated_at = Some(Utc::now());
        Ok(())
    }

    pub fn update_link(&mut self, id: &str, patch: LinkPatch) -> Result<()> {
        let item = self
            .links
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| ArcaError::NotFound(id.to_string()))?;
        if let Some(url) = patch.url {
            item.url = url;
        }
        if let Some(title) = patch.title {
            item.title = title;
        }
        if let Some(description) = patch.description {
            item.description = description;
        }
        if let Some(folder_id) = patch.folder_id {
            item.folder_id = Some(folder_id);
        }
        if let Some(tags) = patch.tags {
            item.tags = tags;
        }
        item.updated_at = Some(Utc::now());
        Ok(())
    }

    pub fn update_note(&mut self, id: &str, patch: NotePatch) -> Result<()> {
        let item = self
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| ArcaError::NotFound(id.to_string()))?;
        if let Some(title) = patch.title {
            item.title = title;
        }
        if let Some(content) = patch.content {
            item.content = content;
        }
        if let Some(tags) = patch.tags {
            item.tags = tags;
        }
        item.updated_at = Some(Utc::now());
        Ok(())
    }

    // ==================== Folders ====================

    pub fn folder(&self, id: &str) -> Option<&Folder> {
        self.folders.iter().find(|f| f.id == id)
    }

    // Raw access would bypass the name-uniqueness and default-flag
    // invariants; mutation goes through update_folder.
    pub(crate) fn folder_mut(&mut self, id: &str) -> Option<&mut Folder> {
        self.folders.iter_mut().find(|f| f.id == id)
    }

    pub fn default_folder(&self) -> &Folder {
        // ensure_seeds guarantees exactly one default folder exists.
        self.folders
            .iter()
            .find(|f| f.is_default)
            .expect("repository has no default folder")
    }

    pub fn add_folder(&mut self, folder: Folder) -> Result<()> {
        if self.folders.iter().any(|f| f.name == folder.name) {
            return Err(ValidationError::DuplicateName(folder.name).into());
        }
        self.folders.push(folder);
        Ok(())
    }

    /// Delete a folder, reassigning its links to the default folder and
    /// recomputing link counts. The default folder cannot be deleted.
    pub fn remove_folder(&mut self, id: &str) -> Result<()> {
        let Some(folder) = self.folder(id) else {
            return Ok(()); // already gone; soft no-op
        };
        if folder.is_default {
            return Err(ValidationError::Other(
                "the default folder cannot be deleted".to_string(),
            )
            .into());
        }
        let default_id = self.default_folder().id.clone();
        for link in self.links.iter_mut() {
            if link.folder_id.as_deref() == Some(id) {
                link.folder_id = Some(default_id.clone());
            }
        }
        self.folders.retain(|f| f.id != id);
        self.folder_access.remove(id);
        self.recompute_link_counts();
        Ok(())
    }

    /// Patch a folder's display fields. Rejects names already used by
    /// another folder; the `is_default` flag is not patchable, so exactly
    /// one default folder survives any sequence of updates.
    pub fn update_folder(&mut self, id: &str, patch: FolderPatch) -> Result<()> {
        if self.folder(id).is_none() {
            return Err(ArcaError::NotFound(id.to_string()));
        }
        if let Some(name) = &patch.name {
            if self.folders.iter().any(|f| f.id != id && f.name == *name) {
                return Err(ValidationError::DuplicateName(name.clone()).into());
            }
        }
        let folder = self.folder_mut(id).expect("checked above");
        if let Some(name) = patch.name {
            folder.name = name;
        }
        if let Some(description) = patch.description {
            folder.description = description;
        }
        if let Some(color) = patch.color {
            folder.color = color;
        }
        if let Some(icon) = patch.icon {
            folder.icon = icon;
        }
        Ok(())
    }

    /// Recompute every folder's derived `link_count` from the link
    /// collection. Stored counts are never trusted.
    pub fn recompute_link_counts(&mut self) {
        let mut counts: HashMap<&str, u32> = HashMap::new();
        for link in &self.links {
            if let Some(folder_id) = link.folder_id.as_deref() {
                *counts.entry(folder_id).or_insert(0) += 1;
            }
        }
        for folder in self.folders.iter_mut() {
            folder.link_count = counts.get(folder.id.as_str()).copied().unwrap_or(0);
        }
    }

    // ==================== Categories ====================

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn add_category(&mut self, category: Category) -> Result<()> {
        if self.categories.iter().any(|c| c.name == category.name) {
            return Err(ValidationError::DuplicateName(category.name).into());
        }
        self.categories.push(category);
        Ok(())
    }

    /// Patch a category's display fields. Rejects names already used by
    /// another category; the id (including the seed's) is never patchable.
    pub fn update_category(&mut self, id: &str, patch: CategoryPatch) -> Result<()> {
        if self.category(id).is_none() {
            return Err(ArcaError::NotFound(id.to_string()));
        }
        if let Some(name) = &patch.name {
            if self.categories.iter().any(|c| c.id != id && c.name == *name) {
                return Err(ValidationError::DuplicateName(name.clone()).into());
            }
        }
        let category = self
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .expect("checked above");
        if let Some(name) = patch.name {
            category.name = name;
        }
        if let Some(description) = patch.description {
            category.description = description;
        }
        if let Some(color) = patch.color {
            category.color = color;
        }
        if let Some(icon) = patch.icon {
            category.icon = icon;
        }
        Ok(())
    }

    /// Delete a category, reassigning its images to `general`. The seed
    /// category cannot be deleted.
    pub fn remove_category(&mut self, id: &str) -> Result<()> {
        if id == GENERAL_CATEGORY_ID {
            return Err(ValidationError::Other(
                "the general category cannot be deleted".to_string(),
            )
            .into());
        }
        if self.category(id).is_none() {
            return Ok(());
        }
        for image in self.images.iter_mut() {
            if image.category_id == id {
                image.category_id = GENERAL_CATEGORY_ID.to_string();
            }
        }
        self.categories.retain(|c| c.id != id);
        Ok(())
    }

    // ==================== Associations & history ====================

    /// Associate an image with a note. No duplicate check: associating the
    /// same pair twice yields two rows.
    pub fn add_association(&mut self, image_id: &str, note_id: &str) {
        self.associations
            .push(ImageNoteAssociation::new(image_id, note_id));
    }

    pub fn associations_for_image(&self, image_id: &str) -> Vec<&ImageNoteAssociation> {
        self.associations
            .iter()
            .filter(|a| a.image_id == image_id)
            .collect()
    }

    pub fn associations_for_note(&self, note_id: &str) -> Vec<&ImageNoteAssociation> {
        self.associations
            .iter()
            .filter(|a| a.note_id == note_id)
            .collect()
    }

    pub fn record_search(&mut self, query: &str, result_count: usize) {
        history::record_search(&mut self.search_history, query, result_count);
    }

    /// Total items across all five content collections.
    pub fn item_count(&self) -> usize {
        self.documents.len()
            + self.images.len()
            + self.videos.len()
            + self.links.len()
            + self.notes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo_with_links(folder_id: &str, n: usize) -> Repository {
        let mut repo = Repository::new();
        for i in 0..n {
            repo.add_link(LinkItem::new(
                &format!("https://example.com/{i}"),
                &format!("Link {i}"),
                folder_id,
            ));
        }
        repo
    }

    #[test]
    fn new_repository_is_seeded() {
        let repo = Repository::new();
        assert!(repo.category(GENERAL_CATEGORY_ID).is_some());
        assert_eq!(repo.default_folder().id, DEFAULT_FOLDER_ID);
        assert_eq!(repo.item_count(), 0);
    }

    #[test]
    fn remove_is_a_silent_no_op_for_unknown_ids() {
        let mut repo = Repository::new();
        repo.remove_link("missing");
        repo.remove_note("missing");
        assert_eq!(repo.item_count(), 0);
    }

    #[test]
    fn update_missing_item_is_not_found() {
        let mut repo = Repository::new();
        let err = repo.update_note("missing", NotePatch::default()).unwrap_err();
        assert!(matches!(err, ArcaError::NotFound(_)));
    }

    #[test]
    fn update_merges_patch_and_sets_updated_at() {
        let mut repo = Repository::new();
        let note = NoteItem::new("Draft", "<p>one</p>");
        let id = note.id.clone();
        repo.add_note(note);

        repo.update_note(
            &id,
            NotePatch {
                content: Some("<p>two</p>".into()),
                ..Default::default()
            },
        )
        .unwrap();

        let note = repo.notes.iter().find(|n| n.id == id).unwrap();
        assert_eq!(note.title, "Draft"); // untouched
        assert_eq!(note.content, "<p>two</p>");
        assert!(note.updated_at.is_some());
    }

    #[test]
    fn deleting_folder_reassigns_links_to_default() {
        let mut repo = Repository::new();
        let folder = Folder::new("Work");
        let folder_id = folder.id.clone();
        repo.add_folder(folder).unwrap();
        for i in 0..3 {
            repo.add_link(LinkItem::new(
                &format!("https://example.com/{i}"),
                "Work link",
                &folder_id,
            ));
        }

        repo.remove_folder(&folder_id).unwrap();

        assert!(repo.folder(&folder_id).is_none());
        let remaining: Vec<&str> = repo.folders.iter().map(|f| f.id.as_str()).collect();
        for link in &repo.links {
            assert_eq!(link.folder_id.as_deref(), Some(DEFAULT_FOLDER_ID));
            assert!(remaining.contains(&link.folder_id.as_deref().unwrap()));
        }
        assert_eq!(repo.default_folder().link_count, 3);
    }

    #[test]
    fn default_folder_cannot_be_deleted() {
        let mut repo = Repository::new();
        let err = repo.remove_folder(DEFAULT_FOLDER_ID).unwrap_err();
        assert!(matches!(err, ArcaError::Validation(_)));
        assert!(repo.folder(DEFAULT_FOLDER_ID).is_some());
    }

    #[test]
    fn deleting_category_reassigns_images_to_general() {
        let mut repo = Repository::new();
        let cat = Category::new("Screenshots");
        let cat_id = cat.id.clone();
        repo.add_category(cat).unwrap();

        let image = crate::item::ImageItem {
            id: crate::item::new_item_id(),
            name: "shot.png".into(),
            data_url: "data:image/png;base64,AAAA".into(),
            original_data_url: None,
            compressed: false,
            category_id: cat_id.clone(),
            metadata: Default::default(),
            description: String::new(),
            tags: vec![],
            created_at: Utc::now(),
            updated_at: None,
        };
        repo.add_image(image);

        repo.remove_category(&cat_id).unwrap();

        assert!(repo.category(&cat_id).is_none());
        for image in &repo.images {
            assert_eq!(image.category_id, GENERAL_CATEGORY_ID);
            assert!(repo.category(&image.category_id).is_some());
        }
    }

    #[test]
    fn general_category_cannot_be_deleted() {
        let mut repo = Repository::new();
        assert!(repo.remove_category(GENERAL_CATEGORY_ID).is_err());
        assert!(repo.category(GENERAL_CATEGORY_ID).is_some());
    }

    #[test]
    fn duplicate_folder_names_rejected() {
        let mut repo = Repository::new();
        repo.add_folder(Folder::new("Work")).unwrap();
        assert!(repo.add_folder(Folder::new("Work")).is_err());
    }

    #[test]
    fn update_folder_rejects_name_taken_by_another_folder() {
        let mut repo = Repository::new();
        repo.add_folder(Folder::new("Work")).unwrap();
        let personal = Folder::new("Personal");
        let personal_id = personal.id.clone();
        repo.add_folder(personal).unwrap();

        let err = repo
            .update_folder(
                &personal_id,
                FolderPatch {
                    name: Some("Work".into()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, ArcaError::Validation(_)));
        assert_eq!(repo.folder(&personal_id).unwrap().name, "Personal");

        // Re-submitting a folder's own name is not a collision.
        repo.update_folder(
            &personal_id,
            FolderPatch {
                name: Some("Personal".into()),
                description: Some("mine".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(repo.folder(&personal_id).unwrap().description, "mine");
    }

    #[test]
    fn update_folder_never_clears_the_default_flag() {
        let mut repo = Repository::new();
        let folder = Folder::new("Work");
        let folder_id = folder.id.clone();
        repo.add_folder(folder).unwrap();

        repo.update_folder(
            DEFAULT_FOLDER_ID,
            FolderPatch {
                name: Some("Inbox".into()),
                color: Some("#10b981".into()),
                ..Default::default()
            },
        )
        .unwrap();

        let default = repo.default_folder();
        assert_eq!(default.id, DEFAULT_FOLDER_ID);
        assert_eq!(default.name, "Inbox");
        assert!(default.is_default);

        // Deleting another folder still has a reassignment target.
        repo.remove_folder(&folder_id).unwrap();
        assert_eq!(repo.default_folder().id, DEFAULT_FOLDER_ID);
    }

    #[test]
    fn update_folder_missing_id_is_not_found() {
        let mut repo = Repository::new();
        let err = repo
            .update_folder("missing", FolderPatch::default())
            .unwrap_err();
        assert!(matches!(err, ArcaError::NotFound(_)));
    }

    #[test]
    fn update_category_rejects_name_taken_by_another_category() {
        let mut repo = Repository::new();
        let cat = Category::new("Screenshots");
        let cat_id = cat.id.clone();
        repo.add_category(cat).unwrap();

        let err = repo
            .update_category(
                &cat_id,
                CategoryPatch {
                    name: Some("General".into()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, ArcaError::Validation(_)));
        assert_eq!(repo.category(&cat_id).unwrap().name, "Screenshots");

        repo.update_category(
            &cat_id,
            CategoryPatch {
                name: Some("Captures".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(repo.category(&cat_id).unwrap().name, "Captures");
    }

    #[test]
    fn update_category_missing_id_is_not_found() {
        let mut repo = Repository::new();
        let err = repo
            .update_category("missing", CategoryPatch::default())
            .unwrap_err();
        assert!(matches!(err, ArcaError::NotFound(_)));
    }

    #[test]
    fn link_counts_recompute_from_scratch() {
        let mut repo = repo_with_links(DEFAULT_FOLDER_ID, 4);
        // Poison the stored count; recompute must not trust it.
        repo.folder_mut(DEFAULT_FOLDER_ID).unwrap().link_count = 99;
        repo.recompute_link_counts();
        assert_eq!(repo.default_folder().link_count, 4);
    }

    #[test]
    fn duplicate_associations_are_permitted() {
        // Known gap: associating the same pair twice is not idempotent.
        let mut repo = Repository::new();
        repo.add_association("img1", "note1");
        repo.add_association("img1", "note1");
        assert_eq!(repo.associations_for_image("img1").len(), 2);
    }

    #[test]
    fn deleting_note_leaves_associations_dangling() {
        // Known gap: association rows survive their note.
        let mut repo = Repository::new();
        let note = NoteItem::new("N", "<p></p>");
        let note_id = note.id.clone();
        repo.add_note(note);
        repo.add_association("img1", &note_id);

        repo.remove_note(&note_id);

        assert!(repo.notes.is_empty());
        assert_eq!(repo.associations_for_note(&note_id).len(), 1);
    }

    #[test]
    fn repository_serde_round_trip() {
        let mut repo = repo_with_links(DEFAULT_FOLDER_ID, 2);
        repo.add_note(NoteItem::new("N", "<p>x</p>"));
        repo.record_search("rust", 1);
        let json = serde_json::to_string(&repo).unwrap();
        let back: Repository = serde_json::from_str(&json).unwrap();
        assert_eq!(repo, back);
    }

    #[test]
    fn missing_collections_deserialize_empty() {
        // A record saved before taxonomy collections existed.
        let json = r#"{"documents": [], "links": []}"#;
        let repo: Repository = serde_json::from_str(json).unwrap();
        assert!(repo.folders.is_empty());
        assert!(repo.image_tags.is_empty());
        assert!(repo.search_history.is_empty());
    }
}
