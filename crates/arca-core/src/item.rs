use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque unique item identifier, generated at creation and immutable.
pub type ItemId = String;

/// Generate a fresh item id.
pub fn new_item_id() -> ItemId {
    Uuid::new_v4().to_string()
}

/// The five content kinds held by the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Document,
    Image,
    Video,
    Link,
    Note,
}

/// Pixel dimensions and aspect ratio captured at image ingest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ImageMetadata {
    pub width: u32,
    pub height: u32,
    pub aspect_ratio: f64,
}

/// An uploaded document (PDF, office file, plain text).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentItem {
    pub id: ItemId,
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    pub data_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A stored image, optionally compressed, classified under a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageItem {
    pub id: ItemId,
    pub name: String,
    pub data_url: String,
    /// Pre-compression original, kept so compression can be undone.
    #[serde(default)]
    pub original_data_url: Option<String>,
    #[serde(default)]
    pub compressed: bool,
    /// Foreign key into the category collection. Defaults to the seeded
    /// `general` category.
    pub category_id: String,
    #[serde(default)]
    pub metadata: ImageMetadata,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// An uploaded video file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoItem {
    pub id: ItemId,
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    pub data_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A bookmarked link, always filed under a folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkItem {
    pub id: ItemId,
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Foreign key into the folder collection. Required; data saved before
    /// folders existed is back-filled to the default folder on load.
    #[serde(default)]
    pub folder_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A rich-text note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteItem {
    pub id: ItemId,
    pub title: String,
    /// Rich HTML text.
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Common read surface over all content kinds, used by the query pipeline.
pub trait ContentItem {
    fn id(&self) -> &str;
    fn kind(&self) -> ContentKind;
    fn tags(&self) -> &[String];
    fn created_at(&self) -> DateTime<Utc>;
    /// Name or title used for lexicographic sorting.
    fn display_name(&self) -> &str;
    /// Byte size, where the kind has one.
    fn byte_size(&self) -> Option<u64> {
        None
    }
    /// Grouping id: the category for images, the folder for links.
    fn group_id(&self) -> Option<&str> {
        None
    }
}

impl ContentItem for DocumentItem {
    fn id(&self) -> &str {
        &self.id
    }
    fn kind(&self) -> ContentKind {
        ContentKind::Document
    }
    fn tags(&self) -> &[String] {
        &self.tags
    }
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
    fn display_name(&self) -> &str {
        &self.name
    }
    fn byte_size(&self) -> Option<u64> {
        Some(self.size)
    }
}

impl ContentItem for ImageItem {
    fn id(&self) -> &str {
        &self.id
    }
    fn kind(&self) -> ContentKind {
        ContentKind::Image
    }
    fn tags(&self) -> &[String] {
        &self.tags
    }
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
    fn display_name(&self) -> &str {
        &self.name
    }
    fn byte_size(&self) -> Option<u64> {
        // Data URLs are base64; the decoded length approximates the byte size.
        Some((self.data_url.len() as u64 * 3) / 4)
    }
    fn group_id(&self) -> Option<&str> {
        Some(&self.category_id)
    }
}

impl ContentItem for VideoItem {
    fn id(&self) -> &str {
        &self.id
    }
    fn kind(&self) -> ContentKind {
        ContentKind::Video
    }
    fn tags(&self) -> &[String] {
        &self.tags
    }
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
    fn display_name(&self) -> &str {
        &self.name
    }
    fn byte_size(&self) -> Option<u64> {
        Some(self.size)
    }
}

impl ContentItem for LinkItem {
    fn id(&self) -> &str {
        &self.id
    }
    fn kind(&self) -> ContentKind {
        ContentKind::Link
    }
    fn tags(&self) -> &[String] {
        &self.tags
    }
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
    fn display_name(&self) -> &str {
        &self.title
    }
    fn group_id(&self) -> Option<&str> {
        self.folder_id.as_deref()
    }
}

impl ContentItem for NoteItem {
    fn id(&self) -> &str {
        &self.id
    }
    fn kind(&self) -> ContentKind {
        ContentKind::Note
    }
    fn tags(&self) -> &[String] {
        &self.tags
    }
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
    fn display_name(&self) -> &str {
        &self.title
    }
}

/// Field patches applied by `Repository::update_*`. `None` leaves the
/// existing value untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentPatch {
    pub name: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImagePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<String>,
    pub tags: Option<Vec<String>>,
    pub data_url: Option<String>,
    pub compressed: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoPatch {
    pub name: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkPatch {
    pub url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub folder_id: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl LinkItem {
    /// Create a link filed under the given folder.
    pub fn new(url: &str, title: &str, folder_id: &str) -> Self {
        Self {
            id: new_item_id(),
            url: url.to_string(),
            title: title.to_string(),
            description: String::new(),
            folder_id: Some(folder_id.to_string()),
            tags: Vec::new(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

impl NoteItem {
    pub fn new(title: &str, content: &str) -> Self {
        Self {
            id: new_item_id(),
            title: title.to_string(),
            content: content.to_string(),
            tags: Vec::new(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_ids_are_unique() {
        let a = new_item_id();
        let b = new_item_id();
        assert_ne!(a, b);
    }

    #[test]
    fn link_serde_round_trip() {
        let mut link = LinkItem::new("https://example.com", "Example", "default");
        link.tags = vec!["reading".into(), "web".into()];
        let json = serde_json::to_string_pretty(&link).unwrap();
        let back: LinkItem = serde_json::from_str(&json).unwrap();
        assert_eq!(link, back);
    }

    #[test]
    fn link_without_folder_id_deserializes() {
        // Data saved before folders existed has no folder_id field at all.
        let json = r#"{
            "id": "abc",
            "url": "https://example.com",
            "title": "Example",
            "created_at": "2024-01-01T00:00:00Z"
        }"#;
        let link: LinkItem = serde_json::from_str(json).unwrap();
        assert_eq!(link.folder_id, None);
        assert!(link.tags.is_empty());
    }

    #[test]
    fn content_item_trait_surface() {
        let note = NoteItem::new("Shopping", "<p>milk</p>");
        assert_eq!(note.kind(), ContentKind::Note);
        assert_eq!(note.display_name(), "Shopping");
        assert_eq!(note.byte_size(), None);
        assert_eq!(note.group_id(), None);
    }

    #[test]
    fn image_groups_by_category() {
        let image = ImageItem {
            id: new_item_id(),
            name: "photo.png".into(),
            data_url: "data:image/png;base64,AAAA".into(),
            original_data_url: None,
            compressed: false,
            category_id: "general".into(),
            metadata: ImageMetadata::default(),
            description: String::new(),
            tags: vec![],
            created_at: Utc::now(),
            updated_at: None,
        };
        assert_eq!(image.group_id(), Some("general"));
        assert!(image.byte_size().unwrap() > 0);
    }
}
