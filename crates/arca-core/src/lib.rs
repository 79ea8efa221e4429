//! arca-core: domain model and repository for the arca knowledge base.
//!
//! The repository holds five content collections (documents, images, videos,
//! links, notes), their taxonomy (categories, folders, derived tags), and
//! cross-references (image↔note associations, folder unlock state, search
//! history). Folder access control and caller-side validation live here too.
//!
//! The core is a plain single-writer library: one logical thread mutates the
//! repository at a time. Hosts that introduce real concurrency must wrap
//! mutation plus persistence in a single writer lock, or concurrent writers
//! will clobber each other last-save-wins.

pub mod access;
pub mod association;
pub mod category;
pub mod config;
pub mod error;
pub mod folder;
pub mod history;
pub mod item;
pub mod repository;
pub mod tag;
pub mod validation;

pub use access::password_checksum;
pub use association::ImageNoteAssociation;
pub use category::{Category, CategoryPatch, GENERAL_CATEGORY_ID};
pub use config::ArcaConfig;
pub use error::{AccessError, ArcaError, ImportError, PersistenceError, Result, ValidationError};
pub use folder::{Folder, FolderPatch, DEFAULT_FOLDER_ID};
pub use history::{SearchHistoryEntry, HISTORY_CAP};
pub use item::{
    new_item_id, ContentItem, ContentKind, DocumentItem, DocumentPatch, ImageItem, ImageMetadata,
    ImagePatch, ItemId, LinkItem, LinkPatch, NoteItem, NotePatch, VideoItem, VideoPatch,
};
pub use repository::Repository;
pub use tag::Tag;
