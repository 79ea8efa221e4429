//! JSON export and all-or-nothing import.

use chrono::{DateTime, Utc};

use arca_core::{ArcaConfig, ImportError, PersistenceError, Repository};
use arca_core::validation::{sanitize_tags, sanitize_text};

/// Collections that an import file must carry at the top level.
const REQUIRED_COLLECTIONS: [&str; 5] = ["documents", "images", "videos", "links", "notes"];

/// Serialize the full repository, pretty-printed, for download.
pub fn export_json(repo: &Repository) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string_pretty(repo)?)
}

/// Suggested filename for an export taken at the given instant.
pub fn export_filename(at: DateTime<Utc>) -> String {
    format!("knowledge-base-export-{}.json", at.format("%Y-%m-%d"))
}

/// Import a repository from JSON bytes, replacing the live repository.
///
/// All-or-nothing: on any rejection (oversized file, malformed JSON, missing
/// required collection) the live repository is untouched. Accepted data has
/// every text field sanitized and tag lists capped, unlock state cleared,
/// seed rows repaired, and derived tag/count state recomputed.
pub fn import_json(
    repo: &mut Repository,
    bytes: &[u8],
    config: &ArcaConfig,
) -> Result<(), ImportError> {
    if bytes.len() as u64 > config.max_import_bytes {
        return Err(ImportError::TooLarge {
            size: bytes.len() as u64,
            max: config.max_import_bytes,
        });
    }

    let value: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| ImportError::Malformed(e.to_string()))?;
    for name in REQUIRED_COLLECTIONS {
        if !value.get(name).map(|v| v.is_array()).unwrap_or(false) {
            return Err(ImportError::MissingCollection(name));
        }
    }

    let mut imported: Repository =
        serde_json::from_value(value).map_err(|e| ImportError::Malformed(e.to_string()))?;

    sanitize_repository(&mut imported, config);
    imported.clear_folder_access();
    imported.ensure_seeds();
    arca_tags::refresh_after_bulk_change(&mut imported);

    *repo = imported;
    Ok(())
}

/// Sanitize every user-visible text field and cap tag lists. URLs and data
/// URLs only have control characters stripped; markup escaping would corrupt
/// them.
fn sanitize_repository(repo: &mut Repository, config: &ArcaConfig) {
    for doc in repo.documents.iter_mut() {
        doc.name = sanitize_text(&doc.name);
        doc.data_url = strip_controls(&doc.data_url);
        doc.tags = sanitize_tags(&doc.tags, config);
    }
    for image in repo.images.iter_mut() {
        image.name = sanitize_text(&image.name);
        image.description = sanitize_text(&image.description);
        image.data_url = strip_controls(&image.data_url);
        image.original_data_url = image
            .original_data_url
            .as_deref()
            .map(strip_controls);
        image.tags = sanitize_tags(&image.tags, config);
    }
    for video in repo.videos.iter_mut() {
        video.name = sanitize_text(&video.name);
        video.data_url = strip_controls(&video.data_url);
        video.tags = sanitize_tags(&video.tags, config);
    }
    for link in repo.links.iter_mut() {
        link.title = sanitize_text(&link.title);
        link.description = sanitize_text(&link.description);
        link.url = strip_controls(&link.url);
        link.tags = sanitize_tags(&link.tags, config);
    }
    for note in repo.notes.iter_mut() {
        note.title = sanitize_text(&note.title);
        note.tags = sanitize_tags(&note.tags, config);
    }
    for folder in repo.folders.iter_mut() {
        folder.name = sanitize_text(&folder.name);
        folder.description = sanitize_text(&folder.description);
    }
    for category in repo.categories.iter_mut() {
        category.name = sanitize_text(&category.name);
        category.description = sanitize_text(&category.description);
    }
}

fn strip_controls(input: &str) -> String {
    input.chars().filter(|c| !c.is_control()).collect()
}
