//! Caller-side domain rules.
//!
//! The repository itself is a dumb store; these checks run at the operation
//! boundary before anything is added to it.

use url::Url;

use crate::config::ArcaConfig;
use crate::error::ValidationError;

/// MIME types accepted for upload.
pub const ALLOWED_MIME_TYPES: &[&str] = &[
    // images
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "image/svg+xml",
    // documents
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/vnd.ms-powerpoint",
    "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    // video
    "video/mp4",
    "video/webm",
    "video/ogg",
    "video/quicktime",
    // text
    "text/plain",
    "text/markdown",
    "text/csv",
    "text/html",
];

/// Check a link URL. Only absolute http(s) URLs are accepted.
pub fn validate_url(input: &str) -> Result<(), ValidationError> {
    let parsed = Url::parse(input).map_err(|_| ValidationError::MalformedUrl(input.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(ValidationError::MalformedUrl(input.to_string())),
    }
}

/// Check tag count and per-tag length against the configured caps.
pub fn validate_tags(tags: &[String], config: &ArcaConfig) -> Result<(), ValidationError> {
    if tags.len() > config.max_tags_per_item {
        return Err(ValidationError::TooManyTags {
            count: tags.len(),
            max: config.max_tags_per_item,
        });
    }
    for tag in tags {
        if tag.chars().count() > config.max_tag_length {
            return Err(ValidationError::TagTooLong(tag.clone()));
        }
    }
    Ok(())
}

/// Upload acceptance: allow-listed MIME type and size ceiling. Both checks
/// are mandatory preconditions before a file enters the repository.
pub fn validate_upload(mime_type: &str, size: u64, config: &ArcaConfig) -> Result<(), ValidationError> {
    if !ALLOWED_MIME_TYPES.contains(&mime_type) {
        return Err(ValidationError::UnsupportedFileType(mime_type.to_string()));
    }
    if size > config.max_upload_bytes {
        return Err(ValidationError::FileTooLarge {
            size,
            max: config.max_upload_bytes,
        });
    }
    Ok(())
}

/// Escape markup characters and strip control characters from free text.
/// Applied to every string field on imported items.
pub fn sanitize_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c if c.is_control() && c != '\n' && c != '\t' => {}
            c => out.push(c),
        }
    }
    out
}

/// Sanitize a tag list: sanitize each tag, truncate overlong tags, drop
/// empties, and cap the count. Used by import, where rejection would be too
/// strict.
pub fn sanitize_tags(tags: &[String], config: &ArcaConfig) -> Vec<String> {
    tags.iter()
        .map(|t| {
            sanitize_text(t)
                .chars()
                .take(config.max_tag_length)
                .collect::<String>()
        })
        .filter(|t| !t.trim().is_empty())
        .take(config.max_tags_per_item)
        .collect()
}
