//! Well-known storage keys.

/// The entire repository, serialized as one JSON string.
pub const DATA_KEY: &str = "knowledge_base_data";

/// ISO-8601 timestamp of the last successful save.
pub const LAST_SAVED_KEY: &str = "knowledge_base_last_saved";

/// Rich-text image reorder: JSON array of image ids.
pub const IMAGE_ORDER_KEY: &str = "knowledge_base_image_order";

/// UI theme preference: `"light"` or `"dark"`.
pub const THEME_KEY: &str = "knowledge_base_theme";

/// Audit log: JSON array bounded to the most recent entries.
pub const AUDIT_LOG_KEY: &str = "knowledge_base_audit_log";
