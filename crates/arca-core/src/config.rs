//! Configuration for arca-core
//!
//! Centralized limits and windows used across the workspace.

use serde::{Deserialize, Serialize};

/// System-wide configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcaConfig {
    /// Maximum tags per content item
    pub max_tags_per_item: usize,
    /// Maximum characters per tag
    pub max_tag_length: usize,
    /// Per-file upload ceiling in bytes
    pub max_upload_bytes: u64,
    /// Import file ceiling in bytes
    pub max_import_bytes: u64,
    /// Window for "recently added" statistics in days
    pub recent_window_days: i64,
    /// Retained search history entries
    pub search_history_cap: usize,
    /// Retained audit log entries
    pub audit_log_cap: usize,
    /// Maximum folder unlock attempts.
    ///
    /// Carried over from the original configuration but never enforced:
    /// `verify_password` applies no attempt counting or lockout. Kept so
    /// existing configs round-trip; wiring it up would be a behavior change.
    pub max_unlock_attempts: u32,
}

impl Default for ArcaConfig {
    fn default() -> Self {
        Self {
            max_tags_per_item: 10,
            max_tag_length: 50,
            max_upload_bytes: 50 * 1024 * 1024,
            max_import_bytes: 10 * 1024 * 1024,
            recent_window_days: 7,
            search_history_cap: 20,
            audit_log_cap: 1000,
            max_unlock_attempts: 3,
        }
    }
}
