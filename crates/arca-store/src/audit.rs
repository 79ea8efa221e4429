//! Bounded audit log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::keys::AUDIT_LOG_KEY;
use crate::kv::KeyValueStore;

/// One audit record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub event: String,
    pub details: String,
    pub context: String,
}

/// Read the audit log. An absent or unreadable record is an empty log.
pub fn audit_log(store: &impl KeyValueStore) -> Vec<AuditEntry> {
    store
        .get(AUDIT_LOG_KEY)
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default()
}

/// Append an entry, keeping only the most recent `cap` entries. Storage
/// failures are logged and swallowed, like repository saves.
pub fn record_audit(
    store: &mut impl KeyValueStore,
    event: &str,
    details: &str,
    context: &str,
    cap: usize,
) {
    let mut log = audit_log(store);
    log.push(AuditEntry {
        timestamp: Utc::now(),
        event: event.to_string(),
        details: details.to_string(),
        context: context.to_string(),
    });
    if log.len() > cap {
        let excess = log.len() - cap;
        log.drain(..excess);
    }
    match serde_json::to_string(&log) {
        Ok(json) => {
            if let Err(err) = store.set(AUDIT_LOG_KEY, &json) {
                tracing::warn!(error = %err, "audit log write failed");
            }
        }
        Err(err) => tracing::warn!(error = %err, "audit log serialization failed"),
    }
}
