//! arca-store: durable round-trip of the repository.
//!
//! A key-value backend (modeled on browser local storage) holds the whole
//! repository as one JSON record plus a handful of side-channel keys. Saves
//! degrade gracefully — failures are logged warnings, never errors to the
//! caller — and loads merge stored data field-wise over defaults so records
//! from older schema versions keep working.

pub mod adapter;
pub mod audit;
pub mod interchange;
pub mod keys;
pub mod kv;
pub mod prefs;

pub use adapter::PersistenceAdapter;
pub use audit::{audit_log, record_audit, AuditEntry};
pub use interchange::{export_filename, export_json, import_json};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use prefs::{image_order, set_image_order, set_theme, theme, Theme};
