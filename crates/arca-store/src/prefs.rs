//! Side-channel preferences: UI theme and rich-text image order.

use serde::{Deserialize, Serialize};

use crate::keys::{IMAGE_ORDER_KEY, THEME_KEY};
use crate::kv::KeyValueStore;

/// UI theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Read the stored theme. Anything other than `"dark"` is light.
pub fn theme(store: &impl KeyValueStore) -> Theme {
    match store.get(THEME_KEY).as_deref() {
        Some("dark") => Theme::Dark,
        _ => Theme::Light,
    }
}

pub fn set_theme(store: &mut impl KeyValueStore, theme: Theme) {
    if let Err(err) = store.set(THEME_KEY, theme.as_str()) {
        tracing::warn!(error = %err, "theme preference write failed");
    }
}

/// Read the rich-text image order (array of image ids). Absent or
/// unreadable records yield an empty order.
pub fn image_order(store: &impl KeyValueStore) -> Vec<String> {
    store
        .get(IMAGE_ORDER_KEY)
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default()
}

pub fn set_image_order(store: &mut impl KeyValueStore, order: &[String]) {
    match serde_json::to_string(order) {
        Ok(json) => {
            if let Err(err) = store.set(IMAGE_ORDER_KEY, &json) {
                tracing::warn!(error = %err, "image order write failed");
            }
        }
        Err(err) => tracing::warn!(error = %err, "image order serialization failed"),
    }
}
