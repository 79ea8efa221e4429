//! Aggregate statistics.
//!
//! Every figure is a fresh scan over the repository; nothing is cached. The
//! distinct tag count unions the tags embedded on links — the ground truth —
//! independently of the derived tag collection.

use std::collections::HashSet;

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use arca_core::{ContentItem, Repository};

/// Headline figures for the links view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkStats {
    pub link_count: usize,
    pub folder_count: usize,
    /// Size of the set union of all tags across all links.
    pub distinct_tag_count: usize,
}

/// Compute the links/folders/tags headline figures.
pub fn compute_link_stats(repo: &Repository) -> LinkStats {
    let distinct: HashSet<&String> = repo.links.iter().flat_map(|l| l.tags.iter()).collect();
    LinkStats {
        link_count: repo.links.len(),
        folder_count: repo.folders.len(),
        distinct_tag_count: distinct.len(),
    }
}

/// Count items created within `[now - window_days, now]`, lower bound
/// inclusive.
pub fn compute_recent_count<'a, T: ContentItem + 'a>(
    items: impl IntoIterator<Item = &'a T>,
    window_days: i64,
) -> usize {
    let cutoff = Utc::now() - Duration::days(window_days);
    items
        .into_iter()
        .filter(|item| item.created_at() >= cutoff)
        .count()
}

/// Total and recent counts for one content kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindStats {
    pub total: usize,
    pub recent: usize,
}

/// Per-kind totals and recently-added counts across the whole repository.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewStats {
    pub documents: KindStats,
    pub images: KindStats,
    pub videos: KindStats,
    pub links: KindStats,
    pub notes: KindStats,
}

/// Compute per-kind totals and recent counts with the given window.
pub fn compute_overview(repo: &Repository, window_days: i64) -> OverviewStats {
    OverviewStats {
        documents: KindStats {
            total: repo.documents.len(),
            recent: compute_recent_count(&repo.documents, window_days),
        },
        images: KindStats {
            total: repo.images.len(),
            recent: compute_recent_count(&repo.images, window_days),
        },
        videos: KindStats {
            total: repo.videos.len(),
            recent: compute_recent_count(&repo.videos, window_days),
        },
        links: KindStats {
            total: repo.links.len(),
            recent: compute_recent_count(&repo.links, window_days),
        },
        notes: KindStats {
            total: repo.notes.len(),
            recent: compute_recent_count(&repo.notes, window_days),
        },
    }
}
