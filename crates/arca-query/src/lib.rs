//! arca-query: pure filter/sort pipeline and statistics.
//!
//! Projects repository collections into ordered visible subsets and computes
//! aggregate figures, with a push channel for presentation layers to observe
//! recomputed statistics.

pub mod filter;
pub mod pipeline;
pub mod reconciler;
pub mod sort;
pub mod stats;

pub use filter::{GroupFilter, TagFilter};
pub use pipeline::visible_items;
pub use reconciler::{StatsReconciler, StatsSnapshot};
pub use sort::SortKey;
pub use stats::{
    compute_link_stats, compute_overview, compute_recent_count, KindStats, LinkStats,
    OverviewStats,
};
