//! Statistics reconciler.
//!
//! Recomputes aggregate figures from the repository and pushes them to
//! subscribers over channels. This inverts the original's poll-until-the-
//! surface-exists loops: computation never depends on a presentation surface
//! existing — a reconciler with zero subscribers still computes and returns
//! the snapshot, and a presentation layer attaches whenever it is ready.

use std::sync::mpsc::{channel, Receiver, Sender};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use arca_core::Repository;

use crate::stats::{compute_link_stats, compute_overview, LinkStats, OverviewStats};

/// One recomputed set of figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub overview: OverviewStats,
    pub link_stats: LinkStats,
    pub computed_at: DateTime<Utc>,
}

/// Recomputes statistics on demand and notifies subscribers.
pub struct StatsReconciler {
    window_days: i64,
    subscribers: Vec<Sender<StatsSnapshot>>,
}

impl StatsReconciler {
    pub fn new(window_days: i64) -> Self {
        Self {
            window_days,
            subscribers: Vec::new(),
        }
    }

    /// Subscribe to recomputed snapshots. Returns the receiving end of a
    /// channel; disconnected receivers are dropped on the next recompute.
    pub fn subscribe(&mut self) -> Receiver<StatsSnapshot> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }

    /// Recompute all figures from the repository and push the snapshot to
    /// every live subscriber. Side-effect-free on the repository and safe to
    /// call repeatedly.
    pub fn recompute(&mut self, repo: &Repository) -> StatsSnapshot {
        let snapshot = StatsSnapshot {
            overview: compute_overview(repo, self.window_days),
            link_stats: compute_link_stats(repo),
            computed_at: Utc::now(),
        };
        self.subscribers
            .retain(|tx| tx.send(snapshot.clone()).is_ok());
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arca_core::{LinkItem, DEFAULT_FOLDER_ID};

    #[test]
    fn recompute_works_with_no_subscribers() {
        let mut reconciler = StatsReconciler::new(7);
        let repo = Repository::new();
        let snapshot = reconciler.recompute(&repo);
        assert_eq!(snapshot.link_stats.link_count, 0);
        assert_eq!(snapshot.link_stats.folder_count, 1);
    }

    #[test]
    fn subscribers_receive_snapshots() {
        let mut reconciler = StatsReconciler::new(7);
        let rx = reconciler.subscribe();

        let mut repo = Repository::new();
        repo.add_link(LinkItem::new("https://a.example", "A", DEFAULT_FOLDER_ID));
        reconciler.recompute(&repo);

        let snapshot = rx.try_recv().unwrap();
        assert_eq!(snapshot.link_stats.link_count, 1);
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let mut reconciler = StatsReconciler::new(7);
        let rx = reconciler.subscribe();
        drop(rx);

        let repo = Repository::new();
        reconciler.recompute(&repo);
        assert!(reconciler.subscribers.is_empty());
    }

    #[test]
    fn repeated_recompute_yields_equal_figures() {
        let mut reconciler = StatsReconciler::new(7);
        let mut repo = Repository::new();
        let mut link = LinkItem::new("https://a.example", "A", DEFAULT_FOLDER_ID);
        link.tags = vec!["x".into(), "y".into()];
        repo.add_link(link);

        let a = reconciler.recompute(&repo);
        let b = reconciler.recompute(&repo);
        assert_eq!(a.link_stats, b.link_stats);
        assert_eq!(a.overview, b.overview);
    }
}
