//! The filter/sort pipeline.
//!
//! A pure projection from a collection to the visible, ordered subset for a
//! view. No hidden state: calling it twice with the same arguments and no
//! intervening mutation returns structurally identical sequences, and it
//! never mutates the repository.

use arca_core::ContentItem;

use crate::filter::{GroupFilter, TagFilter};
use crate::sort::{compare, SortKey};

/// Project a collection through the group/tag predicates and a sort order.
///
/// An empty result is a valid state, not an error — the caller distinguishes
/// "filter matched nothing" from "collection is empty" for messaging, but
/// both come back as an empty ordered sequence here.
pub fn visible_items<'a, T: ContentItem>(
    items: &'a [T],
    group: &GroupFilter,
    tag: &TagFilter,
    sort: SortKey,
    resolve_group_name: impl Fn(&str) -> Option<String>,
) -> Vec<&'a T> {
    let mut view: Vec<&T> = items
        .iter()
        .filter(|item| group.matches(*item) && tag.matches(*item))
        .collect();
    // Vec::sort_by is stable: equal keys keep original array order.
    view.sort_by(|a, b| compare(*a, *b, sort, &resolve_group_name));
    view
}
