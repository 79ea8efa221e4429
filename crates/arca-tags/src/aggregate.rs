//! Tag usage aggregation.
//!
//! Counts are derived by a full rescan of the ground truth (the tag strings
//! embedded on content items). Incremental increment/decrement bookkeeping is
//! deliberately not offered: it drifts from the ground truth, and the full
//! recompute is the sole authority.

use arca_core::{Repository, Tag};

use crate::palette::random_tag_color;

/// Find a tag by exact, case-sensitive name, creating it with count 0 and a
/// random palette color when absent. Idempotent for the same name.
pub fn get_or_create_tag<'a>(tags: &'a mut Vec<Tag>, name: &str) -> &'a mut Tag {
    if let Some(index) = tags.iter().position(|t| t.name == name) {
        return &mut tags[index];
    }
    tags.push(Tag::new(name, random_tag_color()));
    tags.last_mut().expect("just pushed")
}

/// Recompute every tag's count from the given tag lists, then prune tags
/// whose count is still 0.
///
/// Resets all known counts, scans each list once incrementing (creating rows
/// for tags seen on items but missing from the collection), and prunes.
/// Idempotent: a second call with no intervening mutation yields an
/// identical collection. Colors of surviving tags are untouched.
pub fn recompute_tag_usage<'a>(
    tags: &mut Vec<Tag>,
    tag_lists: impl IntoIterator<Item = &'a [String]>,
) {
    for tag in tags.iter_mut() {
        tag.count = 0;
    }
    for list in tag_lists {
        for name in list {
            let tag = get_or_create_tag(tags, name);
            tag.count += 1;
        }
    }
    tags.retain(|t| t.count > 0);
}

/// Recompute the image tag collection from the image collection.
pub fn recompute_image_tags(repo: &mut Repository) {
    let lists: Vec<Vec<String>> = repo.images.iter().map(|i| i.tags.clone()).collect();
    recompute_tag_usage(&mut repo.image_tags, lists.iter().map(|l| l.as_slice()));
}

/// Recompute the link tag collection from the link collection.
pub fn recompute_link_tags(repo: &mut Repository) {
    let lists: Vec<Vec<String>> = repo.links.iter().map(|l| l.tags.clone()).collect();
    recompute_tag_usage(&mut repo.link_tags, lists.iter().map(|l| l.as_slice()));
}

/// Re-derive everything that a bulk mutation can invalidate: both tag
/// collections and the folders' link counts.
///
/// Must run after bulk delete, bulk move, category/folder deletion, and
/// import — not only after single-item edits.
pub fn refresh_after_bulk_change(repo: &mut Repository) {
    recompute_image_tags(repo);
    recompute_link_tags(repo);
    repo.recompute_link_counts();
}
