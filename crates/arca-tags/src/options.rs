//! Filter option sets derived from current data.

use std::collections::BTreeSet;

use arca_core::Repository;

/// One selectable option: id plus display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub id: String,
    pub name: String,
}

/// All categories, for the image filter dropdown.
pub fn category_options(repo: &Repository) -> Vec<FilterOption> {
    repo.categories
        .iter()
        .map(|c| FilterOption {
            id: c.id.clone(),
            name: c.name.clone(),
        })
        .collect()
}

/// All folders, for the link filter dropdown.
pub fn folder_options(repo: &Repository) -> Vec<FilterOption> {
    repo.folders
        .iter()
        .map(|f| FilterOption {
            id: f.id.clone(),
            name: f.name.clone(),
        })
        .collect()
}

/// Distinct tags currently on images, sorted.
pub fn image_tag_options(repo: &Repository) -> Vec<String> {
    distinct_tags(repo.images.iter().map(|i| i.tags.as_slice()))
}

/// Distinct tags currently on links, sorted.
pub fn link_tag_options(repo: &Repository) -> Vec<String> {
    distinct_tags(repo.links.iter().map(|l| l.tags.as_slice()))
}

fn distinct_tags<'a>(lists: impl Iterator<Item = &'a [String]>) -> Vec<String> {
    let set: BTreeSet<&String> = lists.flatten().collect();
    set.into_iter().cloned().collect()
}
