//! Sort orders for the view pipeline.

use std::cmp::Ordering;

use arca_core::ContentItem;

/// Sort key for a projected view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Creation timestamp, descending.
    Newest,
    /// Creation timestamp, ascending.
    Oldest,
    /// Display name/title, case-insensitive lexicographic ascending.
    Name,
    /// Byte size, descending; kinds without a size sort last.
    Size,
    /// Resolved group display name (category/folder), ascending.
    Group,
}

impl SortKey {
    /// Parse a UI sort parameter. Unknown values fall back to `Newest`.
    pub fn from_param(param: &str) -> Self {
        match param {
            "oldest" => Self::Oldest,
            "name" | "title" => Self::Name,
            "size" => Self::Size,
            "category" => Self::Group,
            _ => Self::Newest,
        }
    }
}

/// Compare two items under a sort key.
///
/// Returns `Ordering::Equal` for ties; callers use a stable sort so equal
/// keys keep their original relative order. `resolve_group_name` maps a
/// group id to its display name for `SortKey::Group`.
pub fn compare<T: ContentItem>(
    a: &T,
    b: &T,
    key: SortKey,
    resolve_group_name: &impl Fn(&str) -> Option<String>,
) -> Ordering {
    match key {
        SortKey::Newest => b.created_at().cmp(&a.created_at()),
        SortKey::Oldest => a.created_at().cmp(&b.created_at()),
        SortKey::Name => fold_name(a.display_name()).cmp(&fold_name(b.display_name())),
        SortKey::Size => match (a.byte_size(), b.byte_size()) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortKey::Group => {
            let name_of = |item: &T| {
                item.group_id()
                    .and_then(|id| resolve_group_name(id))
                    .map(|n| fold_name(&n))
            };
            match (name_of(a), name_of(b)) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        }
    }
}

/// Case-fold for lexicographic comparison so that "Apple" sorts before
/// "banana". A full locale collator would refine this further; Unicode
/// lowercasing covers the contract.
fn fold_name(name: &str) -> String {
    name.to_lowercase()
}
