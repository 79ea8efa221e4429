//! Filter predicates for the view pipeline.

use arca_core::ContentItem;

/// Group predicate: the folder for links, the category for images.
///
/// `All` is the sentinel bypass — every item passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupFilter {
    All,
    Id(String),
}

impl GroupFilter {
    /// Parse a UI filter parameter; the literal `"all"` bypasses.
    pub fn from_param(param: &str) -> Self {
        if param == "all" {
            Self::All
        } else {
            Self::Id(param.to_string())
        }
    }

    pub fn matches(&self, item: &impl ContentItem) -> bool {
        match self {
            Self::All => true,
            Self::Id(id) => item.group_id() == Some(id.as_str()),
        }
    }
}

/// Tag predicate: exact membership in the item's tag list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagFilter {
    All,
    Named(String),
}

impl TagFilter {
    /// Parse a UI filter parameter; the literal `"all"` bypasses.
    pub fn from_param(param: &str) -> Self {
        if param == "all" {
            Self::All
        } else {
            Self::Named(param.to_string())
        }
    }

    pub fn matches(&self, item: &impl ContentItem) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => item.tags().iter().any(|t| t == name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arca_core::LinkItem;

    #[test]
    fn all_sentinel_bypasses() {
        assert_eq!(GroupFilter::from_param("all"), GroupFilter::All);
        assert_eq!(TagFilter::from_param("all"), TagFilter::All);
        let link = LinkItem::new("https://a.example", "A", "f1");
        assert!(GroupFilter::All.matches(&link));
        assert!(TagFilter::All.matches(&link));
    }

    #[test]
    fn group_is_exact_match() {
        let link = LinkItem::new("https://a.example", "A", "f1");
        assert!(GroupFilter::from_param("f1").matches(&link));
        assert!(!GroupFilter::from_param("f2").matches(&link));
        assert!(!GroupFilter::from_param("f").matches(&link));
    }

    #[test]
    fn tag_is_exact_membership() {
        let mut link = LinkItem::new("https://a.example", "A", "f1");
        link.tags = vec!["rust".into(), "web".into()];
        assert!(TagFilter::from_param("rust").matches(&link));
        assert!(!TagFilter::from_param("Rust").matches(&link));
        assert!(!TagFilter::from_param("rus").matches(&link));
    }
}
