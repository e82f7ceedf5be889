//! Wiki page identity.
//!
//! [`PageRef`] mirrors the host wiki's title model: a page is identified by
//! its namespace id plus a normalized title key (spaces already folded to
//! underscores by the host). The numeric page id is carried along when known
//! but never participates in equality or ordering.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Identity of a wiki page.
///
/// Equality, ordering and hashing use `(namespace, title)` only. Two refs to
/// the same page compare equal even when only one of them knows the numeric
/// page id.
///
/// # Subpages
///
/// A page is a *subpage* of another when both share a namespace and the
/// child's title key is the parent's title key plus `/` plus a suffix:
///
/// ```
/// use pagenav_core::PageRef;
///
/// let parent = PageRef::new(0, "Book");
/// let child = PageRef::new(0, "Book/Page_7");
/// assert!(child.is_subpage_of(&parent));
/// assert!(!parent.is_subpage_of(&child));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PageRef {
    namespace: i32,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    page_id: Option<u64>,
}

impl PageRef {
    /// Create a page reference from a namespace id and title key.
    #[must_use]
    pub fn new(namespace: i32, title: impl Into<String>) -> Self {
        Self {
            namespace,
            title: title.into(),
            page_id: None,
        }
    }

    /// Attach the numeric page id.
    #[must_use]
    pub fn with_page_id(mut self, page_id: u64) -> Self {
        self.page_id = Some(page_id);
        self
    }

    /// Namespace id.
    #[must_use]
    pub fn namespace(&self) -> i32 {
        self.namespace
    }

    /// Normalized title key (e.g. `"Book/Page_7"`).
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Numeric page id, if known.
    #[must_use]
    pub fn page_id(&self) -> Option<u64> {
        self.page_id
    }

    /// True if this page is a direct or transitive subpage of `parent`.
    ///
    /// Requires the same namespace and a title key of the form
    /// `{parent_title}/{suffix}` with a non-empty suffix.
    #[must_use]
    pub fn is_subpage_of(&self, parent: &PageRef) -> bool {
        if self.namespace != parent.namespace {
            return false;
        }
        self.title
            .strip_prefix(&parent.title)
            .and_then(|rest| rest.strip_prefix('/'))
            .is_some_and(|suffix| !suffix.is_empty())
    }

    /// True if this page is a subpage of *some* page (title key contains `/`).
    ///
    /// This is the enumeration heuristic used by the full rebuild: it matches
    /// the set of pages that can possibly contribute navigation entries.
    #[must_use]
    pub fn is_subpage(&self) -> bool {
        // A leading or trailing slash alone does not make a subpage.
        match self.title.find('/') {
            None | Some(0) => false,
            Some(_) => !self.title.ends_with('/'),
        }
    }
}

impl PartialEq for PageRef {
    fn eq(&self, other: &Self) -> bool {
        self.namespace == other.namespace && self.title == other.title
    }
}

impl Eq for PageRef {}

impl PartialOrd for PageRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PageRef {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.namespace, &self.title).cmp(&(other.namespace, &other.title))
    }
}

impl Hash for PageRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.namespace.hash(state);
        self.title.hash(state);
    }
}

impl fmt::Display for PageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace == 0 {
            write!(f, "{}", self.title)
        } else {
            write!(f, "ns{}:{}", self.namespace, self.title)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_page_id() {
        let a = PageRef::new(0, "Book/Page_1");
        let b = PageRef::new(0, "Book/Page_1").with_page_id(42);

        assert_eq!(a, b);
    }

    #[test]
    fn test_equality_namespace_sensitive() {
        let main = PageRef::new(0, "Book");
        let talk = PageRef::new(1, "Book");

        assert_ne!(main, talk);
    }

    #[test]
    fn test_ordering_by_namespace_then_title() {
        let mut refs = vec![
            PageRef::new(1, "Alpha"),
            PageRef::new(0, "Zeta"),
            PageRef::new(0, "Alpha"),
        ];
        refs.sort();

        assert_eq!(refs[0].title(), "Alpha");
        assert_eq!(refs[0].namespace(), 0);
        assert_eq!(refs[1].title(), "Zeta");
        assert_eq!(refs[2].namespace(), 1);
    }

    #[test]
    fn test_is_subpage_of() {
        let parent = PageRef::new(0, "Book");
        assert!(PageRef::new(0, "Book/Sub").is_subpage_of(&parent));
        assert!(PageRef::new(0, "Book/Sub/Deep").is_subpage_of(&parent));
    }

    #[test]
    fn test_is_subpage_of_rejects_other_parent() {
        let parent = PageRef::new(0, "Book");
        assert!(!PageRef::new(0, "Other/Sub").is_subpage_of(&parent));
    }

    #[test]
    fn test_is_subpage_of_rejects_prefix_without_slash() {
        // "Bookshelf" starts with "Book" but is not a subpage of it.
        let parent = PageRef::new(0, "Book");
        assert!(!PageRef::new(0, "Bookshelf").is_subpage_of(&parent));
    }

    #[test]
    fn test_is_subpage_of_rejects_other_namespace() {
        let parent = PageRef::new(0, "Book");
        assert!(!PageRef::new(4, "Book/Sub").is_subpage_of(&parent));
    }

    #[test]
    fn test_is_subpage_of_rejects_self_and_empty_suffix() {
        let parent = PageRef::new(0, "Book");
        assert!(!PageRef::new(0, "Book").is_subpage_of(&parent));
        assert!(!PageRef::new(0, "Book/").is_subpage_of(&parent));
    }

    #[test]
    fn test_is_subpage_heuristic() {
        assert!(PageRef::new(0, "Book/Sub").is_subpage());
        assert!(!PageRef::new(0, "Book").is_subpage());
        assert!(!PageRef::new(0, "Book/").is_subpage());
    }

    #[test]
    fn test_display() {
        assert_eq!(PageRef::new(0, "Book/Sub").to_string(), "Book/Sub");
        assert_eq!(PageRef::new(4, "Book").to_string(), "ns4:Book");
    }
}
