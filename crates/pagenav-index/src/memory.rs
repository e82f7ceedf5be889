//! In-memory index store for testing.
//!
//! Provides [`MemoryIndexStore`] for unit testing without filesystem access.

use std::collections::BTreeMap;
use std::sync::RwLock;

use pagenav_core::{AnchorSet, PageRef};

use crate::store::{IndexError, IndexStore};

/// In-memory [`IndexStore`] for tests.
///
/// Use the builder methods to seed entries:
///
/// ```
/// use pagenav_core::{AnchorSet, PageRef};
/// use pagenav_index::{IndexStore, MemoryIndexStore};
///
/// let store = MemoryIndexStore::new()
///     .with_entry(PageRef::new(0, "Book/P1"), AnchorSet::from_unsorted(vec![2, 1]));
///
/// let entry = store.get(&PageRef::new(0, "Book/P1")).unwrap();
/// assert_eq!(entry.unwrap().numbers(), &[1, 2]);
/// ```
#[derive(Debug, Default)]
pub struct MemoryIndexStore {
    entries: RwLock<BTreeMap<PageRef, AnchorSet>>,
}

impl MemoryIndexStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an entry.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_entry(self, page: PageRef, anchors: AnchorSet) -> Self {
        self.entries.write().unwrap().insert(page, anchors);
        self
    }

    /// Number of stored entries.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// True if no entries are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IndexStore for MemoryIndexStore {
    fn get(&self, page: &PageRef) -> Result<Option<AnchorSet>, IndexError> {
        Ok(self.entries.read().unwrap().get(page).cloned())
    }

    fn put(&self, page: &PageRef, anchors: &AnchorSet) -> Result<(), IndexError> {
        if anchors.is_empty() {
            return self.remove(page);
        }
        self.entries
            .write()
            .unwrap()
            .insert(page.clone(), anchors.clone());
        Ok(())
    }

    fn remove(&self, page: &PageRef) -> Result<(), IndexError> {
        self.entries.write().unwrap().remove(page);
        Ok(())
    }

    fn list_subpages_of(&self, parent: &PageRef) -> Result<Vec<(PageRef, AnchorSet)>, IndexError> {
        Ok(self
            .entries
            .read()
            .unwrap()
            .iter()
            .filter(|(page, _)| page.is_subpage_of(parent))
            .map(|(page, anchors)| (page.clone(), anchors.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_builder_seeds_entries() {
        let store = MemoryIndexStore::new()
            .with_entry(PageRef::new(0, "Book/P1"), AnchorSet::from_unsorted(vec![1]))
            .with_entry(PageRef::new(0, "Book/P2"), AnchorSet::from_unsorted(vec![2]));

        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_put_empty_removes() {
        let store = MemoryIndexStore::new();
        let page = PageRef::new(0, "Book/P1");

        store.put(&page, &AnchorSet::from_unsorted(vec![1])).unwrap();
        store.put(&page, &AnchorSet::new()).unwrap();

        assert!(store.is_empty());
    }

    #[test]
    fn test_list_subpages_of() {
        let store = MemoryIndexStore::new()
            .with_entry(PageRef::new(0, "Book/P1"), AnchorSet::from_unsorted(vec![1]))
            .with_entry(PageRef::new(0, "Other/P1"), AnchorSet::from_unsorted(vec![2]));

        let rows = store.list_subpages_of(&PageRef::new(0, "Book")).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0.title(), "Book/P1");
    }
}
