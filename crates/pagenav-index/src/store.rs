//! Index store trait and error type.

use std::path::PathBuf;

use pagenav_core::{AnchorSet, DecodeError, PageRef};

/// Error accessing the anchor index.
///
/// Store failures are fatal to the operation that triggered them; no retry
/// happens at this layer (the host's request or job framework decides what
/// to do with a failed save or view).
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// I/O failure reading or writing the backing store.
    #[error("index I/O error at {}: {source}", path.display())]
    Io {
        /// Path of the file involved.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A persisted row could not be decoded.
    #[error("corrupt index row for {page}: {source}")]
    CorruptRow {
        /// Page the row belongs to.
        page: PageRef,
        /// Decode failure.
        #[source]
        source: DecodeError,
    },

    /// The index file itself could not be (de)serialized.
    #[error("index serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Persisted mapping from page identity to its anchor set.
///
/// Writers (`IndexUpdater`) and readers (`NavigationAssembler`) are
/// transient; the store exclusively owns the persisted rows. Same-process
/// sequencing is consistent: a completed `put` is visible to subsequent
/// `get`/`list_subpages_of` calls. Each page's entry is independently keyed,
/// so concurrent writes to different pages never conflict and concurrent
/// writes to the same page are last-write-wins.
pub trait IndexStore: Send + Sync {
    /// Stored anchor set for a page, or `None` if no entry exists.
    fn get(&self, page: &PageRef) -> Result<Option<AnchorSet>, IndexError>;

    /// Upsert a page's anchor set.
    ///
    /// Callers guard on non-empty sets; an empty set is treated as
    /// [`remove`](Self::remove) so a page that lost its last anchor never
    /// leaves a stale entry behind.
    fn put(&self, page: &PageRef, anchors: &AnchorSet) -> Result<(), IndexError>;

    /// Delete a page's entry. Deleting a missing entry is a no-op.
    fn remove(&self, page: &PageRef) -> Result<(), IndexError>;

    /// Every stored entry whose page is a subpage of `parent`.
    ///
    /// Matches the parent's namespace and the title-key prefix
    /// `{parent_title}/`. Order is deterministic but not meaningful; the
    /// caller re-sorts by anchor numbers.
    fn list_subpages_of(&self, parent: &PageRef) -> Result<Vec<(PageRef, AnchorSet)>, IndexError>;
}
