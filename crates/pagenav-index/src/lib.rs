//! Persisted anchor index.
//!
//! Maps a page identity to the set of anchor numbers found in its rendered
//! content, so the navigation strip can be assembled without re-rendering
//! every subpage on every request. Two traits-and-impls in the usual shape:
//!
//! - [`IndexStore`]: the storage seam consumed by the engine
//! - [`FileIndexStore`]: JSON-file-backed implementation with version
//!   validation
//! - [`MemoryIndexStore`]: in-memory implementation for testing (behind the
//!   `mock` feature flag)
//!
//! Empty anchor sets are never stored; absence of an entry means "this page
//! has no anchors".

mod file;
#[cfg(feature = "mock")]
mod memory;
mod store;

pub use file::FileIndexStore;
#[cfg(feature = "mock")]
pub use memory::MemoryIndexStore;
pub use store::{IndexError, IndexStore};
