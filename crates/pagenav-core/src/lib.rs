//! Core types for subpage anchor navigation.
//!
//! Subpages of a wiki page can carry numbered anchor markers
//! (`<span id="pg123">`, typically one per scanned book page). This crate
//! provides the pieces every other layer builds on:
//!
//! - [`PageRef`]: wiki page identity (namespace + normalized title key)
//! - [`AnchorSet`]: ordered collection of anchor numbers found on one page
//! - [`scan_anchors`]: extraction of anchor numbers from rendered HTML
//!
//! No I/O happens here; persistence and host-engine integration live in
//! `pagenav-index` and `pagenav-engine`.

mod anchors;
mod page;
mod scan;

pub use anchors::{AnchorSet, DecodeError};
pub use page::PageRef;
pub use scan::scan_anchors;

/// Property name under which a page's anchor list is persisted.
///
/// Used both as the column value in stored index rows and as the key for
/// derived metadata attached to render output by the save-pipeline hook.
pub const ANCHORS_PROP: &str = "nav_anchors";
