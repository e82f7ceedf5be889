//! Incremental index updates.
//!
//! [`IndexUpdater`] is the only writer of the anchor index. It runs in two
//! situations:
//!
//! - from the host's save pipeline, which already has rendered output
//!   ([`on_content_rendered`](IndexUpdater::on_content_rendered) — no
//!   redundant re-render)
//! - from the rebuild job or ad hoc repair
//!   ([`recalculate`](IndexUpdater::recalculate) — fetches and renders the
//!   current content itself)
//!
//! Both paths fully recompute the page's entry from that page's own content,
//! so updates are idempotent and last-write-wins is safe.

use std::sync::Arc;

use pagenav_core::{ANCHORS_PROP, PageRef, scan_anchors};
use pagenav_index::IndexStore;

use crate::error::EngineError;
use crate::host::{ContentRenderer, ContentSource, RenderOptions, RenderedPage};

/// Recomputes and persists a page's anchor entry.
pub struct IndexUpdater {
    store: Arc<dyn IndexStore>,
    source: Arc<dyn ContentSource>,
    renderer: Arc<dyn ContentRenderer>,
}

impl IndexUpdater {
    /// Create an updater over the given store and host collaborators.
    #[must_use]
    pub fn new(
        store: Arc<dyn IndexStore>,
        source: Arc<dyn ContentSource>,
        renderer: Arc<dyn ContentRenderer>,
    ) -> Self {
        Self {
            store,
            source,
            renderer,
        }
    }

    /// Save-pipeline hook: update the index from already-rendered output.
    ///
    /// Scans `rendered.text`, stores the result, and records the encoded
    /// anchor list under [`ANCHORS_PROP`] in the render's property map so
    /// hosts that persist render properties carry it alongside the edit.
    ///
    /// A recompute that finds no anchors removes the page's entry (and
    /// property); an edit that deletes the last marker must not leave a
    /// stale row behind.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if the store write fails.
    pub fn on_content_rendered(
        &self,
        page: &PageRef,
        rendered: &mut RenderedPage,
    ) -> Result<(), EngineError> {
        let anchors = scan_anchors(&rendered.text);
        if anchors.is_empty() {
            rendered.properties.remove(ANCHORS_PROP);
            self.store.remove(page)?;
            tracing::debug!("no anchors on {page} after save");
        } else {
            rendered
                .properties
                .insert(ANCHORS_PROP.to_owned(), anchors.encode());
            self.store.put(page, &anchors)?;
            tracing::debug!("indexed {} anchors on {page}", anchors.len());
        }
        Ok(())
    }

    /// Recompute a page's entry from its current content.
    ///
    /// Fetches the content, renders it with transclusion expansion
    /// suppressed (anchors of transcluded pages must not be attributed to
    /// this page), scans, and stores. A nonexistent page is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if the host or store fails.
    pub fn recalculate(&self, page: &PageRef) -> Result<(), EngineError> {
        let Some(content) = self.source.content(page)? else {
            // No such page.
            return Ok(());
        };

        let options = RenderOptions {
            expand_transclusions: false,
        };
        let rendered = self.renderer.render(&content, page, &options)?;

        let anchors = scan_anchors(&rendered.text);
        if anchors.is_empty() {
            self.store.remove(page)?;
        } else {
            self.store.put(page, &anchors)?;
        }
        Ok(())
    }
}
