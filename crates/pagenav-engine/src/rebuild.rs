//! Full index rebuild.
//!
//! Batch driver for bootstrap and backfill: walks every page in the wiki
//! that looks like a subpage (title key contains `/`) and recalculates its
//! anchor entry. Safe to re-run any number of times; each pass fully
//! recomputes every entry, so repeated runs converge to the same state.

use std::sync::Arc;

use crate::error::EngineError;
use crate::host::PageLister;
use crate::updater::IndexUpdater;

/// Outcome of a rebuild run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RebuildSummary {
    /// Pages processed, including those with no anchors.
    pub processed: usize,
    /// Pages whose recalculation failed.
    pub failed: usize,
}

/// Walks all subpages and rebuilds their index entries.
pub struct RebuildJob {
    updater: IndexUpdater,
    lister: Arc<dyn PageLister>,
}

impl RebuildJob {
    /// Create a rebuild job.
    #[must_use]
    pub fn new(updater: IndexUpdater, lister: Arc<dyn PageLister>) -> Self {
        Self { updater, lister }
    }

    /// Run the rebuild.
    ///
    /// Per-page failures are logged and skipped; the run continues to the
    /// next page and the failure is counted in the summary. Only a failure
    /// to enumerate pages at all aborts the run.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if page enumeration fails.
    pub fn run(&self) -> Result<RebuildSummary, EngineError> {
        let mut summary = RebuildSummary::default();

        for page in self.lister.all_subpages()? {
            tracing::info!("calculating anchors for {page}");
            summary.processed += 1;

            if let Err(e) = self.updater.recalculate(&page) {
                tracing::warn!("failed to recalculate {page}: {e}");
                summary.failed += 1;
            }
        }

        tracing::info!(
            "anchor index rebuilt: {} pages processed, {} failed",
            summary.processed,
            summary.failed
        );
        Ok(summary)
    }
}
