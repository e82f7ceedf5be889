//! `pagenav rebuild` command implementation.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use pagenav_engine::{ContentRenderer, ContentSource, IndexUpdater, PageLister, RebuildJob};
use pagenav_index::{FileIndexStore, IndexStore};

use crate::config::{CliSettings, Config};
use crate::error::CliError;
use crate::fswiki::FsWiki;
use crate::output::Output;

/// Arguments for the rebuild command.
#[derive(Args)]
pub(crate) struct RebuildArgs {
    /// Path to configuration file (default: auto-discover pagenav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Page content directory (overrides config).
    #[arg(short, long)]
    pages_dir: Option<PathBuf>,

    /// Anchor index directory (overrides config).
    #[arg(short, long)]
    index_dir: Option<PathBuf>,

    /// Enable verbose output (log every page visited).
    #[arg(short, long)]
    pub verbose: bool,
}

impl RebuildArgs {
    /// Execute the rebuild command.
    ///
    /// Walks every subpage under the configured pages directory and rebuilds
    /// its anchor index entry. Individual page failures are logged and do not
    /// fail the run; only configuration or enumeration failures do.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, index opening or page
    /// enumeration fails.
    pub(crate) fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            pages_dir: self.pages_dir,
            index_dir: self.index_dir,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.info(&format!(
            "Rebuilding anchor index from {}",
            config.pages_dir.display()
        ));

        let wiki = FsWiki::new(config.pages_dir);
        let store: Arc<dyn IndexStore> =
            Arc::new(FileIndexStore::open(config.index_dir, version)?);

        let updater = IndexUpdater::new(
            store,
            Arc::<FsWiki>::clone(&wiki) as Arc<dyn ContentSource>,
            Arc::<FsWiki>::clone(&wiki) as Arc<dyn ContentRenderer>,
        );
        let job = RebuildJob::new(updater, wiki as Arc<dyn PageLister>);

        let summary = job.run()?;

        if summary.failed > 0 {
            output.warning(&format!(
                "Anchor index rebuilt: {} pages processed, {} failed (see log)",
                summary.processed, summary.failed
            ));
        } else {
            output.success(&format!(
                "Anchor index rebuilt: {} pages processed",
                summary.processed
            ));
        }
        Ok(())
    }
}
