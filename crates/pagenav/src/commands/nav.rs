//! `pagenav nav` command implementation.
//!
//! Renders the navigation fragment for a parent page, the same output the
//! host's `subpage_anchor_navigation` directive would embed. Useful for
//! previewing a strip or checking what the current index produces. The
//! fragment goes to stdout; an empty result prints nothing.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use pagenav_core::PageRef;
use pagenav_engine::{
    ContentRenderer, ContentSource, HtmlLinkRenderer, NavOutput, NavigationAssembler, PageLister,
};
use pagenav_index::{FileIndexStore, IndexStore};

use crate::config::{CliSettings, Config};
use crate::error::CliError;
use crate::fswiki::FsWiki;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    /// Parent page title (e.g. "Book").
    parent: String,

    /// Path to configuration file (default: auto-discover pagenav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Page content directory (overrides config).
    #[arg(short, long)]
    pages_dir: Option<PathBuf>,

    /// Anchor index directory (overrides config).
    #[arg(short, long)]
    index_dir: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl NavArgs {
    /// Execute the nav command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, index opening or assembly
    /// fails.
    pub(crate) fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            pages_dir: self.pages_dir,
            index_dir: self.index_dir,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        match generate_fragment(&config, &self.parent, version)? {
            NavOutput::Empty => {
                output.warning(&format!("No anchored subpages under {}", self.parent));
            }
            NavOutput::Html(html) => output.result(&html),
        }
        Ok(())
    }
}

/// Assemble the navigation fragment for `parent` from the configured wiki.
///
/// Links are rendered against the configured `base_path`.
fn generate_fragment(config: &Config, parent: &str, version: &str) -> Result<NavOutput, CliError> {
    let wiki = FsWiki::new(config.pages_dir.clone());
    let store: Arc<dyn IndexStore> =
        Arc::new(FileIndexStore::open(config.index_dir.clone(), version)?);

    let assembler = NavigationAssembler::new(
        store,
        Arc::<FsWiki>::clone(&wiki) as Arc<dyn PageLister>,
        Arc::<FsWiki>::clone(&wiki) as Arc<dyn ContentSource>,
        wiki as Arc<dyn ContentRenderer>,
        Arc::new(HtmlLinkRenderer::new(config.base_path.as_str())),
    );
    Ok(assembler.generate(&PageRef::new(0, parent))?)
}
