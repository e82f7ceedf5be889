//! Subpage anchor navigation engine.
//!
//! Ties the anchor index to a host wiki engine. The host's page storage,
//! rendering pipeline and save events stay behind narrow trait seams
//! ([`ContentSource`], [`ContentRenderer`], [`PageLister`]); everything is
//! injected explicitly, never looked up through a global registry.
//!
//! # Components
//!
//! - [`IndexUpdater`]: keeps the index current — invoked from the host's
//!   save pipeline with already-rendered output, or told to recalculate a
//!   page from scratch
//! - [`NavigationAssembler`]: turns the indexed anchors of a parent's
//!   subpages into an ordered HTML navigation strip
//! - [`NavigationDirective`]: entry point for the host's template directive
//!   `subpage_anchor_navigation`
//! - [`RebuildJob`]: batch backfill walking every subpage in the wiki
//!
//! # Control flow
//!
//! Page save → host renders → [`IndexUpdater::on_content_rendered`] → index.
//! Parent page view → directive → [`NavigationAssembler::generate`] → HTML
//! fragment. Offline: [`RebuildJob::run`] → [`IndexUpdater::recalculate`]
//! per subpage.

mod error;
mod host;
mod link;
mod nav;
mod rebuild;
mod updater;

pub use error::EngineError;
pub use host::{ContentRenderer, ContentSource, HostError, PageLister, RenderOptions, RenderedPage};
pub use link::{HtmlLinkRenderer, LinkRenderer, escape_html};
pub use nav::{NavOutput, NavigationAssembler, NavigationDirective};
pub use rebuild::{RebuildJob, RebuildSummary};
pub use updater::IndexUpdater;
