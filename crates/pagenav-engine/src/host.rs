//! Host wiki collaborator seams.
//!
//! The engine never talks to the wiki's database, parser or title model
//! directly. Each concern it needs is a small trait the host implements;
//! the engine receives them by injection. `pagenav`'s CLI ships a
//! filesystem-backed reference implementation for the maintenance command.

use std::collections::BTreeMap;

use pagenav_core::PageRef;

/// Error reported by a host collaborator.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// The requested page or resource does not exist.
    ///
    /// Collaborators normally signal a missing page with `Ok(None)`; this
    /// variant is for lookups where absence is unexpected.
    #[error("not found: {0}")]
    NotFound(String),

    /// I/O failure in the host's backing storage.
    #[error("host I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other backend failure, carried as a message.
    #[error("{0}")]
    Backend(String),
}

/// Options for a render request.
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    /// Expand transclusions (template substitution) during rendering.
    ///
    /// The engine always renders with `false`: anchors pulled in from a
    /// transcluded page would otherwise be attributed to the wrong page.
    pub expand_transclusions: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            expand_transclusions: true,
        }
    }
}

/// Output of the host's rendering pipeline.
///
/// Mirrors what the save pipeline hands to hooks: the rendered text plus a
/// property map the host persists alongside the render. The updater records
/// the encoded anchor list under [`ANCHORS_PROP`](pagenav_core::ANCHORS_PROP)
/// so hosts that persist render properties pick it up for free.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderedPage {
    /// Rendered HTML.
    pub text: String,
    /// Derived page properties attached to this render.
    pub properties: BTreeMap<String, String>,
}

impl RenderedPage {
    /// Wrap rendered HTML with no properties.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            properties: BTreeMap::new(),
        }
    }
}

/// Read access to page content.
pub trait ContentSource: Send + Sync {
    /// Current content of a page, or `None` if the page does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] on backend failure. A deleted or never-created
    /// page is `Ok(None)`, not an error.
    fn content(&self, page: &PageRef) -> Result<Option<String>, HostError>;
}

/// The host's wikitext-to-HTML rendering pipeline.
pub trait ContentRenderer: Send + Sync {
    /// Render page content.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] if the pipeline fails.
    fn render(
        &self,
        content: &str,
        page: &PageRef,
        options: &RenderOptions,
    ) -> Result<RenderedPage, HostError>;
}

/// Page enumeration.
pub trait PageLister: Send + Sync {
    /// Every page whose title key is `{parent_title}/{suffix}` in the
    /// parent's namespace.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] on backend failure.
    fn subpages_of(&self, parent: &PageRef) -> Result<Vec<PageRef>, HostError>;

    /// Every page in the wiki whose title key contains `/`, across all
    /// namespaces. Enumeration order carries no guarantee.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] on backend failure.
    fn all_subpages(&self) -> Result<Vec<PageRef>, HostError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_default_expands() {
        // Normal page views expand transclusions; only anchor scanning
        // overrides this.
        assert!(RenderOptions::default().expand_transclusions);
    }

    #[test]
    fn test_rendered_page_new() {
        let rendered = RenderedPage::new("<p>hi</p>");
        assert_eq!(rendered.text, "<p>hi</p>");
        assert!(rendered.properties.is_empty());
    }
}
