//! Navigation strip assembly.
//!
//! Builds the parent page's anchor navigation: one link per anchor found in
//! its subpages, grouped by subpage, subpages ordered by their lowest anchor
//! number, anchors ascending within each group. The indexed fast path reads
//! the store; before any index exists the assembler falls back to rendering
//! and scanning the subpages live, so output is correct (just slower) on a
//! fresh wiki.

use std::fmt::Write as _;
use std::sync::Arc;

use pagenav_core::{AnchorSet, PageRef, scan_anchors};
use pagenav_index::IndexStore;

use crate::error::EngineError;
use crate::host::{ContentRenderer, ContentSource, PageLister, RenderOptions};
use crate::link::LinkRenderer;

/// CSS class on the generated container element.
pub const NAV_CLASS: &str = "pagenav-subpage-anchors";

/// Result of navigation assembly.
///
/// A tagged result instead of "HTML string or empty string": the host's
/// text-substitution layer must treat [`Html`](Self::Html) as pre-rendered
/// (no re-escaping) and [`Empty`](Self::Empty) as "render nothing".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavOutput {
    /// No subpage of the requested parent has anchors.
    Empty,
    /// Pre-rendered HTML fragment.
    Html(String),
}

impl NavOutput {
    /// Create an HTML output.
    #[must_use]
    pub fn html(s: impl Into<String>) -> Self {
        Self::Html(s.into())
    }

    /// The HTML fragment, or `""` for [`Empty`](Self::Empty).
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::Html(html) => html,
        }
    }
}

/// Assembles the ordered anchor-link sequence for a parent page.
pub struct NavigationAssembler {
    store: Arc<dyn IndexStore>,
    lister: Arc<dyn PageLister>,
    source: Arc<dyn ContentSource>,
    renderer: Arc<dyn ContentRenderer>,
    links: Arc<dyn LinkRenderer>,
}

impl NavigationAssembler {
    /// Create an assembler over the index and host collaborators.
    #[must_use]
    pub fn new(
        store: Arc<dyn IndexStore>,
        lister: Arc<dyn PageLister>,
        source: Arc<dyn ContentSource>,
        renderer: Arc<dyn ContentRenderer>,
        links: Arc<dyn LinkRenderer>,
    ) -> Self {
        Self {
            store,
            lister,
            source,
            renderer,
            links,
        }
    }

    /// Generate the navigation fragment for `parent`.
    ///
    /// Subpage groups are stable-sorted by their smallest anchor number, so
    /// groups with equal minimums keep enumeration order. Within a group,
    /// links appear in ascending anchor order; duplicate anchor numbers
    /// produce duplicate links, matching the page content.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if the store or a host collaborator fails.
    pub fn generate(&self, parent: &PageRef) -> Result<NavOutput, EngineError> {
        let mut groups = self.store.list_subpages_of(parent)?;
        if groups.is_empty() {
            // No index rows yet (fresh wiki or pre-backfill): scan live.
            groups = self.scan_subpages(parent)?;
        }
        groups.retain(|(_, anchors)| !anchors.is_empty());

        if groups.is_empty() {
            return Ok(NavOutput::Empty);
        }

        groups.sort_by_key(|(_, anchors)| anchors.first());

        let mut links = Vec::new();
        for (subpage, anchors) in &groups {
            for number in anchors {
                links.push(self.links.anchor_link(
                    subpage,
                    &format!("pg{number}"),
                    &number.to_string(),
                ));
            }
        }

        let mut html = String::new();
        write!(html, r#"<div class="{NAV_CLASS}">{}</div>"#, links.join(" "))
            .expect("write to String");
        Ok(NavOutput::Html(html))
    }

    /// Slow path: enumerate subpages through the host and scan each one's
    /// freshly rendered content.
    fn scan_subpages(&self, parent: &PageRef) -> Result<Vec<(PageRef, AnchorSet)>, EngineError> {
        let options = RenderOptions {
            expand_transclusions: false,
        };

        let mut groups = Vec::new();
        for subpage in self.lister.subpages_of(parent)? {
            let Some(content) = self.source.content(&subpage)? else {
                continue;
            };
            let rendered = self.renderer.render(&content, &subpage, &options)?;
            let anchors = scan_anchors(&rendered.text);
            if !anchors.is_empty() {
                groups.push((subpage, anchors));
            }
        }
        Ok(groups)
    }
}

/// Entry point for the host's `subpage_anchor_navigation` template directive.
///
/// The host's directive mechanism resolves the optional page-name argument
/// against its own title model and passes the result here; an absent
/// argument defaults to the page currently being rendered.
pub struct NavigationDirective {
    assembler: NavigationAssembler,
}

impl NavigationDirective {
    /// Wrap an assembler as a directive handler.
    #[must_use]
    pub fn new(assembler: NavigationAssembler) -> Self {
        Self { assembler }
    }

    /// Directive name registered with the host.
    #[must_use]
    pub fn name(&self) -> &'static str {
        "subpage_anchor_navigation"
    }

    /// Handle a directive invocation.
    ///
    /// # Arguments
    ///
    /// * `current` - Page currently being rendered
    /// * `explicit` - Resolved explicit page argument, if one was given
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if assembly fails.
    pub fn invoke(
        &self,
        current: &PageRef,
        explicit: Option<&PageRef>,
    ) -> Result<NavOutput, EngineError> {
        self.assembler.generate(explicit.unwrap_or(current))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Arc;

    use pagenav_core::AnchorSet;
    use pagenav_index::MemoryIndexStore;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::host::{HostError, RenderedPage};
    use crate::link::HtmlLinkRenderer;

    struct MapSource(BTreeMap<PageRef, String>);

    impl ContentSource for MapSource {
        fn content(&self, page: &PageRef) -> Result<Option<String>, HostError> {
            Ok(self.0.get(page).cloned())
        }
    }

    struct RawRenderer;

    impl ContentRenderer for RawRenderer {
        fn render(
            &self,
            content: &str,
            _page: &PageRef,
            _options: &RenderOptions,
        ) -> Result<RenderedPage, HostError> {
            Ok(RenderedPage::new(content))
        }
    }

    struct FixedLister(Vec<PageRef>);

    impl PageLister for FixedLister {
        fn subpages_of(&self, parent: &PageRef) -> Result<Vec<PageRef>, HostError> {
            Ok(self
                .0
                .iter()
                .filter(|p| p.is_subpage_of(parent))
                .cloned()
                .collect())
        }

        fn all_subpages(&self) -> Result<Vec<PageRef>, HostError> {
            Ok(self.0.iter().filter(|p| p.is_subpage()).cloned().collect())
        }
    }

    fn assembler(store: Arc<MemoryIndexStore>, pages: Vec<(PageRef, &str)>) -> NavigationAssembler {
        let refs = pages.iter().map(|(p, _)| p.clone()).collect();
        let contents = pages
            .into_iter()
            .map(|(p, c)| (p, c.to_owned()))
            .collect::<BTreeMap<_, _>>();
        NavigationAssembler::new(
            store,
            Arc::new(FixedLister(refs)),
            Arc::new(MapSource(contents)),
            Arc::new(RawRenderer),
            Arc::new(HtmlLinkRenderer::new("/wiki")),
        )
    }

    fn set(numbers: &[u32]) -> AnchorSet {
        AnchorSet::from_unsorted(numbers.to_vec())
    }

    #[test]
    fn test_groups_ordered_by_minimum_anchor() {
        let store = Arc::new(
            MemoryIndexStore::new()
                .with_entry(PageRef::new(0, "Book/A"), set(&[5, 6]))
                .with_entry(PageRef::new(0, "Book/B"), set(&[1, 2])),
        );
        let assembler = assembler(store, vec![]);

        let output = assembler.generate(&PageRef::new(0, "Book")).unwrap();
        assert_eq!(
            output.as_str(),
            r##"<div class="pagenav-subpage-anchors"><a href="/wiki/Book/B#pg1">1</a> <a href="/wiki/Book/B#pg2">2</a> <a href="/wiki/Book/A#pg5">5</a> <a href="/wiki/Book/A#pg6">6</a></div>"##
        );
    }

    #[test]
    fn test_no_anchored_subpages_is_empty() {
        let assembler = assembler(Arc::new(MemoryIndexStore::new()), vec![]);

        let output = assembler.generate(&PageRef::new(0, "Book")).unwrap();
        assert_eq!(output, NavOutput::Empty);
        assert_eq!(output.as_str(), "");
    }

    #[test]
    fn test_live_scan_fallback_without_index() {
        let pages = vec![
            (
                PageRef::new(0, "Book/Two"),
                r#"<span id="pg3"></span><span id="pg4"></span>"#,
            ),
            (PageRef::new(0, "Book/One"), r#"<span id="pg1"></span>"#),
            (PageRef::new(0, "Book/Plain"), "<p>nothing here</p>"),
            (PageRef::new(0, "Other/X"), r#"<span id="pg9"></span>"#),
        ];
        let assembler = assembler(Arc::new(MemoryIndexStore::new()), pages);

        let output = assembler.generate(&PageRef::new(0, "Book")).unwrap();
        let NavOutput::Html(html) = output else {
            panic!("expected HTML output");
        };
        // One's min (1) sorts before Two's min (3); Plain and Other/X absent.
        assert_eq!(
            html,
            r##"<div class="pagenav-subpage-anchors"><a href="/wiki/Book/One#pg1">1</a> <a href="/wiki/Book/Two#pg3">3</a> <a href="/wiki/Book/Two#pg4">4</a></div>"##
        );
    }

    #[test]
    fn test_index_rows_win_over_live_scan() {
        // Store has rows, so page content is never consulted.
        let store = Arc::new(
            MemoryIndexStore::new().with_entry(PageRef::new(0, "Book/A"), set(&[7])),
        );
        let pages = vec![(PageRef::new(0, "Book/A"), r#"<span id="pg1"></span>"#)];
        let assembler = assembler(store, pages);

        let output = assembler.generate(&PageRef::new(0, "Book")).unwrap();
        assert!(output.as_str().contains("pg7"));
        assert!(!output.as_str().contains("pg1"));
    }

    #[test]
    fn test_duplicate_anchors_render_twice() {
        let store = Arc::new(
            MemoryIndexStore::new().with_entry(PageRef::new(0, "Book/A"), set(&[5, 5])),
        );
        let assembler = assembler(store, vec![]);

        let output = assembler.generate(&PageRef::new(0, "Book")).unwrap();
        assert_eq!(output.as_str().matches("#pg5").count(), 2);
    }

    #[test]
    fn test_equal_minimums_keep_enumeration_order() {
        // Store iterates in title order; sort is stable on equal keys.
        let store = Arc::new(
            MemoryIndexStore::new()
                .with_entry(PageRef::new(0, "Book/A"), set(&[1, 9]))
                .with_entry(PageRef::new(0, "Book/B"), set(&[1, 3])),
        );
        let assembler = assembler(store, vec![]);

        let output = assembler.generate(&PageRef::new(0, "Book")).unwrap();
        let html = output.as_str();
        let a = html.find("Book/A").unwrap();
        let b = html.find("Book/B").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_directive_defaults_to_current_page() {
        let store = Arc::new(
            MemoryIndexStore::new().with_entry(PageRef::new(0, "Book/A"), set(&[1])),
        );
        let directive = NavigationDirective::new(assembler(store, vec![]));
        assert_eq!(directive.name(), "subpage_anchor_navigation");

        let current = PageRef::new(0, "Book");
        let output = directive.invoke(&current, None).unwrap();
        assert!(matches!(output, NavOutput::Html(_)));

        let elsewhere = PageRef::new(0, "Elsewhere");
        let output = directive.invoke(&elsewhere, Some(&current)).unwrap();
        assert!(matches!(output, NavOutput::Html(_)));

        let output = directive.invoke(&elsewhere, None).unwrap();
        assert_eq!(output, NavOutput::Empty);
    }
}
