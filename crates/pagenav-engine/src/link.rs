//! Anchor link rendering.
//!
//! The host normally renders internal links itself; [`LinkRenderer`] is the
//! seam for that. [`HtmlLinkRenderer`] is the provided implementation used
//! by hosts without their own link helper: a plain `<a>` pointing at the
//! page URL with a fragment.

use pagenav_core::PageRef;

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Renders a link to an anchor on a wiki page.
pub trait LinkRenderer: Send + Sync {
    /// Render one navigation link.
    ///
    /// # Arguments
    ///
    /// * `target` - Page the link points at
    /// * `fragment` - Anchor fragment without `#` (e.g. `"pg12"`)
    /// * `text` - Visible link text
    fn anchor_link(&self, target: &PageRef, fragment: &str, text: &str) -> String;
}

/// Default HTML link renderer.
///
/// Produces `<a href="{base_path}/{title}#{fragment}">{text}</a>`. Title
/// keys are already URL-shaped (the host's title model normalizes spaces to
/// underscores); percent-encoding beyond that is left to the host, which is
/// why real wiki hosts plug in their own [`LinkRenderer`].
pub struct HtmlLinkRenderer {
    base_path: String,
}

impl HtmlLinkRenderer {
    /// Create a renderer with the given URL base path (e.g. `"/wiki"`).
    #[must_use]
    pub fn new(base_path: impl Into<String>) -> Self {
        let mut base_path = base_path.into();
        while base_path.ends_with('/') {
            base_path.pop();
        }
        Self { base_path }
    }
}

impl Default for HtmlLinkRenderer {
    fn default() -> Self {
        Self::new("/wiki")
    }
}

impl LinkRenderer for HtmlLinkRenderer {
    fn anchor_link(&self, target: &PageRef, fragment: &str, text: &str) -> String {
        format!(
            r#"<a href="{}/{}#{}">{}</a>"#,
            self.base_path,
            escape_html(target.title()),
            escape_html(fragment),
            escape_html(text)
        )
    }
}
