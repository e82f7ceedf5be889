//! Anchor marker extraction from rendered page content.

use std::sync::LazyLock;

use regex::Regex;

use crate::anchors::AnchorSet;

/// Matches anchor markers like `id="pg123"` in rendered HTML.
static ANCHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"id="pg([0-9]+)""#).expect("valid anchor pattern"));

/// Extract every anchor number from rendered page content.
///
/// Finds each non-overlapping `id="pg<N>"` occurrence in document order and
/// returns the numbers sorted ascending. Duplicates are preserved. Content
/// without markers yields an empty set; malformed markers (non-numeric
/// suffix) are simply not matched. Digit runs that overflow `u32` are
/// skipped — they cannot be valid page-scan indexes.
///
/// # Example
///
/// ```
/// use pagenav_core::scan_anchors;
///
/// let html = r#"<span id="pg3"></span> text <span id="pg1"></span>"#;
/// assert_eq!(scan_anchors(html).numbers(), &[1, 3]);
/// ```
#[must_use]
pub fn scan_anchors(rendered: &str) -> AnchorSet {
    let numbers = ANCHOR_RE
        .captures_iter(rendered)
        .filter_map(|caps| caps[1].parse::<u32>().ok())
        .collect();
    AnchorSet::from_unsorted(numbers)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_scan_sorts_ascending() {
        let html = r#"<span id="pg3"></span><span id="pg1"></span><span id="pg2"></span>"#;
        assert_eq!(scan_anchors(html).numbers(), &[1, 2, 3]);
    }

    #[test]
    fn test_scan_preserves_duplicates() {
        let html = r#"<span id="pg3"></span><span id="pg1"></span><span id="pg1"></span>"#;
        assert_eq!(scan_anchors(html).numbers(), &[1, 1, 3]);
    }

    #[test]
    fn test_scan_empty_content() {
        assert!(scan_anchors("").is_empty());
    }

    #[test]
    fn test_scan_no_markers() {
        assert!(scan_anchors("<p>plain prose, no anchors</p>").is_empty());
    }

    #[test]
    fn test_scan_ignores_malformed_markers() {
        // Non-numeric suffixes and unrelated ids never match.
        let html = r#"<span id="pgX"></span><span id="page7"></span><a id="pg"></a>"#;
        assert!(scan_anchors(html).is_empty());
    }

    #[test]
    fn test_scan_marker_on_any_element() {
        let html = r#"<div id="pg10"><a id="pg4">x</a></div>"#;
        assert_eq!(scan_anchors(html).numbers(), &[4, 10]);
    }

    #[test]
    fn test_scan_skips_overflowing_numbers() {
        let html = r#"<span id="pg99999999999999999999"></span><span id="pg2"></span>"#;
        assert_eq!(scan_anchors(html).numbers(), &[2]);
    }

    #[test]
    fn test_scan_requires_closing_quote() {
        let html = r#"<span id="pg5>"#;
        assert!(scan_anchors(html).is_empty());
    }
}
