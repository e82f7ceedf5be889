//! Filesystem-backed reference host.
//!
//! The maintenance command needs something to rebuild from, so the CLI ships
//! a minimal host: pages are `.html` files under a directory, the relative
//! path minus the extension is the title key, and everything lives in the
//! main namespace (0). Subpages are plain subdirectories (`Book/Page_1` is
//! `{pages_dir}/Book/Page_1.html`).
//!
//! Rendering is a pass-through: anchor markers are literal HTML in the page
//! source, and the real wikitext pipeline belongs to a real host. Transclusion
//! never happens here, so the suppress-transclusions render option is
//! trivially honored.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use pagenav_core::PageRef;
use pagenav_engine::{
    ContentRenderer, ContentSource, HostError, PageLister, RenderOptions, RenderedPage,
};

/// File extension for page content files.
const PAGE_EXT: &str = "html";

/// Directory-of-files wiki host.
pub(crate) struct FsWiki {
    pages_dir: PathBuf,
}

impl FsWiki {
    /// Create a host over `pages_dir`.
    pub(crate) fn new(pages_dir: impl Into<PathBuf>) -> Arc<Self> {
        Arc::new(Self {
            pages_dir: pages_dir.into(),
        })
    }

    fn page_path(&self, page: &PageRef) -> Option<PathBuf> {
        // Only the main namespace exists in this host.
        if page.namespace() != 0 {
            return None;
        }
        Some(self.pages_dir.join(format!("{}.{PAGE_EXT}", page.title())))
    }

    /// Collect every page title under `dir`, recursing into subdirectories.
    fn collect_titles(&self, dir: &Path, prefix: &str, titles: &mut Vec<PageRef>) {
        let Ok(entries) = fs::read_dir(dir) else {
            return;
        };

        for entry in entries.filter_map(Result::ok) {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }

            let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());
            if is_dir {
                let child_prefix = if prefix.is_empty() {
                    name
                } else {
                    format!("{prefix}/{name}")
                };
                self.collect_titles(&entry.path(), &child_prefix, titles);
            } else if let Some(stem) = name.strip_suffix(&format!(".{PAGE_EXT}")) {
                let title = if prefix.is_empty() {
                    stem.to_owned()
                } else {
                    format!("{prefix}/{stem}")
                };
                titles.push(PageRef::new(0, title));
            }
        }
    }

    fn all_pages(&self) -> Vec<PageRef> {
        let mut titles = Vec::new();
        if self.pages_dir.exists() {
            self.collect_titles(&self.pages_dir, "", &mut titles);
        }
        titles.sort();
        titles
    }
}

impl ContentSource for FsWiki {
    fn content(&self, page: &PageRef) -> Result<Option<String>, HostError> {
        let Some(path) = self.page_path(page) else {
            return Ok(None);
        };
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(HostError::Io(e)),
        }
    }
}

impl ContentRenderer for FsWiki {
    fn render(
        &self,
        content: &str,
        _page: &PageRef,
        _options: &RenderOptions,
    ) -> Result<RenderedPage, HostError> {
        Ok(RenderedPage::new(content))
    }
}

impl PageLister for FsWiki {
    fn subpages_of(&self, parent: &PageRef) -> Result<Vec<PageRef>, HostError> {
        Ok(self
            .all_pages()
            .into_iter()
            .filter(|p| p.is_subpage_of(parent))
            .collect())
    }

    fn all_subpages(&self) -> Result<Vec<PageRef>, HostError> {
        Ok(self
            .all_pages()
            .into_iter()
            .filter(PageRef::is_subpage)
            .collect())
    }
}
