//! JSON-file-backed index store.
//!
//! [`FileIndexStore`] keeps the whole index as one JSON file under a root
//! directory:
//!
//! ```text
//! {root}/
//! +-- VERSION       # index format/application version string
//! +-- index.json    # one row per anchored page, see `IndexRow`
//! ```
//!
//! Rows store the anchor list in its wire encoding (comma-joined decimal
//! string), the same representation the original relational layout used for
//! its property column. The full map is held in memory behind an `RwLock`;
//! every mutation rewrites the file, which is acceptable for an index that
//! holds one small row per anchored subpage.
//!
//! On construction the `VERSION` file is validated. A mismatch or a missing
//! file wipes and recreates the root directory, so an index written by an
//! incompatible version is never partially reused.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use pagenav_core::{ANCHORS_PROP, AnchorSet, PageRef};
use serde::{Deserialize, Serialize};

use crate::store::{IndexError, IndexStore};

/// One persisted index row: page identity, property name, encoded value.
#[derive(Serialize, Deserialize)]
struct IndexRow {
    namespace: i32,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    page_id: Option<u64>,
    /// Property name; always [`ANCHORS_PROP`]. Rows carrying any other
    /// property are ignored on load.
    prop: String,
    /// Wire-encoded anchor list (e.g. `"3,5,12"`).
    value: String,
}

/// File-backed [`IndexStore`] rooted at a directory on disk.
pub struct FileIndexStore {
    root: PathBuf,
    entries: RwLock<BTreeMap<PageRef, AnchorSet>>,
}

impl FileIndexStore {
    /// Open (or initialize) the index at `root`, validating the version.
    ///
    /// If the `VERSION` file inside `root` does not match `version`, the
    /// directory is wiped and recreated empty. A corrupt `index.json` is
    /// logged and discarded — the index is fully rebuildable from page
    /// content, so starting empty is safer than failing open.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Io`] if the root directory cannot be created.
    pub fn open(root: impl Into<PathBuf>, version: &str) -> Result<Self, IndexError> {
        let root = root.into();
        validate_version(&root, version)?;

        let entries = match load_rows(&root.join(INDEX_FILE)) {
            Ok(map) => map,
            Err(e) => {
                tracing::warn!("discarding unreadable index file: {e}");
                BTreeMap::new()
            }
        };

        Ok(Self {
            root,
            entries: RwLock::new(entries),
        })
    }

    fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_FILE)
    }

    /// Write the current in-memory map to disk.
    ///
    /// Writes to a temporary file and renames it into place, so a crash
    /// mid-write never leaves a truncated `index.json` behind.
    fn persist(&self, entries: &BTreeMap<PageRef, AnchorSet>) -> Result<(), IndexError> {
        let rows: Vec<IndexRow> = entries
            .iter()
            .map(|(page, anchors)| IndexRow {
                namespace: page.namespace(),
                title: page.title().to_owned(),
                page_id: page.page_id(),
                prop: ANCHORS_PROP.to_owned(),
                value: anchors.encode(),
            })
            .collect();

        let json = serde_json::to_string(&rows)?;
        let tmp = self.root.join(TMP_FILE);
        fs::write(&tmp, json).map_err(|source| IndexError::Io {
            path: tmp.clone(),
            source,
        })?;
        let path = self.index_path();
        fs::rename(&tmp, &path).map_err(|source| IndexError::Io { path, source })
    }
}

const INDEX_FILE: &str = "index.json";
const TMP_FILE: &str = "index.json.tmp";

impl IndexStore for FileIndexStore {
    fn get(&self, page: &PageRef) -> Result<Option<AnchorSet>, IndexError> {
        Ok(self.entries.read().expect("lock poisoned").get(page).cloned())
    }

    fn put(&self, page: &PageRef, anchors: &AnchorSet) -> Result<(), IndexError> {
        if anchors.is_empty() {
            return self.remove(page);
        }
        let mut entries = self.entries.write().expect("lock poisoned");
        entries.insert(page.clone(), anchors.clone());
        self.persist(&entries)
    }

    fn remove(&self, page: &PageRef) -> Result<(), IndexError> {
        let mut entries = self.entries.write().expect("lock poisoned");
        if entries.remove(page).is_some() {
            self.persist(&entries)?;
        }
        Ok(())
    }

    fn list_subpages_of(&self, parent: &PageRef) -> Result<Vec<(PageRef, AnchorSet)>, IndexError> {
        let entries = self.entries.read().expect("lock poisoned");
        Ok(entries
            .iter()
            .filter(|(page, _)| page.is_subpage_of(parent))
            .map(|(page, anchors)| (page.clone(), anchors.clone()))
            .collect())
    }
}

/// Load persisted rows, returning an empty map if the file does not exist.
fn load_rows(path: &Path) -> Result<BTreeMap<PageRef, AnchorSet>, IndexError> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
        Err(source) => {
            return Err(IndexError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let rows: Vec<IndexRow> = serde_json::from_str(&json)?;
    let mut map = BTreeMap::new();
    for row in rows {
        if row.prop != ANCHORS_PROP {
            continue;
        }
        let mut page = PageRef::new(row.namespace, row.title);
        if let Some(id) = row.page_id {
            page = page.with_page_id(id);
        }
        let anchors = AnchorSet::decode(&row.value).map_err(|source| IndexError::CorruptRow {
            page: page.clone(),
            source,
        })?;
        if !anchors.is_empty() {
            map.insert(page, anchors);
        }
    }
    Ok(map)
}

/// Validate the index version, wiping the directory on mismatch.
fn validate_version(root: &Path, version: &str) -> Result<(), IndexError> {
    let version_file = root.join("VERSION");

    match fs::read_to_string(&version_file) {
        Ok(stored) if stored == version => {
            tracing::debug!("index version matches: {version}");
            return Ok(());
        }
        Ok(stored) => {
            tracing::info!("index version mismatch (stored={stored}, current={version}), wiping");
        }
        Err(_) => {
            tracing::info!("no index VERSION file found, initializing");
        }
    }

    if root.exists()
        && let Err(e) = fs::remove_dir_all(root)
    {
        tracing::warn!("failed to remove index directory: {e}");
    }
    fs::create_dir_all(root).map_err(|source| IndexError::Io {
        path: root.to_path_buf(),
        source,
    })?;
    fs::write(&version_file, version).map_err(|source| IndexError::Io {
        path: version_file,
        source,
    })
}
