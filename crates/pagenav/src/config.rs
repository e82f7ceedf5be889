//! CLI configuration.
//!
//! Parses optional `pagenav.toml` files with serde. All keys have defaults,
//! so running without a config file works out of the box. CLI flags override
//! file values via [`CliSettings`].
//!
//! ```toml
//! pages_dir = "pages"
//! index_dir = ".pagenav/index"
//! base_path = "/wiki"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "pagenav.toml";

/// Configuration load error.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ConfigError {
    /// An explicitly requested config file does not exist.
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Config file exists but could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for the expected schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub(crate) struct CliSettings {
    /// Override pages source directory.
    pub pages_dir: Option<PathBuf>,
    /// Override index directory.
    pub index_dir: Option<PathBuf>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    /// Directory holding page content files.
    pub pages_dir: PathBuf,
    /// Directory holding the persisted anchor index.
    pub index_dir: PathBuf,
    /// URL base path used when rendering links.
    pub base_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pages_dir: PathBuf::from("pages"),
            index_dir: PathBuf::from(".pagenav/index"),
            base_path: "/wiki".to_owned(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// With an explicit `path`, the file must exist. Otherwise
    /// `pagenav.toml` in the current directory is used when present, and
    /// defaults apply when it is not. CLI settings are applied last.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if an explicit file is missing, unreadable or
    /// fails to parse.
    pub(crate) fn load(
        path: Option<&Path>,
        settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                Self::from_file(path)?
            }
            None => {
                let discovered = Path::new(CONFIG_FILENAME);
                if discovered.exists() {
                    Self::from_file(discovered)?
                } else {
                    Self::default()
                }
            }
        };

        if let Some(settings) = settings {
            if let Some(pages_dir) = &settings.pages_dir {
                config.pages_dir.clone_from(pages_dir);
            }
            if let Some(index_dir) = &settings.index_dir {
                config.index_dir.clone_from(index_dir);
            }
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.pages_dir, PathBuf::from("pages"));
        assert_eq!(config.index_dir, PathBuf::from(".pagenav/index"));
        assert_eq!(config.base_path, "/wiki");
    }

    #[test]
    fn test_load_explicit_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("pagenav.toml");
        fs::write(&path, "pages_dir = \"content\"\nbase_path = \"/w\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.pages_dir, PathBuf::from("content"));
        assert_eq!(config.base_path, "/w");
        // Unset key keeps its default.
        assert_eq!(config.index_dir, PathBuf::from(".pagenav/index"));
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let tmp = TempDir::new().unwrap();
        let result = Config::load(Some(&tmp.path().join("nope.toml")), None);
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_cli_settings_override_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("pagenav.toml");
        fs::write(&path, "pages_dir = \"content\"\n").unwrap();

        let settings = CliSettings {
            pages_dir: Some(PathBuf::from("override")),
            index_dir: None,
        };
        let config = Config::load(Some(&path), Some(&settings)).unwrap();
        assert_eq!(config.pages_dir, PathBuf::from("override"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("pagenav.toml");
        fs::write(&path, "unknown_key = 1\n").unwrap();

        assert!(matches!(
            Config::load(Some(&path), None),
            Err(ConfigError::Parse(_))
        ));
    }
}
