//! CLI error types.

use pagenav_engine::EngineError;
use pagenav_index::IndexError;

use crate::config::ConfigError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Index(#[from] IndexError),

    #[error("{0}")]
    Engine(#[from] EngineError),
}
