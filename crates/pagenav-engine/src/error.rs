//! Engine error type.

use pagenav_index::IndexError;

use crate::host::HostError;

/// Error from an engine operation.
///
/// Both sources propagate unchanged to the caller: the engine performs no
/// retries, and the host's request or job framework owns error reporting.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A host collaborator failed.
    #[error("{0}")]
    Host(#[from] HostError),

    /// The anchor index failed.
    #[error("{0}")]
    Index(#[from] IndexError),
}
