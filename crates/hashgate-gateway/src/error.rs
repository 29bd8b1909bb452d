//! Error types for gateway operations.

use hashgate_dag::DagError;
use hashgate_store::StoreError;
use hashgate_types::{CodecError, ContentKey};

/// Errors surfaced by gateway operations.
///
/// Every operation fails synchronously to its immediate caller; nothing is
/// retried here. Retry policy, if wanted, belongs to the caller or the store
/// collaborator.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Malformed hash, path, or payload input.
    #[error("decoding error: {0}")]
    Decode(#[from] CodecError),

    /// A referenced block, node, or path segment is absent.
    #[error("not found: {0}")]
    NotFound(String),

    /// Local filesystem failure during push.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Opaque failure from the underlying block service.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Unknown command string or bad parameter arity.
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    /// A link loop was hit while walking; only possible with a corrupt store.
    #[error("cycle detected at node {0}")]
    Cycle(ContentKey),

    /// Other DAG-layer failure (node codec faults, file/directory misuse).
    #[error(transparent)]
    Dag(DagError),

    /// Configuration file could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),
}

impl From<DagError> for GatewayError {
    fn from(err: DagError) -> Self {
        match err {
            DagError::NotFound(key) => Self::NotFound(key.to_base58()),
            DagError::Store(e) => Self::Store(e),
            other => Self::Dag(other),
        }
    }
}

/// Result alias for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;
