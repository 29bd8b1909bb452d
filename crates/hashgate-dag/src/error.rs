//! Error types for the DAG layer.

use hashgate_types::ContentKey;

/// Errors that can occur during DAG operations.
#[derive(Debug, thiserror::Error)]
pub enum DagError {
    /// A referenced node was not found in the store.
    #[error("node not found: {0}")]
    NotFound(ContentKey),

    /// A linearized read was requested over a directory node.
    #[error("node {0} is a directory, not a file")]
    NotAFile(ContentKey),

    /// Node encoding or decoding failure.
    #[error("node codec error: {0}")]
    Codec(String),

    /// Failure in the underlying block store.
    #[error("block store error: {0}")]
    Store(#[from] hashgate_store::StoreError),
}

/// Convenience alias for DAG results.
pub type DagResult<T> = Result<T, DagError>;
