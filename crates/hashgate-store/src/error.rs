use hashgate_types::ContentKey;

/// Errors from block store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The requested block was not found.
    #[error("block not found: {0}")]
    NotFound(ContentKey),

    /// Content digest mismatch on read (data corruption).
    #[error("digest mismatch for {key}: computed {computed}")]
    DigestMismatch { key: ContentKey, computed: String },

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Opaque failure from a remote or wrapped backend.
    #[error("backend error: {0}")]
    Backend(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
