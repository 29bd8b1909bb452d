use thiserror::Error;

/// Errors produced while encoding or decoding content keys and paths.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    #[error("invalid digest length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid base58 string: {0}")]
    InvalidBase58(String),

    #[error("malformed key framing: {0}")]
    MalformedKey(String),
}

/// Result alias for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;
