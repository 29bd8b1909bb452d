//! Foundation types for the Hashgate object gateway.
//!
//! This crate provides the key, codec, and path types used throughout the
//! gateway. Every other Hashgate crate depends on `hashgate-types`.
//!
//! # Key Types
//!
//! - [`ContentKey`] — content-addressed identifier (BLAKE3 digest) with two
//!   encodings: the store's self-describing multihash form (base58 in string
//!   form) and the ledger-facing `0x`-prefixed hex form
//! - [`ExternalRootedPath`] — validated slash-delimited path whose first
//!   segment is an external hex hash
//! - [`CodecError`] — decoding failures for keys and paths

pub mod error;
pub mod key;
pub mod path;

pub use error::{CodecError, CodecResult};
pub use key::{external_to_internal, internal_to_external, ContentKey, DIGEST_LEN};
pub use path::{resolve_path_prefix, ExternalRootedPath};
