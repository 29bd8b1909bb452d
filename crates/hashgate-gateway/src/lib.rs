//! Content-addressed object gateway.
//!
//! The gateway is the translation and traversal layer between a ledger that
//! speaks `0x`-prefixed hex hashes and a block store that speaks
//! self-describing multihash keys. It resolves hex-rooted paths, rebuilds
//! directory trees from the Merkle-DAG, retrieves file content in bulk or as
//! a chunk stream, and ingests local files and directories back into the
//! store.
//!
//! # Command Surface
//!
//! Retrieval and ingestion share a uniform string command shape (see
//! [`Gateway::get`] and [`Gateway::push`]):
//!
//! | command  | get                       | push                  |
//! |----------|---------------------------|-----------------------|
//! | `block`  | raw bytes by hex hash     | raw bytes from hex    |
//! | `file`   | linearized file bytes     | local file            |
//! | `stream` | chunk stream              | —                     |
//! | `tree`   | reconstructed [`FsTree`]  | local directory tree  |
//! | `object` | bytes or tree, detected   | —                     |
//!
//! The store collaborators are seams ([`hashgate_store::BlockStore`],
//! [`hashgate_dag::DagStore`]); the gateway itself keeps no state beyond its
//! configuration and never caches what it rebuilds.

pub mod command;
pub mod config;
pub mod error;
pub mod gateway;
pub mod push;
pub mod resolve;
pub mod stream;
pub mod tree;
pub mod walk;

pub use command::GetOutput;
pub use config::{GatewayConfig, DEFAULT_CHUNK_SIZE};
pub use error::{GatewayError, GatewayResult};
pub use gateway::{Gateway, ObjectContent};
pub use stream::{StreamChunk, StreamFault};
pub use tree::FsTree;

// The external↔internal key conversions are part of the gateway's public
// surface; re-export them so callers need only this crate.
pub use hashgate_types::{external_to_internal, internal_to_external};
pub use hashgate_types::{resolve_path_prefix, ContentKey, ExternalRootedPath};
