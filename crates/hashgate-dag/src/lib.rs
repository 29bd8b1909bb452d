//! Merkle-DAG layer for the Hashgate object gateway.
//!
//! Nodes are typed ([`NodeKind::File`] or [`NodeKind::Directory`]) and carry
//! ordered, named [`Link`]s to child nodes. The layer sits directly on the
//! block store seam: [`BlockDagStore`] encodes nodes into blocks, so a node's
//! key is the digest of its encoded bytes and is always recomputable from the
//! node itself.
//!
//! # Invariants
//!
//! - The graph is acyclic by construction (a node's key depends on its
//!   children's keys).
//! - Nodes are immutable once stored.
//! - Link order is preserved exactly as inserted.

pub mod error;
pub mod node;
pub mod reader;
pub mod store;

pub use error::{DagError, DagResult};
pub use node::{DagNode, Link, NodeKind};
pub use reader::DagReader;
pub use store::{BlockDagStore, DagStore};
