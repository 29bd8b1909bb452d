use std::sync::Arc;

use hashgate_store::BlockStore;
use hashgate_types::ContentKey;
use tracing::debug;

use crate::error::{DagError, DagResult};
use crate::node::DagNode;

/// Typed node storage over a content-addressed backend.
///
/// Implementations must preserve the block-store invariants: nodes are
/// immutable, reads are concurrency-safe, and a node's key is always the
/// digest of its encoded bytes.
pub trait DagStore: Send + Sync {
    /// Fetch and decode a node by key. Returns `Ok(None)` if absent.
    fn get(&self, key: &ContentKey) -> DagResult<Option<DagNode>>;

    /// Encode and store a node, returning its content-addressed key.
    fn put(&self, node: &DagNode) -> DagResult<ContentKey>;

    /// Fetch a node that must exist, failing with [`DagError::NotFound`].
    fn get_required(&self, key: &ContentKey) -> DagResult<DagNode> {
        self.get(key)?.ok_or(DagError::NotFound(*key))
    }
}

/// A [`DagStore`] layered over any [`BlockStore`].
///
/// Nodes are bincode-encoded into blocks, so a node's key and its block's key
/// coincide. The backend is shared via `Arc` — cloning the store is cheap and
/// clones see the same blocks, which is what the streaming worker relies on.
pub struct BlockDagStore<S: BlockStore> {
    blocks: Arc<S>,
}

impl<S: BlockStore> BlockDagStore<S> {
    /// Wrap a shared block store.
    pub fn new(blocks: Arc<S>) -> Self {
        Self { blocks }
    }

    /// The underlying block store.
    pub fn blocks(&self) -> &S {
        &self.blocks
    }
}

impl<S: BlockStore> Clone for BlockDagStore<S> {
    fn clone(&self) -> Self {
        Self {
            blocks: Arc::clone(&self.blocks),
        }
    }
}

impl<S: BlockStore> DagStore for BlockDagStore<S> {
    fn get(&self, key: &ContentKey) -> DagResult<Option<DagNode>> {
        let Some(block) = self.blocks.get(key)? else {
            return Ok(None);
        };
        let node = DagNode::decode(block.data())?;
        Ok(Some(node))
    }

    fn put(&self, node: &DagNode) -> DagResult<ContentKey> {
        let encoded = node.encode()?;
        let key = self.blocks.put(encoded)?;
        debug!(key = %key.short(), kind = %node.kind, links = node.links.len(), "node stored");
        Ok(key)
    }
}
