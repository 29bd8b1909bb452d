use hashgate_types::ContentKey;

use crate::block::Block;
use crate::error::StoreResult;

/// Content-addressed block store.
///
/// All implementations must satisfy these invariants:
/// - Blocks are immutable once written. Content-addressing guarantees this:
///   the same bytes always produce the same key.
/// - Concurrent reads are always safe (blocks are immutable).
/// - The store never interprets block contents — it is a pure key-value store.
/// - All I/O errors are propagated, never silently ignored.
pub trait BlockStore: Send + Sync {
    /// Read a block by its content-addressed key.
    ///
    /// Returns `Ok(None)` if the block does not exist.
    /// Returns `Err` on I/O failure or data corruption.
    fn get(&self, key: &ContentKey) -> StoreResult<Option<Block>>;

    /// Write raw bytes as a block and return its content-addressed key.
    ///
    /// If the block already exists, this is a no-op (idempotent).
    fn put(&self, data: Vec<u8>) -> StoreResult<ContentKey>;

    /// Check whether a block exists in the store.
    fn has(&self, key: &ContentKey) -> StoreResult<bool>;
}
