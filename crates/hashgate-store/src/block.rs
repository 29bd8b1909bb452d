use hashgate_types::ContentKey;

/// A raw, untyped block addressed by the digest of its bytes.
///
/// Blocks are immutable once stored: they are never updated, only superseded
/// by a new block under a new key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    key: ContentKey,
    data: Vec<u8>,
}

impl Block {
    /// Create a block from raw bytes, deriving its key from the content.
    pub fn new(data: Vec<u8>) -> Self {
        let key = ContentKey::hash_bytes(&data);
        Self { key, data }
    }

    /// The block's content-addressed key.
    pub fn key(&self) -> &ContentKey {
        &self.key
    }

    /// The block's raw bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Size of the payload in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` for a zero-length payload.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Consume the block, returning its bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Recompute the digest and check it against the stored key.
    pub fn verify(&self) -> bool {
        ContentKey::hash_bytes(&self.data) == self.key
    }
}
