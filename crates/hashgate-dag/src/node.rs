//! DAG node types: typed payloads plus named links to child nodes.
//!
//! A [`DagNode`] is the unit of structure in the store. File nodes carry
//! payload bytes (large files may additionally link to chunk nodes);
//! directory nodes carry only links, one per entry. Nodes are immutable once
//! stored — they form an append-only structure addressed by content.

use serde::{Deserialize, Serialize};

use hashgate_types::ContentKey;

use crate::error::{DagError, DagResult};

/// Payload marker distinguishing file nodes from directory nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// Linearizable content: the node's data, then each linked subtree.
    File,
    /// Directory listing: one named link per entry, no payload bytes.
    Directory,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Directory => write!(f, "directory"),
        }
    }
}

/// A named, weak reference to another node.
///
/// Ownership of the referenced node lies with the store, not with the link;
/// the walker and tree only ever read through it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Entry name (file or directory name under the parent).
    pub name: String,
    /// Content-addressed key of the referenced node.
    pub target: ContentKey,
}

impl Link {
    /// Create a new link.
    pub fn new(name: impl Into<String>, target: ContentKey) -> Self {
        Self {
            name: name.into(),
            target,
        }
    }
}

/// A node in the Merkle-DAG.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DagNode {
    /// File or directory marker.
    pub kind: NodeKind,
    /// Payload bytes. Empty for directory nodes.
    pub data: Vec<u8>,
    /// Ordered links to child nodes. Order is preserved from insertion.
    pub links: Vec<Link>,
}

impl DagNode {
    /// Create a file node carrying payload bytes.
    pub fn file(data: Vec<u8>) -> Self {
        Self {
            kind: NodeKind::File,
            data,
            links: Vec::new(),
        }
    }

    /// Create a directory node with the given links.
    pub fn directory(links: Vec<Link>) -> Self {
        Self {
            kind: NodeKind::Directory,
            data: Vec::new(),
            links,
        }
    }

    /// Returns `true` for directory nodes.
    pub fn is_directory(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    /// Append a link, keeping insertion order.
    pub fn add_link(&mut self, link: Link) {
        self.links.push(link);
    }

    /// Look up a link by entry name.
    pub fn link(&self, name: &str) -> Option<&Link> {
        self.links.iter().find(|l| l.name == name)
    }

    /// Serialize to the store's binary form.
    pub fn encode(&self) -> DagResult<Vec<u8>> {
        bincode::serialize(self).map_err(|e| DagError::Codec(e.to_string()))
    }

    /// Deserialize from the store's binary form.
    pub fn decode(bytes: &[u8]) -> DagResult<Self> {
        bincode::deserialize(bytes).map_err(|e| DagError::Codec(e.to_string()))
    }

    /// The node's own content-addressed key, derived from its encoding.
    ///
    /// This is always recomputable from the node itself, which lets callers
    /// verify link targets instead of trusting them.
    pub fn key(&self) -> DagResult<ContentKey> {
        Ok(ContentKey::hash_bytes(&self.encode()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_node_has_no_links() {
        let node = DagNode::file(b"payload".to_vec());
        assert_eq!(node.kind, NodeKind::File);
        assert!(!node.is_directory());
        assert!(node.links.is_empty());
    }

    #[test]
    fn directory_node_preserves_link_order() {
        let k1 = ContentKey::hash_bytes(b"one");
        let k2 = ContentKey::hash_bytes(b"two");
        let node = DagNode::directory(vec![Link::new("b", k1), Link::new("a", k2)]);
        assert!(node.is_directory());
        assert_eq!(node.links[0].name, "b");
        assert_eq!(node.links[1].name, "a");
    }

    #[test]
    fn link_lookup_by_name() {
        let target = ContentKey::hash_bytes(b"child");
        let node = DagNode::directory(vec![Link::new("entry", target)]);
        assert_eq!(node.link("entry").map(|l| l.target), Some(target));
        assert!(node.link("missing").is_none());
    }

    #[test]
    fn encode_decode_roundtrip() {
        let mut node = DagNode::file(b"chunked".to_vec());
        node.add_link(Link::new("", ContentKey::hash_bytes(b"chunk1")));
        let bytes = node.encode().unwrap();
        let decoded = DagNode::decode(&bytes).unwrap();
        assert_eq!(node, decoded);
    }

    #[test]
    fn decode_rejects_garbage() {
        let err = DagNode::decode(&[0xff; 3]).unwrap_err();
        assert!(matches!(err, DagError::Codec(_)));
    }

    #[test]
    fn key_is_deterministic_and_content_sensitive() {
        let a = DagNode::file(b"same".to_vec());
        let b = DagNode::file(b"same".to_vec());
        let c = DagNode::file(b"other".to_vec());
        assert_eq!(a.key().unwrap(), b.key().unwrap());
        assert_ne!(a.key().unwrap(), c.key().unwrap());
    }

    #[test]
    fn kind_changes_key() {
        let file = DagNode::file(Vec::new());
        let dir = DagNode::directory(Vec::new());
        assert_ne!(file.key().unwrap(), dir.key().unwrap());
    }
}
