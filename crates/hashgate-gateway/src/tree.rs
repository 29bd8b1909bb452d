use serde::{Deserialize, Serialize};

/// Externally visible reconstruction of a DAG subtree.
///
/// Built fresh on every query and never cached. The root's `name` is empty;
/// every other node's `name` is the link name under its parent. `children`
/// mirrors the corresponding node's link list in the same order, and each
/// `hash` is the external encoding of the child node's own derivable key —
/// recomputed from the fetched node, never copied from the link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FsTree {
    /// External (`0x`-prefixed hex) key of this node.
    pub hash: String,
    /// Link name under the parent; empty at the root.
    pub name: String,
    /// Child subtrees in link order.
    pub children: Vec<FsTree>,
}

impl FsTree {
    /// Create a leaf with no children.
    pub fn leaf(hash: String, name: String) -> Self {
        Self {
            hash,
            name,
            children: Vec::new(),
        }
    }

    /// Look up a direct child by name.
    pub fn child(&self, name: &str) -> Option<&FsTree> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Total number of nodes in this subtree, including self.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(FsTree::node_count).sum::<usize>()
    }
}
