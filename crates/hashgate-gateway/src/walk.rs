//! Recursive DAG tree reconstruction.
//!
//! The walker mirrors the store's link structure into an [`FsTree`],
//! depth-first in link order. Every node's hash is recomputed from the
//! fetched node rather than copied from the referencing link, so a corrupted
//! link target surfaces as a hash change instead of being reported verbatim.

use std::collections::HashSet;

use hashgate_dag::{DagNode, DagStore};
use hashgate_types::ContentKey;
use tracing::debug;

use crate::error::{GatewayError, GatewayResult};
use crate::tree::FsTree;

/// Build the tree rooted at `node`, bounded to `depth` link-hops.
///
/// `None` walks the full subtree; `Some(0)` yields a childless root. Failure
/// anywhere discards the partial tree — the operation is all-or-nothing.
pub fn walk_tree<D: DagStore + ?Sized>(
    dag: &D,
    node: &DagNode,
    depth: Option<usize>,
) -> GatewayResult<FsTree> {
    let mut visiting = HashSet::new();
    let tree = walk_node(dag, node, String::new(), depth, &mut visiting)?;
    debug!(nodes = tree.node_count(), "tree walk complete");
    Ok(tree)
}

fn walk_node<D: DagStore + ?Sized>(
    dag: &D,
    node: &DagNode,
    name: String,
    depth: Option<usize>,
    visiting: &mut HashSet<ContentKey>,
) -> GatewayResult<FsTree> {
    let key = node.key()?;
    // Content addressing makes cycles unreachable in a healthy store, but a
    // corrupt one must not hang the walker.
    if !visiting.insert(key) {
        return Err(GatewayError::Cycle(key));
    }

    let mut children = Vec::new();
    if depth != Some(0) {
        let next = depth.map(|d| d - 1);
        for link in &node.links {
            let child = dag.get_required(&link.target)?;
            children.push(walk_node(dag, &child, link.name.clone(), next, visiting)?);
        }
    }

    // Path-scoped, so diamond sharing stays legal.
    visiting.remove(&key);

    Ok(FsTree {
        hash: key.to_external(),
        name,
        children,
    })
}
