//! Path resolution against the DAG.
//!
//! A resolved path starts at the root key's node and follows one link per
//! tail segment, matching links by entry name. Any miss — root or segment —
//! fails the whole resolution.

use hashgate_dag::{DagNode, DagStore};
use hashgate_types::ExternalRootedPath;
use tracing::debug;

use crate::error::{GatewayError, GatewayResult};

/// Resolve a rooted path to its target node.
pub fn resolve_node<D: DagStore + ?Sized>(
    dag: &D,
    path: &ExternalRootedPath,
) -> GatewayResult<DagNode> {
    let mut node = dag.get_required(path.root())?;
    for segment in path.tail() {
        let target = node
            .link(segment)
            .map(|l| l.target)
            .ok_or_else(|| GatewayError::NotFound(format!("segment '{segment}' in {path}")))?;
        node = dag.get_required(&target)?;
    }
    debug!(path = %path, kind = %node.kind, "path resolved");
    Ok(node)
}
