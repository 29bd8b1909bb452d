//! Ingestion: local files and directories into the DAG.
//!
//! Directories become one `Directory` node per level with links named after
//! the child entries; files become single `File` nodes carrying their bytes.
//! Entries are visited in name order so the same tree always produces the
//! same root key.

use std::fs;
use std::path::Path;

use hashgate_dag::{DagNode, DagStore, Link};
use hashgate_types::ContentKey;
use tracing::{debug, info};

use crate::error::{GatewayError, GatewayResult};

/// Ingest a single file as a depth-1 DAG (one node, no links).
pub fn ingest_file<D: DagStore + ?Sized>(dag: &D, path: &Path) -> GatewayResult<ContentKey> {
    let meta = fs::metadata(path)?;
    if meta.is_dir() {
        return Err(GatewayError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("{} is a directory, expected a file", path.display()),
        )));
    }
    let data = fs::read(path)?;
    let key = dag.put(&DagNode::file(data))?;
    info!(path = %path.display(), key = %key.short(), "file ingested");
    Ok(key)
}

/// Ingest a file or directory tree, descending at most `depth` links below
/// the root (`None` = unbounded). Entries past the bound are left out of
/// their parent's links.
pub fn ingest_tree<D: DagStore + ?Sized>(
    dag: &D,
    path: &Path,
    depth: Option<usize>,
) -> GatewayResult<ContentKey> {
    let key = ingest_entry(dag, path, depth)?;
    info!(path = %path.display(), key = %key.short(), "tree ingested");
    Ok(key)
}

fn ingest_entry<D: DagStore + ?Sized>(
    dag: &D,
    path: &Path,
    remaining: Option<usize>,
) -> GatewayResult<ContentKey> {
    let meta = fs::metadata(path)?;
    if !meta.is_dir() {
        let data = fs::read(path)?;
        return Ok(dag.put(&DagNode::file(data))?);
    }

    let mut links = Vec::new();
    if remaining != Some(0) {
        let next = remaining.map(|d| d - 1);
        for entry_path in sorted_entries(path)? {
            let name = entry_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let child = ingest_entry(dag, &entry_path, next)?;
            links.push(Link::new(name, child));
        }
    } else {
        debug!(path = %path.display(), "depth bound reached, entries skipped");
    }
    Ok(dag.put(&DagNode::directory(links))?)
}

fn sorted_entries(dir: &Path) -> GatewayResult<Vec<std::path::PathBuf>> {
    let mut entries: Vec<_> = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<_, _>>()?;
    entries.sort();
    Ok(entries)
}
