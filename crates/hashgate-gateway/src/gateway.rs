use std::path::Path;
use std::sync::mpsc::Receiver;
use std::sync::Arc;

use hashgate_dag::{BlockDagStore, DagError, DagReader, DagStore};
use hashgate_store::{BlockStore, InMemoryBlockStore};
use hashgate_types::{ContentKey, ExternalRootedPath};
use tracing::info;

use crate::config::GatewayConfig;
use crate::error::{GatewayError, GatewayResult};
use crate::push::{ingest_file, ingest_tree};
use crate::resolve::resolve_node;
use crate::stream::{spawn_stream, StreamChunk};
use crate::tree::FsTree;
use crate::walk::walk_tree;

/// A classified object: raw file bytes or a reconstructed directory tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ObjectContent {
    /// The node was a file; its complete linearized content.
    Bytes(Vec<u8>),
    /// The node was a directory; its subtree.
    Tree(FsTree),
}

/// The content-addressed object gateway.
///
/// A stateless translation and traversal layer over an already-durable
/// block store: it resolves external hex hashes to stored objects,
/// reconstructs directory trees from the DAG, streams file content, and
/// ingests local files back into the store. All operations run on the
/// caller's thread except [`stream`], which spawns one producer worker.
///
/// [`stream`]: Gateway::stream
pub struct Gateway<S: BlockStore + 'static> {
    blocks: Arc<S>,
    dag: BlockDagStore<S>,
    config: GatewayConfig,
}

impl Gateway<InMemoryBlockStore> {
    /// A gateway over a fresh in-memory store, for tests and embedding.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryBlockStore::new()))
    }
}

impl<S: BlockStore + 'static> Gateway<S> {
    /// Create a gateway over a shared block store with default config.
    pub fn new(blocks: Arc<S>) -> Self {
        Self::with_config(blocks, GatewayConfig::default())
    }

    /// Create a gateway with explicit configuration.
    pub fn with_config(blocks: Arc<S>, config: GatewayConfig) -> Self {
        info!(chunk_size = config.chunk_size, "gateway ready");
        let dag = BlockDagStore::new(Arc::clone(&blocks));
        Self {
            blocks,
            dag,
            config,
        }
    }

    /// The underlying block store.
    pub fn blocks(&self) -> &S {
        &self.blocks
    }

    /// The DAG view over the block store.
    pub fn dag(&self) -> &BlockDagStore<S> {
        &self.dag
    }

    /// The active configuration.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    // -- retrieval ----------------------------------------------------------

    /// Fetch one raw block by its external hex hash.
    pub fn block(&self, hex_hash: &str) -> GatewayResult<Vec<u8>> {
        let key = ContentKey::from_external(hex_hash)?;
        let block = self
            .blocks
            .get(&key)?
            .ok_or_else(|| GatewayError::NotFound(key.to_base58()))?;
        Ok(block.into_data())
    }

    /// Fetch a file's complete linearized bytes. Not suited to large objects;
    /// use [`stream`] for those.
    ///
    /// [`stream`]: Gateway::stream
    pub fn file(&self, path: &ExternalRootedPath) -> GatewayResult<Vec<u8>> {
        let node = resolve_node(&self.dag, path)?;
        let reader = DagReader::new(&self.dag, &node)?;
        Ok(reader.into_bytes()?)
    }

    /// Open a chunk stream over a file's content.
    ///
    /// Resolution errors return synchronously; after that, one background
    /// worker produces chunks until end-of-input or a fault (delivered as
    /// the final item). The channel closing is the termination signal.
    pub fn stream(&self, path: &ExternalRootedPath) -> GatewayResult<Receiver<StreamChunk>> {
        let node = resolve_node(&self.dag, path)?;
        if node.is_directory() {
            return Err(DagError::NotAFile(node.key()?).into());
        }
        Ok(spawn_stream(self.dag.clone(), node, self.config.chunk_size))
    }

    /// Reconstruct the directory tree rooted at `path`.
    ///
    /// `depth` bounds the walk in link-hops; `None` falls back to the
    /// configured default (itself unbounded unless set).
    pub fn tree(&self, path: &ExternalRootedPath, depth: Option<usize>) -> GatewayResult<FsTree> {
        let node = resolve_node(&self.dag, path)?;
        walk_tree(&self.dag, &node, depth.or(self.config.max_walk_depth))
    }

    /// Fetch whatever `path` names: file bytes or a directory tree,
    /// auto-detected from the node's payload marker.
    pub fn object(&self, path: &ExternalRootedPath) -> GatewayResult<ObjectContent> {
        let node = resolve_node(&self.dag, path)?;
        if node.is_directory() {
            Ok(ObjectContent::Tree(walk_tree(&self.dag, &node, None)?))
        } else {
            let reader = DagReader::new(&self.dag, &node)?;
            Ok(ObjectContent::Bytes(reader.into_bytes()?))
        }
    }

    // -- ingestion ----------------------------------------------------------

    /// Store raw bytes as one opaque block, returning its key.
    pub fn push_block(&self, data: &[u8]) -> GatewayResult<ContentKey> {
        let key = self.blocks.put(data.to_vec())?;
        info!(key = %key.short(), bytes = data.len(), "block pushed");
        Ok(key)
    }

    /// Ingest a single local file as a depth-1 DAG, returning the root key.
    pub fn push_file(&self, path: &Path) -> GatewayResult<ContentKey> {
        ingest_file(&self.dag, path)
    }

    /// Ingest a local directory tree up to `depth` links deep
    /// (`None` = unbounded), returning the root key.
    pub fn push_tree(&self, path: &Path, depth: Option<usize>) -> GatewayResult<ContentKey> {
        ingest_tree(&self.dag, path, depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn path_for(key: &ContentKey) -> ExternalRootedPath {
        ExternalRootedPath::parse(&key.to_external()).expect("valid external key")
    }

    // -----------------------------------------------------------------------
    // Block round-trip
    // -----------------------------------------------------------------------

    #[test]
    fn pushed_block_is_fetchable_by_its_key() {
        let gw = Gateway::in_memory();
        let key = gw.push_block(b"round trip").unwrap();
        assert_eq!(gw.block(&key.to_external()).unwrap(), b"round trip");
    }

    #[test]
    fn unknown_block_hash_is_not_found() {
        let gw = Gateway::in_memory();
        let ghost = ContentKey::hash_bytes(b"never pushed");
        let err = gw.block(&ghost.to_external()).unwrap_err();
        assert!(matches!(err, GatewayError::NotFound(_)));
    }

    #[test]
    fn malformed_block_hash_is_decode_error() {
        let gw = Gateway::in_memory();
        let err = gw.block("0xnothex").unwrap_err();
        assert!(matches!(err, GatewayError::Decode(_)));
    }

    // -----------------------------------------------------------------------
    // File retrieval and classification
    // -----------------------------------------------------------------------

    #[test]
    fn pushed_file_reads_back_identically() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("data.bin");
        fs::write(&file, b"original content").unwrap();

        let gw = Gateway::in_memory();
        let key = gw.push_file(&file).unwrap();
        assert_eq!(gw.file(&path_for(&key)).unwrap(), b"original content");
    }

    #[test]
    fn classify_file_returns_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("f.txt");
        fs::write(&file, b"classified").unwrap();

        let gw = Gateway::in_memory();
        let key = gw.push_file(&file).unwrap();
        match gw.object(&path_for(&key)).unwrap() {
            ObjectContent::Bytes(bytes) => assert_eq!(bytes, b"classified"),
            ObjectContent::Tree(_) => panic!("expected bytes for a file node"),
        }
    }

    #[test]
    fn classify_directory_returns_tree_with_entry_names() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("one.txt"), b"1").unwrap();
        fs::write(dir.path().join("two.txt"), b"2").unwrap();

        let gw = Gateway::in_memory();
        let key = gw.push_tree(dir.path(), None).unwrap();
        match gw.object(&path_for(&key)).unwrap() {
            ObjectContent::Tree(tree) => {
                let names: Vec<&str> = tree.children.iter().map(|c| c.name.as_str()).collect();
                assert_eq!(names, ["one.txt", "two.txt"]);
            }
            ObjectContent::Bytes(_) => panic!("expected a tree for a directory node"),
        }
    }

    // -----------------------------------------------------------------------
    // Tree walk through paths
    // -----------------------------------------------------------------------

    #[test]
    fn tree_resolves_nested_path_segments() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs").join("readme.md"), b"hi").unwrap();

        let gw = Gateway::in_memory();
        let key = gw.push_tree(dir.path(), None).unwrap();

        let nested = ExternalRootedPath::parse(&format!("/{}/docs", key.to_external())).unwrap();
        let tree = gw.tree(&nested, None).unwrap();
        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.children[0].name, "readme.md");
    }

    #[test]
    fn tree_depth_is_honored() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("leaf"), b"x").unwrap();

        let gw = Gateway::in_memory();
        let key = gw.push_tree(dir.path(), None).unwrap();

        let tree = gw.tree(&path_for(&key), Some(1)).unwrap();
        assert_eq!(tree.children.len(), 1);
        assert!(tree.children[0].children.is_empty());
    }

    #[test]
    fn file_via_nested_path() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("inner.txt"), b"through the path").unwrap();

        let gw = Gateway::in_memory();
        let key = gw.push_tree(dir.path(), None).unwrap();

        let path =
            ExternalRootedPath::parse(&format!("/{}/inner.txt", key.to_external())).unwrap();
        assert_eq!(gw.file(&path).unwrap(), b"through the path");
    }

    // -----------------------------------------------------------------------
    // Streaming
    // -----------------------------------------------------------------------

    #[test]
    fn stream_rejects_directories_eagerly() {
        let dir = tempfile::tempdir().unwrap();
        let gw = Gateway::in_memory();
        let key = gw.push_tree(dir.path(), None).unwrap();

        let err = gw.stream(&path_for(&key)).unwrap_err();
        assert!(matches!(err, GatewayError::Dag(DagError::NotAFile(_))));
    }

    #[test]
    fn stream_delivers_pushed_content_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let body: Vec<u8> = (0..=255u8).cycle().take(2500).collect();
        let file = dir.path().join("big.bin");
        fs::write(&file, &body).unwrap();

        let gw = Gateway::in_memory();
        let key = gw.push_file(&file).unwrap();

        let rx = gw.stream(&path_for(&key)).unwrap();
        let mut out = Vec::new();
        for chunk in rx {
            out.extend_from_slice(&chunk.expect("no fault expected"));
        }
        assert_eq!(out, body);
    }
}
