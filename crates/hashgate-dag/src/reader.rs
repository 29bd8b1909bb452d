//! Linearized byte reader over file nodes.
//!
//! A file's complete content is its own payload bytes followed by each linked
//! subtree's content, depth-first in link order. [`DagReader`] walks that
//! order lazily, fetching chunk nodes from the store as the consumer reads.

use std::collections::VecDeque;
use std::io::{self, Read};

use hashgate_types::ContentKey;

use crate::error::{DagError, DagResult};
use crate::node::DagNode;
use crate::store::DagStore;

/// Incremental reader over a file node's linearized content.
///
/// Implements [`std::io::Read`]; store failures surface as `io::Error` values
/// wrapping the underlying [`DagError`].
pub struct DagReader<'a, D: DagStore + ?Sized> {
    dag: &'a D,
    current: Vec<u8>,
    offset: usize,
    pending: VecDeque<ContentKey>,
}

impl<'a, D: DagStore + ?Sized> std::fmt::Debug for DagReader<'a, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DagReader")
            .field("current_len", &self.current.len())
            .field("offset", &self.offset)
            .field("pending", &self.pending.len())
            .finish_non_exhaustive()
    }
}

impl<'a, D: DagStore + ?Sized> DagReader<'a, D> {
    /// Open a reader over a file node.
    ///
    /// Fails with [`DagError::NotAFile`] for directory nodes.
    pub fn new(dag: &'a D, node: &DagNode) -> DagResult<Self> {
        if node.is_directory() {
            return Err(DagError::NotAFile(node.key()?));
        }
        let pending = node.links.iter().map(|l| l.target).collect();
        Ok(Self {
            dag,
            current: node.data.clone(),
            offset: 0,
            pending,
        })
    }

    /// Drain the remaining content into one buffer.
    pub fn into_bytes(mut self) -> DagResult<Vec<u8>> {
        let mut out = Vec::new();
        out.extend_from_slice(&self.current[self.offset..]);
        while self.advance()? {
            out.extend_from_slice(&self.current);
            self.offset = self.current.len();
        }
        Ok(out)
    }

    /// Move to the next node in depth-first order.
    ///
    /// Returns `false` at end of input. On success `current` is non-empty
    /// and `offset` is reset.
    fn advance(&mut self) -> DagResult<bool> {
        while let Some(key) = self.pending.pop_front() {
            let node = self.dag.get_required(&key)?;
            if node.is_directory() {
                return Err(DagError::NotAFile(key));
            }
            // Children of this chunk come before later siblings.
            for link in node.links.iter().rev() {
                self.pending.push_front(link.target);
            }
            self.current = node.data;
            self.offset = 0;
            if !self.current.is_empty() {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl<D: DagStore + ?Sized> Read for DagReader<'_, D> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        if self.offset >= self.current.len() {
            match self.advance() {
                Ok(true) => {}
                Ok(false) => return Ok(0),
                Err(e) => return Err(io::Error::other(e)),
            }
        }
        let n = buf.len().min(self.current.len() - self.offset);
        buf[..n].copy_from_slice(&self.current[self.offset..self.offset + n]);
        self.offset += n;
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Link;
    use crate::store::BlockDagStore;
    use hashgate_store::InMemoryBlockStore;
    use std::sync::Arc;

    fn dag() -> BlockDagStore<InMemoryBlockStore> {
        BlockDagStore::new(Arc::new(InMemoryBlockStore::new()))
    }

    #[test]
    fn single_node_content() {
        let dag = dag();
        let node = DagNode::file(b"just one node".to_vec());
        let reader = DagReader::new(&dag, &node).unwrap();
        assert_eq!(reader.into_bytes().unwrap(), b"just one node");
    }

    #[test]
    fn zero_length_file() {
        let dag = dag();
        let node = DagNode::file(Vec::new());
        let reader = DagReader::new(&dag, &node).unwrap();
        assert!(reader.into_bytes().unwrap().is_empty());
    }

    #[test]
    fn chunked_file_concatenates_in_link_order() {
        let dag = dag();
        let c1 = dag.put(&DagNode::file(b"bbb".to_vec())).unwrap();
        let c2 = dag.put(&DagNode::file(b"ccc".to_vec())).unwrap();

        let mut root = DagNode::file(b"aaa".to_vec());
        root.add_link(Link::new("", c1));
        root.add_link(Link::new("", c2));

        let reader = DagReader::new(&dag, &root).unwrap();
        assert_eq!(reader.into_bytes().unwrap(), b"aaabbbccc");
    }

    #[test]
    fn nested_chunks_are_depth_first() {
        let dag = dag();
        let leaf = dag.put(&DagNode::file(b"2".to_vec())).unwrap();
        let mut mid = DagNode::file(b"1".to_vec());
        mid.add_link(Link::new("", leaf));
        let mid_key = dag.put(&mid).unwrap();
        let tail = dag.put(&DagNode::file(b"3".to_vec())).unwrap();

        let mut root = DagNode::file(b"0".to_vec());
        root.add_link(Link::new("", mid_key));
        root.add_link(Link::new("", tail));

        let reader = DagReader::new(&dag, &root).unwrap();
        assert_eq!(reader.into_bytes().unwrap(), b"0123");
    }

    #[test]
    fn directory_is_not_readable() {
        let dag = dag();
        let node = DagNode::directory(Vec::new());
        let err = DagReader::new(&dag, &node).unwrap_err();
        assert!(matches!(err, DagError::NotAFile(_)));
    }

    #[test]
    fn missing_chunk_surfaces_not_found() {
        let dag = dag();
        let mut root = DagNode::file(b"head".to_vec());
        root.add_link(Link::new("", ContentKey::hash_bytes(b"never stored")));

        let reader = DagReader::new(&dag, &root).unwrap();
        let err = reader.into_bytes().unwrap_err();
        assert!(matches!(err, DagError::NotFound(_)));
    }

    #[test]
    fn read_trait_respects_small_buffers() {
        let dag = dag();
        let chunk = dag.put(&DagNode::file(b"world".to_vec())).unwrap();
        let mut root = DagNode::file(b"hello ".to_vec());
        root.add_link(Link::new("", chunk));

        let mut reader = DagReader::new(&dag, &root).unwrap();
        let mut out = Vec::new();
        let mut buf = [0u8; 4];
        loop {
            let n = reader.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            out.extend_from_slice(&buf[..n]);
        }
        assert_eq!(out, b"hello world");
    }

    #[test]
    fn empty_interior_chunks_are_skipped() {
        let dag = dag();
        let empty = dag.put(&DagNode::file(Vec::new())).unwrap();
        let tail = dag.put(&DagNode::file(b"end".to_vec())).unwrap();
        let mut root = DagNode::file(Vec::new());
        root.add_link(Link::new("", empty));
        root.add_link(Link::new("", tail));

        let reader = DagReader::new(&dag, &root).unwrap();
        assert_eq!(reader.into_bytes().unwrap(), b"end");
    }
}
