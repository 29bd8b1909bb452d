//! Chunked streaming retrieval.
//!
//! Each stream runs exactly one background worker that reads the node's
//! linearized content in bounded chunks and sends them, in order, over a
//! rendezvous channel. The channel closing is the termination signal; a
//! mid-stream failure is delivered in-band as one final `Err` item before
//! the close, so consumers can distinguish completion from fault.

use std::io::Read;
use std::sync::mpsc::{sync_channel, Receiver};
use std::thread;

use hashgate_dag::{DagNode, DagReader, DagStore};
use tracing::warn;

/// One item of a chunk stream: payload bytes, or the terminal fault.
pub type StreamChunk = Result<Vec<u8>, StreamFault>;

/// A read failure that ended a stream early.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("stream fault: {0}")]
pub struct StreamFault(pub String);

/// Spawn the producer worker for one stream.
///
/// Chunks are at most `chunk_size` bytes; only the last may be shorter, and
/// empty chunks are never sent. The worker stops when the content is
/// exhausted, a read fails, or the consumer drops the receiver (the failed
/// send stops the producer, so an abandoned stream does not leak the thread).
pub fn spawn_stream<D>(dag: D, node: DagNode, chunk_size: usize) -> Receiver<StreamChunk>
where
    D: DagStore + Send + 'static,
{
    let (tx, rx) = sync_channel::<StreamChunk>(0);

    thread::spawn(move || {
        let mut reader = match DagReader::new(&dag, &node) {
            Ok(reader) => reader,
            Err(e) => {
                warn!(error = %e, "stream setup failed in worker");
                let _ = tx.send(Err(StreamFault(e.to_string())));
                return;
            }
        };

        loop {
            let mut buf = vec![0u8; chunk_size];
            match fill(&mut reader, &mut buf) {
                Ok(0) => break,
                Ok(n) => {
                    buf.truncate(n);
                    if tx.send(Ok(buf)).is_err() {
                        // Consumer hung up; nothing left to deliver to.
                        break;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "stream read failed");
                    let _ = tx.send(Err(StreamFault(e.to_string())));
                    break;
                }
            }
        }
        // tx drops here; channel closure is the termination signal.
    });

    rx
}

/// Read until `buf` is full or end-of-input.
fn fill<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = reader.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashgate_dag::{BlockDagStore, Link};
    use hashgate_store::InMemoryBlockStore;
    use hashgate_types::ContentKey;
    use std::sync::Arc;

    fn dag() -> BlockDagStore<InMemoryBlockStore> {
        BlockDagStore::new(Arc::new(InMemoryBlockStore::new()))
    }

    fn collect(rx: Receiver<StreamChunk>) -> Vec<StreamChunk> {
        rx.iter().collect()
    }

    #[test]
    fn empty_file_closes_without_chunks() {
        let rx = spawn_stream(dag(), DagNode::file(Vec::new()), 1024);
        assert!(collect(rx).is_empty());
    }

    #[test]
    fn chunk_sizes_are_bounded_and_ordered() {
        let node = DagNode::file(vec![7u8; 2500]);
        let rx = spawn_stream(dag(), node, 1024);

        let chunks = collect(rx);
        let sizes: Vec<usize> = chunks
            .iter()
            .map(|c| c.as_ref().expect("no fault expected").len())
            .collect();
        assert_eq!(sizes, [1024, 1024, 452]);
    }

    #[test]
    fn chunks_reassemble_the_content() {
        let body: Vec<u8> = (0..100u8).cycle().take(3000).collect();
        let rx = spawn_stream(dag(), DagNode::file(body.clone()), 256);

        let mut out = Vec::new();
        for chunk in rx {
            out.extend_from_slice(&chunk.expect("no fault expected"));
        }
        assert_eq!(out, body);
    }

    #[test]
    fn chunking_spans_linked_nodes() {
        let dag = dag();
        let c2 = dag.put(&DagNode::file(vec![2u8; 700])).unwrap();
        let mut root = DagNode::file(vec![1u8; 700]);
        root.add_link(Link::new("", c2));

        let rx = spawn_stream(dag, root, 1024);
        let sizes: Vec<usize> = collect(rx)
            .iter()
            .map(|c| c.as_ref().expect("no fault expected").len())
            .collect();
        // 1400 bytes total: a full chunk crossing the node boundary, then the rest.
        assert_eq!(sizes, [1024, 376]);
    }

    #[test]
    fn mid_stream_fault_is_final_item() {
        let dag = dag();
        let mut root = DagNode::file(vec![9u8; 2048]);
        root.add_link(Link::new("", ContentKey::hash_bytes(b"missing chunk")));

        let rx = spawn_stream(dag, root, 1024);
        let chunks = collect(rx);

        let (last, head) = chunks.split_last().expect("at least the fault");
        assert!(head.iter().all(|c| c.is_ok()));
        assert!(last.is_err());
    }

    #[test]
    fn dropped_receiver_stops_the_worker() {
        let rx = spawn_stream(dag(), DagNode::file(vec![0u8; 1 << 20]), 64);
        let first = rx.recv().expect("one chunk");
        assert_eq!(first.expect("no fault").len(), 64);
        drop(rx);
        // The worker's next send fails and it exits; nothing to assert beyond
        // not deadlocking here.
    }
}
