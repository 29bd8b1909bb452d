//! The uniform string command surface.
//!
//! Callers hand the gateway a command name plus positional string
//! parameters — the same shape for retrieval and ingestion. Results come
//! back typed ([`GetOutput`]) on the get side and as external hex on the
//! push side.

use std::path::Path;
use std::sync::mpsc::Receiver;

use hashgate_store::BlockStore;
use hashgate_types::{CodecError, ExternalRootedPath};

use crate::error::{GatewayError, GatewayResult};
use crate::gateway::{Gateway, ObjectContent};
use crate::stream::StreamChunk;
use crate::tree::FsTree;

/// Result of a get-side command.
#[derive(Debug)]
pub enum GetOutput {
    /// Raw bytes (`block`, `file`, or `object` over a file node).
    Bytes(Vec<u8>),
    /// A reconstructed tree (`tree`, or `object` over a directory node).
    Tree(FsTree),
    /// A live chunk stream (`stream`).
    Stream(Receiver<StreamChunk>),
}

impl<S: BlockStore + 'static> Gateway<S> {
    /// Dispatch a retrieval command: `block`, `file`, `stream`, `tree`,
    /// or `object`.
    pub fn get(&self, cmd: &str, params: &[&str]) -> GatewayResult<GetOutput> {
        match cmd {
            "block" => {
                let hash = required(params, 0, cmd)?;
                Ok(GetOutput::Bytes(self.block(hash)?))
            }
            "file" => {
                let path = parse_path(required(params, 0, cmd)?)?;
                Ok(GetOutput::Bytes(self.file(&path)?))
            }
            "stream" => {
                let path = parse_path(required(params, 0, cmd)?)?;
                Ok(GetOutput::Stream(self.stream(&path)?))
            }
            "tree" => {
                let path = parse_path(required(params, 0, cmd)?)?;
                let depth = match params.get(1) {
                    Some(raw) => parse_depth(raw)?,
                    None => None,
                };
                Ok(GetOutput::Tree(self.tree(&path, depth)?))
            }
            "object" => {
                let path = parse_path(required(params, 0, cmd)?)?;
                match self.object(&path)? {
                    ObjectContent::Bytes(bytes) => Ok(GetOutput::Bytes(bytes)),
                    ObjectContent::Tree(tree) => Ok(GetOutput::Tree(tree)),
                }
            }
            other => Err(GatewayError::InvalidCommand(other.to_string())),
        }
    }

    /// Dispatch an ingestion command: `block`, `file`, or `tree`.
    /// Returns the resulting root hash in the external hex encoding.
    pub fn push(&self, cmd: &str, params: &[&str]) -> GatewayResult<String> {
        match cmd {
            "block" => {
                let raw = required(params, 0, cmd)?;
                let data = hex::decode(raw.strip_prefix("0x").unwrap_or(raw))
                    .map_err(|e| CodecError::InvalidHex(e.to_string()))?;
                Ok(self.push_block(&data)?.to_external())
            }
            "file" => {
                let path = required(params, 0, cmd)?;
                Ok(self.push_file(Path::new(path))?.to_external())
            }
            "tree" => {
                let path = required(params, 0, cmd)?;
                let depth = match params.get(1) {
                    Some(raw) => parse_depth(raw)?,
                    None => None,
                };
                Ok(self.push_tree(Path::new(path), depth)?.to_external())
            }
            other => Err(GatewayError::InvalidCommand(other.to_string())),
        }
    }
}

fn required<'a>(params: &[&'a str], index: usize, cmd: &str) -> GatewayResult<&'a str> {
    params.get(index).copied().ok_or_else(|| {
        GatewayError::InvalidCommand(format!("'{cmd}' needs at least {} parameter(s)", index + 1))
    })
}

fn parse_path(raw: &str) -> GatewayResult<ExternalRootedPath> {
    Ok(ExternalRootedPath::parse(raw)?)
}

/// Depth comes in as a signed decimal string; any negative value means
/// unbounded.
fn parse_depth(raw: &str) -> GatewayResult<Option<usize>> {
    let value: i64 = raw
        .parse()
        .map_err(|_| GatewayError::InvalidCommand(format!("bad depth '{raw}'")))?;
    if value < 0 {
        Ok(None)
    } else {
        Ok(Some(value as usize))
    }
}
