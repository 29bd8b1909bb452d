use std::fmt;

use crate::error::CodecResult;
use crate::key::ContentKey;

/// A slash-delimited store path whose first segment is an external hex hash.
///
/// The leading-hash convention is a protocol rule, not a language feature, so
/// it is enforced here once: an `ExternalRootedPath` can only be built by
/// [`parse`], which decodes segment 0 as an external key and keeps the
/// remaining segments verbatim. The `Display` form is the resolved internal
/// path the store understands (`<base58-key>/seg1/seg2…`).
///
/// [`parse`]: ExternalRootedPath::parse
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExternalRootedPath {
    root: ContentKey,
    tail: Vec<String>,
}

impl ExternalRootedPath {
    /// Parse a caller-supplied path.
    ///
    /// A leading `/` is trimmed; segment 0 must be a valid external hex hash
    /// (with or without `0x`). Remaining segments pass through unchanged.
    pub fn parse(path: &str) -> CodecResult<Self> {
        let trimmed = path.trim_start_matches('/');
        let mut segments = trimmed.split('/');
        let head = segments.next().unwrap_or_default();
        let root = ContentKey::from_external(head)?;
        let tail = segments.map(str::to_owned).collect();
        Ok(Self { root, tail })
    }

    /// Build a path from an already-decoded root key.
    pub fn from_key(root: ContentKey) -> Self {
        Self {
            root,
            tail: Vec::new(),
        }
    }

    /// The decoded root key.
    pub fn root(&self) -> &ContentKey {
        &self.root
    }

    /// Traversal segments after the root, unchanged from the input.
    pub fn tail(&self) -> &[String] {
        &self.tail
    }

    /// The resolved internal path: base58 root key joined with the tail.
    ///
    /// A path with no tail resolves to just the key.
    pub fn resolved(&self) -> String {
        if self.tail.is_empty() {
            self.root.to_base58()
        } else {
            let mut out = self.root.to_base58();
            for segment in &self.tail {
                out.push('/');
                out.push_str(segment);
            }
            out
        }
    }
}

impl fmt::Display for ExternalRootedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.resolved())
    }
}

/// Rewrite a hex-rooted path into its internal form in one step.
pub fn resolve_path_prefix(path: &str) -> CodecResult<String> {
    Ok(ExternalRootedPath::parse(path)?.resolved())
}
