use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CodecError, CodecResult};

/// BLAKE3 multicodec identifier, first byte of the wire framing.
pub const BLAKE3_CODE: u8 = 0x1e;

/// Digest length in bytes. Every supported key carries a 32-byte digest.
pub const DIGEST_LEN: usize = 32;

/// Total length of the self-describing wire form: code + length + digest.
pub const WIRE_LEN: usize = 2 + DIGEST_LEN;

/// Content-addressed key for any stored block or node.
///
/// A `ContentKey` is the BLAKE3 digest of an object's bytes. It has two
/// encodings:
///
/// - *Internal* — the self-describing multihash framing used by the block
///   store: `[0x1e, 0x20, digest…]`, rendered as base58 in string form.
/// - *External* — the bare digest hex-encoded with a `0x` prefix, as the
///   calling ledger layer stores hashes.
///
/// Conversion between the two is a lossless bijection over valid digests.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContentKey([u8; DIGEST_LEN]);

impl ContentKey {
    /// Compute a key from raw bytes.
    pub fn hash_bytes(data: &[u8]) -> Self {
        Self(*blake3::hash(data).as_bytes())
    }

    /// Create a key from a pre-computed digest.
    pub fn from_digest(digest: [u8; DIGEST_LEN]) -> Self {
        Self(digest)
    }

    /// The raw 32-byte digest.
    pub fn digest(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Short hex form of the digest (first 8 characters), for log output.
    pub fn short(&self) -> String {
        hex::encode(&self.0[..4])
    }

    // -- internal (multihash) encoding --------------------------------------

    /// The self-describing wire form: multicodec byte, digest length, digest.
    pub fn to_multihash_bytes(&self) -> Vec<u8> {
        let mut wire = Vec::with_capacity(WIRE_LEN);
        wire.push(BLAKE3_CODE);
        wire.push(DIGEST_LEN as u8);
        wire.extend_from_slice(&self.0);
        wire
    }

    /// Parse the self-describing wire form, validating the framing.
    pub fn from_multihash_bytes(wire: &[u8]) -> CodecResult<Self> {
        if wire.len() != WIRE_LEN {
            return Err(CodecError::MalformedKey(format!(
                "expected {WIRE_LEN} wire bytes, got {}",
                wire.len()
            )));
        }
        if wire[0] != BLAKE3_CODE {
            return Err(CodecError::MalformedKey(format!(
                "unsupported multicodec 0x{:02x}",
                wire[0]
            )));
        }
        if wire[1] as usize != DIGEST_LEN {
            return Err(CodecError::MalformedKey(format!(
                "declared digest length {} does not match {DIGEST_LEN}",
                wire[1]
            )));
        }
        let mut digest = [0u8; DIGEST_LEN];
        digest.copy_from_slice(&wire[2..]);
        Ok(Self(digest))
    }

    /// Base58 rendering of the wire form — the store's string representation.
    pub fn to_base58(&self) -> String {
        bs58::encode(self.to_multihash_bytes()).into_string()
    }

    /// Parse the base58 string representation.
    pub fn from_base58(s: &str) -> CodecResult<Self> {
        let wire = bs58::decode(s)
            .into_vec()
            .map_err(|e| CodecError::InvalidBase58(e.to_string()))?;
        Self::from_multihash_bytes(&wire)
    }

    // -- external (hex) encoding --------------------------------------------

    /// Hex rendering of the bare digest with a `0x` prefix — the encoding
    /// used by the calling ledger layer.
    pub fn to_external(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Parse the external hex encoding. A leading `0x` is optional.
    pub fn from_external(s: &str) -> CodecResult<Self> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(stripped).map_err(|e| CodecError::InvalidHex(e.to_string()))?;
        if bytes.len() != DIGEST_LEN {
            return Err(CodecError::InvalidLength {
                expected: DIGEST_LEN,
                actual: bytes.len(),
            });
        }
        let mut digest = [0u8; DIGEST_LEN];
        digest.copy_from_slice(&bytes);
        Ok(Self(digest))
    }
}

impl fmt::Debug for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentKey({})", self.short())
    }
}

impl fmt::Display for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base58())
    }
}

impl From<[u8; DIGEST_LEN]> for ContentKey {
    fn from(digest: [u8; DIGEST_LEN]) -> Self {
        Self(digest)
    }
}

impl From<ContentKey> for [u8; DIGEST_LEN] {
    fn from(key: ContentKey) -> Self {
        key.0
    }
}

/// Convert an external hex hash to the store's base58 string form.
pub fn external_to_internal(hex_str: &str) -> CodecResult<String> {
    Ok(ContentKey::from_external(hex_str)?.to_base58())
}

/// Convert a base58 store key to the external `0x`-prefixed hex form.
pub fn internal_to_external(b58: &str) -> CodecResult<String> {
    Ok(ContentKey::from_base58(b58)?.to_external())
}
