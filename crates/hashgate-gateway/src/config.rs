use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GatewayError, GatewayResult};

/// Default streaming chunk size in bytes.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Configuration for a gateway instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Upper bound on each streamed chunk; the final chunk may be shorter.
    pub chunk_size: usize,
    /// Default depth bound for tree walks when the caller does not pass one.
    /// `None` walks the full subtree.
    pub max_walk_depth: Option<usize>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            max_walk_depth: None,
        }
    }
}

impl GatewayConfig {
    /// Read a config from a TOML file.
    pub fn load(path: &Path) -> GatewayResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| GatewayError::Config(e.to_string()))
    }

    /// Write the config to a TOML file.
    pub fn save(&self, path: &Path) -> GatewayResult<()> {
        let raw = toml::to_string_pretty(self).map_err(|e| GatewayError::Config(e.to_string()))?;
        std::fs::write(path, raw)?;
        Ok(())
    }
}
