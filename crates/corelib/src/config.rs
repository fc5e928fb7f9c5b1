use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::crypto::registry::{AnyContext, DEFAULT_HASH_ID};
use crate::errors::{ConfigError, HashError};

pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// User/CLI-selected hashing configuration.
///
/// ```toml
/// hash = "blake2b512"
/// chunk_size = 65536
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub hash: String,      // e.g., "blake2b512"
    pub chunk_size: usize, // bytes per update() when streaming input
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hash: DEFAULT_HASH_ID.to_string(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl Config {
    pub fn new<S: Into<String>>(hash: S, chunk_size: usize) -> Self {
        Self {
            hash: hash.into(),
            chunk_size,
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Config = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = Self::from_toml_str(&text)?;
        debug!("loaded config from {}: {:?}", path.display(), cfg);
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        AnyContext::by_id(&self.hash)?;
        if self.chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }
        Ok(())
    }

    /// Fresh streaming context for the configured hash.
    pub fn context(&self) -> Result<AnyContext, HashError> {
        AnyContext::by_id(&self.hash)
    }
}
