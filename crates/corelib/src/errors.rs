use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HashError {
    #[error("hash '{0}' is not supported")]
    UnknownHash(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Hash(#[from] HashError),
    #[error("chunk_size must be greater than zero")]
    ZeroChunkSize,
}

#[derive(Debug, Error)]
pub enum SignatureError {
    #[error("public key is not a valid curve point")]
    InvalidPublicKey(#[source] ed25519_dalek::SignatureError),
    #[error("signature does not verify")]
    Mismatch(#[source] ed25519_dalek::SignatureError),
}
