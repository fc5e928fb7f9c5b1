//! Core library: the 64-byte hash adapter used by ed25519 signing, its
//! primitive bindings, and the API surface for CLI/FFI.

use once_cell::sync::Lazy;
use serde::Serialize;

pub mod config;
pub mod crypto;
pub mod ed25519;
pub mod errors;

pub use crypto::adapter::{hash_labeled, one_shot, one_shot_into, HashContext};
pub use crypto::hash::{Hash64, DIGEST_LEN};
pub use crypto::registry::AnyContext;

/// Public hash info returned by listing APIs
#[derive(Debug, Clone, Serialize)]
pub struct HashInfo {
    pub id: &'static str,
    pub digest_len: usize,
    pub description: &'static str,
}

static DEFAULT_HASHES: Lazy<Vec<HashInfo>> = Lazy::new(|| {
    use crypto::{blake2b::Blake2b512, blake3::Blake3Xof, sha3::Sha3_512, sha512::Sha512};

    vec![
        HashInfo {
            id: Blake2b512::ID,
            digest_len: DIGEST_LEN,
            description: "BLAKE2b, 64-byte digest (ed25519-blake2b)",
        },
        HashInfo {
            id: Sha512::ID,
            digest_len: DIGEST_LEN,
            description: "SHA-512 (RFC 8032 ed25519)",
        },
        HashInfo {
            id: Sha3_512::ID,
            digest_len: DIGEST_LEN,
            description: "SHA3-512",
        },
        HashInfo {
            id: Blake3Xof::ID,
            digest_len: DIGEST_LEN,
            description: "BLAKE3, first 64 bytes of XOF output",
        },
    ]
});

/// API: list available hash primitives
pub fn list_hashes() -> &'static [HashInfo] {
    DEFAULT_HASHES.as_slice()
}

/// Version helper for CLI
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
