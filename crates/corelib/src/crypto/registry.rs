//! String-id -> Hash64 mapping and run-time selected contexts.

use log::debug;

use crate::crypto::adapter::HashContext;
use crate::crypto::blake2b::Blake2b512;
use crate::crypto::blake3::Blake3Xof;
use crate::crypto::hash::{Hash64, DIGEST_LEN};
use crate::crypto::sha3::Sha3_512;
use crate::crypto::sha512::Sha512;
use crate::errors::HashError;

// Centralized signing-hash policy: ed25519-blake2b unless configured otherwise.
pub const DEFAULT_HASH_ID: &str = Blake2b512::ID;

const SUPPORTED_IDS: [&str; 4] = [Blake2b512::ID, Sha512::ID, Sha3_512::ID, Blake3Xof::ID];

fn normalize(id: &str) -> String {
    id.trim().to_ascii_lowercase()
}

/// Ids accepted by [`AnyContext::by_id`] and config files.
pub fn supported_ids() -> &'static [&'static str] {
    &SUPPORTED_IDS
}

/// A [`HashContext`] whose primitive is picked at run time.
#[derive(Debug)]
pub enum AnyContext {
    Blake2b512(HashContext<Blake2b512>),
    Sha512(HashContext<Sha512>),
    Sha3_512(HashContext<Sha3_512>),
    Blake3Xof(HashContext<Blake3Xof>),
}

impl AnyContext {
    /// Initialize a context for `id`.
    ///
    /// Supported ids: "blake2b512", "sha512", "sha3-512", "blake3-xof".
    pub fn by_id(id: &str) -> Result<Self, HashError> {
        let ctx = match normalize(id).as_str() {
            "blake2b512" => Self::Blake2b512(HashContext::initialize()),
            "sha512" => Self::Sha512(HashContext::initialize()),
            "sha3-512" => Self::Sha3_512(HashContext::initialize()),
            "blake3-xof" => Self::Blake3Xof(HashContext::initialize()),
            _ => {
                debug!("rejected hash id '{id}'");
                return Err(HashError::UnknownHash(id.to_string()));
            }
        };
        Ok(ctx)
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Blake2b512(_) => Blake2b512::ID,
            Self::Sha512(_) => Sha512::ID,
            Self::Sha3_512(_) => Sha3_512::ID,
            Self::Blake3Xof(_) => Blake3Xof::ID,
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        match self {
            Self::Blake2b512(ctx) => ctx.update(data),
            Self::Sha512(ctx) => ctx.update(data),
            Self::Sha3_512(ctx) => ctx.update(data),
            Self::Blake3Xof(ctx) => ctx.update(data),
        }
    }

    pub fn finalize(self) -> [u8; DIGEST_LEN] {
        match self {
            Self::Blake2b512(ctx) => ctx.finalize(),
            Self::Sha512(ctx) => ctx.finalize(),
            Self::Sha3_512(ctx) => ctx.finalize(),
            Self::Blake3Xof(ctx) => ctx.finalize(),
        }
    }

    /// # Panics
    /// If `out` is shorter than [`DIGEST_LEN`].
    pub fn finalize_into(self, out: &mut [u8]) {
        match self {
            Self::Blake2b512(ctx) => ctx.finalize_into(out),
            Self::Sha512(ctx) => ctx.finalize_into(out),
            Self::Sha3_512(ctx) => ctx.finalize_into(out),
            Self::Blake3Xof(ctx) => ctx.finalize_into(out),
        }
    }
}

/// One-shot digest of `data` for the given hash id.
pub fn one_shot_by_id(id: &str, data: &[u8]) -> Option<[u8; DIGEST_LEN]> {
    let mut ctx = AnyContext::by_id(id).ok()?;
    ctx.update(data);
    Some(ctx.finalize())
}

/// Return H(label || data) for the given hash id.
pub fn hash_by_id(id: &str, label: &str, data: &[u8]) -> Option<[u8; DIGEST_LEN]> {
    let mut ctx = AnyContext::by_id(id).ok()?;
    ctx.update(label.as_bytes());
    ctx.update(data);
    Some(ctx.finalize())
}
