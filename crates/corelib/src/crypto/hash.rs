//! Generic hash trait.

/// Digest length, in bytes, required by ed25519-family signature schemes.
pub const DIGEST_LEN: usize = 64;

/// A streaming hash primitive with fixed-size 64-byte digests.
/// Implemented by BLAKE2b-512, SHA-512, SHA3-512 and BLAKE3 (XOF mode).
///
/// Signature code never calls this directly; it goes through
/// [`HashContext`](crate::crypto::adapter::HashContext).
pub trait Hash64 {
    /// Stable lowercase identifier used by the registry and config files.
    const ID: &'static str;

    /// Create a hasher configured for a 64-byte digest.
    fn new() -> Self
    where
        Self: Sized;
    /// Absorb bytes into the state.
    fn update(&mut self, data: &[u8]);
    /// Finalize and produce a 64-byte digest.
    fn finalize(self) -> [u8; DIGEST_LEN];
}
