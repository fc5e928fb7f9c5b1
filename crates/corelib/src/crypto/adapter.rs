//! The streaming hash interface consumed by ed25519 signing code.
//!
//! A [`HashContext`] wraps exactly one [`Hash64`] state and forwards every
//! call to it unchanged, with the digest length pinned to [`DIGEST_LEN`].
//! The lifecycle is encoded in ownership:
//!
//! - [`HashContext::initialize`] is the only constructor, so an
//!   uninitialized context cannot be updated or finalized;
//! - [`HashContext::update`] borrows the active context mutably;
//! - [`HashContext::finalize`] consumes it, so a second finalize (or an
//!   update after finalize) is rejected by the compiler:
//!
//! ```compile_fail
//! use edhash_corelib::crypto::adapter::HashContext;
//! use edhash_corelib::crypto::blake2b::Blake2b512;
//!
//! let ctx = HashContext::<Blake2b512>::initialize();
//! let _first = ctx.finalize();
//! let _second = ctx.finalize();
//! ```
//!
//! Hashing again means initializing a fresh context.
//!
//! `HashContext` also implements the RustCrypto `digest` traits with a
//! 64-byte output, so it can be handed to any code generic over
//! `digest::Digest<OutputSize = U64>` (ed25519-dalek's hazmat API in
//! particular).

use std::fmt;

use digest::consts::U64;
use digest::{FixedOutput, HashMarker, Output, OutputSizeUser, Update};
use log::trace;

use crate::crypto::hash::{Hash64, DIGEST_LEN};

/// An active hashing session over primitive `H`.
pub struct HashContext<H: Hash64> {
    state: H,
}

impl<H: Hash64> HashContext<H> {
    /// Set up the primitive in 64-byte digest mode.
    pub fn initialize() -> Self {
        trace!("hash context initialized ({})", H::ID);
        Self { state: H::new() }
    }

    /// Absorb `data` exactly once, in call order. Empty input is allowed.
    pub fn update(&mut self, data: &[u8]) {
        self.state.update(data);
    }

    /// Complete the primitive's padding and return the digest.
    pub fn finalize(self) -> [u8; DIGEST_LEN] {
        trace!("hash context finalized ({})", H::ID);
        self.state.finalize()
    }

    /// Write the digest into `out[..DIGEST_LEN]`, leaving any tail untouched.
    ///
    /// # Panics
    /// If `out` is shorter than [`DIGEST_LEN`].
    pub fn finalize_into(self, out: &mut [u8]) {
        assert!(
            out.len() >= DIGEST_LEN,
            "digest buffer holds {} bytes, need {}",
            out.len(),
            DIGEST_LEN
        );
        out[..DIGEST_LEN].copy_from_slice(&self.finalize());
    }
}

impl<H: Hash64> fmt::Debug for HashContext<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashContext")
            .field("primitive", &H::ID)
            .finish_non_exhaustive()
    }
}

/// Hash `data` through a transient context.
pub fn one_shot<H: Hash64>(data: &[u8]) -> [u8; DIGEST_LEN] {
    let mut ctx = HashContext::<H>::initialize();
    ctx.update(data);
    ctx.finalize()
}

/// [`one_shot`] writing into a caller buffer.
///
/// # Panics
/// If `out` is shorter than [`DIGEST_LEN`].
pub fn one_shot_into<H: Hash64>(data: &[u8], out: &mut [u8]) {
    let mut ctx = HashContext::<H>::initialize();
    ctx.update(data);
    ctx.finalize_into(out);
}

/// Domain-separated hashing: H(label || data)
pub fn hash_labeled<H: Hash64>(label: &str, data: &[u8]) -> [u8; DIGEST_LEN] {
    let mut ctx = HashContext::<H>::initialize();
    ctx.update(label.as_bytes());
    ctx.update(data);
    ctx.finalize()
}

impl<H: Hash64> Default for HashContext<H> {
    fn default() -> Self {
        Self::initialize()
    }
}

impl<H: Hash64> OutputSizeUser for HashContext<H> {
    type OutputSize = U64;
}

impl<H: Hash64> Update for HashContext<H> {
    fn update(&mut self, data: &[u8]) {
        self.state.update(data);
    }
}

impl<H: Hash64> FixedOutput for HashContext<H> {
    fn finalize_into(self, out: &mut Output<Self>) {
        trace!("hash context finalized ({})", H::ID);
        out.copy_from_slice(&self.state.finalize());
    }
}

impl<H: Hash64> HashMarker for HashContext<H> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::blake2b::Blake2b512;
    use crate::crypto::sha512::Sha512;

    fn message(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i * 31 % 251) as u8).collect()
    }

    fn streamed<H: Hash64>(chunks: &[&[u8]]) -> [u8; DIGEST_LEN] {
        let mut ctx = HashContext::<H>::initialize();
        for chunk in chunks {
            ctx.update(chunk);
        }
        ctx.finalize()
    }

    #[test]
    fn no_updates_equals_empty_one_shot() {
        let ctx = HashContext::<Blake2b512>::initialize();
        assert_eq!(ctx.finalize(), one_shot::<Blake2b512>(b""));
    }

    #[test]
    fn every_split_point_matches_whole_message() {
        // 300 bytes crosses two 128-byte block boundaries.
        let msg = message(300);
        let whole = one_shot::<Blake2b512>(&msg);
        for cut in 0..=msg.len() {
            let (a, b) = msg.split_at(cut);
            assert_eq!(streamed::<Blake2b512>(&[a, b]), whole, "split at {cut}");
        }
    }

    #[test]
    fn empty_updates_are_neutral() {
        let msg = message(129);
        let (a, b) = msg.split_at(64);
        assert_eq!(
            streamed::<Sha512>(&[b"", a, b"", b"", b, b""]),
            one_shot::<Sha512>(&msg)
        );
    }

    #[test]
    fn reinitialized_context_starts_fresh() {
        let mut ctx = HashContext::<Blake2b512>::initialize();
        ctx.update(b"stale");
        let _ = ctx.finalize();

        let mut ctx = HashContext::<Blake2b512>::initialize();
        ctx.update(b"abc");
        assert_eq!(ctx.finalize(), one_shot::<Blake2b512>(b"abc"));
    }

    #[test]
    fn finalize_into_leaves_tail_untouched() {
        let mut buf = [0xAAu8; DIGEST_LEN + 8];
        one_shot_into::<Blake2b512>(b"abc", &mut buf);
        assert_eq!(buf[..DIGEST_LEN], one_shot::<Blake2b512>(b"abc"));
        assert_eq!(buf[DIGEST_LEN..], [0xAA; 8]);
    }

    #[test]
    #[should_panic(expected = "digest buffer holds 63 bytes")]
    fn finalize_into_rejects_short_buffer() {
        let mut buf = [0u8; DIGEST_LEN - 1];
        HashContext::<Blake2b512>::initialize().finalize_into(&mut buf);
    }

    #[test]
    fn digest_trait_matches_inherent_api() {
        use digest::Digest;

        let ctx = <HashContext<Blake2b512> as Digest>::new()
            .chain_update(b"ab")
            .chain_update(b"c");
        let via_trait = Digest::finalize(ctx);
        assert_eq!(via_trait.as_slice(), &one_shot::<Blake2b512>(b"abc")[..]);
        assert_eq!(<HashContext<Sha512> as Digest>::output_size(), DIGEST_LEN);
    }

    #[test]
    fn debug_does_not_expose_state() {
        let ctx = HashContext::<Blake2b512>::initialize();
        assert_eq!(
            format!("{ctx:?}"),
            "HashContext { primitive: \"blake2b512\", .. }"
        );
    }
}
