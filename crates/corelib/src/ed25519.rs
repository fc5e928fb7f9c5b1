//! ed25519 keyed to a pluggable 64-byte hash.
//!
//! Curve arithmetic comes from `ed25519-dalek`'s hazmat API; this module only
//! routes every internal hash (seed expansion, nonce, challenge) through a
//! [`HashContext`]. `Ed25519<Sha512>` is plain RFC 8032 ed25519,
//! `Ed25519<Blake2b512>` is the ed25519-blake2b variant.

use std::marker::PhantomData;

use ed25519_dalek::hazmat::{raw_sign, raw_verify, ExpandedSecretKey};
use ed25519_dalek::{Signature, VerifyingKey};
use log::trace;

use crate::crypto::adapter::{one_shot, HashContext};
use crate::crypto::blake2b::Blake2b512;
use crate::crypto::hash::Hash64;
use crate::crypto::sha512::Sha512;
use crate::errors::SignatureError;

pub const SECRET_KEY_LEN: usize = 32;
pub const PUBLIC_KEY_LEN: usize = 32;
pub const SIGNATURE_LEN: usize = 64;

pub struct Ed25519<H: Hash64>(PhantomData<H>);

pub type Ed25519Blake2b = Ed25519<Blake2b512>;
pub type Ed25519Sha512 = Ed25519<Sha512>;

impl<H: Hash64> Ed25519<H> {
    fn expand(secret: &[u8; SECRET_KEY_LEN]) -> ExpandedSecretKey {
        ExpandedSecretKey::from_bytes(&one_shot::<H>(secret))
    }

    /// Derive the compressed public key for a 32-byte secret seed.
    pub fn public_key(secret: &[u8; SECRET_KEY_LEN]) -> [u8; PUBLIC_KEY_LEN] {
        VerifyingKey::from(&Self::expand(secret)).to_bytes()
    }

    pub fn sign(secret: &[u8; SECRET_KEY_LEN], message: &[u8]) -> [u8; SIGNATURE_LEN] {
        let esk = Self::expand(secret);
        let vk = VerifyingKey::from(&esk);
        trace!("signing {} bytes with ed25519/{}", message.len(), H::ID);
        raw_sign::<HashContext<H>>(&esk, message, &vk).to_bytes()
    }

    pub fn verify(
        public: &[u8; PUBLIC_KEY_LEN],
        message: &[u8],
        signature: &[u8; SIGNATURE_LEN],
    ) -> Result<(), SignatureError> {
        let vk = VerifyingKey::from_bytes(public).map_err(SignatureError::InvalidPublicKey)?;
        let sig = Signature::from_bytes(signature);
        raw_verify::<HashContext<H>>(&vk, message, &sig).map_err(SignatureError::Mismatch)
    }
}
