//! SHA-512 as Hash64, the hash ed25519 is specified with (RFC 8032).

use crate::crypto::hash::{Hash64, DIGEST_LEN};
use sha2::{Digest, Sha512 as Inner};

pub struct Sha512 {
    inner: Inner,
}

impl Hash64 for Sha512 {
    const ID: &'static str = "sha512";

    fn new() -> Self {
        Self {
            inner: Inner::new(),
        }
    }

    fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    fn finalize(self) -> [u8; DIGEST_LEN] {
        let mut out = [0u8; DIGEST_LEN];
        out.copy_from_slice(&self.inner.finalize());
        out
    }
}
