//! SHA3-512 (FIPS 202) as Hash64.

use crate::crypto::hash::{Hash64, DIGEST_LEN};
use tiny_keccak::{Hasher as TKHasher, Sha3};

pub struct Sha3_512 {
    inner: Sha3,
}

impl Hash64 for Sha3_512 {
    const ID: &'static str = "sha3-512";

    fn new() -> Self {
        Self {
            inner: Sha3::v512(),
        }
    }

    fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    fn finalize(self) -> [u8; DIGEST_LEN] {
        let mut out = [0u8; DIGEST_LEN];
        let inner = self.inner;
        inner.finalize(&mut out);
        out
    }
}
