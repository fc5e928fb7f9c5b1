//! BLAKE3 in extendable-output mode, truncated to 64 bytes, as Hash64.

use crate::crypto::hash::{Hash64, DIGEST_LEN};

pub struct Blake3Xof {
    inner: blake3::Hasher,
}

impl Hash64 for Blake3Xof {
    const ID: &'static str = "blake3-xof";

    fn new() -> Self {
        Self {
            inner: blake3::Hasher::new(),
        }
    }

    fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    fn finalize(self) -> [u8; DIGEST_LEN] {
        let mut out = [0u8; DIGEST_LEN];
        self.inner.finalize_xof().fill(&mut out);
        out
    }
}
