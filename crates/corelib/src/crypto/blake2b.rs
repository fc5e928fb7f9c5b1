//! BLAKE2b with a 64-byte digest as Hash64.
//! This is the primitive the ed25519-blake2b flavour is built on.

use crate::crypto::hash::{Hash64, DIGEST_LEN};
use blake2::{Blake2b512 as Inner, Digest};

pub struct Blake2b512 {
    inner: Inner,
}

impl Hash64 for Blake2b512 {
    const ID: &'static str = "blake2b512";

    fn new() -> Self {
        // Output length is a type parameter of `Blake2b<U64>`, so a
        // misconfigured digest size cannot be constructed.
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::adapter::{hash_labeled, one_shot};

    // BLAKE2b-512("") from RFC 7693 reference outputs.
    #[test]
    fn blake2b512_empty() {
        let got = one_shot::<Blake2b512>(b"");
        let exp = hex::decode(
            "786a02f742015903c6c6fd852552d272912f4740e15847618a86e217f71f5419\
             d25e1031afee585313896444934eb04b903a685b1448b755d56f701afe9be2ce",
        )
        .unwrap();
        assert_eq!(got.as_slice(), exp.as_slice());
    }

    #[test]
    fn blake2b512_label_changes_output() {
        let plain = one_shot::<Blake2b512>(b"abc");
        let labeled = hash_labeled::<Blake2b512>("LBL", b"abc");
        assert_ne!(plain, labeled);
    }
}
