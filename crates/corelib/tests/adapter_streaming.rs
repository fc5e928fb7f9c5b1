use edhash_corelib::crypto::adapter::{one_shot, one_shot_into, HashContext};
use edhash_corelib::crypto::blake2b::Blake2b512;
use edhash_corelib::crypto::blake3::Blake3Xof;
use edhash_corelib::crypto::hash::{Hash64, DIGEST_LEN};
use edhash_corelib::crypto::sha3::Sha3_512;
use edhash_corelib::crypto::sha512::Sha512;

// Lengths around the 128-byte (BLAKE2b, SHA-512), 72-byte (SHA3-512) and
// 64-byte/1024-byte (BLAKE3) block and chunk boundaries.
const LENGTHS: [usize; 12] = [0, 1, 63, 64, 65, 71, 72, 127, 128, 129, 1024, 1025];

fn message(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i as u8).wrapping_mul(167) ^ 0x5c).collect()
}

fn check_splits<H: Hash64>() {
    for len in LENGTHS {
        let msg = message(len);
        let whole = one_shot::<H>(&msg);
        let mut manual = HashContext::<H>::initialize();
        manual.update(&msg);
        assert_eq!(manual.finalize(), whole, "{} len {len}", H::ID);

        for cut in [0, len / 3, len / 2, len.saturating_sub(1), len] {
            let (a, b) = msg.split_at(cut);
            let mut ctx = HashContext::<H>::initialize();
            ctx.update(a);
            ctx.update(b);
            assert_eq!(ctx.finalize(), whole, "{} len {len} cut {cut}", H::ID);
        }
    }
}

fn check_byte_at_a_time<H: Hash64>() {
    let msg = message(300);
    let mut ctx = HashContext::<H>::initialize();
    for b in &msg {
        ctx.update(std::slice::from_ref(b));
    }
    assert_eq!(ctx.finalize(), one_shot::<H>(&msg), "{}", H::ID);
}

#[test]
fn chunking_is_invisible_for_every_primitive() {
    check_splits::<Blake2b512>();
    check_splits::<Sha512>();
    check_splits::<Sha3_512>();
    check_splits::<Blake3Xof>();
}

#[test]
fn byte_at_a_time_matches_one_shot() {
    check_byte_at_a_time::<Blake2b512>();
    check_byte_at_a_time::<Sha512>();
    check_byte_at_a_time::<Sha3_512>();
    check_byte_at_a_time::<Blake3Xof>();
}

#[test]
fn one_shot_into_matches_one_shot() {
    let msg = message(200);
    let mut out = [0u8; DIGEST_LEN];
    one_shot_into::<Blake2b512>(&msg, &mut out);
    assert_eq!(out, one_shot::<Blake2b512>(&msg));
}

#[test]
#[should_panic(expected = "need 64")]
fn one_shot_into_rejects_short_buffer() {
    let mut out = [0u8; 32];
    one_shot_into::<Sha512>(b"abc", &mut out);
}

#[test]
fn distinct_contexts_run_concurrently() {
    let handles: Vec<_> = (0..4usize)
        .map(|t| {
            std::thread::spawn(move || {
                let msg = message(500 + t);
                let mut ctx = HashContext::<Blake2b512>::initialize();
                for chunk in msg.chunks(7) {
                    ctx.update(chunk);
                }
                (ctx.finalize(), one_shot::<Blake2b512>(&msg))
            })
        })
        .collect();
    for h in handles {
        let (streamed, whole) = h.join().unwrap();
        assert_eq!(streamed, whole);
    }
}
