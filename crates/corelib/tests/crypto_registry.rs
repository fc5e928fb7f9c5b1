use edhash_corelib::crypto::registry::{hash_by_id, one_shot_by_id, supported_ids, AnyContext};
use edhash_corelib::errors::HashError;
use edhash_corelib::DIGEST_LEN;

#[test]
fn registry_known_ids() {
    for id in supported_ids() {
        let digest = hash_by_id(id, "LBL", b"data").expect("supported id");
        assert_eq!(digest.len(), DIGEST_LEN);
    }
}

#[test]
fn registry_unknown_id_none() {
    assert!(one_shot_by_id("unknown", b"data").is_none());
    assert!(matches!(
        AnyContext::by_id("unknown"),
        Err(HashError::UnknownHash(_))
    ));
}

#[test]
fn any_context_streams_like_one_shot() {
    for id in supported_ids() {
        let mut ctx = AnyContext::by_id(id).unwrap();
        ctx.update(b"a");
        ctx.update(b"");
        ctx.update(b"bc");
        assert_eq!(Some(ctx.finalize()), one_shot_by_id(id, b"abc"), "{id}");
    }
}
