//! C ABI for the ed25519 hash adapter.
//!
//! Mirrors the classic `ed25519-hash-custom.h` entry points, with two
//! differences: contexts are allocated by Rust and stay opaque to C, and
//! every call returns an [`ErrorCode`]. Calls that would be undefined in C
//! (update or final on a context that is not initialized, a second final)
//! return `EDH_ERR_INVALID_STATE` and leave the output untouched.

mod error;
mod ffi_json;

use std::ffi::{c_char, CStr, CString};

use edhash_corelib::crypto::registry::{AnyContext, DEFAULT_HASH_ID};
use edhash_corelib::DIGEST_LEN;
use log::debug;

pub use error::{
    ErrorCode, EDH_ERR_INTERNAL, EDH_ERR_INVALID_ARG, EDH_ERR_INVALID_STATE,
    EDH_ERR_UNKNOWN_HASH, EDH_OK,
};
pub use ffi_json::{err, ok, with_field, Envelope};

/// Opaque hashing session handed to C callers.
pub struct Ed25519HashContext {
    hash_id: &'static str,
    active: Option<AnyContext>,
}

impl Ed25519HashContext {
    fn fresh(&self) -> Result<AnyContext, ErrorCode> {
        AnyContext::by_id(self.hash_id).map_err(|_| ErrorCode::Internal)
    }
}

/// Allocate an uninitialized context bound to BLAKE2b-512.
/// Release it with [`ed25519_hash_context_free`].
#[no_mangle]
pub extern "C" fn ed25519_hash_context_new() -> *mut Ed25519HashContext {
    Box::into_raw(Box::new(Ed25519HashContext {
        hash_id: DEFAULT_HASH_ID,
        active: None,
    }))
}

/// Allocate an uninitialized context bound to the primitive named `id`.
///
/// # Safety
/// `id` must be a NUL-terminated string and `out` a valid pointer.
#[no_mangle]
pub unsafe extern "C" fn edhash_context_new_by_id(
    id: *const c_char,
    out: *mut *mut Ed25519HashContext,
) -> i32 {
    if id.is_null() || out.is_null() {
        return EDH_ERR_INVALID_ARG;
    }
    let Ok(id) = CStr::from_ptr(id).to_str() else {
        return EDH_ERR_INVALID_ARG;
    };
    let hash_id = match AnyContext::by_id(id) {
        Ok(ctx) => ctx.id(),
        Err(_) => return EDH_ERR_UNKNOWN_HASH,
    };
    *out = Box::into_raw(Box::new(Ed25519HashContext {
        hash_id,
        active: None,
    }));
    EDH_OK
}

/// # Safety
/// `ctx` must come from this library and not have been freed. Null is a no-op.
#[no_mangle]
pub unsafe extern "C" fn ed25519_hash_context_free(ctx: *mut Ed25519HashContext) {
    if !ctx.is_null() {
        drop(Box::from_raw(ctx));
    }
}

/// (Re)start a hashing session. Any unfinished session is discarded.
///
/// # Safety
/// `ctx` must be a live context from this library.
#[no_mangle]
pub unsafe extern "C" fn ed25519_hash_init(ctx: *mut Ed25519HashContext) -> i32 {
    let Some(ctx) = ctx.as_mut() else {
        return EDH_ERR_INVALID_ARG;
    };
    match ctx.fresh() {
        Ok(fresh) => {
            ctx.active = Some(fresh);
            EDH_OK
        }
        Err(code) => code.code(),
    }
}

/// # Safety
/// `ctx` must be a live context; `data` must point to `len` readable bytes
/// (it may be null when `len` is 0).
#[no_mangle]
pub unsafe extern "C" fn ed25519_hash_update(
    ctx: *mut Ed25519HashContext,
    data: *const u8,
    len: usize,
) -> i32 {
    let Some(ctx) = ctx.as_mut() else {
        return EDH_ERR_INVALID_ARG;
    };
    let Some(active) = ctx.active.as_mut() else {
        debug!("ed25519_hash_update on a context that is not initialized");
        return EDH_ERR_INVALID_STATE;
    };
    match input(data, len) {
        Some(bytes) => {
            active.update(bytes);
            EDH_OK
        }
        None => EDH_ERR_INVALID_ARG,
    }
}

/// Write the 64-byte digest to `out` and end the session.
///
/// # Safety
/// `ctx` must be a live context; `out` must point to 64 writable bytes.
#[no_mangle]
pub unsafe extern "C" fn ed25519_hash_final(ctx: *mut Ed25519HashContext, out: *mut u8) -> i32 {
    let Some(ctx) = ctx.as_mut() else {
        return EDH_ERR_INVALID_ARG;
    };
    if out.is_null() {
        return EDH_ERR_INVALID_ARG;
    }
    let Some(active) = ctx.active.take() else {
        debug!("ed25519_hash_final on a context that is not initialized");
        return EDH_ERR_INVALID_STATE;
    };
    active.finalize_into(std::slice::from_raw_parts_mut(out, DIGEST_LEN));
    EDH_OK
}

/// One-shot BLAKE2b-512 digest of `data[..len]` into `out[..64]`.
///
/// # Safety
/// `out` must point to 64 writable bytes; `data` to `len` readable bytes
/// (it may be null when `len` is 0).
#[no_mangle]
pub unsafe extern "C" fn ed25519_hash(out: *mut u8, data: *const u8, len: usize) -> i32 {
    if out.is_null() {
        return EDH_ERR_INVALID_ARG;
    }
    let Some(bytes) = input(data, len) else {
        return EDH_ERR_INVALID_ARG;
    };
    let Ok(mut ctx) = AnyContext::by_id(DEFAULT_HASH_ID) else {
        return EDH_ERR_INTERNAL;
    };
    ctx.update(bytes);
    ctx.finalize_into(std::slice::from_raw_parts_mut(out, DIGEST_LEN));
    EDH_OK
}

/// JSON envelope `{"ok":true,"code":0,"msg":"OK","hashes":[...]}`.
/// Release it with [`edhash_string_free`].
#[no_mangle]
pub extern "C" fn edhash_hashes_json() -> *mut c_char {
    with_field(ok(), "hashes", edhash_corelib::list_hashes())
        .into_cstring()
        .into_raw()
}

/// # Safety
/// `s` must come from this library and not have been freed. Null is a no-op.
#[no_mangle]
pub unsafe extern "C" fn edhash_string_free(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

unsafe fn input<'a>(data: *const u8, len: usize) -> Option<&'a [u8]> {
    if len == 0 {
        return Some(&[]);
    }
    if data.is_null() {
        return None;
    }
    Some(std::slice::from_raw_parts(data, len))
}
