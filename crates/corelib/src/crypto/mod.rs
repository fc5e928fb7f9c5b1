//! Crypto primitives surface area.
//! A 64-byte streaming hash trait, the context adapter handed to signature
//! code, four primitive bindings, and run-time selection by id.

pub mod adapter;
pub mod blake2b;
pub mod blake3;
pub mod hash;
pub mod registry;
pub mod sha3;
pub mod sha512;
