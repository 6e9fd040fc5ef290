//! # Cryptographic Primitives
//!
//! The chain needs exactly one primitive: a 256-bit one-way hash. We use
//! SHA-256 from the audited `sha2` crate and wrap it so callers get lowercase
//! hex without touching the `Digest` trait directly.

pub mod hash;

pub use hash::sha256_hex_multi;
