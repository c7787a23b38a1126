//! Streaming SHA-256 (FIPS 180-4).
//!
//! [`Sha256`] accepts input in any number of `update` calls and produces a
//! lowercase hex digest from `finalize`, which also resets the hasher.

pub mod sha256;
pub mod transform;

pub use sha256::Sha256;
pub use transform::BLOCK_LEN;
