//! Utility functions and helpers
//!
//! Hashing and base58 primitives shared by the WIF and minikey codecs.

pub mod crypto;

pub use crypto::{
    base58_decode, base58_encode, double_sha256_checksum, sha256_digest, CHECKSUM_LEN,
};
