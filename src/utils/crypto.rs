use ring::digest::{Context, SHA256};

use crate::error::{KeyFormatError, Result};

pub const CHECKSUM_LEN: usize = 4;

pub fn sha256_digest(data: &[u8]) -> [u8; 32] {
    let mut context = Context::new(&SHA256);
    context.update(data);
    let digest = context.finish();
    let mut out = [0u8; 32];
    out.copy_from_slice(digest.as_ref());
    out
}

/// First 4 bytes of SHA-256(SHA-256(data))
pub fn double_sha256_checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let first_sha = sha256_digest(data);
    let second_sha = sha256_digest(&first_sha);
    let mut checksum = [0u8; CHECKSUM_LEN];
    checksum.copy_from_slice(&second_sha[..CHECKSUM_LEN]);
    checksum
}

pub fn base58_encode(data: &[u8]) -> String {
    bs58::encode(data).into_string()
}

pub fn base58_decode(data: &str) -> Result<Vec<u8>> {
    bs58::decode(data)
        .into_vec()
        .map_err(|e| KeyFormatError::Base58(e.to_string()))
}
