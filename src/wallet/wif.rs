//! Wallet Import Format
//!
//! Byte layout before base58:
//! `version(1) || secret(32) || [0x01 if compressed] || checksum(4)`

use log::debug;
use zeroize::Zeroize;

use super::secret::{Secret, SECRET_LEN};
use crate::config::Network;
use crate::error::{KeyFormatError, Result};
use crate::utils::{base58_decode, base58_encode, double_sha256_checksum, CHECKSUM_LEN};

pub const COMPRESSED_FLAG: u8 = 0x01;
pub const WIF_UNCOMPRESSED_LEN: usize = 1 + SECRET_LEN + CHECKSUM_LEN;
pub const WIF_COMPRESSED_LEN: usize = 1 + SECRET_LEN + 1 + CHECKSUM_LEN;

/// Everything a valid WIF string carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedWif {
    pub secret: Secret,
    pub compressed: bool,
    pub network: Network,
}

pub fn secret_to_wif(secret: &Secret, compressed: bool) -> String {
    secret_to_wif_for(Network::Mainnet, secret, compressed)
}

pub fn secret_to_wif_for(network: Network, secret: &Secret, compressed: bool) -> String {
    let mut payload: Vec<u8> = Vec::with_capacity(WIF_COMPRESSED_LEN);
    payload.push(network.wif_version());
    payload.extend_from_slice(secret.as_bytes());
    if compressed {
        payload.push(COMPRESSED_FLAG);
    }
    let checksum = double_sha256_checksum(payload.as_slice());
    payload.extend_from_slice(&checksum);
    // version + secret + [flag] + checksum
    let wif = base58_encode(payload.as_slice());
    payload.zeroize();
    wif
}

pub fn wif_to_secret(wif: &str) -> Result<Secret> {
    wif_to_secret_for(Network::Mainnet, wif)
}

pub fn wif_to_secret_for(network: Network, wif: &str) -> Result<Secret> {
    decode_wif(wif, network).map(|decoded| decoded.secret)
}

pub fn decode_wif(wif: &str, network: Network) -> Result<DecodedWif> {
    let mut payload = base58_decode(wif)?;
    let result = parse_payload(&payload, network);
    payload.zeroize();
    result
}

fn parse_payload(payload: &[u8], network: Network) -> Result<DecodedWif> {
    if payload.len() != WIF_UNCOMPRESSED_LEN && payload.len() != WIF_COMPRESSED_LEN {
        debug!("Rejecting WIF: decoded length {}", payload.len());
        return Err(KeyFormatError::InvalidLength(payload.len()));
    }

    let expected = network.wif_version();
    if payload[0] != expected {
        debug!("Rejecting WIF: version byte 0x{:02x}", payload[0]);
        return Err(KeyFormatError::VersionMismatch {
            expected,
            found: payload[0],
        });
    }

    let (body, actual_checksum) = payload.split_at(payload.len() - CHECKSUM_LEN);
    if double_sha256_checksum(body) != actual_checksum {
        debug!("Rejecting WIF: checksum mismatch");
        return Err(KeyFormatError::ChecksumMismatch);
    }

    // Checks passed, drop the version byte
    let key = &body[1..];
    let compressed = match key.len() {
        SECRET_LEN => false,
        len if len == SECRET_LEN + 1 && key[SECRET_LEN] == COMPRESSED_FLAG => true,
        _ => {
            debug!("Rejecting WIF: bad compression flag");
            return Err(KeyFormatError::InvalidCompressionFlag(key[SECRET_LEN]));
        }
    };

    Ok(DecodedWif {
        secret: Secret::from_slice(&key[..SECRET_LEN])?,
        compressed,
        network,
    })
}

/// Structural check only: the version byte and checksum are not verified.
pub fn is_wif_compressed(wif: &str) -> bool {
    let mut payload = match base58_decode(wif) {
        Ok(payload) => payload,
        Err(_) => return false,
    };
    let compressed =
        payload.len() == WIF_COMPRESSED_LEN && payload[1 + SECRET_LEN] == COMPRESSED_FLAG;
    payload.zeroize();
    compressed
}
