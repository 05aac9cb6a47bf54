use data_encoding::{HEXLOWER, HEXLOWER_PERMISSIVE};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{KeyFormatError, Result};

pub const SECRET_LEN: usize = 32;

/// A 32-byte private scalar, wiped from memory on drop
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Secret {
    bytes: [u8; SECRET_LEN],
}

impl Secret {
    pub fn new(bytes: [u8; SECRET_LEN]) -> Self {
        Self { bytes }
    }

    pub fn from_slice(data: &[u8]) -> Result<Self> {
        if data.len() != SECRET_LEN {
            return Err(KeyFormatError::InvalidSecretLength(data.len()));
        }
        let mut bytes = [0u8; SECRET_LEN];
        bytes.copy_from_slice(data);
        Ok(Self { bytes })
    }

    /// Parse 64 hex characters, either case
    pub fn from_hex(hex: &str) -> Result<Self> {
        let mut decoded = HEXLOWER_PERMISSIVE
            .decode(hex.trim().as_bytes())
            .map_err(|e| KeyFormatError::InvalidHex(e.to_string()))?;
        let secret = Self::from_slice(&decoded);
        decoded.zeroize();
        secret
    }

    /// Get key bytes (use carefully)
    pub fn as_bytes(&self) -> &[u8; SECRET_LEN] {
        &self.bytes
    }

    pub fn to_hex(&self) -> String {
        HEXLOWER.encode(&self.bytes)
    }

    pub fn is_zero(&self) -> bool {
        self.bytes.iter().all(|b| *b == 0)
    }
}

impl From<[u8; SECRET_LEN]> for Secret {
    fn from(bytes: [u8; SECRET_LEN]) -> Self {
        Self::new(bytes)
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secret").field("bytes", &"<redacted>").finish()
    }
}
