//! Error handling for key format conversions
//!
//! Every rejection of untrusted input maps to one variant here, so callers
//! never have to compare against a zeroed "null secret".

use std::fmt;

/// Result type alias for key format operations
pub type Result<T> = std::result::Result<T, KeyFormatError>;

/// Error types for key encoding and decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyFormatError {
    /// Input is not valid base58
    Base58(String),
    /// Decoded payload has a length other than 37 or 38 bytes
    InvalidLength(usize),
    /// Leading byte does not match the network's WIF version
    VersionMismatch { expected: u8, found: u8 },
    /// Trailing 4 bytes do not match the recomputed checksum
    ChecksumMismatch,
    /// Compressed-length payload without the 0x01 marker
    InvalidCompressionFlag(u8),
    /// Minikey failed the length or self-check rule
    InvalidMinikey(String),
    /// Hex input could not be decoded
    InvalidHex(String),
    /// Raw secret is not 32 bytes
    InvalidSecretLength(usize),
    /// Configuration errors
    Config(String),
    /// File I/O errors
    Io(String),
}

impl fmt::Display for KeyFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyFormatError::Base58(msg) => write!(f, "Invalid base58 encoding: {msg}"),
            KeyFormatError::InvalidLength(len) => {
                write!(f, "Invalid WIF length: {len} bytes, expected 37 or 38")
            }
            KeyFormatError::VersionMismatch { expected, found } => {
                write!(
                    f,
                    "WIF version mismatch: expected 0x{expected:02x}, found 0x{found:02x}"
                )
            }
            KeyFormatError::ChecksumMismatch => write!(f, "WIF checksum mismatch"),
            KeyFormatError::InvalidCompressionFlag(flag) => {
                write!(f, "Invalid compression flag: 0x{flag:02x}")
            }
            KeyFormatError::InvalidMinikey(msg) => write!(f, "Invalid minikey: {msg}"),
            KeyFormatError::InvalidHex(msg) => write!(f, "Invalid hex: {msg}"),
            KeyFormatError::InvalidSecretLength(len) => {
                write!(f, "Invalid secret length: {len} bytes, expected 32")
            }
            KeyFormatError::Config(msg) => write!(f, "Configuration error: {msg}"),
            KeyFormatError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for KeyFormatError {}

impl From<std::io::Error> for KeyFormatError {
    fn from(err: std::io::Error) -> Self {
        KeyFormatError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for KeyFormatError {
    fn from(err: toml::de::Error) -> Self {
        KeyFormatError::Config(err.to_string())
    }
}
