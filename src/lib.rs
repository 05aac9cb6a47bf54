//! # Wallet Key Formats - Private Key Text Encodings
//!
//! This crate converts a raw 32-byte private key into the two textual forms
//! wallets hand around, and back again.
//! When I come back to this code, here's what I need to remember:
//!
//! ## What I Built
//! - **WIF Codec**: base58check encoding of `version || secret || [0x01] || checksum`
//! - **Minikey Codec**: 22/30 character keys validated by the `"?"` hash rule
//! - **Secret Type**: fixed 32-byte key that wipes itself on drop
//! - **Networks**: mainnet (0x80) and testnet (0xEF) WIF version bytes
//!
//! ## How I Organized My Code
//! - `wallet/`: Secret type, WIF and minikey codecs
//! - `utils/`: SHA-256, double-SHA-256 checksum and base58 helpers
//! - `config/`: Network selection from env vars and TOML files
//! - `error/`: One error enum for every way untrusted input gets rejected
//! - `cli/`: Command-line interface around the codecs
//!
//! ## Key Design Decisions I Made
//! - Decoding returns `Result<Secret>` instead of a zeroed key, so a failed
//!   decode can never be mistaken for a real secret
//! - `is_wif_compressed` only looks at the length and flag byte, it does not
//!   validate the version or checksum
//! - All functions are stateless and safe to call from any thread

pub mod cli;
pub mod config;
pub mod error;
pub mod utils;
pub mod wallet;

// Re-export commonly used types for convenience
pub use cli::{Command, Opt};
pub use config::{Config, Network, GLOBAL_CONFIG};
pub use error::{KeyFormatError, Result};
pub use utils::{base58_decode, base58_encode, double_sha256_checksum, sha256_digest};
pub use wallet::{
    check_minikey, decode_wif, is_wif_compressed, minikey_to_secret, secret_to_wif,
    secret_to_wif_for, wif_to_secret, wif_to_secret_for, DecodedWif, Secret,
};
