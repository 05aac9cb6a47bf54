//! Private key text formats
//!
//! This module converts a 32-byte secret to and from the Wallet Import
//! Format, and validates and derives secrets from minikeys.

pub mod minikey;
pub mod secret;
pub mod wif;

pub use minikey::{check_minikey, minikey_to_secret, LEGACY_MINIKEY_LEN, MINIKEY_LEN};
pub use secret::{Secret, SECRET_LEN};
pub use wif::{
    decode_wif, is_wif_compressed, secret_to_wif, secret_to_wif_for, wif_to_secret,
    wif_to_secret_for, DecodedWif, COMPRESSED_FLAG, WIF_COMPRESSED_LEN, WIF_UNCOMPRESSED_LEN,
};
