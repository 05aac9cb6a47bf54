//! Minikey format
//!
//! A minikey is 22 (legacy) or 30 characters. It is well-formed when
//! `SHA256(minikey + "?")` starts with a zero byte, and its secret is
//! `SHA256(minikey)`.

use log::debug;
use zeroize::Zeroize;

use super::secret::Secret;
use crate::error::{KeyFormatError, Result};
use crate::utils::sha256_digest;

pub const LEGACY_MINIKEY_LEN: usize = 22;
pub const MINIKEY_LEN: usize = 30;

pub fn check_minikey(minikey: &str) -> bool {
    if minikey.len() != LEGACY_MINIKEY_LEN && minikey.len() != MINIKEY_LEN {
        return false;
    }
    let mut candidate = String::with_capacity(minikey.len() + 1);
    candidate.push_str(minikey);
    candidate.push('?');
    let valid = sha256_digest(candidate.as_bytes())[0] == 0x00;
    candidate.zeroize();
    valid
}

pub fn minikey_to_secret(minikey: &str) -> Result<Secret> {
    if minikey.len() != LEGACY_MINIKEY_LEN && minikey.len() != MINIKEY_LEN {
        debug!("Rejecting minikey: length {}", minikey.len());
        return Err(KeyFormatError::InvalidMinikey(format!(
            "length {} is not {LEGACY_MINIKEY_LEN} or {MINIKEY_LEN}",
            minikey.len()
        )));
    }
    if !check_minikey(minikey) {
        debug!("Rejecting minikey: self-check failed");
        return Err(KeyFormatError::InvalidMinikey(
            "self-check hash does not start with a zero byte".to_string(),
        ));
    }
    Ok(Secret::new(sha256_digest(minikey.as_bytes())))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIKEY: &str = "S6c56bnXQiBjk9mqSYE7ykVQ7NzrRy";

    #[test]
    fn test_known_minikey() {
        assert!(check_minikey(MINIKEY));
        let secret = minikey_to_secret(MINIKEY).unwrap();
        assert_eq!(secret.as_bytes(), &sha256_digest(MINIKEY.as_bytes()));
        assert_eq!(
            secret.to_hex(),
            "4c7a9640c72dc2099f23715d0c8a0d8a35f8906e3cab61dd3f78b67bf887c9ab"
        );
    }

    #[test]
    fn test_wrong_lengths_rejected() {
        for candidate in ["", "S", &MINIKEY[..21], &MINIKEY[..23], &MINIKEY[..29]] {
            assert!(!check_minikey(candidate));
            assert!(matches!(
                minikey_to_secret(candidate),
                Err(KeyFormatError::InvalidMinikey(_))
            ));
        }
        let too_long = format!("{MINIKEY}a");
        assert!(!check_minikey(&too_long));
    }

    #[test]
    fn test_check_follows_question_mark_rule() {
        let candidates = [
            "S6c56bnXQiBjk9mqSYE7ykVQ7NzrRz",
            "S6c56bnXQiBjk9mqSYE7ykVQ7NzrRa",
            "S6c56bnXQiBjk9mqSYE7ykVQ7NzrRb",
            "SzavMBLoXU6kDrqtUVmffa",
            "SzavMBLoXU6kDrqtUVmffb",
            "SzavMBLoXU6kDrqtUVmffc",
        ];
        let mut rejected = 0;
        for candidate in candidates {
            let expected = sha256_digest(format!("{candidate}?").as_bytes())[0] == 0;
            assert_eq!(check_minikey(candidate), expected, "{candidate}");
            match minikey_to_secret(candidate) {
                Ok(secret) => assert_eq!(secret.as_bytes(), &sha256_digest(candidate.as_bytes())),
                Err(_) => rejected += 1,
            }
        }
        assert!(rejected > 0);
    }
}
