use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::KeyFormatError;

pub const MAINNET_WIF_VERSION: u8 = 0x80;
pub const TESTNET_WIF_VERSION: u8 = 0xef;

/// Network a WIF string belongs to, identified by its leading version byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl Network {
    pub fn wif_version(&self) -> u8 {
        match self {
            Network::Mainnet => MAINNET_WIF_VERSION,
            Network::Testnet => TESTNET_WIF_VERSION,
        }
    }

    pub fn from_wif_version(version: u8) -> Option<Network> {
        match version {
            MAINNET_WIF_VERSION => Some(Network::Mainnet),
            TESTNET_WIF_VERSION => Some(Network::Testnet),
            _ => None,
        }
    }
}

impl FromStr for Network {
    type Err = KeyFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" | "main" | "bitcoin" => Ok(Network::Mainnet),
            "testnet" | "test" => Ok(Network::Testnet),
            _ => Err(KeyFormatError::Config(format!(
                "Invalid network: {s}. Valid options: mainnet, testnet"
            ))),
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet"),
        }
    }
}
