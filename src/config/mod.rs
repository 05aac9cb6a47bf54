//! Configuration management
//!
//! This module selects the network whose WIF version byte the codecs
//! encode with and expect on decode.

pub mod network;
pub mod settings;

pub use network::{Network, MAINNET_WIF_VERSION, TESTNET_WIF_VERSION};
pub use settings::{Config, GLOBAL_CONFIG, NETWORK_ENV_KEY};
