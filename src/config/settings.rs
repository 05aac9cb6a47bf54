use once_cell::sync::Lazy;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use std::sync::RwLock;

use super::network::Network;
use crate::error::Result;

pub static GLOBAL_CONFIG: Lazy<Config> = Lazy::new(Config::new);

pub const NETWORK_ENV_KEY: &str = "KEY_FORMATS_NETWORK";

/// On-disk form of the configuration
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    network: Option<Network>,
}

pub struct Config {
    network: RwLock<Network>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Config {
        let mut network = Network::default();
        if let Ok(value) = env::var(NETWORK_ENV_KEY) {
            match value.parse() {
                Ok(parsed) => network = parsed,
                Err(e) => log::warn!("Ignoring {NETWORK_ENV_KEY}: {e}"),
            }
        }

        Config {
            network: RwLock::new(network),
        }
    }

    /// Apply the settings found in a TOML file, e.g. `network = "testnet"`
    pub fn load_from_file(&self, path: &Path) -> Result<()> {
        let contents = fs::read_to_string(path)?;
        let file: ConfigFile = toml::from_str(&contents)?;
        if let Some(network) = file.network {
            log::debug!("Loaded network {network} from {}", path.display());
            self.set_network(network);
        }
        Ok(())
    }

    pub fn get_network(&self) -> Network {
        match self.network.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    pub fn set_network(&self, network: Network) {
        match self.network.write() {
            Ok(mut guard) => *guard = network,
            Err(poisoned) => *poisoned.into_inner() = network,
        }
    }

    pub fn get_wif_version(&self) -> u8 {
        self.get_network().wif_version()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KeyFormatError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_set_and_get_network() {
        let config = Config {
            network: RwLock::new(Network::Mainnet),
        };
        assert_eq!(config.get_wif_version(), 0x80);
        config.set_network(Network::Testnet);
        assert_eq!(config.get_network(), Network::Testnet);
        assert_eq!(config.get_wif_version(), 0xef);
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "network = \"testnet\"").unwrap();

        let config = Config {
            network: RwLock::new(Network::Mainnet),
        };
        config.load_from_file(file.path()).unwrap();
        assert_eq!(config.get_network(), Network::Testnet);
    }

    #[test]
    fn test_load_from_empty_file_keeps_network() {
        let file = NamedTempFile::new().unwrap();
        let config = Config {
            network: RwLock::new(Network::Testnet),
        };
        config.load_from_file(file.path()).unwrap();
        assert_eq!(config.get_network(), Network::Testnet);
    }

    #[test]
    fn test_load_rejects_unknown_network() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "network = \"regtest\"").unwrap();

        let config = Config::default();
        let result = config.load_from_file(file.path());
        assert!(matches!(result, Err(KeyFormatError::Config(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let config = Config::default();
        let result = config.load_from_file(Path::new("/nonexistent/key-formats.toml"));
        assert!(matches!(result, Err(KeyFormatError::Io(_))));
    }
}
