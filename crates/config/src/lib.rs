//! SPN Configuration Module
//!
//! This module provides configuration types for clients talking to the
//! SPN coordination ledger, plus the shared tracing setup.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub mod logging;

pub use logging::{init_tracing, LoggerConfig};

/// Chain id of the SPN coordination ledger
pub const SPN_CHAIN_ID: &str = "spn-1";
/// Bech32 prefix for SPN account addresses
pub const SPN_ADDRESS_PREFIX: &str = "spn";
/// Native fee denomination
pub const SPN_DENOM: &str = "uspn";

/// Default Tendermint RPC endpoint
pub const DEFAULT_RPC_ADDRESS: &str = "http://127.0.0.1:26657";
/// Default per-request timeout
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Which deployment of the ledger a client targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    MainNet,
    #[default]
    TestNet,
    Local,
}

impl NetworkType {
    /// Default RPC endpoint for the deployment
    pub fn default_rpc_address(&self) -> &'static str {
        match self {
            NetworkType::MainNet => "https://rpc.spn.ignite.com:443",
            NetworkType::TestNet => "https://rpc.devnet.ignite.com:443",
            NetworkType::Local => DEFAULT_RPC_ADDRESS,
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkType::MainNet => write!(f, "mainnet"),
            NetworkType::TestNet => write!(f, "testnet"),
            NetworkType::Local => write!(f, "local"),
        }
    }
}

impl FromStr for NetworkType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" | "main" => Ok(NetworkType::MainNet),
            "testnet" | "test" | "devnet" => Ok(NetworkType::TestNet),
            "local" | "localnet" => Ok(NetworkType::Local),
            _ => Err(ConfigError::Invalid(format!("unknown network type: {s}"))),
        }
    }
}

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub network: NetworkType,
    /// Tendermint RPC endpoint of an SPN node
    pub rpc_address: String,
    pub rpc_user: Option<String>,
    pub rpc_pass: Option<String>,
    pub chain_id: String,
    pub address_prefix: String,
    pub denom: String,
    pub request_timeout_ms: u64,
    pub logger: LoggerConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            network: NetworkType::default(),
            rpc_address: NetworkType::default().default_rpc_address().to_string(),
            rpc_user: None,
            rpc_pass: None,
            chain_id: SPN_CHAIN_ID.to_string(),
            address_prefix: SPN_ADDRESS_PREFIX.to_string(),
            denom: SPN_DENOM.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            logger: LoggerConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Loads a TOML config file; missing keys fall back to defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Returns a config targeting the given deployment
    pub fn for_network(network: NetworkType) -> Self {
        Self {
            network,
            rpc_address: network.default_rpc_address().to_string(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rpc_address.trim().is_empty() {
            return Err(ConfigError::Invalid("rpc_address must not be empty".into()));
        }
        if self.chain_id.trim().is_empty() {
            return Err(ConfigError::Invalid("chain_id must not be empty".into()));
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_ms must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_type_round_trips_through_str() {
        for network in [NetworkType::MainNet, NetworkType::TestNet, NetworkType::Local] {
            assert_eq!(network.to_string().parse::<NetworkType>().unwrap(), network);
        }
        assert!("nope".parse::<NetworkType>().is_err());
    }

    #[test]
    fn default_config_is_valid() {
        let config = ClientConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.chain_id, SPN_CHAIN_ID);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = ClientConfig {
            request_timeout_ms: 0,
            ..ClientConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
