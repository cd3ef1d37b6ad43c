use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use evmseal_types::ChainCoinInfo;

use crate::error::GateError;

/// File name written by [`GateConfig::init`].
pub const CONFIG_FILE_NAME: &str = "evmseal.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateConfig {
    /// EVM chain id to configure.
    pub chain_id: u64,
    /// Coin info for the dynamic entry point. When unset, `chains` is used.
    #[serde(default)]
    pub coin_info: Option<ChainCoinInfo>,
    /// Known chains for the map-based entry point.
    #[serde(default)]
    pub chains: Vec<ChainEntry>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainEntry {
    pub chain_id: u64,
    pub denom: String,
    pub display_denom: String,
    pub decimals: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            chain_id: 9001,
            coin_info: Some(ChainCoinInfo::new("uatom", "ATOM", 6)),
            chains: vec![ChainEntry {
                chain_id: 9001,
                denom: "uatom".to_string(),
                display_denom: "ATOM".to_string(),
                decimals: 6,
            }],
            logging: LoggingConfig::default(),
        }
    }
}

/// Where the `apply` command takes its coin info from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainSource<'a> {
    /// `coin_info` through the dynamic entry point.
    Dynamic(&'a ChainCoinInfo),
    /// `[[chains]]` through the map entry point.
    Map(HashMap<u64, ChainCoinInfo>),
}

impl GateConfig {
    /// Read and parse a TOML gate config.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GateError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| GateError::ConfigError {
            reason: format!("cannot read {}: {}", path.display(), e),
        })?;
        toml::from_str(&contents).map_err(|e| GateError::ConfigError {
            reason: format!("{} is not a valid gate config: {}", path.display(), e),
        })
    }

    /// Write the default config into `dir`, creating it if needed, and
    /// return the written path.
    pub fn init(dir: impl AsRef<Path>) -> Result<PathBuf, GateError> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        let rendered = toml::to_string_pretty(&Self::default()).map_err(|e| {
            GateError::ConfigError {
                reason: format!("cannot render default config: {}", e),
            }
        })?;
        let path = dir.join(CONFIG_FILE_NAME);
        std::fs::write(&path, rendered)?;
        Ok(path)
    }

    /// Pick the entry point input. `legacy` forces the `[[chains]]` map,
    /// which must then be non-empty; so must it when `coin_info` is unset.
    pub fn chain_source(&self, legacy: bool) -> Result<ChainSource<'_>, GateError> {
        match (&self.coin_info, legacy) {
            (Some(coin_info), false) => Ok(ChainSource::Dynamic(coin_info)),
            _ if self.chains.is_empty() => Err(GateError::NoChainsConfigured {
                chain_id: self.chain_id,
            }),
            _ => Ok(ChainSource::Map(self.coin_info_map())),
        }
    }

    /// Chain id to coin info map for the legacy entry point. Later entries win.
    pub fn coin_info_map(&self) -> HashMap<u64, ChainCoinInfo> {
        self.chains
            .iter()
            .map(|entry| {
                (
                    entry.chain_id,
                    ChainCoinInfo::new(&entry.denom, &entry.display_denom, entry.decimals),
                )
            })
            .collect()
    }
}
