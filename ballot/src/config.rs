//! Registry configuration with TOML file support.

use crate::error::ElectionError;
use election_types::params::BPS_DENOMINATOR;
use election_types::{Address, ElectionParams};
use election_utils::LogFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for a [`BallotRegistry`](crate::BallotRegistry).
///
/// Loaded from TOML via [`RegistryConfig::from_toml_file`] or built
/// programmatically for tests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// The single identity allowed to start, finish and drain ballots.
    pub owner: Address,

    /// Ledger account that holds staked value until settlement.
    pub escrow: Address,

    #[serde(default)]
    pub params: ElectionParams,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl RegistryConfig {
    pub fn new(owner: Address, escrow: Address) -> Self {
        Self {
            owner,
            escrow,
            params: ElectionParams::default(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ElectionError> {
        let config: Self =
            toml::from_str(contents).map_err(|e| ElectionError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ElectionError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ElectionError::Config(format!("{}: {e}", path.display())))?;
        let config = Self::from_toml_str(&contents)?;
        tracing::info!("Loaded registry config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ElectionError> {
        if self.owner == self.escrow {
            return Err(ElectionError::Config(
                "escrow account must differ from the owner".into(),
            ));
        }
        if self.params.voting_window_secs == 0 {
            return Err(ElectionError::Config(
                "voting_window_secs must be non-zero".into(),
            ));
        }
        if self.params.winner_share_bps > BPS_DENOMINATOR {
            return Err(ElectionError::Config(format!(
                "winner_share_bps {} exceeds {}",
                self.params.winner_share_bps, BPS_DENOMINATOR
            )));
        }
        Ok(())
    }

    /// Install the global tracing subscriber described by this config.
    pub fn init_logging(&self) -> bool {
        election_utils::init_logging(self.log_format, &self.log_level)
    }
}
