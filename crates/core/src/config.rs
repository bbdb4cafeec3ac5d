// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Agency configuration
//!
//! Loaded from an optional TOML file. Every key has a default, so an absent
//! file and an empty file mean the same thing.

use crate::limits::{MAX_BATCH_SIZE, MIN_BATCH_SIZE};
use crate::totals::round_to_cents;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the config file looked up in the data directory
pub const CONFIG_FILE_NAME: &str = "lwc.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("membership_fee must be a positive amount in whole cents, got {0}")]
    InvalidFee(f64),
    #[error("max_batch_size must be between {min} and {max}, got {0}", min = MIN_BATCH_SIZE, max = MAX_BATCH_SIZE)]
    InvalidBatchSize(u32),
}

/// Settings for one agency installation
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AgencyConfig {
    /// Shown in menu and report headers
    pub agency_name: String,
    /// One-time fee a worker may pay at registration
    pub membership_fee: f64,
    /// Upper bound for workers registered in one batch
    pub max_batch_size: u32,
}

impl Default for AgencyConfig {
    fn default() -> Self {
        Self {
            agency_name: "LocalWork Connect".to_string(),
            membership_fee: 100.0,
            max_batch_size: 10,
        }
    }
}

impl AgencyConfig {
    /// Parse config from TOML text
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from `path`, which must exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    /// Load `lwc.toml` from the data directory, falling back to defaults
    /// when it does not exist
    pub fn load_or_default(data_dir: &Path) -> Result<Self, ConfigError> {
        let path = data_dir.join(CONFIG_FILE_NAME);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let fee = self.membership_fee;
        if !fee.is_finite() || fee < 0.01 || round_to_cents(fee) != fee {
            return Err(ConfigError::InvalidFee(self.membership_fee));
        }
        if !(MIN_BATCH_SIZE..=MAX_BATCH_SIZE).contains(&self.max_batch_size) {
            return Err(ConfigError::InvalidBatchSize(self.max_batch_size));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
