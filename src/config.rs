// src/config.rs

//! Runtime configuration for `ntuple`.
//!
//! The comparison functions never consult configuration; every tolerance is
//! passed per call. This module only supplies defaults for callers that want
//! a project-wide tolerance (the command-line front end), plus the default log
//! filter.
//!
//! Configuration is read from a JSON file named by the `NTUPLE_CONFIG`
//! environment variable. Missing sections and fields fall back to defaults.
//!
//! Loading and reporting are split: [`Config::try_load`] returns the outcome
//! without logging, so a binary can set up its logger from the loaded filter
//! first and report a bad file afterwards.

use std::path::Path;

use anyhow::{ensure, Context, Result};
use log::{info, warn};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "NTUPLE_CONFIG";

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Makes `config` the process-wide configuration. The first install (or the
/// first [`global`] call) wins; later values are dropped.
pub fn install(config: Config) -> &'static Config {
    CONFIG.get_or_init(|| config)
}

/// Process-wide configuration. Falls back to [`Config::load_or_default`] if
/// nothing was installed.
pub fn global() -> &'static Config {
    CONFIG.get_or_init(Config::load_or_default)
}

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Default tolerances.
    pub tolerance: ToleranceConfig,
    /// Logging settings for the binary.
    pub logging: LoggingConfig,
}

/// Default tolerances used when a caller asks for "the configured tolerance".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ToleranceConfig {
    /// Tolerance for component-wise equality.
    pub default: f64,
    /// Tolerance for zero checks.
    pub zero: f64,
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        ToleranceConfig {
            default: 1e-9,
            zero: 1e-12,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set, in `env_logger` syntax.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Parses and validates a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config =
            serde_json::from_str(json).context("Failed to parse configuration JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
        Config::from_json_str(&json)
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Loads the file named by `NTUPLE_CONFIG`. `Ok(None)` if the variable
    /// is unset. Nothing is logged.
    pub fn try_load() -> Result<Option<Self>> {
        Config::try_load_from(std::env::var_os(CONFIG_ENV_VAR))
    }

    /// Loads `path` if one is given.
    pub fn try_load_from(path: Option<impl AsRef<Path>>) -> Result<Option<Self>> {
        path.map(Config::load).transpose()
    }

    /// Logs the outcome of [`Config::try_load`] and resolves it to a config,
    /// replacing a file that could not be loaded by defaults.
    pub fn report(outcome: Result<Option<Self>>) -> Self {
        match outcome {
            Ok(Some(config)) => {
                info!("Loaded configuration from ${}", CONFIG_ENV_VAR);
                config
            }
            Ok(None) => Config::default(),
            Err(e) => {
                warn!("{:#}; using default configuration", e);
                Config::default()
            }
        }
    }

    /// Loads from `NTUPLE_CONFIG` if set, otherwise returns defaults.
    /// A file that cannot be loaded is reported and replaced by defaults.
    pub fn load_or_default() -> Self {
        Config::report(Config::try_load())
    }

    fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("tolerance.default", self.tolerance.default),
            ("tolerance.zero", self.tolerance.zero),
        ] {
            ensure!(
                value.is_finite() && value >= 0.0,
                "{} must be a finite, non-negative number (got {})",
                name,
                value
            );
        }
        Ok(())
    }
}
