use crate::severity::Severity;
use anyhow::{Context, Result};
use config::{Config as RConfig, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

const ENV_PREFIX: &str = "PROCLOG";

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    pub log_level: Option<String>,
}

impl Config {
    /// Threshold for a [`crate::ProcessLogger`]. An absent or unrecognized
    /// level name disables logging rather than failing; severity validation
    /// lives at this boundary, not in the logger core.
    pub fn threshold(&self) -> Option<Severity> {
        let raw = self.log_level.as_deref()?;
        match raw.parse::<Severity>() {
            Ok(level) => Some(level),
            Err(_) => {
                warn!(level = raw, "unrecognized log level, logging disabled");
                None
            }
        }
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from an optional TOML file plus `PROCLOG_*`
    /// environment variables; the environment wins over the file.
    pub fn load_config(path: Option<&Path>) -> Result<Config> {
        let mut builder = RConfig::builder();

        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX));

        builder
            .build()
            .context("failed to read configuration sources")?
            .try_deserialize()
            .context("failed to deserialize configuration")
    }
}
