// File: ./src/config.rs
// Handles configuration loading, saving, and defaults.
use crate::context::AppContext;
use crate::forecast::DEFAULT_HORIZON;
use crate::store::DEFAULT_STAFF;
use crate::synthetic::DEFAULT_COUNT;
use anyhow::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;

fn default_horizon() -> usize {
    DEFAULT_HORIZON
}
fn default_synthetic_count() -> usize {
    DEFAULT_COUNT
}
fn default_staff_top_n() -> usize {
    10
}
fn default_staff() -> Vec<String> {
    DEFAULT_STAFF.iter().map(|s| s.to_string()).collect()
}
fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Config {
    #[serde(default = "default_horizon")]
    pub forecast_horizon: usize,
    #[serde(default = "default_synthetic_count")]
    pub synthetic_count: usize,
    #[serde(default = "default_staff_top_n")]
    pub staff_top_n: usize,
    /// Fill the session with `synthetic_count` generated records at startup.
    #[serde(default)]
    pub seed_on_start: bool,
    /// Fixed RNG seed; unset means a fresh seed per run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rng_seed: Option<u64>,
    #[serde(default = "default_staff")]
    pub staff: Vec<String>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            forecast_horizon: DEFAULT_HORIZON,
            synthetic_count: DEFAULT_COUNT,
            staff_top_n: 10,
            seed_on_start: false,
            rng_seed: None,
            staff: default_staff(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load the configuration from disk using an explicit context.
    /// Returns a contextualized error if reading or parsing fails.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;

        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    /// Loads the config, writing out the defaults when no file exists yet.
    /// Runs before logging is set up, so every failure (including writing the
    /// defaults) is returned to the caller.
    pub fn load_or_init(ctx: &dyn AppContext) -> Result<Self> {
        match Self::load(ctx) {
            Ok(cfg) => Ok(cfg),
            Err(e) if Self::is_missing_config_error(&e) => {
                let cfg = Self::default();
                cfg.save(ctx)
                    .map_err(|e| anyhow::anyhow!("Failed to write default config: {}", e))?;
                Ok(cfg)
            }
            Err(e) => Err(e),
        }
    }

    /// Whether an error from `load` means the config file was missing.
    pub fn is_missing_config_error(err: &Error) -> bool {
        if err.to_string().contains("Config file not found") {
            return true;
        }

        err.chain().any(|cause| {
            cause
                .downcast_ref::<std::io::Error>()
                .is_some_and(|io_err| io_err.kind() == std::io::ErrorKind::NotFound)
        })
    }

    /// Save configuration using an explicit context.
    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        let path = ctx.get_config_file_path()?;
        let toml_str = toml::to_string_pretty(self)?;
        // Write a sibling file, then rename it into place.
        let tmp = path.with_extension("toml.tmp");
        fs::write(&tmp, toml_str)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level
            .parse::<log::LevelFilter>()
            .unwrap_or(log::LevelFilter::Info)
    }
}
