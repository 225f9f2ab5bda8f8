//! Configuration handling for the bls381-calldata CLI
//!
//! Priority: CLI flags > environment variables > config file > defaults

use anyhow::{Context, Result};
use beacon_bls::DEFAULT_API_BASE;
use clap::Args;
use serde::Deserialize;
use std::{fs, path::PathBuf};

/// Beacon API options, shared by the beacon subcommands
#[derive(Args, Clone)]
pub struct ApiArgs {
    /// Beacon API base URL
    #[arg(long, env = "BEACON_API_URL")]
    pub api_base: Option<String>,

    /// Beacon API key, appended to lookup request URLs
    #[arg(long, env = "BEACON_CHAIN_API_KEY")]
    pub api_key: Option<String>,
}

/// Resolved configuration for the beacon subcommands
pub struct Config {
    pub api_base: String,
    pub api_key: Option<String>,
}

impl Config {
    /// Load configuration from file, environment, and CLI args
    pub fn load(api: &ApiArgs) -> Result<Self> {
        // clap already resolved flags and environment variables
        let file_config = ConfigFile::load().ok();

        let api_base = api
            .api_base
            .clone()
            .or_else(|| file_config.as_ref().and_then(|c| c.api_base()))
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let api_key = api
            .api_key
            .clone()
            .or_else(|| file_config.as_ref().and_then(|c| c.api_key()));

        Ok(Self { api_base, api_key })
    }
}

/// Configuration file structure
#[derive(Debug, Deserialize)]
struct ConfigFile {
    beacon: Option<BeaconSection>,
}

#[derive(Debug, Deserialize)]
struct BeaconSection {
    api_base: Option<String>,
    api_key: Option<String>,
}

impl ConfigFile {
    fn load() -> Result<Self> {
        let path = config_file_path()?;
        if !path.exists() {
            anyhow::bail!("Config file not found");
        }
        let content = fs::read_to_string(&path)?;
        let config: ConfigFile = toml::from_str(&content)?;
        Ok(config)
    }

    fn api_base(&self) -> Option<String> {
        self.beacon.as_ref().and_then(|b| b.api_base.clone())
    }

    fn api_key(&self) -> Option<String> {
        self.beacon.as_ref().and_then(|b| b.api_key.clone())
    }
}

/// Get config file path
fn config_file_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().context("Could not find config directory")?;
    Ok(config_dir.join("bls381-calldata").join("config.toml"))
}
