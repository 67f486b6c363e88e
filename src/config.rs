use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Application configuration, read from `config.toml` with env overrides
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// CSV file the review store is seeded from at startup
    pub dataset_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("data/reviews.csv"),
        }
    }
}

impl AppConfig {
    /// Load configuration from `CONFIG_PATH` (default `config.toml`), then
    /// apply environment overrides.
    pub fn load() -> Result<Self> {
        let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut config = Self::from_file(Path::new(&path))?;

        if let Ok(port) = std::env::var("PORT") {
            config.server.port = port
                .parse()
                .with_context(|| format!("Invalid PORT value: {}", port))?;
        }

        Ok(config)
    }

    /// Read a TOML file, falling back to defaults when it does not exist
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!("Config file {:?} not found, using defaults", path);
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config = Self::parse(&raw).with_context(|| format!("Invalid config file {:?}", path))?;

        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn parse(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}
