// File: src/config.rs
// Purpose: Configuration parsing from fieldcheck.toml

use anyhow::{Context, Result};
use fieldcheck_validation::ValidatorConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Environment variable naming an alternate config file
pub const CONFIG_PATH_ENV: &str = "FIELDCHECK_CONFIG";

/// Environment variable overriding `server.port`
pub const PORT_ENV: &str = "FIELDCHECK_PORT";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    /// Validator toggles, shared with the browser through the form markup
    #[serde(default)]
    pub validation: ValidatorConfig,

    #[serde(default)]
    pub dns: DnsConfig,

    #[serde(default)]
    pub assets: AssetsConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,
}

/// Email domain lookup settings (only used with `validation.enable_dns_lookup`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnsConfig {
    /// Give up on a lookup after this many milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

/// Static assets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// wasm-pack output directory for fieldcheck-wasm, served under /pkg
    #[serde(default = "default_pkg_dir")]
    pub pkg_dir: String,
}

// Default values
fn default_port() -> u16 {
    3000
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_timeout_ms() -> u64 {
    2000
}

fn default_pkg_dir() -> String {
    "crates/fieldcheck-wasm/pkg".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            pkg_dir: default_pkg_dir(),
        }
    }
}

impl DnsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load from `$FIELDCHECK_CONFIG` or ./fieldcheck.toml, then apply env overrides
    pub fn load_default() -> Result<Self> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| "fieldcheck.toml".to_string());
        let mut config = Self::load(&path)?;

        if let Ok(port) = std::env::var(PORT_ENV) {
            config.server.port = port
                .parse()
                .with_context(|| format!("{} must be a port number, got '{}'", PORT_ENV, port))?;
        }

        Ok(config)
    }

    /// Address to bind
    pub fn addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
