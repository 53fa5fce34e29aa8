//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `VISIBILITY_*` environment variables.
//! Scoring parameters live in [`ScoringConfig`] and may also come from a JSON file.

pub mod error;
pub mod scoring;


pub use error::ConfigError;
pub use scoring::{ScoringConfig, Weights};

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `VISIBILITY_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8000`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Directory holding the sentence-transformer (`config.json`, `model.safetensors`,
    /// `tokenizer.json`). `None` runs the embedder in stub mode.
    pub model_path: Option<PathBuf>,

    /// Optional JSON file with [`ScoringConfig`] overrides.
    pub scoring_config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8000,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            model_path: None,
            scoring_config_path: None,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "VISIBILITY_PORT";
    const ENV_BIND_ADDR: &'static str = "VISIBILITY_BIND_ADDR";
    const ENV_MODEL_PATH: &'static str = "VISIBILITY_MODEL_PATH";
    const ENV_SCORING_CONFIG: &'static str = "VISIBILITY_SCORING_CONFIG";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let model_path = Self::parse_optional_path_from_env(Self::ENV_MODEL_PATH);
        let scoring_config_path = Self::parse_optional_path_from_env(Self::ENV_SCORING_CONFIG);

        Ok(Self {
            port,
            bind_addr,
            model_path,
            scoring_config_path,
        })
    }

    /// Validates paths (does not load anything).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.model_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        if let Some(ref path) = self.scoring_config_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }
}
