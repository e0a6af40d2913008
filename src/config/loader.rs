//! Configuration loading from disk and the command line.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::{GatewayConfig, SecretKey};
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),

    #[error("version file: {0}")]
    VersionFile(String),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Values supplied on the command line or through the environment.
///
/// Anything set here wins over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config_path: Option<PathBuf>,
    pub secret_key: Option<SecretKey>,
    pub bind_address: Option<String>,
    pub debug: bool,
}

/// Parse a TOML config file without validating it.
pub fn read_config_file(path: &Path) -> Result<GatewayConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Accept the `:8000` shorthand for all interfaces.
pub fn normalize_bind_address(addr: &str) -> String {
    if addr.starts_with(':') {
        format!("0.0.0.0{addr}")
    } else {
        addr.to_string()
    }
}

/// Merge file, environment and flags into a validated configuration.
pub fn load_config(overrides: Overrides) -> Result<GatewayConfig, ConfigError> {
    let mut config = match &overrides.config_path {
        Some(path) => read_config_file(path)?,
        None => GatewayConfig::default(),
    };

    if let Some(key) = overrides.secret_key.filter(|k| !k.is_empty()) {
        config.signing.secret_key = key;
    }
    if let Some(addr) = overrides.bind_address {
        config.listener.bind_address = addr;
    }
    config.listener.bind_address = normalize_bind_address(&config.listener.bind_address);
    if overrides.debug {
        config.observability.debug = true;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
