//! Startup orchestration.
//!
//! # Responsibilities
//! - Load the version document served on `/__version__`
//! - Start optional background services (metrics)
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The version document is read once and served from memory

use std::fs;
use std::path::{Path, PathBuf};

use axum::body::Bytes;

use crate::config::schema::{ObservabilityConfig, VersionConfig};
use crate::config::ConfigError;
use crate::observability::metrics;

/// Resolve a configured path. Relative paths are taken from `base`.
fn resolve(path: &str, base: Option<&Path>) -> PathBuf {
    let path = Path::new(path);
    match base {
        Some(base) if path.is_relative() => base.join(path),
        _ => path.to_path_buf(),
    }
}

/// Read the first readable candidate, relative paths against `base`.
///
/// The document must be valid JSON.
pub fn load_version_from(config: &VersionConfig, base: Option<&Path>) -> Result<Bytes, ConfigError> {
    for candidate in &config.paths {
        let path = resolve(candidate, base);
        let content = match fs::read(&path) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Version file not readable");
                continue;
            }
        };

        serde_json::from_slice::<serde_json::Value>(&content).map_err(|e| {
            ConfigError::VersionFile(format!("{}: {}", path.display(), e))
        })?;

        tracing::info!(path = %path.display(), "Version file loaded");
        return Ok(Bytes::from(content));
    }

    Err(ConfigError::VersionFile(format!(
        "none of {:?} could be read",
        config.paths
    )))
}

/// Read the version document, resolving relative paths against the
/// executable's directory.
pub fn load_version(config: &VersionConfig) -> Result<Bytes, ConfigError> {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    load_version_from(config, exe_dir.as_deref())
}

/// Start the metrics exporter if enabled. Failure is logged, not fatal.
pub fn start_metrics(config: &ObservabilityConfig) {
    if !config.metrics_enabled {
        return;
    }
    match config.metrics_address.parse() {
        Ok(addr) => {
            if let Err(e) = metrics::init_metrics(addr) {
                tracing::error!(error = %e, "Failed to start metrics exporter");
            }
        }
        Err(_) => {
            tracing::error!(
                metrics_address = %config.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }
}
