//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use tapeline::{TapelineError, config::AppConfig};

/// Config file looked up relative to the working directory.
const LOCAL_CONFIG: &str = "tapeline/config.toml";

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration in {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Missing configuration file: {}", .0.display())]
    MissingFile(PathBuf),
}

impl From<ConfigError> for TapelineError {
    fn from(err: ConfigError) -> Self {
        TapelineError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (tapeline/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, TapelineError> {
    // 1. An explicit path must exist; never fall back from it
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    // 2. and 3. The first implicit location that exists wins
    for (location, path) in implicit_config_paths() {
        if path.exists() {
            info!(location, path = path.display().to_string(); "Loading configuration");
            return load_config_file(&path);
        }
        debug!(location, path = path.display().to_string(); "Configuration file not found");
    }

    // 4. Nothing found, the defaults render the standard 21-cell tape
    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Implicit config locations in lookup order, each tagged for logging.
fn implicit_config_paths() -> Vec<(&'static str, PathBuf)> {
    let mut paths = vec![("local", PathBuf::from(LOCAL_CONFIG))];

    match ProjectDirs::from("com", "tapeline", "tapeline") {
        Some(proj_dirs) => paths.push(("system", proj_dirs.config_dir().join("config.toml"))),
        None => debug!("Could not determine platform-specific config directory"),
    }

    paths
}

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if the file doesn't exist, cannot be read, or is not valid
/// configuration TOML.
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, TapelineError> {
    let path = path.as_ref();

    // Check existence first so a typo in --config gets a clear message
    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    // Unknown keys are ignored; a negative min_length fails here
    let config: AppConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    debug!(
        min_length = config.layout().min_length(),
        clipboard = config.output().clipboard();
        "Configuration loaded"
    );

    Ok(config)
}
