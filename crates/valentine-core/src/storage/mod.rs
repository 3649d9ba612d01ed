mod config;

pub use config::{
    AssetsConfig, Config, CountdownConfig, GrowthConfig, NotificationsConfig, ProposalConfig,
};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/valentine[-dev]/` based on VALENTINE_ENV.
///
/// Set VALENTINE_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("VALENTINE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("valentine-dev")
    } else {
        base_dir.join("valentine")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::NoDataDir(e.to_string()))?;
    Ok(dir)
}
