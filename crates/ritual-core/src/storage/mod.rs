mod config;

pub use config::Config;

use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Returns `~/.config/ritual[-dev]/` based on RITUAL_ENV.
///
/// Set RITUAL_ENV=dev to use the development data directory, or
/// RITUAL_CONFIG_DIR to point somewhere else entirely.
///
/// # Errors
/// Returns an error if no directory can be determined or if creating it
/// fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("RITUAL_CONFIG_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .ok_or(ConfigError::NoConfigDir)?
                .join(".config");
            let env = std::env::var("RITUAL_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("ritual-dev")
            } else {
                base_dir.join("ritual")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
