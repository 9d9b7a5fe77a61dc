//! Application configuration with persistence.
//!
//! This module provides the [`AppConfig`] structure for managing application
//! settings with load/save to disk.
//!
//! # Configuration File Location
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/lazyflow/config.json`
//! - macOS: `~/Library/Application Support/lazyflow/config.json`
//! - Windows: `%APPDATA%/lazyflow/config.json`
//!
//! # Example
//!
//! ```ignore
//! use crate::state::AppConfig;
//!
//! let path = AppConfig::config_path()?;
//! let mut config = AppConfig::load_or_default(&path);
//! config.last_address = Some(address);
//! config.save_to(&path)?;
//! ```

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_RATE_POLL_SECS, DEFAULT_SERVER_URL};

// ============================================================================
// Constants
// ============================================================================

/// Application name used for configuration directory.
const APP_NAME: &str = "lazyflow";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

// ============================================================================
// AppConfig
// ============================================================================

/// Application configuration structure for persistence.
///
/// Missing fields fall back to their defaults, so older files keep loading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the wallet backend.
    pub server_url: String,
    /// Seconds between exchange-rate fetches.
    pub rate_poll_secs: u64,
    /// Last successfully searched address.
    pub last_address: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            rate_poll_secs: DEFAULT_RATE_POLL_SECS,
            last_address: None,
        }
    }
}

impl AppConfig {
    /// Returns the path to the configuration file, creating its directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(APP_NAME);
        fs::create_dir_all(&path)?;
        path.push(CONFIG_FILE);
        Ok(path)
    }

    /// Loads the configuration from the default location.
    #[must_use]
    pub fn load() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_or_default(&path),
            Err(err) => {
                tracing::warn!("Config directory unavailable, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Loads the configuration from `path`.
    ///
    /// A missing file is the normal first run and yields the defaults. A file
    /// that cannot be read or parsed also yields the defaults, with a warning.
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No config at {}, using defaults", path.display());
                return Self::default();
            }
            Err(err) => {
                tracing::warn!("Config read failed, using defaults: {err}");
                return Self::default();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|err| {
            tracing::warn!("Config parse failed, using defaults: {err}");
            Self::default()
        })
    }

    /// Saves the configuration to a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Polling interval, never shorter than one second.
    #[must_use]
    pub fn rate_poll_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.rate_poll_secs.max(1))
    }
}

// ============================================================================
// Tests
// ============================================================================
