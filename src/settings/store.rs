//! Settings file lookup and loading

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::settings as settings_config;
use crate::error::{OctoError, Result};

use super::models::Settings;

/// Handles locating and reading the settings file
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    /// An explicitly requested file must exist
    required: bool,
}

impl SettingsStore {
    /// Pick the settings file: `--config`, then `./config.yaml`, then
    /// `~/.octo-reports/config.yaml`
    pub fn locate(explicit: Option<&Path>) -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::locate_in(explicit, &cwd, dirs::home_dir().as_deref())
    }

    fn locate_in(explicit: Option<&Path>, cwd: &Path, home: Option<&Path>) -> Self {
        if let Some(path) = explicit {
            return Self::with_path(path.to_path_buf());
        }

        let local = cwd.join(settings_config::LOCAL_FILE);
        if local.is_file() {
            return Self {
                path: local,
                required: false,
            };
        }

        let home_file = home
            .unwrap_or_else(|| Path::new("."))
            .join(settings_config::DIR_NAME)
            .join(settings_config::FILE_NAME);
        Self {
            path: home_file,
            required: false,
        }
    }

    /// Store for a file that must exist
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            required: true,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the settings
    ///
    /// A missing default file yields empty settings; a missing explicit file
    /// or an unparsable one is an error.
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            if self.required {
                return Err(OctoError::Config(format!(
                    "Settings file {} does not exist",
                    self.path.display()
                )));
            }
            debug!("No settings file at {}", self.path.display());
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            OctoError::Config(format!(
                "Failed to read settings file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        if content.trim().is_empty() {
            return Ok(Settings::default());
        }

        debug!("Loaded settings from {}", self.path.display());
        serde_yml::from_str(&content).map_err(|e| {
            OctoError::Config(format!(
                "Failed to parse settings file {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}
