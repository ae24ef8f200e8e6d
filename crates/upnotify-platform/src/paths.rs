use std::ffi::OsString;
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_DIR: &str = "upnotify";

/// Overrides the base directory for both settings and logs.
pub const HOME_ENV: &str = "UPNOTIFY_HOME";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AppPathsError {
    #[error("Could not determine the user {0} directory")]
    Unavailable(&'static str),
}

/// Where upnotify keeps its settings and log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
}

impl AppPaths {
    /// Resolve paths from `UPNOTIFY_HOME`, falling back to the per-user
    /// config and local data directories.
    ///
    /// # Errors
    /// Returns an error when no override is set and the platform directory
    /// cannot be determined.
    pub fn new() -> Result<Self, AppPathsError> {
        Self::resolve(std::env::var_os(HOME_ENV))
    }

    /// Keep everything under a single `root` directory.
    #[must_use]
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            config_dir: root.to_path_buf(),
            data_dir: root.to_path_buf(),
        }
    }

    fn resolve(home_override: Option<OsString>) -> Result<Self, AppPathsError> {
        if let Some(root) = home_override.filter(|root| !root.is_empty()) {
            return Ok(Self::from_root(PathBuf::from(root)));
        }

        let config = dirs::config_dir().ok_or(AppPathsError::Unavailable("config"))?;
        let data = dirs::data_local_dir().ok_or(AppPathsError::Unavailable("data"))?;
        Ok(Self {
            config_dir: config.join(APP_DIR),
            data_dir: data.join(APP_DIR),
        })
    }

    #[must_use]
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }

    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join("upnotify.log")
    }
}
