use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use upnotify::Options;
use upnotify_platform::AppPaths;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {}: {details}", path.display())]
    Read { path: PathBuf, details: String },
    #[error("failed to parse settings from {}: {details}", path.display())]
    Parse { path: PathBuf, details: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliSettings {
    #[serde(flatten)]
    pub notifier: Options,

    #[serde(default)]
    pub debug_logging: bool,

    #[serde(default = "default_max_log_size_bytes")]
    pub max_log_size_bytes: u64,
}

fn default_max_log_size_bytes() -> u64 {
    5 * 1024 * 1024
}

impl Default for CliSettings {
    fn default() -> Self {
        Self {
            notifier: Options::default(),
            debug_logging: false,
            max_log_size_bytes: default_max_log_size_bytes(),
        }
    }
}

/// Notifier options the CLI applies before settings and flags.
///
/// The update dialog stays off unless the settings file or `--dialogs`
/// turns it on.
fn cli_notifier_defaults() -> Options {
    Options {
        enable_new_version_available_dialog: Some(false),
        ..Options::default()
    }
}

impl CliSettings {
    /// Load settings from `path`, or from the platform settings file when
    /// `path` is `None`. A missing file yields defaults.
    ///
    /// # Errors
    /// Returns an error when the file exists but cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::load_from(path),
            None => match AppPaths::new() {
                Ok(paths) => Self::load_from(&paths.settings_file()),
                Err(_) => Ok(Self::default()),
            },
        }
    }

    fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(error) => {
                return Err(SettingsError::Read {
                    path: path.to_path_buf(),
                    details: error.to_string(),
                });
            }
        };
        serde_json::from_str(&content).map_err(|error| SettingsError::Parse {
            path: path.to_path_buf(),
            details: error.to_string(),
        })
    }

    /// Options for this run: CLI defaults, then the settings file, then
    /// `overrides` from the command line.
    pub fn effective_options(&self, overrides: Options) -> Options {
        cli_notifier_defaults()
            .merge(self.notifier.clone())
            .merge(overrides)
    }

    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
