use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use upnotify_core::Language;

use crate::logger::Logger;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("failed to read options from {}: {details}", path.display())]
    Read { path: PathBuf, details: String },
    #[error("failed to parse options from {}: {details}", path.display())]
    Parse { path: PathBuf, details: String },
}

/// Where notifier log lines go.
#[derive(Clone)]
pub enum LoggerSetting {
    Disabled,
    Custom(Arc<dyn Logger>),
}

impl std::fmt::Debug for LoggerSetting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggerSetting::Disabled => f.write_str("Disabled"),
            LoggerSetting::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Notifier configuration. Unset fields keep the notifier's current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// `owner/repo`; derived from the host package manifest when unset.
    pub repository: Option<String>,

    /// GitHub API access token.
    pub token: Option<String>,

    /// Check for updates even when the host is not packaged.
    pub debug: Option<bool>,

    pub enable_pre_release: Option<bool>,

    pub enable_new_version_available_dialog: Option<bool>,

    pub enable_error_dialog: Option<bool>,

    pub enable_latest_version_dialog: Option<bool>,

    pub language: Option<Language>,

    #[serde(skip)]
    pub logger: Option<LoggerSetting>,
}

impl Options {
    /// Load options from a JSON file.
    ///
    /// # Errors
    /// Returns an error when the file cannot be read or is not valid JSON.
    pub fn load(path: &Path) -> Result<Self, OptionsError> {
        let content = std::fs::read_to_string(path).map_err(|e| OptionsError::Read {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| OptionsError::Parse {
            path: path.to_path_buf(),
            details: e.to_string(),
        })
    }

    /// Overlay every field set in `other` onto `self`.
    #[must_use]
    pub fn merge(mut self, other: Options) -> Self {
        fn overlay<T>(base: &mut Option<T>, value: Option<T>) {
            if value.is_some() {
                *base = value;
            }
        }

        overlay(&mut self.repository, other.repository);
        overlay(&mut self.token, other.token);
        overlay(&mut self.debug, other.debug);
        overlay(&mut self.enable_pre_release, other.enable_pre_release);
        overlay(
            &mut self.enable_new_version_available_dialog,
            other.enable_new_version_available_dialog,
        );
        overlay(&mut self.enable_error_dialog, other.enable_error_dialog);
        overlay(
            &mut self.enable_latest_version_dialog,
            other.enable_latest_version_dialog,
        );
        overlay(&mut self.language, other.language);
        overlay(&mut self.logger, other.logger);
        self
    }

    #[must_use]
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(LoggerSetting::Custom(logger));
        self
    }

    #[must_use]
    pub fn without_logger(mut self) -> Self {
        self.logger = Some(LoggerSetting::Disabled);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::NoOpLogger;

    #[test]
    fn deserializes_partial_json_with_defaults() {
        let options: Options = serde_json::from_str(
            r#"{"repository": "octo/app", "enable_pre_release": true, "language": "pt-br"}"#,
        )
        .expect("options parse");

        assert_eq!(options.repository.as_deref(), Some("octo/app"));
        assert_eq!(options.enable_pre_release, Some(true));
        assert_eq!(options.language, Some(Language::PtBr));
        assert_eq!(options.token, None);
        assert!(options.logger.is_none());
    }

    #[test]
    fn merge_keeps_explicit_false_and_unset_fields() {
        let base = Options {
            repository: Some("octo/app".to_string()),
            enable_new_version_available_dialog: Some(true),
            ..Options::default()
        };
        let overrides = Options {
            enable_new_version_available_dialog: Some(false),
            token: Some("secret".to_string()),
            ..Options::default()
        };

        let merged = base.merge(overrides.without_logger());

        assert_eq!(merged.repository.as_deref(), Some("octo/app"));
        assert_eq!(merged.enable_new_version_available_dialog, Some(false));
        assert_eq!(merged.token.as_deref(), Some("secret"));
        assert!(matches!(merged.logger, Some(LoggerSetting::Disabled)));
    }

    #[test]
    fn logger_is_not_serialized() {
        let options = Options::default().with_logger(Arc::new(NoOpLogger));
        let json = serde_json::to_string(&options).expect("options serialize");
        assert!(!json.contains("logger"));
        assert_eq!(format!("{:?}", options.logger), "Some(Custom(..))");
    }

    #[test]
    fn load_reads_file_and_reports_errors() {
        let temp_dir = tempfile::tempdir().expect("temporary directory should be created");
        let path = temp_dir.path().join("options.json");

        assert!(matches!(
            Options::load(&path),
            Err(OptionsError::Read { .. })
        ));

        std::fs::write(&path, r#"{"debug": true}"#).expect("options written");
        let options = Options::load(&path).expect("options load");
        assert_eq!(options.debug, Some(true));

        std::fs::write(&path, "{").expect("options written");
        assert!(matches!(
            Options::load(&path),
            Err(OptionsError::Parse { .. })
        ));
    }
}
