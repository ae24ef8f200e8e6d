use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const MANIFEST_FILE: &str = "package.json";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ManifestError {
    #[error("failed to read {}: {details}", path.display())]
    Read { path: PathBuf, details: String },
    #[error("failed to parse {}: {details}", path.display())]
    Parse { path: PathBuf, details: String },
}

/// The `repository` field of a package manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RepositoryField {
    Url(String),
    Object {
        #[serde(default, rename = "type")]
        kind: Option<String>,
        url: String,
    },
}

impl RepositoryField {
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            RepositoryField::Url(url) | RepositoryField::Object { url, .. } => url,
        }
    }
}

/// The subset of a host package manifest the notifier reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub repository: Option<RepositoryField>,
}

impl PackageManifest {
    /// Load `package.json` from the application directory.
    ///
    /// # Errors
    /// Returns an error when the file cannot be read or is not valid JSON.
    pub fn load(app_dir: &Path) -> Result<Self, ManifestError> {
        let path = app_dir.join(MANIFEST_FILE);
        let content = std::fs::read_to_string(&path).map_err(|e| ManifestError::Read {
            path: path.clone(),
            details: e.to_string(),
        })?;
        Self::parse(&content).map_err(|details| ManifestError::Parse { path, details })
    }

    fn parse(content: &str) -> Result<Self, String> {
        serde_json::from_str(content).map_err(|e| e.to_string())
    }

    #[must_use]
    pub fn repository_url(&self) -> Option<&str> {
        self.repository.as_ref().map(RepositoryField::url)
    }
}
