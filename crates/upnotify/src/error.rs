use thiserror::Error;
use upnotify_core::ReleaseError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotifierError {
    #[error("current version \"{version}\" is not a valid semantic version")]
    CurrentVersionInvalid { version: String },

    #[error("latest release version \"{tag}\" is not a valid semantic version")]
    LatestVersionInvalid { tag: String },

    #[error("no GitHub repository configured and none found in the package manifest{}", found_suffix(.found.as_deref()))]
    RepositoryNotFound { found: Option<String> },

    #[error(transparent)]
    Release(#[from] ReleaseError),
}

impl NotifierError {
    /// Whether the error only aborts the current check.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Release(_))
    }
}

fn found_suffix(found: Option<&str>) -> String {
    found.map(|url| format!(" (found \"{url}\")")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_errors_are_recoverable_configuration_errors_are_not() {
        let network = NotifierError::from(ReleaseError::Request {
            details: "connection refused".to_string(),
        });
        assert!(network.is_recoverable());
        assert_eq!(
            network.to_string(),
            "failed to fetch releases: connection refused"
        );

        assert!(
            !NotifierError::LatestVersionInvalid {
                tag: "nightly".to_string()
            }
            .is_recoverable()
        );
    }

    #[test]
    fn repository_not_found_mentions_rejected_url() {
        let error = NotifierError::RepositoryNotFound {
            found: Some("https://gitlab.com/octo/app".to_string()),
        };
        assert!(error.to_string().ends_with("(found \"https://gitlab.com/octo/app\")"));

        let error = NotifierError::RepositoryNotFound { found: None };
        assert!(error.to_string().ends_with("package manifest"));
    }
}
