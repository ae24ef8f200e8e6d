use async_trait::async_trait;
use log::debug;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

const USER_AGENT: &str = "upnotify";
const BODY_SNIPPET_CHARS: usize = 160;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GitHubRelease {
    pub tag_name: String,
    #[serde(default)]
    pub body: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub prerelease: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReleaseError {
    #[error("failed to fetch releases: {details}")]
    Request { details: String },
    #[error("release request failed with HTTP {status}{body_snippet}")]
    HttpStatus { status: u16, body_snippet: String },
    #[error("failed to parse releases response: {details}")]
    Parse { details: String },
}

/// A source of published releases for a repository.
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// List releases for `repository` (`owner/repo`), newest first.
    async fn list_releases(
        &self,
        repository: &str,
        token: Option<&str>,
    ) -> Result<Vec<GitHubRelease>, ReleaseError>;

    /// The most recent release, or `None` when nothing is published.
    async fn latest_release(
        &self,
        repository: &str,
        token: Option<&str>,
    ) -> Result<Option<GitHubRelease>, ReleaseError> {
        let releases = self.list_releases(repository, token).await?;
        Ok(releases.into_iter().next())
    }
}

#[derive(Debug, Clone)]
pub struct GitHubReleaseClient {
    client: reqwest::Client,
    api_base: String,
}

impl GitHubReleaseClient {
    #[must_use]
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn releases_url(&self, repository: &str) -> String {
        format!("{}/repos/{repository}/releases", self.api_base)
    }
}

impl Default for GitHubReleaseClient {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

#[async_trait]
impl ReleaseSource for GitHubReleaseClient {
    async fn list_releases(
        &self,
        repository: &str,
        token: Option<&str>,
    ) -> Result<Vec<GitHubRelease>, ReleaseError> {
        let url = self.releases_url(repository);
        debug!("Fetching releases from {url}");

        let mut request = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = token.filter(|token| !token.is_empty()) {
            request = request.header("Authorization", format!("token {token}"));
        }

        let response = request.send().await.map_err(|e| ReleaseError::Request {
            details: e.to_string(),
        })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body_snippet = response
                .text()
                .await
                .ok()
                .map(|body| response_snippet(&body, BODY_SNIPPET_CHARS))
                .unwrap_or_default();
            return Err(ReleaseError::HttpStatus {
                status,
                body_snippet,
            });
        }

        response
            .json::<Vec<GitHubRelease>>()
            .await
            .map_err(|e| ReleaseError::Parse {
                details: e.to_string(),
            })
    }
}

fn response_snippet(body: &str, max_chars: usize) -> String {
    let snippet: String = body.chars().take(max_chars).collect();
    if snippet.is_empty() {
        String::new()
    } else {
        format!(": {snippet}")
    }
}
