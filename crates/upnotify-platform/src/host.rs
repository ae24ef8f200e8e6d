use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;

use crate::manifest::{ManifestError, PackageManifest};

/// The application embedding the notifier.
#[async_trait]
pub trait HostApp: Send + Sync {
    /// Display name, used as the dialog title.
    fn name(&self) -> &str;

    /// The running application's version string.
    fn version(&self) -> &str;

    /// Whether the application runs as a packaged/production build.
    fn is_packaged(&self) -> bool;

    /// Repository reference declared by the host package, if any.
    fn package_repository(&self) -> Option<String>;

    /// Resolve once the host is ready; immediately if it already is.
    async fn wait_until_ready(&self);
}

/// A cloneable one-way readiness flag.
#[derive(Debug, Clone)]
pub struct ReadySignal {
    sender: Arc<watch::Sender<bool>>,
}

impl ReadySignal {
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = watch::channel(false);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// A signal that is already marked ready.
    #[must_use]
    pub fn ready() -> Self {
        let signal = Self::new();
        signal.mark_ready();
        signal
    }

    pub fn mark_ready(&self) {
        self.sender.send_replace(true);
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        *self.sender.borrow()
    }

    pub async fn wait(&self) {
        let mut receiver = self.sender.subscribe();
        // The sender lives as long as `self`, so this cannot observe a close.
        let _ = receiver.wait_for(|ready| *ready).await;
    }
}

impl Default for ReadySignal {
    fn default() -> Self {
        Self::new()
    }
}

/// A [`HostApp`] described by plain values.
#[derive(Debug, Clone)]
pub struct ProcessHost {
    name: String,
    version: String,
    packaged: bool,
    repository: Option<String>,
    ready: ReadySignal,
}

impl ProcessHost {
    /// Create a host that is ready immediately and counts as packaged in
    /// release builds.
    #[must_use]
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            packaged: !cfg!(debug_assertions),
            repository: None,
            ready: ReadySignal::ready(),
        }
    }

    /// Build a host from the `package.json` in `app_dir`.
    ///
    /// Missing `name` or `version` fall back to empty strings; an empty version
    /// is rejected later by the notifier.
    ///
    /// # Errors
    /// Returns an error when the manifest cannot be read or parsed.
    pub fn from_manifest(app_dir: &Path) -> Result<Self, ManifestError> {
        let manifest = PackageManifest::load(app_dir)?;
        let repository = manifest.repository_url().map(str::to_string);
        let mut host = Self::new(
            manifest.name.unwrap_or_default(),
            manifest.version.unwrap_or_default(),
        );
        host.repository = repository;
        Ok(host)
    }

    #[must_use]
    pub fn packaged(mut self, packaged: bool) -> Self {
        self.packaged = packaged;
        self
    }

    #[must_use]
    pub fn repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = Some(repository.into());
        self
    }

    #[must_use]
    pub fn ready_signal(mut self, ready: ReadySignal) -> Self {
        self.ready = ready;
        self
    }
}

#[async_trait]
impl HostApp for ProcessHost {
    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn is_packaged(&self) -> bool {
        self.packaged
    }

    fn package_repository(&self) -> Option<String> {
        self.repository.clone()
    }

    async fn wait_until_ready(&self) {
        self.ready.wait().await;
    }
}
