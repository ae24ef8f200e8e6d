use std::sync::Arc;

use semver::Version;
use upnotify_core::{
    GitHubRelease, GitHubReleaseClient, Language, Messages, ReleaseSource, VersionComparison,
    compare, display_version, fill, parse_github_repository, parse_version,
};
use upnotify_platform::{
    DialogKind, DialogPresenter, ExternalOpener, HostApp, MessageBox, NativeDialogs,
    SystemOpener,
};

use crate::error::NotifierError;
use crate::events::{EventBus, EventKind, NotifierEvent, UpdateInfo};
use crate::logger::{LogFacade, Logger, NoOpLogger};
use crate::options::{LoggerSetting, Options};

const DOWNLOAD_BUTTON: usize = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The host is not packaged and debug mode is off.
    Development,
    /// The latest release is a pre-release and pre-releases are disabled.
    PreRelease,
}

/// What a single check ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Skipped(SkipReason),
    /// The release list could not be fetched; an `error` event was emitted.
    FetchFailed,
    NoReleases,
    UpdateAvailable(UpdateInfo),
    UpdateNotAvailable(UpdateInfo),
    ThisIsLastUpdate(UpdateInfo),
}

impl CheckOutcome {
    #[must_use]
    pub fn update_info(&self) -> Option<&UpdateInfo> {
        match self {
            CheckOutcome::UpdateAvailable(info)
            | CheckOutcome::UpdateNotAvailable(info)
            | CheckOutcome::ThisIsLastUpdate(info) => Some(info),
            CheckOutcome::Skipped(_) | CheckOutcome::FetchFailed | CheckOutcome::NoReleases => {
                None
            }
        }
    }
}

/// Checks GitHub for a newer release of the host application.
#[allow(clippy::struct_excessive_bools)]
pub struct UpdateCheckerNotifier {
    host: Arc<dyn HostApp>,
    releases: Arc<dyn ReleaseSource>,
    dialogs: Arc<dyn DialogPresenter>,
    opener: Arc<dyn ExternalOpener>,
    logger: Arc<dyn Logger>,
    events: EventBus,
    current_version: Version,
    repository: Option<String>,
    token: Option<String>,
    debug: bool,
    enable_pre_release: bool,
    enable_new_version_available_dialog: bool,
    enable_error_dialog: bool,
    enable_latest_version_dialog: bool,
    language: Language,
    messages: &'static Messages,
}

impl UpdateCheckerNotifier {
    /// Create a notifier for `host` with GitHub, native dialog, and browser
    /// defaults.
    ///
    /// # Errors
    /// Returns [`NotifierError::CurrentVersionInvalid`] when the host version is
    /// not a semantic version.
    pub fn new(host: Arc<dyn HostApp>) -> Result<Self, NotifierError> {
        let language = Language::default();
        let Some(current_version) = parse_version(host.version()) else {
            log::error!(
                target: "upnotify",
                "{}",
                fill(language.messages().error.current_version_invalid, &[host.version()])
            );
            return Err(NotifierError::CurrentVersionInvalid {
                version: host.version().to_string(),
            });
        };

        Ok(Self {
            host,
            releases: Arc::new(GitHubReleaseClient::default()),
            dialogs: Arc::new(NativeDialogs),
            opener: Arc::new(SystemOpener),
            logger: Arc::new(LogFacade),
            events: EventBus::default(),
            current_version,
            repository: None,
            token: None,
            debug: false,
            enable_pre_release: false,
            enable_new_version_available_dialog: true,
            enable_error_dialog: false,
            enable_latest_version_dialog: false,
            language,
            messages: language.messages(),
        })
    }

    #[must_use]
    pub fn with_release_source(mut self, releases: Arc<dyn ReleaseSource>) -> Self {
        self.releases = releases;
        self
    }

    /// Use `client` for GitHub requests, e.g. to share a connection pool or
    /// set timeouts.
    #[must_use]
    pub fn with_http_client(self, client: reqwest::Client) -> Self {
        self.with_release_source(Arc::new(GitHubReleaseClient::new(client)))
    }

    #[must_use]
    pub fn with_dialogs(mut self, dialogs: Arc<dyn DialogPresenter>) -> Self {
        self.dialogs = dialogs;
        self
    }

    #[must_use]
    pub fn with_opener(mut self, opener: Arc<dyn ExternalOpener>) -> Self {
        self.opener = opener;
        self
    }

    /// Register a listener for every event.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(&NotifierEvent) + Send + Sync + 'static,
    {
        self.events.subscribe(None, Box::new(listener));
    }

    /// Register a listener for one kind of event.
    pub fn on<F>(&mut self, kind: EventKind, listener: F)
    where
        F: Fn(&NotifierEvent) + Send + Sync + 'static,
    {
        self.events.subscribe(Some(kind), Box::new(listener));
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn current_version(&self) -> &Version {
        &self.current_version
    }

    #[must_use]
    pub fn repository(&self) -> Option<&str> {
        self.repository.as_deref()
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Apply `options`, wait for the host to be ready, then run one check.
    ///
    /// # Errors
    /// Returns an error for configuration problems: no usable repository or a
    /// release tag that is not a semantic version. Network failures are
    /// reported through events and yield [`CheckOutcome::FetchFailed`].
    pub async fn update_notification(
        &mut self,
        options: Option<Options>,
    ) -> Result<CheckOutcome, NotifierError> {
        if let Some(options) = options {
            self.load_options(options);
        }
        self.load_translation();

        self.host.wait_until_ready().await;
        self.check_for_updates().await
    }

    /// Run [`Self::update_notification`] on a Tokio task.
    pub fn spawn(
        mut self,
        options: Option<Options>,
    ) -> tokio::task::JoinHandle<Result<CheckOutcome, NotifierError>> {
        tokio::spawn(async move { self.update_notification(options).await })
    }

    fn load_options(&mut self, options: Options) {
        if let Some(repository) = options.repository.filter(|r| !r.trim().is_empty()) {
            self.repository = Some(repository.trim().to_string());
        }
        if let Some(token) = options.token {
            self.token = Some(token);
        }
        if let Some(debug) = options.debug {
            self.debug = debug;
        }
        if let Some(enabled) = options.enable_pre_release {
            self.enable_pre_release = enabled;
        }
        if let Some(enabled) = options.enable_new_version_available_dialog {
            self.enable_new_version_available_dialog = enabled;
        }
        if let Some(enabled) = options.enable_error_dialog {
            self.enable_error_dialog = enabled;
        }
        if let Some(enabled) = options.enable_latest_version_dialog {
            self.enable_latest_version_dialog = enabled;
        }
        if let Some(language) = options.language {
            self.language = language;
        }
        match options.logger {
            Some(LoggerSetting::Custom(logger)) => self.logger = logger,
            Some(LoggerSetting::Disabled) => self.logger = Arc::new(NoOpLogger),
            None => {}
        }
    }

    fn load_translation(&mut self) {
        self.messages = self.language.messages();
    }

    /// Run one check with the current configuration, without waiting for the
    /// host.
    ///
    /// # Errors
    /// See [`Self::update_notification`].
    pub async fn check_for_updates(&mut self) -> Result<CheckOutcome, NotifierError> {
        let messages = self.messages;

        if !self.host.is_packaged() && !self.debug {
            self.logger.info(messages.warn.skip_check_for_updates);
            return Ok(CheckOutcome::Skipped(SkipReason::Development));
        }

        let repository = if let Some(repository) = self.repository.clone() {
            repository
        } else {
            let repository = self.repository_from_package()?;
            self.repository = Some(repository.clone());
            repository
        };

        self.events.emit(&NotifierEvent::CheckingForUpdate);
        self.logger.info(messages.info.checking_for_update);
        self.logger.debug(&format!("Fetching releases for {repository}"));

        let latest_release = match self
            .releases
            .latest_release(&repository, self.token.as_deref())
            .await
        {
            Ok(Some(release)) => release,
            Ok(None) => {
                self.logger.info(messages.info.no_releases);
                return Ok(CheckOutcome::NoReleases);
            }
            Err(error) => {
                let error = NotifierError::from(error);
                let details = error.to_string();
                self.report_error(error, &details);
                self.logger.error(messages.error.checking_update);

                if self.enable_error_dialog {
                    self.show_dialog(messages.error.checking_update, DialogKind::Error)
                        .await;
                }
                return Ok(CheckOutcome::FetchFailed);
            }
        };

        let Some(latest_version) = parse_version(&latest_release.tag_name) else {
            let error = NotifierError::LatestVersionInvalid {
                tag: latest_release.tag_name.clone(),
            };
            self.report_error(
                error.clone(),
                &fill(
                    messages.error.last_version_invalid,
                    &[latest_release.tag_name.as_str()],
                ),
            );
            return Err(error);
        };

        if latest_release.prerelease && !self.enable_pre_release {
            self.logger.info(messages.info.skipping_pre_release);
            return Ok(CheckOutcome::Skipped(SkipReason::PreRelease));
        }

        let info = UpdateInfo {
            current_version: display_version(&self.current_version),
            version: display_version(&latest_version),
            description_release: latest_release.body.clone().unwrap_or_default(),
            pre_release: latest_release.prerelease,
            release_url: latest_release.html_url.clone(),
        };

        match compare(&latest_version, &self.current_version) {
            VersionComparison::Newer => {
                self.events
                    .emit(&NotifierEvent::UpdateAvailable(info.clone()));
                self.logger.info(&fill(
                    messages.info.new_version_available_message,
                    &[info.version.as_str()],
                ));

                if self.enable_new_version_available_dialog {
                    self.show_update_dialog(&latest_release).await;
                }
                Ok(CheckOutcome::UpdateAvailable(info))
            }
            VersionComparison::Latest => {
                self.events
                    .emit(&NotifierEvent::ThisIsLastUpdate(info.clone()));
                self.logger.info(messages.info.running_last_version);

                if self.enable_latest_version_dialog {
                    self.show_dialog(messages.info.running_last_version, DialogKind::Info)
                        .await;
                }
                Ok(CheckOutcome::ThisIsLastUpdate(info))
            }
            VersionComparison::NotAvailable => {
                self.events
                    .emit(&NotifierEvent::UpdateNotAvailable(info.clone()));
                self.logger.info(messages.warn.update_not_available);
                Ok(CheckOutcome::UpdateNotAvailable(info))
            }
        }
    }

    fn repository_from_package(&self) -> Result<String, NotifierError> {
        let declared = self.host.package_repository();
        if let Some(repository) = declared.as_deref().and_then(parse_github_repository) {
            return Ok(repository.to_string());
        }

        let error = NotifierError::RepositoryNotFound { found: declared };
        self.report_error(error.clone(), self.messages.error.url_not_found);
        Err(error)
    }

    async fn show_update_dialog(&self, release: &GitHubRelease) {
        let messages = self.messages;
        let message_box = MessageBox {
            title: self.host.name().to_string(),
            kind: DialogKind::Info,
            message: messages.dialog_new_version_available_message.to_string(),
            detail: fill(
                messages.dialog_new_version_available_detail.trim(),
                &[self.host.version(), release.tag_name.as_str()],
            ),
            buttons: vec![messages.download.to_string(), messages.later.to_string()],
            default_id: DOWNLOAD_BUTTON,
            cancel_id: 1,
        };

        match self.dialogs.show_message_box(message_box).await {
            Ok(DOWNLOAD_BUTTON) => {
                if let Err(error) = self.opener.open_external(&release.html_url) {
                    self.logger.error(&format!(
                        "Failed to open {}: {error}",
                        release.html_url
                    ));
                }
            }
            Ok(_) => {}
            Err(error) => self.logger.error(&error.to_string()),
        }
    }

    async fn show_dialog(&self, detail: &str, kind: DialogKind) {
        let message_box = MessageBox {
            title: self.host.name().to_string(),
            kind,
            message: self.messages.update_checker.to_string(),
            detail: detail.to_string(),
            buttons: vec![self.messages.close.to_string()],
            default_id: 0,
            cancel_id: 0,
        };

        if let Err(error) = self.dialogs.show_message_box(message_box).await {
            self.logger.error(&error.to_string());
        }
    }

    fn report_error(&self, error: NotifierError, message: &str) {
        self.events.emit(&NotifierEvent::Error(error));
        self.logger.error(message);
    }
}
