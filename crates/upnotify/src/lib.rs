//! Update notifications for desktop applications.
//!
//! [`UpdateCheckerNotifier`] asks GitHub for the newest release of the host
//! application, compares it with the running version, and reports the result
//! through [`NotifierEvent`]s, the configured [`Logger`], and optional native
//! dialogs.

mod error;
pub mod events;
pub mod logger;
mod notifier;
mod options;

pub use error::NotifierError;
pub use events::{EventKind, NotifierEvent, UpdateInfo};
pub use logger::{LogFacade, Logger, NoOpLogger};
pub use notifier::{CheckOutcome, SkipReason, UpdateCheckerNotifier};
pub use options::{LoggerSetting, Options, OptionsError};

pub use upnotify_core::{GitHubRelease, GitHubReleaseClient, Language, ReleaseError, ReleaseSource};
pub use upnotify_platform::{
    DialogError, DialogKind, DialogPresenter, ExternalOpener, HostApp, MessageBox, NativeDialogs,
    ProcessHost, ReadySignal, SystemOpener,
};
