mod dialog;
mod host;
mod manifest;
mod paths;
mod shell;

pub use dialog::{DialogError, DialogKind, DialogPresenter, MessageBox, NativeDialogs};
pub use host::{HostApp, ProcessHost, ReadySignal};
pub use manifest::{ManifestError, PackageManifest, RepositoryField};
pub use paths::{AppPaths, AppPathsError, HOME_ENV};
pub use shell::{ExternalOpener, SystemOpener};
