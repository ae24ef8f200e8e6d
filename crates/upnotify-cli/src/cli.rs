use std::path::PathBuf;

use clap::Parser;
use upnotify::{Language, Options};

/// Check GitHub for a newer release of an application.
#[derive(Debug, Parser)]
#[command(name = "upnotify", version, about)]
pub struct Cli {
    /// GitHub repository as `owner/repo` or any GitHub URL.
    #[arg(short, long)]
    pub repository: Option<String>,

    /// GitHub API access token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Version of the running application [default: this tool's version].
    #[arg(short = 'c', long)]
    pub current_version: Option<String>,

    /// Display name used as the dialog title.
    #[arg(long, default_value = "upnotify")]
    pub app_name: String,

    /// Read the repository from the `package.json` in this directory.
    #[arg(long)]
    pub app_dir: Option<PathBuf>,

    /// Report pre-releases as updates.
    #[arg(long)]
    pub pre_release: bool,

    /// Show native dialogs for the result.
    #[arg(long)]
    pub dialogs: bool,

    /// Message language (`en`, `pt-br`).
    #[arg(short, long, value_parser = parse_language)]
    pub language: Option<Language>,

    /// Settings file [default: `$UPNOTIFY_HOME` or the platform config directory].
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Write the effective notifier options back to the settings file.
    #[arg(long)]
    pub save_settings: bool,

    /// Log at debug level.
    #[arg(long)]
    pub debug_logging: bool,

    /// Also log to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

#[allow(clippy::unnecessary_wraps)]
fn parse_language(value: &str) -> Result<Language, String> {
    Ok(Language::from_code(value))
}

impl Cli {
    /// Options given on the command line; unset flags leave settings alone.
    pub fn options(&self) -> Options {
        let dialogs = self.dialogs.then_some(true);
        Options {
            repository: self.repository.clone(),
            token: self.token.clone(),
            enable_pre_release: self.pre_release.then_some(true),
            enable_new_version_available_dialog: dialogs,
            enable_error_dialog: dialogs,
            enable_latest_version_dialog: dialogs,
            language: self.language,
            ..Options::default()
        }
    }
}
