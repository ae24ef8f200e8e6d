mod cli;
mod logging;
mod settings;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use upnotify::{CheckOutcome, NotifierEvent, ProcessHost, UpdateCheckerNotifier};
use upnotify_platform::{AppPaths, PackageManifest};

use crate::cli::Cli;
use crate::settings::CliSettings;

const EXIT_FETCH_FAILED: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let (settings, settings_error) = match CliSettings::load(cli.settings.as_deref()) {
        Ok(settings) => (settings, None),
        Err(error) => (CliSettings::default(), Some(error)),
    };

    let log_path = AppPaths::new().ok().map(|paths| paths.log_file());
    logging::init_logging(
        log_path.as_deref(),
        cli.verbose,
        cli.debug_logging || settings.debug_logging,
        settings.max_log_size_bytes,
    );
    if let Some(error) = settings_error {
        log::warn!("Ignoring settings: {error}");
    }

    let host = match build_host(&cli) {
        Ok(host) => host,
        Err(message) => {
            eprintln!("error: {message}");
            return ExitCode::FAILURE;
        }
    };

    let options = settings.effective_options(cli.options());
    if cli.save_settings {
        save_settings(&cli, &settings, &options);
    }

    let mut notifier = match UpdateCheckerNotifier::new(Arc::new(host)) {
        Ok(notifier) => notifier,
        Err(error) => {
            eprintln!("error: {error}");
            return ExitCode::FAILURE;
        }
    };
    notifier.subscribe(print_event);

    match notifier.update_notification(Some(options)).await {
        Ok(CheckOutcome::FetchFailed) => ExitCode::from(EXIT_FETCH_FAILED),
        Ok(CheckOutcome::Skipped(reason)) => {
            println!("skipped: {reason:?}");
            ExitCode::SUCCESS
        }
        Ok(CheckOutcome::NoReleases) => {
            println!("no releases published");
            ExitCode::SUCCESS
        }
        Ok(_) => ExitCode::SUCCESS,
        // Already reported through the error event.
        Err(_) => ExitCode::FAILURE,
    }
}

fn build_host(cli: &Cli) -> Result<ProcessHost, String> {
    let (name, version, repository) = match &cli.app_dir {
        Some(app_dir) => {
            let manifest = PackageManifest::load(app_dir).map_err(|e| e.to_string())?;
            let repository = manifest.repository_url().map(str::to_string);
            (
                manifest.name.unwrap_or_else(|| cli.app_name.clone()),
                manifest.version.unwrap_or_default(),
                repository,
            )
        }
        None => (
            cli.app_name.clone(),
            env!("CARGO_PKG_VERSION").to_string(),
            Some(env!("CARGO_PKG_REPOSITORY").to_string()),
        ),
    };

    let version = cli.current_version.clone().unwrap_or(version);
    let mut host = ProcessHost::new(name, version).packaged(true);
    if let Some(repository) = repository.filter(|r| !r.is_empty()) {
        host = host.repository(repository);
    }
    Ok(host)
}

fn save_settings(cli: &Cli, settings: &CliSettings, options: &upnotify::Options) {
    let path = match &cli.settings {
        Some(path) => path.clone(),
        None => match AppPaths::new() {
            Ok(paths) => paths.settings_file(),
            Err(error) => {
                log::warn!("Cannot save settings: {error}");
                return;
            }
        },
    };

    let updated = CliSettings {
        notifier: upnotify::Options {
            token: None,
            ..options.clone()
        },
        ..settings.clone()
    };
    if let Err(error) = updated.save(&path) {
        log::warn!("Failed to save settings to {}: {error}", path.display());
    }
}

fn print_event(event: &NotifierEvent) {
    match event {
        NotifierEvent::CheckingForUpdate => println!("checking for update..."),
        NotifierEvent::UpdateAvailable(info) => {
            println!(
                "update available: {} -> {} ({})",
                info.current_version, info.version, info.release_url
            );
        }
        NotifierEvent::UpdateNotAvailable(info) => {
            println!("update not available (latest release {})", info.version);
        }
        NotifierEvent::ThisIsLastUpdate(info) => {
            println!("running the latest version ({})", info.current_version);
        }
        NotifierEvent::Error(error) => eprintln!("error: {error}"),
    }
}
