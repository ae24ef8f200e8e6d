use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, SharedLogger, TermLogger,
    TerminalMode, WriteLogger,
};
use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// Path the previous log is moved to once the current one grows too large.
fn rotated_path(log_path: &Path) -> PathBuf {
    let mut name = OsString::from(log_path.as_os_str());
    name.push(".1");
    PathBuf::from(name)
}

/// Move `log_path` aside when it exceeds `max_log_size`, replacing any
/// earlier rotated file. Returns whether the file was rotated.
fn rotate_if_oversized(log_path: &Path, max_log_size: u64) -> io::Result<bool> {
    match std::fs::metadata(log_path) {
        Ok(metadata) if metadata.len() > max_log_size => {
            std::fs::rename(log_path, rotated_path(log_path))?;
            Ok(true)
        }
        Ok(_) => Ok(false),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(error) => Err(error),
    }
}

fn open_log_file(log_path: &Path) -> io::Result<File> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(log_path)
}

/// Install the global logger: a file logger at `log_path` (when given) and,
/// with `verbose`, a terminal logger on stderr.
pub fn init_logging(log_path: Option<&Path>, verbose: bool, debug_enabled: bool, max_log_size: u64) {
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .add_filter_allow_str("upnotify")
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    if verbose {
        loggers.push(TermLogger::new(
            LevelFilter::Debug,
            config.clone(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }

    let mut rotated = false;
    if let Some(log_path) = log_path {
        rotated = rotate_if_oversized(log_path, max_log_size).unwrap_or(false);
        match open_log_file(log_path) {
            Ok(file) => loggers.push(WriteLogger::new(LevelFilter::Debug, config, file)),
            Err(error) if verbose => {
                eprintln!("warning: cannot open log file {}: {error}", log_path.display());
            }
            Err(_) => {}
        }
    }

    if loggers.is_empty() {
        return;
    }
    let _ = CombinedLogger::init(loggers);

    set_logging_enabled(debug_enabled);

    if let Some(log_path) = log_path {
        log::debug!("Logging initialized, log file: {}", log_path.display());
        if rotated {
            log::debug!("Previous log moved to {}", rotated_path(log_path).display());
        }
    }
}

pub fn set_logging_enabled(debug_enabled: bool) {
    if debug_enabled {
        log::set_max_level(log::LevelFilter::Debug);
    } else {
        log::set_max_level(log::LevelFilter::Info);
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn oversized_log_is_moved_aside() {
        let temp_dir = tempfile::tempdir().expect("temporary directory should be created");
        let log_path = temp_dir.path().join("upnotify.log");
        std::fs::write(rotated_path(&log_path), "older run\n").expect("old rotation written");
        std::fs::write(&log_path, "line-1\nline-2\nline-3\n").expect("log written");

        let rotated = rotate_if_oversized(&log_path, 10).expect("rotation succeeds");

        assert!(rotated);
        assert!(!log_path.exists());
        let previous =
            std::fs::read_to_string(temp_dir.path().join("upnotify.log.1")).expect("readable");
        assert_eq!(previous, "line-1\nline-2\nline-3\n");
    }

    #[test]
    fn small_or_missing_log_is_left_alone() {
        let temp_dir = tempfile::tempdir().expect("temporary directory should be created");
        let log_path = temp_dir.path().join("upnotify.log");

        assert!(!rotate_if_oversized(&log_path, 10).expect("missing file is fine"));

        std::fs::write(&log_path, "short\n").expect("log written");
        assert!(!rotate_if_oversized(&log_path, 1024).expect("rotation check succeeds"));
        assert_eq!(std::fs::read_to_string(&log_path).expect("readable"), "short\n");
        assert!(!rotated_path(&log_path).exists());
    }

    #[test]
    fn log_file_is_appended_and_parents_created() {
        let temp_dir = tempfile::tempdir().expect("temporary directory should be created");
        let log_path = temp_dir.path().join("data").join("upnotify.log");

        open_log_file(&log_path)
            .and_then(|mut file| file.write_all(b"first run\n"))
            .expect("first write succeeds");
        open_log_file(&log_path)
            .and_then(|mut file| file.write_all(b"second run\n"))
            .expect("second write succeeds");

        let contents = std::fs::read_to_string(&log_path).expect("readable");
        assert_eq!(contents, "first run\nsecond run\n");
    }

    #[test]
    fn set_logging_enabled_updates_global_level() {
        set_logging_enabled(true);
        assert_eq!(log::max_level(), log::LevelFilter::Debug);

        set_logging_enabled(false);
        assert_eq!(log::max_level(), log::LevelFilter::Info);
    }
}
