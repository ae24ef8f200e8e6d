//! Pluggable logging for notifier messages.

const TARGET: &str = "upnotify";

/// Receives the notifier's human-readable log lines.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);

    fn warn(&self, message: &str);

    fn error(&self, message: &str);

    fn debug(&self, _message: &str) {}
}

/// Forwards to the `log` crate under the `upnotify` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFacade;

impl Logger for LogFacade {
    fn info(&self, message: &str) {
        log::info!(target: TARGET, "{message}");
    }

    fn warn(&self, message: &str) {
        log::warn!(target: TARGET, "{message}");
    }

    fn error(&self, message: &str) {
        log::error!(target: TARGET, "{message}");
    }

    fn debug(&self, message: &str) {
        log::debug!(target: TARGET, "{message}");
    }
}

/// Discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl Logger for NoOpLogger {
    fn info(&self, _message: &str) {}

    fn warn(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}
