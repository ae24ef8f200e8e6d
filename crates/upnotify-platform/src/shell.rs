/// Opens URLs outside the application, typically in the default browser.
pub trait ExternalOpener: Send + Sync {
    /// # Errors
    /// Returns an error when no handler could be launched for `url`.
    fn open_external(&self, url: &str) -> std::io::Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl ExternalOpener for SystemOpener {
    fn open_external(&self, url: &str) -> std::io::Result<()> {
        log::debug!("Opening {url} in the default browser");
        open::that(url)
    }
}
