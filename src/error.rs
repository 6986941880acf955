use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Config file {} not found", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Config file {} could not be read: {1}", .0.display())]
    ConfigUnreadable(PathBuf, #[source] std::io::Error),

    #[error("{0} not found in config")]
    MissingKey(&'static str),

    #[error("Invalid token: {0}")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Client is not authenticated")]
    NotAuthenticated,

    #[error("Lokalise API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Download failed: {0}")]
    DownloadError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Archive error: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl SyncError {
    /// Errors caused by the local config file. These are reported and the
    /// program exits cleanly; everything else aborts the run.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            SyncError::ConfigNotFound(_)
                | SyncError::ConfigUnreadable(..)
                | SyncError::MissingKey(_)
        )
    }
}
