use thiserror::Error;

use romshelf_frontend::FrontendError;

/// Errors that can occur while scanning a ROM library.
///
/// Per-folder and per-file problems are logged and skipped rather than
/// returned; only failures that make the whole root unusable surface here.
#[derive(Debug, Error)]
pub enum ScanError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The library root exists but cannot be listed
    #[error("Cannot read library root {path}: {source}")]
    RootUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Metadata could not be read
    #[error("Metadata error: {0}")]
    Frontend(#[from] FrontendError),

    /// Settings file could not be read or written
    #[error("Settings error: {0}")]
    Settings(String),

    /// A scan task panicked or was cancelled
    #[error("Scan task failed: {0}")]
    Task(String),
}

impl ScanError {
    pub fn root_unreadable(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::RootUnreadable {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }

    pub fn task(msg: impl Into<String>) -> Self {
        Self::Task(msg.into())
    }
}
