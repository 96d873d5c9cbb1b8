//! Error types for scheme fetching.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a fetch. A single failing file download is not one of
/// these; it is recorded in the download report instead.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid GitHub URL format: {0}")]
    InvalidRepoUrl(String),

    #[error("No commits found for path {path} on ref {reference}")]
    NoCommits { path: String, reference: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Download task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl FetchError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FetchError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
