//! Error types for observability crate

use thiserror::Error;

/// Errors that can occur during observability initialization
#[derive(Error, Debug)]
pub enum ObservabilityError {
    /// A global subscriber is already installed, or installing one failed
    #[error("Failed to initialize observability: {0}")]
    InitFailed(String),

    /// Configuration error (e.g. an unparsable filter directive)
    #[error("Configuration error: {0}")]
    Config(String),
}
