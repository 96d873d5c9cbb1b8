//! Error types for palette, theme and template operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading sources or materializing templates.
///
/// Color normalization and distance computation never produce these: malformed
/// literals degrade to sentinel values instead.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested template file does not exist (usually a wrong path)
    #[error("Template file not found: {}", .path.display())]
    TemplateNotFound { path: PathBuf },

    /// A theme or palette source file does not exist
    #[error("{kind} file not found: {}", .path.display())]
    SourceNotFound { kind: &'static str, path: PathBuf },

    /// A template references a name that is neither a slot nor theme metadata
    #[error("Unresolved placeholder: {{{{ {name} }}}}")]
    UnresolvedPlaceholder { name: String },

    /// Palette document is structurally valid YAML but not a usable palette
    #[error("Invalid palette: {0}")]
    InvalidPalette(String),

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML in {}: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid JSON{}: {source}", .path.as_ref().map(|p| format!(" in {}", p.display())).unwrap_or_default())]
    Json {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { path: None, source }
    }
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Error::Json {
            path: Some(path.into()),
            source,
        }
    }
}

/// Result type for palettize operations.
pub type Result<T> = std::result::Result<T, Error>;
