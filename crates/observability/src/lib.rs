//! Palettize Observability - logging setup shared by the palettize binaries
//!
//! Installs a `tracing` subscriber with an `EnvFilter` and a console `fmt`
//! layer writing to stderr, so stdout stays free for command output.
//!
//! # Quick Start
//!
//! ```no_run
//! use palettize_observability::{init, ObservabilityConfig};
//!
//! let config = ObservabilityConfig::new("palettize").with_log_level("debug");
//! init(config)?;
//!
//! // Or initialize from environment variables
//! // palettize_observability::init_from_env()?;
//!
//! tracing::info!("Service started");
//! # Ok::<(), palettize_observability::ObservabilityError>(())
//! ```
//!
//! # Environment Variables
//!
//! - `PALETTIZE_SERVICE_NAME` - Service name
//! - `PALETTIZE_LOG` or `RUST_LOG` - Log level filter
//! - `NO_COLOR` - Disable ANSI colors when set

pub mod config;
pub mod error;
pub mod telemetry;
pub mod tracing;

pub use config::ObservabilityConfig;
pub use error::ObservabilityError;
pub use telemetry::{init, init_from_env};
pub use crate::tracing::{record_duration, record_error};

// Macros are exported via #[macro_export] as palettize_observability::command_span!()
