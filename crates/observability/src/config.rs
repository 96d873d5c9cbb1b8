//! Configuration for logging

use serde::{Deserialize, Serialize};

const DEFAULT_SERVICE_NAME: &str = "palettize";

fn default_service_name() -> String {
    DEFAULT_SERVICE_NAME.to_string()
}

fn default_true() -> bool {
    true
}

/// Observability configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Service name recorded with the startup event (e.g. "palettize")
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Enable console/log output
    #[serde(default = "default_true")]
    pub enable_console: bool,

    /// Emit ANSI colors on the console
    #[serde(default = "default_true")]
    pub ansi: bool,

    /// Log level filter (e.g., "info", "debug", "palettize_core=trace")
    /// Defaults to `RUST_LOG`, then "info", if not set
    pub log_level: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            enable_console: true,
            ansi: true,
            log_level: None,
        }
    }
}

impl ObservabilityConfig {
    /// Create a new configuration with service name
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    /// Enable or disable console output
    pub fn with_console(mut self, enable: bool) -> Self {
        self.enable_console = enable;
        self
    }

    /// Enable or disable ANSI colors
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.ansi = enable;
        self
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Build from environment variables
    ///
    /// Reads:
    /// - `PALETTIZE_SERVICE_NAME` → service_name
    /// - `PALETTIZE_LOG` or `RUST_LOG` → log_level
    /// - `NO_COLOR` → disables ansi
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// [`from_env`](Self::from_env) over an arbitrary lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let service_name = lookup("PALETTIZE_SERVICE_NAME").unwrap_or_else(default_service_name);

        let log_level = lookup("PALETTIZE_LOG").or_else(|| lookup("RUST_LOG"));

        Self {
            service_name,
            enable_console: true,
            ansi: lookup("NO_COLOR").is_none(),
            log_level,
        }
    }
}
