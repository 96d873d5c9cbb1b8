//! Configuration for the scheme fetcher.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_REPO_URL: &str = "https://github.com/tinted-theming/schemes/tree/spec-0.11/base16";
pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_CONCURRENCY: usize = 10;

/// Where to fetch schemes from and how hard to hit the server.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchConfig {
    /// GitHub tree URL of the scheme directory
    pub repo_url: String,
    /// GitHub REST API base (overridden in tests)
    pub api_base: String,
    /// Base output directory; files land in `<output_dir>/<hash>/themes`
    pub output_dir: PathBuf,
    /// Maximum downloads in flight (at least 1)
    pub concurrency: usize,
    /// Only download the first `limit` files
    pub limit: Option<usize>,
    /// Timeout for the commit and listing requests
    pub list_timeout: Duration,
    /// Timeout for each file download
    pub download_timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            repo_url: DEFAULT_REPO_URL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            output_dir: PathBuf::from("out"),
            concurrency: DEFAULT_CONCURRENCY,
            limit: None,
            list_timeout: Duration::from_secs(10),
            download_timeout: Duration::from_secs(30),
        }
    }
}

impl FetchConfig {
    /// Create config from environment variables.
    ///
    /// Optional: `PALETTIZE_FETCH_REPO`, `PALETTIZE_FETCH_API`,
    /// `PALETTIZE_FETCH_CONCURRENCY`
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("PALETTIZE_FETCH_REPO") {
            config.repo_url = url;
        }
        if let Ok(api) = std::env::var("PALETTIZE_FETCH_API") {
            config.api_base = api;
        }
        if let Some(n) = std::env::var("PALETTIZE_FETCH_CONCURRENCY")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config = config.concurrency(n);
        }
        config
    }

    pub fn repo_url(mut self, url: impl Into<String>) -> Self {
        self.repo_url = url.into();
        self
    }

    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Clamped to at least 1.
    pub fn concurrency(mut self, n: usize) -> Self {
        self.concurrency = n.max(1);
        self
    }

    /// `Some(0)` means no limit.
    pub fn limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit.filter(|n| *n > 0);
        self
    }

    pub fn list_timeout(mut self, timeout: Duration) -> Self {
        self.list_timeout = timeout;
        self
    }

    pub fn download_timeout(mut self, timeout: Duration) -> Self {
        self.download_timeout = timeout;
        self
    }
}
