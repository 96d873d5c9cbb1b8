//! Palettize Fetch: base16 scheme downloader.
//!
//! Resolves the newest commit of a GitHub scheme directory, skips the work
//! when that commit is already on disk, and otherwise downloads every `.yaml`
//! file into `<output_dir>/<hash>/themes` with bounded concurrency. One bad
//! file never aborts the batch.
//!
//! ```rust,no_run
//! use palettize_fetch::{fetch_and_download, FetchConfig, FetchOutcome};
//!
//! #[tokio::main]
//! async fn main() -> palettize_fetch::Result<()> {
//!     let config = FetchConfig::default().output_dir("out").limit(Some(5));
//!     match fetch_and_download(config, |_event| {}).await? {
//!         FetchOutcome::AlreadyDownloaded { dir, .. } => println!("up to date: {}", dir.display()),
//!         FetchOutcome::Downloaded { report, .. } => println!("{} files", report.downloaded.len()),
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod repo;

pub use client::{
    already_downloaded, fetch_and_download, themes_dir, DownloadReport, FetchEvent, FetchOutcome,
    FileOutcome, SchemeFetcher, SchemeFile,
};
pub use config::FetchConfig;
pub use error::{FetchError, Result};
pub use repo::GitHubRepo;
