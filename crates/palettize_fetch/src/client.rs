//! GitHub API client for listing and downloading scheme files.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::Semaphore;

use crate::config::FetchConfig;
use crate::error::{FetchError, Result};
use crate::repo::GitHubRepo;

const USER_AGENT: &str = concat!("palettize/", env!("CARGO_PKG_VERSION"));
const SHORT_HASH_LEN: usize = 7;
const SCHEME_EXTENSION: &str = "yaml";

/// A scheme file found in the listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SchemeFile {
    pub name: String,
    pub download_url: String,
}

#[derive(Deserialize)]
struct CommitEntry {
    sha: String,
}

#[derive(Deserialize)]
struct ContentEntry {
    name: String,
    #[serde(rename = "type")]
    kind: String,
    download_url: Option<String>,
}

/// Result of one file download.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    Downloaded { name: String, path: PathBuf },
    Failed { name: String, error: String },
}

impl FileOutcome {
    pub fn name(&self) -> &str {
        match self {
            FileOutcome::Downloaded { name, .. } | FileOutcome::Failed { name, .. } => name,
        }
    }
}

/// Per-file results of a batch, in listing order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DownloadReport {
    pub downloaded: Vec<PathBuf>,
    pub failed: Vec<(String, String)>,
}

impl DownloadReport {
    pub fn total(&self) -> usize {
        self.downloaded.len() + self.failed.len()
    }
}

/// Progress notifications from [`fetch_and_download`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchEvent {
    CommitResolved { hash: String },
    Listed { found: usize, selected: usize },
    File(FileOutcome),
}

/// How a fetch ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FetchOutcome {
    AlreadyDownloaded {
        hash: String,
        dir: PathBuf,
    },
    Downloaded {
        hash: String,
        dir: PathBuf,
        found: usize,
        report: DownloadReport,
    },
}

/// Lists and downloads `.yaml` scheme files from one GitHub directory.
pub struct SchemeFetcher {
    config: FetchConfig,
    repo: GitHubRepo,
    api: Client,
    downloads: Client,
}

impl SchemeFetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let repo = GitHubRepo::parse(&config.repo_url)?;
        let api = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.list_timeout)
            .build()?;
        let downloads = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.download_timeout)
            .build()?;
        Ok(Self {
            config,
            repo,
            api,
            downloads,
        })
    }

    pub fn repo(&self) -> &GitHubRepo {
        &self.repo
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Short hash of the newest commit touching the scheme directory.
    pub async fn latest_commit(&self) -> Result<String> {
        let commits: Vec<CommitEntry> = self
            .api
            .get(self.repo.commits_url(&self.config.api_base))
            .query(&[
                ("path", self.repo.path.as_str()),
                ("sha", self.repo.reference.as_str()),
                ("per_page", "1"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let commit = commits.into_iter().next().ok_or_else(|| FetchError::NoCommits {
            path: self.repo.path.clone(),
            reference: self.repo.reference.clone(),
        })?;
        Ok(commit.sha.chars().take(SHORT_HASH_LEN).collect())
    }

    /// Every `.yaml` file in the scheme directory.
    pub async fn list_schemes(&self) -> Result<Vec<SchemeFile>> {
        let entries: Vec<ContentEntry> = self
            .api
            .get(self.repo.contents_url(&self.config.api_base))
            .query(&[("ref", self.repo.reference.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(entries
            .into_iter()
            .filter(|e| e.kind == "file" && e.name.ends_with(".yaml"))
            .filter_map(|e| {
                e.download_url.map(|download_url| SchemeFile {
                    name: e.name,
                    download_url,
                })
            })
            .collect())
    }

    /// Download `files` into `dir` with at most `concurrency` requests in
    /// flight. A failing file is logged and reported; the rest continue.
    pub async fn download_all<F>(
        &self,
        files: Vec<SchemeFile>,
        dir: &Path,
        on_progress: F,
    ) -> Result<DownloadReport>
    where
        F: Fn(&FileOutcome) + Send + Sync + 'static,
    {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| FetchError::io(dir, e))?;

        let semaphore = Arc::new(Semaphore::new(self.config.concurrency.max(1)));
        let on_progress = Arc::new(on_progress);

        let handles: Vec<_> = files
            .into_iter()
            .map(|file| {
                let semaphore = Arc::clone(&semaphore);
                let on_progress = Arc::clone(&on_progress);
                let client = self.downloads.clone();
                let path = dir.join(&file.name);
                tokio::spawn(async move {
                    let outcome = match semaphore.acquire_owned().await {
                        Ok(_permit) => download_one(&client, &file, path).await,
                        Err(e) => FileOutcome::Failed {
                            name: file.name,
                            error: e.to_string(),
                        },
                    };
                    on_progress(&outcome);
                    outcome
                })
            })
            .collect();

        let mut report = DownloadReport::default();
        for outcome in futures::future::join_all(handles).await {
            match outcome? {
                FileOutcome::Downloaded { path, .. } => report.downloaded.push(path),
                FileOutcome::Failed { name, error } => report.failed.push((name, error)),
            }
        }
        Ok(report)
    }
}

async fn download_one(client: &Client, file: &SchemeFile, path: PathBuf) -> FileOutcome {
    match fetch_bytes(client, &file.download_url).await {
        Ok(bytes) => match tokio::fs::write(&path, &bytes).await {
            Ok(()) => {
                tracing::debug!(file = %file.name, bytes = bytes.len(), "Downloaded scheme");
                FileOutcome::Downloaded {
                    name: file.name.clone(),
                    path,
                }
            }
            Err(e) => failed(file, FetchError::io(&path, e)),
        },
        Err(e) => failed(file, e),
    }
}

async fn fetch_bytes(client: &Client, url: &str) -> Result<Vec<u8>> {
    let bytes = client.get(url).send().await?.error_for_status()?.bytes().await?;
    Ok(bytes.to_vec())
}

fn failed(file: &SchemeFile, error: FetchError) -> FileOutcome {
    tracing::warn!(file = %file.name, error = %error, "Error downloading scheme");
    FileOutcome::Failed {
        name: file.name.clone(),
        error: error.to_string(),
    }
}

/// `<output_dir>/<hash>/themes`
pub fn themes_dir(output_dir: &Path, hash: &str) -> PathBuf {
    output_dir.join(hash).join("themes")
}

/// Whether schemes for `hash` are already on disk.
pub fn already_downloaded(output_dir: &Path, hash: &str) -> bool {
    let Ok(entries) = std::fs::read_dir(themes_dir(output_dir, hash)) else {
        return false;
    };
    entries
        .flatten()
        .any(|entry| entry.path().extension().is_some_and(|ext| ext == SCHEME_EXTENSION))
}

/// Resolve the latest commit, skip if already present, otherwise list and
/// download every scheme (up to `limit`).
pub async fn fetch_and_download<F>(config: FetchConfig, on_event: F) -> Result<FetchOutcome>
where
    F: Fn(FetchEvent) + Send + Sync + 'static,
{
    let fetcher = SchemeFetcher::new(config)?;
    tracing::info!(repo = %fetcher.repo(), "Fetching schemes");

    let hash = fetcher.latest_commit().await?;
    on_event(FetchEvent::CommitResolved { hash: hash.clone() });

    let output_dir = fetcher.config().output_dir.clone();
    let dir = themes_dir(&output_dir, &hash);
    if already_downloaded(&output_dir, &hash) {
        tracing::info!(hash = %hash, "Schemes already downloaded");
        return Ok(FetchOutcome::AlreadyDownloaded { hash, dir });
    }

    let mut files = fetcher.list_schemes().await?;
    let found = files.len();
    // Zero means no limit, even when the field was set directly.
    if let Some(limit) = fetcher.config().limit.filter(|n| *n > 0) {
        files.truncate(limit);
    }
    on_event(FetchEvent::Listed {
        found,
        selected: files.len(),
    });

    let report = fetcher
        .download_all(files, &dir, move |outcome| on_event(FetchEvent::File(outcome.clone())))
        .await?;
    tracing::info!(
        downloaded = report.downloaded.len(),
        failed = report.failed.len(),
        dir = %dir.display(),
        "Download complete"
    );

    Ok(FetchOutcome::Downloaded {
        hash,
        dir,
        found,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_already_downloaded() {
        let dir = TempDir::new().unwrap();
        assert!(!already_downloaded(dir.path(), "abc1234"));

        let themes = themes_dir(dir.path(), "abc1234");
        std::fs::create_dir_all(&themes).unwrap();
        assert!(!already_downloaded(dir.path(), "abc1234"));

        std::fs::write(themes.join("notes.txt"), "x").unwrap();
        assert!(!already_downloaded(dir.path(), "abc1234"));

        std::fs::write(themes.join("nord.yaml"), "name: Nord").unwrap();
        assert!(already_downloaded(dir.path(), "abc1234"));
    }

    #[test]
    fn test_invalid_repo_rejected_early() {
        let config = FetchConfig::default().repo_url("https://example.com/nope");
        assert!(matches!(
            SchemeFetcher::new(config),
            Err(FetchError::InvalidRepoUrl(_))
        ));
    }
}
