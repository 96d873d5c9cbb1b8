//! GitHub tree URLs and the API endpoints derived from them.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{FetchError, Result};

static TREE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://github\.com/([^/]+)/([^/]+)/tree/([^/]+)/(.+)$").unwrap()
});

/// A directory inside a GitHub repository at a given ref.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GitHubRepo {
    pub owner: String,
    pub repo: String,
    pub reference: String,
    pub path: String,
}

impl GitHubRepo {
    /// Parse `https://github.com/<owner>/<repo>/tree/<ref>/<path>`.
    pub fn parse(url: &str) -> Result<Self> {
        let caps = TREE_URL
            .captures(url.trim())
            .ok_or_else(|| FetchError::InvalidRepoUrl(url.to_string()))?;
        Ok(Self {
            owner: caps[1].to_string(),
            repo: caps[2].to_string(),
            reference: caps[3].to_string(),
            path: caps[4].trim_end_matches('/').to_string(),
        })
    }

    pub fn commits_url(&self, api_base: &str) -> String {
        format!(
            "{}/repos/{}/{}/commits",
            api_base.trim_end_matches('/'),
            self.owner,
            self.repo
        )
    }

    pub fn contents_url(&self, api_base: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            api_base.trim_end_matches('/'),
            self.owner,
            self.repo,
            self.path
        )
    }
}

impl std::fmt::Display for GitHubRepo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}@{}:{}", self.owner, self.repo, self.reference, self.path)
    }
}
