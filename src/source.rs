//! Where the raw calendar text comes from.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// A feed to read: downloaded over HTTP or read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    Url(String),
    File(PathBuf),
}

impl FeedSource {
    /// Load the whole feed into memory.
    pub async fn load(&self) -> Result<String> {
        match self {
            FeedSource::Url(url) => fetch(url).await,
            FeedSource::File(path) => tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read calendar from {}", path.display())),
        }
    }
}

impl fmt::Display for FeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedSource::Url(url) => f.write_str(url),
            FeedSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

async fn fetch(url: &str) -> Result<String> {
    let client = reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(concat!("icstrim/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")?;

    log::debug!("GET {url}");
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to download calendar from {url}"))?
        .error_for_status()
        .with_context(|| format!("Calendar server rejected request for {url}"))?;

    response
        .text()
        .await
        .with_context(|| format!("Failed to read calendar body from {url}"))
}
