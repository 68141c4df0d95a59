//! Downloading the diff text

use anyhow::{Context, Result};
use hgimport_core::FetchConfig;
use reqwest::blocking::Client;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Where diff text comes from
pub trait DiffSource {
    fn fetch(&self, location: &str) -> Result<String>;
}

/// Fetches `http(s)://` URLs over the network and reads anything else from
/// disk, mirroring what `hg import` accepts.
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout_secs.map(Duration::from_secs))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }

    fn fetch_url(&self, url: &str) -> Result<String> {
        info!("fetching {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Failed to fetch {}", url))?;

        if !response.status().is_success() {
            anyhow::bail!("Failed to fetch {}: HTTP {}", url, response.status());
        }

        let body = response
            .text()
            .with_context(|| format!("Failed to read response body from {}", url))?;
        debug!(bytes = body.len(), "fetched diff");
        Ok(body)
    }
}

impl DiffSource for HttpSource {
    fn fetch(&self, location: &str) -> Result<String> {
        if is_remote(location) {
            return self.fetch_url(location);
        }
        read_local(location)
    }
}

pub fn is_remote(location: &str) -> bool {
    let lower = location.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

fn read_local(location: &str) -> Result<String> {
    let path = location.strip_prefix("file://").unwrap_or(location);
    debug!("reading diff from {}", path);
    fs::read_to_string(Path::new(path)).with_context(|| format!("Failed to read diff {}", path))
}
