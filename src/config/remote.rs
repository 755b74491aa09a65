//! Remote catalog updates.
//!
//! Before loading, the local catalog can be refreshed from a URL. The
//! download only replaces the local file when it parses as a valid catalog;
//! any failure leaves the local file untouched so the caller can fall back
//! to it.

use anyhow::{anyhow, Context};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::config::loader::parse_catalog;
use crate::error::{Result, ToolpickError};

/// Environment variable holding the default update URL.
pub const CONFIG_URL_ENV: &str = "TOOLPICK_CONFIG_URL";

/// Fetches catalog files over HTTP(S).
///
/// # Example
///
/// ```no_run
/// use toolpick::config::CatalogUpdater;
/// use std::path::Path;
///
/// let updater = CatalogUpdater::default_timeout().unwrap();
/// updater
///     .update("https://example.com/config.yaml", Path::new("config.yaml"))
///     .unwrap();
/// ```
pub struct CatalogUpdater {
    /// Request timeout.
    timeout: Duration,
    /// HTTP client.
    client: reqwest::blocking::Client,
}

impl CatalogUpdater {
    /// Create an updater with the specified timeout.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("toolpick/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { timeout, client })
    }

    /// Create an updater with the 5-second startup timeout.
    pub fn default_timeout() -> Result<Self> {
        Self::new(Duration::from_secs(5))
    }

    /// Get the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Download the body at `url`.
    pub fn fetch(&self, url: &str) -> anyhow::Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Failed to fetch {}", url))?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP {} fetching {}", response.status(), url));
        }

        response
            .text()
            .with_context(|| format!("Failed to read response from {}", url))
    }

    /// Download the catalog at `url` and, if it is valid, replace `local_path`.
    ///
    /// # Errors
    ///
    /// Returns `RemoteFetchError` if the download fails or the downloaded
    /// catalog does not validate. The local file is not modified in that case.
    pub fn update(&self, url: &str, local_path: &Path) -> Result<()> {
        let content = self
            .fetch(url)
            .map_err(|e| ToolpickError::RemoteFetchError {
                url: url.to_string(),
                message: format!("{:#}", e),
            })?;

        parse_catalog(&content, Path::new(url)).map_err(|e| ToolpickError::RemoteFetchError {
            url: url.to_string(),
            message: format!("downloaded catalog is invalid: {}", e),
        })?;

        if let Some(parent) = local_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        // Atomic write: write to temp file, then rename
        let temp_path = local_path.with_extension("yaml.tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, local_path)?;

        tracing::info!("Catalog updated from {}", url);
        Ok(())
    }
}
