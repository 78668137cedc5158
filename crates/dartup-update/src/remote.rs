//! Remote version manifest fetcher

use dartup_core::{Channel, Error, Result, VersionRecord};
use tracing::debug;
use url::Url;

use crate::urls;

/// Fetches the latest-version manifest for a channel
pub struct VersionFetcher {
    /// HTTP client, shared with the installers
    client: reqwest::Client,

    /// Archive base URL
    base: Url,
}

impl VersionFetcher {
    pub fn new(client: reqwest::Client, base: Url) -> Self {
        Self { client, base }
    }

    /// Fetch the latest version manifest
    ///
    /// Transport failures, non-success statuses, and unparseable bodies are
    /// all fatal; there is no retry and no cached fallback.
    pub async fn fetch_latest(&self, channel: Channel) -> Result<VersionRecord> {
        let url = urls::version_url(&self.base, channel)?;

        debug!("Fetching version manifest from {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Error::network(url.as_str(), e))?;

        if !response.status().is_success() {
            return Err(Error::network(
                url.as_str(),
                format!("HTTP {}", response.status()),
            ));
        }

        let record: VersionRecord = response
            .json()
            .await
            .map_err(|e| Error::network(url.as_str(), e))?;

        debug!("Latest {} version: {}", channel, record.label());
        Ok(record)
    }
}
