//! Update orchestration
//!
//! Pulls the local and remote version records concurrently, decides whether
//! an update is needed, fans out one download-and-extract task per selected
//! artifact, and persists the new record only when every task succeeded.

use std::path::PathBuf;

use dartup_core::{ArtifactKind, Error, Platform, Result, RunConfig, VersionRecord};
use tracing::{error, info};
use url::Url;

use crate::installer::ArtifactInstaller;
use crate::remote::VersionFetcher;
use crate::store::VersionStore;
use crate::urls;

/// Outcome of an update run or check
#[derive(Debug)]
pub enum UpdateOutcome {
    /// The installed revision already matches the remote one
    UpToDate {
        /// The locally persisted record
        installed: VersionRecord,
    },

    /// A newer revision is available (reported by `check`)
    UpdateAvailable {
        /// The locally persisted record, possibly empty
        local: VersionRecord,
        /// The remote manifest
        remote: VersionRecord,
    },

    /// Every selected artifact installed and the record was persisted
    Installed {
        /// Record that was installed before this run, possibly empty
        previous: VersionRecord,
        /// The newly persisted record
        installed: VersionRecord,
        /// Artifact kinds installed, SDK first
        artifacts: Vec<ArtifactKind>,
    },
}

/// Update orchestrator
///
/// Built once per run from the immutable configuration and the resolved
/// host platform. The install root and archive base URL default to the
/// current directory and the Dart archive.
pub struct Updater {
    config: RunConfig,
    platform: Platform,
    root: PathBuf,
    base_url: Url,
    client: reqwest::Client,
}

impl Updater {
    pub fn new(config: RunConfig, platform: Platform) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(crate::USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");

        let base_url =
            Url::parse(urls::DART_ARCHIVE_BASE).expect("Invalid built-in archive base URL");

        Self {
            config,
            platform,
            root: PathBuf::from("."),
            base_url,
            client,
        }
    }

    /// Override the install root (defaults to the current directory)
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Override the archive base URL
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Pull both version records; neither fetch is ordered before the other
    async fn compare(&self) -> Result<(VersionRecord, VersionRecord)> {
        let store = VersionStore::new(&self.root);
        let fetcher = VersionFetcher::new(self.client.clone(), self.base_url.clone());

        let (local, remote) = tokio::join!(
            async { store.read() },
            fetcher.fetch_latest(self.config.channel)
        );

        Ok((local, remote?))
    }

    /// Report whether an update would be performed, changing nothing
    pub async fn check(&self) -> Result<UpdateOutcome> {
        let (local, remote) = self.compare().await?;

        if local.same_revision(&remote) && !self.config.force {
            Ok(UpdateOutcome::UpToDate { installed: local })
        } else {
            Ok(UpdateOutcome::UpdateAvailable { local, remote })
        }
    }

    /// Run the update
    ///
    /// On the up-to-date path nothing is written. Otherwise all selected
    /// artifacts are installed concurrently; the version marker is rewritten
    /// only when every installer succeeded, so a failed run leaves the
    /// previously recorded version untouched.
    pub async fn run(&self) -> Result<UpdateOutcome> {
        let (local, remote) = self.compare().await?;

        if local.same_revision(&remote) && !self.config.force {
            info!("{} is already installed", local.label());
            return Ok(UpdateOutcome::UpToDate { installed: local });
        }

        if local.is_installed() {
            info!("Updating [{}] to [{}]", local.label(), remote.label());
        } else {
            info!("Installing [{}]", remote.label());
        }

        let version = remote.version.clone().ok_or_else(|| {
            Error::network(self.base_url.as_str(), "version manifest has no version field")
        })?;

        let kinds = self.config.artifacts();
        let installer = ArtifactInstaller::new(self.client.clone(), self.root.clone());

        let mut tasks = Vec::with_capacity(kinds.len());
        for kind in kinds.iter().copied() {
            let url = urls::archive_url(
                &self.base_url,
                self.config.channel,
                &version,
                kind,
                self.platform,
            )?;
            let installer = &installer;
            tasks.push(async move { (kind, installer.install(kind, &url).await) });
        }

        // All tasks run to completion; nothing cancels in-flight siblings.
        let results = futures::future::join_all(tasks).await;

        let mut first_error = None;
        for (kind, result) in results {
            if let Err(e) = result {
                error!("{} installation failed: {}", kind, e);
                first_error.get_or_insert(e);
            }
        }
        if let Some(e) = first_error {
            return Err(e);
        }

        VersionStore::new(&self.root).write(&remote)?;

        Ok(UpdateOutcome::Installed {
            previous: local,
            installed: remote,
            artifacts: kinds,
        })
    }
}
