//! Per-artifact download and extraction
//!
//! Each installer task streams one archive to disk and unpacks it. The
//! extraction strategy is selected by the artifact's kind: Dartium archives
//! carry a versioned root directory that is flattened into a fixed
//! `chromium` directory; everything else unpacks into the install root
//! as-is. Downloaded archives are left in place after extraction.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use dartup_core::{ArtifactKind, Error, Result};
use futures_util::StreamExt;
use tracing::{debug, info};
use url::Url;

/// Fixed destination directory for the Dartium bundle
pub const DARTIUM_DIR: &str = "chromium";

/// Downloads and unpacks one artifact archive
pub struct ArtifactInstaller {
    /// HTTP client, shared across concurrent installers
    client: reqwest::Client,

    /// Install root; destination paths are disjoint per artifact kind
    root: PathBuf,
}

impl ArtifactInstaller {
    pub fn new(client: reqwest::Client, root: impl Into<PathBuf>) -> Self {
        Self {
            client,
            root: root.into(),
        }
    }

    /// Download the archive at `url` and extract it
    pub async fn install(&self, kind: ArtifactKind, url: &Url) -> Result<()> {
        let file_name = url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| Error::download(url.as_str(), "URL has no file name"))?
            .to_string();

        let archive_path = self.root.join(&file_name);

        info!("[{}] download started", file_name);
        self.download(url, &archive_path).await?;
        info!("[{}] download complete", file_name);

        match kind {
            ArtifactKind::Dartium => {
                self.extract_flattened(&archive_path, &self.root.join(DARTIUM_DIR))?
            }
            ArtifactKind::Sdk | ArtifactKind::Docs => {
                self.extract_all(&archive_path, &self.root)?
            }
        }
        info!("[{}] extracted", file_name);

        Ok(())
    }

    /// Stream the response body to `dest`
    async fn download(&self, url: &Url, dest: &Path) -> Result<()> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Error::download(url.as_str(), e))?;

        if !response.status().is_success() {
            return Err(Error::download(
                url.as_str(),
                format!("HTTP {}", response.status()),
            ));
        }

        let mut file = fs::File::create(dest)?;
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk: bytes::Bytes = chunk.map_err(|e| Error::download(url.as_str(), e))?;
            file.write_all(&chunk)?;
        }

        debug!("Downloaded {} to {:?}", url, dest);
        Ok(())
    }

    /// Extract every entry into `dest`, overwriting existing files
    fn extract_all(&self, archive_path: &Path, dest: &Path) -> Result<()> {
        let label = path_label(archive_path);

        let file = fs::File::open(archive_path)?;
        let mut archive =
            zip::ZipArchive::new(file).map_err(|e| Error::archive(label.as_str(), e))?;

        for i in 0..archive.len() {
            let mut entry = archive.by_index(i).map_err(|e| Error::archive(label.as_str(), e))?;

            // Skip entries with traversal or otherwise unsafe names.
            let Some(rel) = entry.enclosed_name() else {
                continue;
            };
            let out = dest.join(rel);

            if entry.is_dir() {
                fs::create_dir_all(&out)?;
                continue;
            }
            if let Some(parent) = out.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut out_file = fs::File::create(&out)?;
            std::io::copy(&mut entry, &mut out_file)?;

            #[cfg(unix)]
            if let Some(mode) = entry.unix_mode() {
                use std::os::unix::fs::PermissionsExt;
                fs::set_permissions(&out, fs::Permissions::from_mode(mode))?;
            }
        }

        Ok(())
    }

    /// Extract the archive's root directory into `dest`, flattened
    ///
    /// Dartium archives wrap everything in a single versioned directory
    /// (`dartium-linux-x64-full-dev-1.2.3/...`); its contents land directly
    /// in `dest`, overwriting whatever a previous install left there.
    fn extract_flattened(&self, archive_path: &Path, dest: &Path) -> Result<()> {
        let label = path_label(archive_path);

        let file = fs::File::open(archive_path)?;
        let mut archive =
            zip::ZipArchive::new(file).map_err(|e| Error::archive(label.as_str(), e))?;

        if archive.is_empty() {
            return Err(Error::archive(label.as_str(), "archive has no entries"));
        }

        let root: PathBuf = {
            let first = archive.by_index(0).map_err(|e| Error::archive(label.as_str(), e))?;
            let name = first
                .enclosed_name()
                .ok_or_else(|| Error::archive(label.as_str(), "unsafe first entry name"))?;
            name.components()
                .next()
                .map(|c| PathBuf::from(c.as_os_str()))
                .ok_or_else(|| Error::archive(label.as_str(), "first entry has no path"))?
        };

        fs::create_dir_all(dest)?;

        for i in 0..archive.len() {
            let mut entry = archive.by_index(i).map_err(|e| Error::archive(label.as_str(), e))?;

            let Some(name) = entry.enclosed_name() else {
                continue;
            };
            // Only the root directory's contents are installed.
            let Ok(rel) = name.strip_prefix(&root) else {
                continue;
            };
            if rel.as_os_str().is_empty() {
                continue;
            }
            let out = dest.join(rel);

            if entry.is_dir() {
                fs::create_dir_all(&out)?;
                continue;
            }
            if let Some(parent) = out.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut out_file = fs::File::create(&out)?;
            std::io::copy(&mut entry, &mut out_file)?;

            #[cfg(unix)]
            if let Some(mode) = entry.unix_mode() {
                use std::os::unix::fs::PermissionsExt;
                fs::set_permissions(&out, fs::Permissions::from_mode(mode))?;
            }
        }

        Ok(())
    }
}

fn path_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
