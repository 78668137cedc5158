//! Run configuration types

/// Release channel on the Dart archive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Channel {
    /// Development channel (default)
    #[default]
    Dev,
    /// Stable channel
    Stable,
}

impl Channel {
    /// Channel segment in archive URLs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Stable => "stable",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Downloadable component of a release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// The Dart SDK (always installed)
    Sdk,
    /// The Dartium browser-runtime bundle
    Dartium,
    /// API documentation
    Docs,
}

impl ArtifactKind {
    /// Path prefix of this artifact's file within a release directory
    pub fn url_prefix(&self) -> &'static str {
        match self {
            Self::Sdk => "sdk/dartsdk",
            Self::Dartium => "dartium/dartium",
            Self::Docs => "api-docs/dart-api-docs",
        }
    }

    /// Short name used in status messages
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sdk => "sdk",
            Self::Dartium => "dartium",
            Self::Docs => "docs",
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable per-run configuration, constructed once from the CLI
///
/// Every component receives this value explicitly; nothing reads ambient
/// global state.
#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    /// Selected release channel
    pub channel: Channel,
    /// Install the Dartium bundle
    pub dartium: bool,
    /// Install the API documentation
    pub docs: bool,
    /// Update even when the installed revision matches the remote one
    pub force: bool,
}

impl RunConfig {
    pub fn new(channel: Channel, dartium: bool, docs: bool, force: bool) -> Self {
        Self {
            channel,
            dartium,
            docs,
            force,
        }
    }

    /// The artifact set selected for this run, SDK first
    pub fn artifacts(&self) -> Vec<ArtifactKind> {
        let mut kinds = vec![ArtifactKind::Sdk];
        if self.dartium {
            kinds.push(ArtifactKind::Dartium);
        }
        if self.docs {
            kinds.push(ArtifactKind::Docs);
        }
        kinds
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            channel: Channel::Dev,
            dartium: true,
            docs: false,
            force: false,
        }
    }
}
