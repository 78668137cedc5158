//! Download URL assembly
//!
//! Pure functions mapping (channel, version, artifact kind, platform) to
//! archive URLs. No network or filesystem access happens here.

use dartup_core::{Arch, ArtifactKind, Channel, Os, Platform, Result};
use url::Url;

/// Base URL of the Dart archive channels tree
pub const DART_ARCHIVE_BASE: &str = "https://storage.googleapis.com/dart-archive/channels";

/// URL of the latest-version manifest for a channel
pub fn version_url(base: &Url, channel: Channel) -> Result<Url> {
    let url = format!(
        "{}/{}/release/latest/VERSION",
        base.as_str().trim_end_matches('/'),
        channel
    );
    Ok(Url::parse(&url)?)
}

/// URL of one artifact's archive within a release
pub fn archive_url(
    base: &Url,
    channel: Channel,
    version: &str,
    kind: ArtifactKind,
    platform: Platform,
) -> Result<Url> {
    let url = format!(
        "{}/{}/release/{}/{}.zip",
        base.as_str().trim_end_matches('/'),
        channel,
        version,
        file_name(kind, platform)
    );
    Ok(Url::parse(&url)?)
}

/// Archive file name for an artifact, without the `.zip` suffix
///
/// Documentation is channel/version-scoped only; the other kinds carry
/// platform tokens.
fn file_name(kind: ArtifactKind, platform: Platform) -> String {
    match kind {
        ArtifactKind::Docs => kind.url_prefix().to_string(),
        _ => format!(
            "{}-{}-{}-release",
            kind.url_prefix(),
            platform.os.archive_token(),
            arch_token(kind, platform)
        ),
    }
}

/// Architecture token, with the Dartium override applied before assembly
///
/// No 64-bit Dartium builds exist for Windows or macOS.
fn arch_token(kind: ArtifactKind, platform: Platform) -> &'static str {
    match (kind, platform.os) {
        (ArtifactKind::Dartium, Os::Windows | Os::MacOs) => Arch::Ia32.archive_token(),
        _ => platform.arch.archive_token(),
    }
}
