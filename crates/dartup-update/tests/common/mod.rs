//! Common test infrastructure for dartup-update tests
//!
//! In your test file, add:
//! ```ignore
//! mod common;
//! use common::*;
//! ```
//!
//! # Modules
//!
//! - `fixtures`: in-memory ZIP archives and version manifests
//! - `mock_server`: wiremock setup helpers for the archive endpoints

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod fixtures;
pub mod mock_server;

pub use fixtures::*;
pub use mock_server::*;

use std::path::Path;

use dartup_core::{Arch, Os, Platform, RunConfig};
use dartup_update::Updater;
use url::Url;

// Version constants
pub const VERSION_1_2_3: &str = "1.2.3";
pub const REVISION_R9: &str = "r9";
pub const REVISION_R1: &str = "r1";

// Fixed test platform so archive paths are deterministic
pub fn test_platform() -> Platform {
    Platform::new(Os::Linux, Arch::X64)
}

/// Archive file names for the test platform
pub const SDK_FILE: &str = "sdk/dartsdk-linux-x64-release.zip";
pub const DARTIUM_FILE: &str = "dartium/dartium-linux-x64-release.zip";
pub const DOCS_FILE: &str = "api-docs/dart-api-docs.zip";

/// Build an updater pointed at a mock server and a temporary install root
pub fn test_updater(server_uri: &str, root: &Path, config: RunConfig) -> Updater {
    let base = Url::parse(&format!("{}/channels", server_uri)).unwrap();
    Updater::new(config, test_platform())
        .with_root(root)
        .with_base_url(base)
}
