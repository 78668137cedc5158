//! Update engine for dart-up
//!
//! Provides:
//! - Download URL assembly for the Dart archive
//! - The local `.dart-up` version marker store
//! - The remote `VERSION` manifest fetcher
//! - Per-artifact download and extraction
//! - The update orchestrator joining all of the above

pub mod installer;
pub mod remote;
pub mod store;
pub mod updater;
pub mod urls;

pub use installer::ArtifactInstaller;
pub use remote::VersionFetcher;
pub use store::VersionStore;
pub use updater::{UpdateOutcome, Updater};
pub use urls::DART_ARCHIVE_BASE;

/// Current CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// User agent sent with every archive request
pub const USER_AGENT: &str = concat!("dart-up/", env!("CARGO_PKG_VERSION"));
