//! Core library for dart-up
//!
//! Shared building blocks used by the updater engine and the CLI:
//! - Error taxonomy and `Result` alias
//! - Host platform resolution
//! - Run configuration (channel, artifact selection, force flag)
//! - The persisted/remote version record

pub mod error;
pub mod platform;
pub mod types;
pub mod version;

pub use error::{Error, Result};
pub use platform::{Arch, Os, Platform};
pub use types::{ArtifactKind, Channel, RunConfig};
pub use version::VersionRecord;
