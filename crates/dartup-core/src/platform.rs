//! Host platform resolution
//!
//! Maps the running operating system and CPU architecture to the naming
//! tokens used by the Dart archive. Resolution happens once per run, before
//! any network or filesystem activity; an unsupported host aborts the run.

use crate::error::{Error, Result};

/// Operating system, restricted to the platforms the archive publishes for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
    /// macOS (Darwin)
    MacOs,
    /// Linux
    Linux,
    /// Windows
    Windows,
}

impl Os {
    /// Resolve from an OS identifier as reported by `std::env::consts::OS`
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "macos" => Ok(Self::MacOs),
            "linux" => Ok(Self::Linux),
            "windows" => Ok(Self::Windows),
            other => Err(Error::unsupported_platform(other)),
        }
    }

    /// Resolve from the running host
    pub fn from_env() -> Result<Self> {
        Self::from_name(std::env::consts::OS)
    }

    /// Token used in archive file names
    pub fn archive_token(&self) -> &'static str {
        match self {
            Self::MacOs => "macos",
            Self::Linux => "linux",
            Self::Windows => "windows",
        }
    }
}

impl std::fmt::Display for Os {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MacOs => write!(f, "macOS"),
            Self::Linux => write!(f, "Linux"),
            Self::Windows => write!(f, "Windows"),
        }
    }
}

/// CPU architecture, restricted to the builds the archive publishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    /// x86_64 / AMD64
    X64,
    /// 32-bit x86
    Ia32,
}

impl Arch {
    /// Resolve from an architecture identifier as reported by
    /// `std::env::consts::ARCH`
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "x86_64" => Ok(Self::X64),
            "x86" => Ok(Self::Ia32),
            other => Err(Error::unsupported_architecture(other)),
        }
    }

    /// Resolve from the running host
    pub fn from_env() -> Result<Self> {
        Self::from_name(std::env::consts::ARCH)
    }

    /// Token used in archive file names
    pub fn archive_token(&self) -> &'static str {
        match self {
            Self::X64 => "x64",
            Self::Ia32 => "ia32",
        }
    }
}

impl std::fmt::Display for Arch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.archive_token())
    }
}

/// Resolved host platform, immutable for the duration of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    /// Operating system
    pub os: Os,
    /// CPU architecture
    pub arch: Arch,
}

impl Platform {
    pub fn new(os: Os, arch: Arch) -> Self {
        Self { os, arch }
    }

    /// Detect the current platform, rejecting unsupported hosts
    pub fn detect() -> Result<Self> {
        Ok(Self {
            os: Os::from_env()?,
            arch: Arch::from_env()?,
        })
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.os.archive_token(), self.arch)
    }
}
