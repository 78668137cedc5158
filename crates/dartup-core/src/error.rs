//! Error types for dartup-core

use thiserror::Error;

/// Result type alias using dartup-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for dart-up
#[derive(Error, Debug)]
pub enum Error {
    /// Host operating system is outside the supported set
    #[error("Platform ({os}) not supported")]
    UnsupportedPlatform { os: String },

    /// Host CPU architecture is outside the supported set
    #[error("Architecture ({arch}) not supported")]
    UnsupportedArchitecture { arch: String },

    /// Version manifest could not be fetched or parsed
    #[error("Failed to fetch version manifest from {url}: {message}")]
    Network { url: String, message: String },

    /// Archive download failed
    #[error("Failed to download {url}: {message}")]
    Download { url: String, message: String },

    /// Archive could not be opened or an entry could not be extracted
    #[error("Failed to extract {path}: {message}")]
    Archive { path: String, message: String },

    /// URL assembly error
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl Error {
    /// Create an unsupported platform error
    pub fn unsupported_platform(os: impl Into<String>) -> Self {
        Self::UnsupportedPlatform { os: os.into() }
    }

    /// Create an unsupported architecture error
    pub fn unsupported_architecture(arch: impl Into<String>) -> Self {
        Self::UnsupportedArchitecture { arch: arch.into() }
    }

    /// Create a network error for a manifest fetch
    pub fn network(url: impl Into<String>, message: impl ToString) -> Self {
        Self::Network {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Create a download error for an archive fetch
    pub fn download(url: impl Into<String>, message: impl ToString) -> Self {
        Self::Download {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Create an archive error for an extraction failure
    pub fn archive(path: impl Into<String>, message: impl ToString) -> Self {
        Self::Archive {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
