//! Error types for apt-sources

use std::path::PathBuf;

/// Result type for apt-sources operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in apt-sources operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Root sources file not found: {path}")]
    RootNotFound { path: PathBuf },

    #[error("Repository '{line}' not found in {path}")]
    RepositoryNotFound { line: String, path: PathBuf },

    #[error("Repository '{line}' already exists at {location}")]
    AlreadyExists { line: String, location: String },

    #[error("Malformed declaration '{line}': {reason}")]
    Malformed { line: String, reason: String },

    #[error("Filesystem error: {0}")]
    Fs(#[from] apt_fs::Error),
}

/// Coarse classification of an [`Error`] for callers that branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The root file is missing, or the repository is not in the owned file
    NotFound,
    /// An identity-equal repository is already configured
    AlreadyExists,
    /// A declaration could not be parsed or serialized
    Malformed,
    /// Reading or writing the configuration failed
    Io,
}

impl Error {
    pub fn malformed(line: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            line: line.into(),
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::RootNotFound { .. } | Self::RepositoryNotFound { .. } => ErrorKind::NotFound,
            Self::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            Self::Malformed { .. } => ErrorKind::Malformed,
            Self::Fs(_) => ErrorKind::Io,
        }
    }
}
