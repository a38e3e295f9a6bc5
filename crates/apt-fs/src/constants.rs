//! Well-known APT configuration paths.

use std::path::Path;

/// Standard APT configuration locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AptPath {
    /// The `/etc/apt` directory (default configuration root)
    EtcApt,
    /// The `sources.list` root file
    SourcesList,
    /// The `sources.list.d` drop-in directory
    SourcesListD,
    /// The `managed.list` fragment owned by this tool
    ManagedList,
}

impl AptPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EtcApt => "/etc/apt",
            Self::SourcesList => "sources.list",
            Self::SourcesListD => "sources.list.d",
            Self::ManagedList => "managed.list",
        }
    }
}

impl AsRef<Path> for AptPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for AptPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for AptPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
