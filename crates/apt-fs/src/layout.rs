//! Sources directory layout
//!
//! An APT configuration root holds one `sources.list` file and a
//! `sources.list.d/` drop-in directory. One fragment inside the drop-in
//! directory is owned by this tool and is the only file it ever writes.

use std::path::Path;

use crate::{AptPath, NormalizedPath, Result, validate_file_name};

/// Resolved paths of an APT configuration root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcesLayout {
    /// The configuration root (usually `/etc/apt`)
    pub root: NormalizedPath,
    owned_file: String,
}

impl SourcesLayout {
    /// Layout rooted at `root`, owning the default `managed.list` fragment.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: NormalizedPath::new(root),
            owned_file: AptPath::ManagedList.as_str().to_string(),
        }
    }

    /// Layout for the system configuration root `/etc/apt`.
    pub fn system() -> Self {
        Self::new(AptPath::EtcApt.as_str())
    }

    /// Use a different owned fragment file name.
    ///
    /// The name must be a single path component.
    pub fn with_owned_file(mut self, name: &str) -> Result<Self> {
        validate_file_name(name)?;
        self.owned_file = name.to_string();
        Ok(self)
    }

    /// The root `sources.list` file.
    pub fn sources_list(&self) -> NormalizedPath {
        self.root.join(AptPath::SourcesList.as_str())
    }

    /// The `sources.list.d` drop-in directory.
    pub fn drop_in_dir(&self) -> NormalizedPath {
        self.root.join(AptPath::SourcesListD.as_str())
    }

    /// The fragment file owned by this tool.
    pub fn owned_file(&self) -> NormalizedPath {
        self.drop_in_dir().join(&self.owned_file)
    }

    /// File name of the owned fragment.
    pub fn owned_file_name(&self) -> &str {
        &self.owned_file
    }
}

impl Default for SourcesLayout {
    fn default() -> Self {
        Self::system()
    }
}
