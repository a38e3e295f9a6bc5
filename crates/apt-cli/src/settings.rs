//! Settings resolution
//!
//! Precedence: command-line flags, then the `--config` file, then defaults.

use std::path::PathBuf;

use apt_fs::{ConfigStore, NormalizedPath, RobustnessConfig, SourcesLayout};
use apt_sources::ManagedSources;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::error::Result;

/// Values readable from a settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// APT configuration root
    pub root: Option<PathBuf>,
    /// Owned fragment file name inside sources.list.d/
    pub owned_file: Option<String>,
    /// Whether writes are fsynced before being published
    pub fsync: Option<bool>,
}

impl Settings {
    /// Load the settings file named on the command line, if any.
    pub fn load(cli: &Cli) -> Result<Self> {
        let Some(path) = &cli.config else {
            return Ok(Self::default());
        };
        let settings = ConfigStore::new().load(&NormalizedPath::new(path))?;
        tracing::debug!(path = %path.display(), ?settings, "loaded settings");
        Ok(settings)
    }

    /// Apply command-line overrides.
    pub fn merge_cli(mut self, cli: &Cli) -> Self {
        if cli.root.is_some() {
            self.root = cli.root.clone();
        }
        if cli.owned_file.is_some() {
            self.owned_file = cli.owned_file.clone();
        }
        self
    }

    pub fn layout(&self) -> Result<SourcesLayout> {
        let layout = match &self.root {
            Some(root) => SourcesLayout::new(root),
            None => SourcesLayout::system(),
        };
        Ok(match &self.owned_file {
            Some(name) => layout.with_owned_file(name)?,
            None => layout,
        })
    }

    pub fn robustness(&self) -> RobustnessConfig {
        RobustnessConfig {
            enable_fsync: self.fsync.unwrap_or(true),
            ..RobustnessConfig::default()
        }
    }

    /// Build the sources handle described by these settings.
    pub fn sources(&self) -> Result<ManagedSources> {
        Ok(ManagedSources::new(self.layout()?).with_robustness(self.robustness()))
    }
}
