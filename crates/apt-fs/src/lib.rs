//! Filesystem layer for the APT sources manager
//!
//! Provides path handling, the sources directory layout and safe I/O
//! operations shared by the domain and CLI crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod layout;
pub mod path;

pub use config::ConfigStore;
pub use constants::AptPath;
pub use error::{Error, Result};
pub use io::RobustnessConfig;
pub use layout::SourcesLayout;
pub use path::{NormalizedPath, validate_file_name};
