//! Shared test utilities for the apt-sources workspace.
//!
//! This crate is a dev-dependency only and is never published.
//!
//! # Modules
//!
//! - [`apt_dir`]: [`TestAptDir`] builder for a temporary APT configuration root

pub mod apt_dir;

pub use apt_dir::TestAptDir;

/// Root file line used by the reference scenario.
pub const UBUNTU_MAIN: &str = "deb http://archive.ubuntu.com/ubuntu zesty main restricted";

/// Disabled drop-in line used by the reference scenario.
pub const JAVA_PPA_SRC_DISABLED: &str =
    "#deb-src http://ppa.launchpad.net/webupd8team/java/ubuntu zesty main";
