//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// APT sources manager - inspect and edit sources.list declarations
#[derive(Parser, Debug)]
#[command(name = "apt-sources")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// APT configuration root holding sources.list (default: /etc/apt)
    #[arg(long, global = true, env = "APT_SOURCES_ROOT")]
    pub root: Option<PathBuf>,

    /// Settings file (.toml, .json, .yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Name of the fragment file in sources.list.d/ this tool writes to
    #[arg(long, global = true)]
    pub owned_file: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List every declaration in sources.list and sources.list.d/
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,

        /// Hide commented-out declarations
        #[arg(long)]
        enabled_only: bool,
    },

    /// Add a declaration to the managed fragment file
    ///
    /// Examples:
    ///   apt-sources add "deb http://ppa.launchpad.net/webupd8team/java/ubuntu zesty main"
    ///   apt-sources add "deb [arch=amd64] https://download.docker.com/linux/ubuntu jammy stable"
    Add {
        /// The declaration line
        line: String,
    },

    /// Remove a declaration from the managed fragment file
    Remove {
        /// The declaration line (comments are ignored when matching)
        line: String,
    },

    /// Replace a declaration in the managed fragment file
    ///
    /// Examples:
    ///   apt-sources edit "deb http://x stable main" "# deb http://x stable main"
    Edit {
        /// The declaration to replace
        old: String,
        /// The replacement declaration
        new: String,
    },

    /// Show the resolved configuration paths
    Paths,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
