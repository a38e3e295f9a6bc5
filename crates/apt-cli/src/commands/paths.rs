//! The `paths` command

use apt_fs::SourcesLayout;
use colored::Colorize;

use crate::error::Result;

/// Run the paths command
pub fn run_paths(layout: &SourcesLayout) -> Result<()> {
    let rows = [
        ("root file", layout.sources_list()),
        ("drop-in dir", layout.drop_in_dir()),
        ("owned file", layout.owned_file()),
    ];
    for (label, path) in rows {
        let state = if path.exists() {
            "present".green()
        } else {
            "missing".yellow()
        };
        println!("{:<12} {} ({})", format!("{label}:").cyan(), path, state);
    }
    Ok(())
}
