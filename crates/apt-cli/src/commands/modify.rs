//! The `add`, `remove` and `edit` commands

use apt_sources::{Repository, SourceWriter, parse_line};
use colored::Colorize;

use crate::error::{CliError, Result};

/// Parse a declaration given on the command line.
pub fn parse_argument(line: &str) -> Result<Repository> {
    parse_line(line)?
        .ok_or_else(|| CliError::user(format!("'{}' is not a repository declaration", line)))
}

/// Run the add command
pub fn run_add(sources: &impl SourceWriter, line: &str) -> Result<()> {
    let repo = parse_argument(line)?;
    sources.add(&repo)?;
    println!(
        "{} {} to {}",
        "Added".green().bold(),
        repo,
        sources.layout().owned_file()
    );
    Ok(())
}

/// Run the remove command
pub fn run_remove(sources: &impl SourceWriter, line: &str) -> Result<()> {
    let repo = parse_argument(line)?;
    sources.remove(&repo)?;
    println!(
        "{} {} from {}",
        "Removed".green().bold(),
        repo,
        sources.layout().owned_file()
    );
    Ok(())
}

/// Run the edit command
pub fn run_edit(sources: &impl SourceWriter, old: &str, new: &str) -> Result<()> {
    let old = parse_argument(old)?;
    let new = parse_argument(new)?;
    sources.edit(&old, &new)?;
    println!("{} {} -> {}", "Updated".green().bold(), old, new);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use apt_sources::{ErrorKind, ManagedSources, SourcesLayout};
    use apt_test_utils::TestAptDir;

    fn managed(apt: &TestAptDir) -> ManagedSources {
        ManagedSources::new(SourcesLayout::new(apt.root()))
    }

    #[test]
    fn test_parse_argument_rejects_comment() {
        assert!(matches!(
            parse_argument("# just words"),
            Err(CliError::User { .. })
        ));
        assert!(matches!(parse_argument("deb"), Err(CliError::Sources(_))));
    }

    #[test]
    fn test_add_remove_round_trip() {
        let apt = TestAptDir::scenario();
        let sources = managed(&apt);

        run_add(&sources, "deb http://x stable main").unwrap();
        apt.assert_file_exists("sources.list.d/managed.list");

        run_remove(&sources, "deb http://x stable main").unwrap();
        apt.assert_file_not_exists("sources.list.d/managed.list");
    }

    #[test]
    fn test_add_duplicate_surfaces_kind() {
        let apt = TestAptDir::scenario();
        let sources = managed(&apt);

        let err = run_add(&sources, "deb http://archive.ubuntu.com/ubuntu zesty main restricted")
            .unwrap_err();
        match err {
            CliError::Sources(e) => assert_eq!(e.kind(), ErrorKind::AlreadyExists),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_edit_disables_entry() {
        let apt = TestAptDir::scenario();
        let sources = managed(&apt);

        run_add(&sources, "deb http://x stable main").unwrap();
        run_edit(&sources, "deb http://x stable main", "# deb http://x stable main").unwrap();

        assert_eq!(apt.read("sources.list.d/managed.list"), "# deb http://x stable main\n");
    }
}
