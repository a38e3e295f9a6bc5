//! Tests against the Ubuntu-style configuration in `test-fixtures/apt`.

use apt_fs::SourcesLayout;
use apt_sources::{
    ErrorKind, ManagedSources, Repository, SourceReader, SourceWriter, parse_line, scan,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures/apt")
}

/// Copy the fixture tree into a scratch directory so tests can write to it.
fn fixture_copy() -> TempDir {
    let temp = TempDir::new().unwrap();
    copy_dir(&fixture_root(), temp.path());
    temp
}

fn copy_dir(from: &Path, to: &Path) {
    fs::create_dir_all(to).unwrap();
    for entry in fs::read_dir(from).unwrap() {
        let entry = entry.unwrap();
        let target = to.join(entry.file_name());
        if entry.file_type().unwrap().is_dir() {
            copy_dir(&entry.path(), &target);
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
}

fn repo(line: &str) -> Repository {
    parse_line(line).unwrap().unwrap()
}

#[test]
fn test_fixture_scan_order_and_counts() {
    let repos = scan(fixture_root()).unwrap();

    let lines: Vec<String> = repos.iter().map(Repository::to_line).collect();
    assert_eq!(
        lines,
        vec![
            "deb http://archive.ubuntu.com/ubuntu/ zesty main restricted",
            "# deb-src http://archive.ubuntu.com/ubuntu/ zesty main restricted",
            "deb http://archive.ubuntu.com/ubuntu/ zesty-updates main restricted",
            "deb [arch=amd64 signed-by=/usr/share/keyrings/ubuntu.gpg] http://security.ubuntu.com/ubuntu zesty-security main # security",
            "deb [arch=amd64] https://download.docker.com/linux/ubuntu zesty stable",
            "deb http://ppa.launchpad.net/webupd8team/java/ubuntu zesty main",
            "# deb-src http://ppa.launchpad.net/webupd8team/java/ubuntu zesty main",
        ]
    );
    assert_eq!(repos.enabled().count(), 5);
}

#[test]
fn test_fixture_origins() {
    let repos = scan(fixture_root()).unwrap();

    let security = &repos[3];
    assert_eq!(security.options.as_deref(), Some("arch=amd64 signed-by=/usr/share/keyrings/ubuntu.gpg"));
    assert_eq!(security.comment, "security");
    let origin = security.origin.as_ref().unwrap();
    assert!(origin.file.as_str().ends_with("/sources.list"));
    assert_eq!(origin.line, 8);

    let java_src = &repos[6];
    let origin = java_src.origin.as_ref().unwrap();
    assert!(origin.file.as_str().ends_with("sources.list.d/webupd8team-java.list"));
    assert_eq!(origin.line, 2);
}

#[test]
fn test_fixture_deb822_file_contributes_nothing() {
    let repos = scan(fixture_root()).unwrap();
    assert!(!repos.iter().any(|r| r.uri.contains("vendor.example")));
}

#[test]
fn test_fixture_duplicates_are_detected_everywhere() {
    let temp = fixture_copy();
    let sources = ManagedSources::new(SourcesLayout::new(temp.path()));

    for line in [
        "deb http://archive.ubuntu.com/ubuntu/ zesty main restricted",
        "deb-src http://archive.ubuntu.com/ubuntu/ zesty main restricted",
        "deb [arch=amd64] https://download.docker.com/linux/ubuntu zesty stable",
        "deb-src http://ppa.launchpad.net/webupd8team/java/ubuntu zesty main",
    ] {
        let err = sources.add(&repo(line)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyExists, "{line}");
    }
    assert!(!temp.path().join("sources.list.d/managed.list").exists());
}

#[test]
fn test_fixture_options_are_part_of_identity() {
    let temp = fixture_copy();
    let sources = ManagedSources::new(SourcesLayout::new(temp.path()));

    sources
        .add(&repo("deb https://download.docker.com/linux/ubuntu zesty stable"))
        .unwrap();

    assert_eq!(sources.scan().unwrap().len(), 8);
}

#[test]
fn test_fixture_foreign_files_are_untouched() {
    let temp = fixture_copy();
    let sources = ManagedSources::new(SourcesLayout::new(temp.path()));
    let new_repo = repo("deb http://deb.example.org/debian stable main");

    sources.add(&new_repo).unwrap();
    sources.remove(&new_repo).unwrap();

    for relative in [
        "sources.list",
        "sources.list.d/docker.list",
        "sources.list.d/webupd8team-java.list",
        "sources.list.d/vendor.sources",
    ] {
        assert_eq!(
            fs::read_to_string(temp.path().join(relative)).unwrap(),
            fs::read_to_string(fixture_root().join(relative)).unwrap(),
            "{relative} changed"
        );
    }
    assert!(!temp.path().join("sources.list.d/managed.list").exists());
}

#[test]
fn test_fixture_remove_refuses_foreign_entry() {
    let temp = fixture_copy();
    let sources = ManagedSources::new(SourcesLayout::new(temp.path()));

    let err = sources
        .remove(&repo("deb http://ppa.launchpad.net/webupd8team/java/ubuntu zesty main"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(sources.scan().unwrap().len(), 7);
}
