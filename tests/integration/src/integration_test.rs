//! End-to-end integration test for the add / list / edit / remove cycle
//!
//! Exercises the public API the way a package manager front end would:
//! scan, mutate the owned file, rescan.

use apt_fs::{RobustnessConfig, SourcesLayout};
use apt_sources::{
    ErrorKind, ManagedSources, Repository, SourceReader, SourceWriter, add_repository,
    remove_repository, scan,
};
use apt_test_utils::{JAVA_PPA_SRC_DISABLED, TestAptDir, UBUNTU_MAIN};

const OWNED: &str = "sources.list.d/managed.list";

fn managed(apt: &TestAptDir) -> ManagedSources {
    ManagedSources::new(SourcesLayout::new(apt.root())).with_robustness(RobustnessConfig {
        enable_fsync: false,
        ..RobustnessConfig::default()
    })
}

#[test]
fn test_full_cycle() {
    let apt = TestAptDir::scenario();
    let sources = managed(&apt);

    // Initial scan: the root entry then the disabled fragment entry
    let initial = sources.scan().unwrap();
    assert_eq!(initial.len(), 2);
    assert_eq!(initial[0].to_line(), UBUNTU_MAIN);
    assert_eq!(initial[1].to_line(), JAVA_PPA_SRC_DISABLED);

    // Add two new repositories
    let docker = Repository::binary("https://download.docker.com/linux/ubuntu", "zesty", "stable")
        .with_options("arch=amd64");
    let java = Repository::binary("http://ppa.launchpad.net/webupd8team/java/ubuntu", "zesty", "main");
    sources.add(&docker).unwrap();
    sources.add(&java).unwrap();

    let after_add = sources.scan().unwrap();
    assert_eq!(after_add.len(), 4);
    assert_eq!(
        apt.read(OWNED),
        format!("{}\n{}\n", docker.to_line(), java.to_line())
    );

    // Disable docker in place
    sources.edit(&docker, &docker.clone().disabled()).unwrap();
    let after_edit = sources.scan().unwrap();
    assert_eq!(after_edit.enabled().count(), 2);
    assert_eq!(after_edit.find(&docker).unwrap().origin.as_ref().unwrap().line, 1);

    // Remove both; the owned file disappears with its last line
    sources.remove(&docker).unwrap();
    sources.remove(&java).unwrap();
    apt.assert_file_not_exists(OWNED);
    assert_eq!(sources.scan().unwrap(), initial);
}

#[test]
fn test_free_functions_match_handle() {
    let apt = TestAptDir::scenario();
    let repo = Repository::source("http://deb.debian.org/debian", "bookworm", "main contrib");

    add_repository(&repo, apt.root()).unwrap();
    assert!(scan(apt.root()).unwrap().contains(&repo));

    let err = add_repository(&repo, apt.root()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);

    remove_repository(&repo, apt.root()).unwrap();
    assert!(!scan(apt.root()).unwrap().contains(&repo));

    let err = remove_repository(&repo, apt.root()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_json_listing_shape() {
    let apt = TestAptDir::scenario();
    let repos = scan(apt.root()).unwrap();

    let value = serde_json::to_value(&repos).unwrap();
    let first = &value[0];
    assert_eq!(first["enabled"], true);
    assert_eq!(first["source_repo"], false);
    assert_eq!(first["uri"], "http://archive.ubuntu.com/ubuntu");
    assert_eq!(first["distribution"], "zesty");
    assert_eq!(first["components"], "main restricted");
    assert_eq!(first["origin"]["line"], 1);
    assert!(first.get("options").is_none());
}

#[test]
fn test_missing_root_is_reported() {
    let apt = TestAptDir::new();

    let err = scan(apt.root()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = add_repository(&Repository::binary("http://x", "stable", "main"), apt.root())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    apt.assert_file_not_exists(OWNED);
}
