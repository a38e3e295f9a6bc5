use apt_fs::{Error, NormalizedPath, validate_file_name};
use rstest::rstest;

#[rstest]
#[case("/etc/apt", "sources.list", "/etc/apt/sources.list")]
#[case("/etc/apt/", "sources.list.d", "/etc/apt/sources.list.d")]
#[case("", "managed.list", "managed.list")]
#[case("C:\\apt", "sources.list", "C:/apt/sources.list")]
fn test_join(#[case] base: &str, #[case] segment: &str, #[case] expected: &str) {
    assert_eq!(NormalizedPath::new(base).join(segment).as_str(), expected);
}

#[rstest]
#[case("/etc/apt/sources.list", Some("list"))]
#[case("/etc/apt/sources.list.d", Some("d"))]
#[case("/etc/apt/.hidden", None)]
#[case("/etc/apt/noext", None)]
fn test_extension(#[case] path: &str, #[case] expected: Option<&str>) {
    assert_eq!(NormalizedPath::new(path).extension(), expected);
}

#[rstest]
#[case("managed.list")]
#[case("vendor-repo.list")]
#[case(".hidden.list")]
fn test_valid_file_names(#[case] name: &str) {
    assert!(validate_file_name(name).is_ok());
}

#[rstest]
#[case("", "name is empty")]
#[case(".", "name is a relative path component")]
#[case("sub/managed.list", "name contains a path separator")]
#[case("bad\nname.list", "name contains control characters")]
fn test_invalid_file_names(#[case] name: &str, #[case] expected_reason: &str) {
    match validate_file_name(name) {
        Err(Error::InvalidFileName { reason, .. }) => assert_eq!(reason, expected_reason),
        other => panic!("unexpected result for {name:?}: {other:?}"),
    }
}

#[test]
fn test_parent_chain() {
    let path = NormalizedPath::new("/etc/apt/sources.list.d/managed.list");
    let parent = path.parent().unwrap();
    assert_eq!(parent.as_str(), "/etc/apt/sources.list.d");
    assert_eq!(parent.parent().unwrap().as_str(), "/etc/apt");
    assert_eq!(NormalizedPath::new("managed.list").parent(), None);
}
