//! [`TestAptDir`] builder for APT configuration test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary APT configuration root (the equivalent of `/etc/apt`).
///
/// # Example
///
/// ```rust
/// use apt_test_utils::TestAptDir;
///
/// let apt = TestAptDir::new()
///     .with_sources_list("deb http://deb.debian.org/debian bookworm main\n")
///     .with_fragment("vendor.list", "deb http://vendor.example/apt stable main\n");
/// apt.assert_file_exists("sources.list.d/vendor.list");
/// ```
pub struct TestAptDir {
    temp_dir: TempDir,
}

impl Default for TestAptDir {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAptDir {
    /// Create an empty temporary directory, without `sources.list`.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// The reference scenario: one enabled root entry and one disabled
    /// `deb-src` entry in a drop-in fragment.
    pub fn scenario() -> Self {
        Self::new()
            .with_sources_list(&format!("{}\n", crate::UBUNTU_MAIN))
            .with_fragment("webupd8team-java.list", &format!("{}\n", crate::JAVA_PPA_SRC_DISABLED))
    }

    /// Return the configuration root path.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of `relative` under the root.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write `sources.list`.
    pub fn with_sources_list(self, content: &str) -> Self {
        fs::write(self.path("sources.list"), content).unwrap();
        self
    }

    /// Write `sources.list.d/<name>`, creating the directory.
    pub fn with_fragment(self, name: &str, content: &str) -> Self {
        let dir = self.path("sources.list.d");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), content).unwrap();
        self
    }

    /// Read a file under the root.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read(&self, relative: &str) -> String {
        let full_path = self.path(relative);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Assert that `relative` exists.
    pub fn assert_file_exists(&self, relative: &str) {
        let full_path = self.path(relative);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `relative` does **not** exist.
    pub fn assert_file_not_exists(&self, relative: &str) {
        let full_path = self.path(relative);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert how many lines of `relative` equal `line` exactly.
    pub fn assert_line_count(&self, relative: &str, line: &str, expected: usize) {
        let content = self.read(relative);
        let actual = content.lines().filter(|l| *l == line).count();
        assert_eq!(
            actual, expected,
            "Expected {} occurrence(s) of {:?} in {}, found {}.\nContent:\n{}",
            expected, line, relative, actual, content
        );
    }
}
