//! Read-only scanning of an APT configuration root.

use std::path::Path;

use apt_fs::{NormalizedPath, SourcesLayout, io};
use tracing::debug;

use crate::parser::{LineKind, classify_line};
use crate::{Error, Origin, RepositoryList, Result};

/// Read access to the declarations of a configuration root.
pub trait SourceReader {
    /// The layout being read.
    fn layout(&self) -> &SourcesLayout;

    /// Scan `sources.list` and every fragment in `sources.list.d/`.
    fn scan(&self) -> Result<RepositoryList>;
}

/// Scans the files of a [`SourcesLayout`].
#[derive(Debug, Clone)]
pub struct SourcesScanner {
    layout: SourcesLayout,
}

impl SourcesScanner {
    pub fn new(layout: SourcesLayout) -> Self {
        Self { layout }
    }
}

impl SourceReader for SourcesScanner {
    fn layout(&self) -> &SourcesLayout {
        &self.layout
    }

    fn scan(&self) -> Result<RepositoryList> {
        let root_file = self.layout.sources_list();
        let content = match io::read_text_lossy(&root_file) {
            Ok(content) => content,
            Err(e) if e.is_not_found() => {
                return Err(Error::RootNotFound {
                    path: root_file.to_native(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        let mut repos = parse_content(&content, &root_file);

        let fragments = io::list_regular_files(&self.layout.drop_in_dir())?;
        debug!(
            root = %self.layout.root,
            fragments = fragments.len(),
            "scanning sources"
        );
        for fragment in &fragments {
            repos.extend(scan_file(fragment)?);
        }

        Ok(repos)
    }
}

/// Scan the configuration rooted at `root` (for example `/etc/apt`).
pub fn scan(root: impl AsRef<Path>) -> Result<RepositoryList> {
    SourcesScanner::new(SourcesLayout::new(root)).scan()
}

/// Scan a single sources file.
///
/// Invalid UTF-8 is replaced rather than rejected, so it only affects the
/// lines that contain it.
pub fn scan_file(path: &NormalizedPath) -> Result<RepositoryList> {
    let content = io::read_text_lossy(path)?;
    Ok(parse_content(&content, path))
}

/// Parse file content, tagging each declaration with its origin.
///
/// Comments are skipped silently and unrecognized lines are skipped with a
/// debug event.
pub(crate) fn parse_content(content: &str, file: &NormalizedPath) -> RepositoryList {
    let mut repos = RepositoryList::new();
    for (index, line) in content.lines().enumerate() {
        match classify_line(line) {
            LineKind::Declaration(repo) => {
                repos.push(repo.with_origin(Origin::new(file.clone(), index + 1)));
            }
            LineKind::Comment => {}
            LineKind::Unrecognized { reason } => {
                debug!(file = %file, line = index + 1, %reason, "skipping unrecognized line");
            }
        }
    }
    repos
}
