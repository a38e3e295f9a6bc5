//! Adding, editing and removing declarations.
//!
//! All writes go to the single owned fragment file of the layout
//! (`sources.list.d/managed.list` by default). The root file and every
//! other fragment are only ever read, to detect duplicates.

use std::path::Path;

use apt_fs::{NormalizedPath, RobustnessConfig, SourcesLayout, io};
use tracing::info;

use crate::parser::classify_line;
use crate::scanner::parse_content;
use crate::{Error, Repository, RepositoryList, Result, SourceReader, SourcesScanner};

/// Write access to the owned fragment file of a configuration root.
pub trait SourceWriter: SourceReader {
    /// Append `repo` to the owned file.
    ///
    /// Fails with [`Error::AlreadyExists`] if the same repository is
    /// declared anywhere in the configuration, enabled or not.
    fn add(&self, repo: &Repository) -> Result<()>;

    /// Delete every line of the owned file declaring the same repository.
    ///
    /// Fails with [`Error::RepositoryNotFound`] if the owned file does not
    /// declare it, even when another file does.
    fn remove(&self, repo: &Repository) -> Result<()>;

    /// Replace the owned declaration of `old` with `new`.
    fn edit(&self, old: &Repository, new: &Repository) -> Result<()>;
}

/// Reads the whole configuration and edits the owned fragment file.
#[derive(Debug, Clone)]
pub struct ManagedSources {
    scanner: SourcesScanner,
    robustness: RobustnessConfig,
}

impl ManagedSources {
    pub fn new(layout: SourcesLayout) -> Self {
        Self {
            scanner: SourcesScanner::new(layout),
            robustness: RobustnessConfig::default(),
        }
    }

    pub fn with_robustness(mut self, robustness: RobustnessConfig) -> Self {
        self.robustness = robustness;
        self
    }

    /// Declarations currently in the owned file.
    pub fn owned_entries(&self) -> Result<RepositoryList> {
        let owned = self.owned_path();
        Ok(match io::read_text_if_exists(&owned)? {
            Some(content) => parse_content(&content, &owned),
            None => RepositoryList::new(),
        })
    }

    fn owned_path(&self) -> NormalizedPath {
        self.layout().owned_file()
    }

    fn read_owned(&self, repo: &Repository) -> Result<String> {
        let owned = self.owned_path();
        io::read_text_if_exists(&owned)?.ok_or_else(|| Error::RepositoryNotFound {
            line: repo.to_line(),
            path: owned.to_native(),
        })
    }

    fn write_owned(&self, content: &str) -> Result<()> {
        io::write_atomic(&self.owned_path(), content.as_bytes(), self.robustness)?;
        Ok(())
    }
}

impl SourceReader for ManagedSources {
    fn layout(&self) -> &SourcesLayout {
        self.scanner.layout()
    }

    fn scan(&self) -> Result<RepositoryList> {
        self.scanner.scan()
    }
}

impl SourceWriter for ManagedSources {
    fn add(&self, repo: &Repository) -> Result<()> {
        repo.validate()?;

        let current = self.scan()?;
        if let Some(existing) = current.find(repo) {
            return Err(already_exists(existing));
        }

        let owned = self.owned_path();
        let mut content = io::read_text_if_exists(&owned)?.unwrap_or_default();
        if !content.is_empty() && !content.ends_with('\n') {
            content.push('\n');
        }
        content.push_str(&repo.to_line());
        content.push('\n');

        self.write_owned(&content)?;
        info!(file = %owned, repository = %repo, "added repository");
        Ok(())
    }

    fn remove(&self, repo: &Repository) -> Result<()> {
        let content = self.read_owned(repo)?;

        let mut kept = String::with_capacity(content.len());
        let mut removed = 0usize;
        for segment in content.split_inclusive('\n') {
            if declares(segment, repo) {
                removed += 1;
            } else {
                kept.push_str(segment);
            }
        }

        let owned = self.owned_path();
        if removed == 0 {
            return Err(Error::RepositoryNotFound {
                line: repo.to_line(),
                path: owned.to_native(),
            });
        }

        if kept.is_empty() {
            io::remove_file(&owned)?;
        } else {
            self.write_owned(&kept)?;
        }
        info!(file = %owned, repository = %repo, removed, "removed repository");
        Ok(())
    }

    fn edit(&self, old: &Repository, new: &Repository) -> Result<()> {
        new.validate()?;
        let content = self.read_owned(old)?;

        let segments: Vec<&str> = content.split_inclusive('\n').collect();
        let Some(target) = segments.iter().position(|segment| declares(segment, old)) else {
            return Err(Error::RepositoryNotFound {
                line: old.to_line(),
                path: self.owned_path().to_native(),
            });
        };

        if !new.same_repository(old) {
            let current = self.scan()?;
            if let Some(existing) = current.find(new) {
                return Err(already_exists(existing));
            }
        }

        let mut updated = String::with_capacity(content.len());
        for (index, segment) in segments.iter().enumerate() {
            if index == target {
                updated.push_str(&new.to_line());
                updated.push_str(line_ending(segment));
            } else {
                updated.push_str(segment);
            }
        }

        self.write_owned(&updated)?;
        info!(file = %self.owned_path(), from = %old, to = %new, "edited repository");
        Ok(())
    }
}

/// Add `repo` under the configuration root `root`.
pub fn add_repository(repo: &Repository, root: impl AsRef<Path>) -> Result<()> {
    ManagedSources::new(SourcesLayout::new(root)).add(repo)
}

/// Remove `repo` from the owned file under the configuration root `root`.
pub fn remove_repository(repo: &Repository, root: impl AsRef<Path>) -> Result<()> {
    ManagedSources::new(SourcesLayout::new(root)).remove(repo)
}

/// Replace `old` with `new` in the owned file under the configuration root `root`.
pub fn edit_repository(old: &Repository, new: &Repository, root: impl AsRef<Path>) -> Result<()> {
    ManagedSources::new(SourcesLayout::new(root)).edit(old, new)
}

fn declares(segment: &str, repo: &Repository) -> bool {
    let line = segment.trim_end_matches(['\n', '\r']);
    classify_line(line)
        .into_declaration()
        .is_some_and(|found| found.same_repository(repo))
}

fn line_ending(segment: &str) -> &str {
    if segment.ends_with("\r\n") {
        "\r\n"
    } else if segment.ends_with('\n') {
        "\n"
    } else {
        ""
    }
}

fn already_exists(existing: &Repository) -> Error {
    Error::AlreadyExists {
        line: existing.to_line(),
        location: existing
            .origin
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| "<unknown>".to_string()),
    }
}
