//! Ordered collections of scanned declarations.

use std::ops::Index;

use apt_fs::NormalizedPath;
use serde::Serialize;

use crate::Repository;

/// Declarations in scan order (file order, then line order).
///
/// Duplicates are kept as found; lookups use identity equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RepositoryList {
    repos: Vec<Repository>,
}

impl RepositoryList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, repo: Repository) {
        self.repos.push(repo);
    }

    pub fn extend(&mut self, other: RepositoryList) {
        self.repos.extend(other.repos);
    }

    pub fn len(&self) -> usize {
        self.repos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Repository> {
        self.repos.iter()
    }

    /// Whether any entry is the same repository as `repo`.
    pub fn contains(&self, repo: &Repository) -> bool {
        self.find(repo).is_some()
    }

    /// First entry that is the same repository as `repo`.
    pub fn find(&self, repo: &Repository) -> Option<&Repository> {
        self.repos.iter().find(|r| r.same_repository(repo))
    }

    /// Entries that are not commented out.
    pub fn enabled(&self) -> impl Iterator<Item = &Repository> {
        self.repos.iter().filter(|r| r.enabled)
    }

    /// Entries read from `file`.
    pub fn in_file<'a>(&'a self, file: &'a NormalizedPath) -> impl Iterator<Item = &'a Repository> {
        self.repos
            .iter()
            .filter(move |r| r.origin.as_ref().is_some_and(|o| &o.file == file))
    }

    pub fn as_slice(&self) -> &[Repository] {
        &self.repos
    }
}

impl Index<usize> for RepositoryList {
    type Output = Repository;

    fn index(&self, index: usize) -> &Repository {
        &self.repos[index]
    }
}

impl IntoIterator for RepositoryList {
    type Item = Repository;
    type IntoIter = std::vec::IntoIter<Repository>;

    fn into_iter(self) -> Self::IntoIter {
        self.repos.into_iter()
    }
}

impl<'a> IntoIterator for &'a RepositoryList {
    type Item = &'a Repository;
    type IntoIter = std::slice::Iter<'a, Repository>;

    fn into_iter(self) -> Self::IntoIter {
        self.repos.iter()
    }
}

impl FromIterator<Repository> for RepositoryList {
    fn from_iter<I: IntoIterator<Item = Repository>>(iter: I) -> Self {
        Self {
            repos: iter.into_iter().collect(),
        }
    }
}
