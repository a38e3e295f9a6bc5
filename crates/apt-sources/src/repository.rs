//! The repository declaration model.

use std::fmt;

use apt_fs::NormalizedPath;
use serde::Serialize;

use crate::{Error, Result};

/// Where a declaration was read from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Origin {
    /// The file holding the declaration
    pub file: NormalizedPath,
    /// 1-based line number within `file`
    pub line: usize,
}

impl Origin {
    pub fn new(file: NormalizedPath, line: usize) -> Self {
        Self { file, line }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// One `deb` / `deb-src` declaration.
///
/// Values are produced by the parser or built with the constructors below,
/// and are not modified afterwards. Two declarations describe the same
/// repository when their [`Identity`] matches; `enabled`, `comment` and
/// `origin` are not part of it.
#[derive(Debug, Clone, Serialize)]
pub struct Repository {
    pub enabled: bool,
    pub source_repo: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<String>,
    pub uri: String,
    pub distribution: String,
    pub components: String,
    pub comment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<Origin>,
}

/// The fields that decide whether two declarations are the same repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identity<'a> {
    pub source_repo: bool,
    pub options: Option<&'a str>,
    pub uri: &'a str,
    pub distribution: &'a str,
    pub components: &'a str,
}

impl Repository {
    /// An enabled binary (`deb`) repository.
    pub fn binary(uri: impl Into<String>, distribution: impl Into<String>, components: &str) -> Self {
        Self::build(false, uri.into(), distribution.into(), components)
    }

    /// An enabled source (`deb-src`) repository.
    pub fn source(uri: impl Into<String>, distribution: impl Into<String>, components: &str) -> Self {
        Self::build(true, uri.into(), distribution.into(), components)
    }

    fn build(source_repo: bool, uri: String, distribution: String, components: &str) -> Self {
        Self {
            enabled: true,
            source_repo,
            options: None,
            uri,
            distribution,
            components: join_components(components),
            comment: String::new(),
            origin: None,
        }
    }

    /// Set the bracketed options (without the brackets).
    pub fn with_options(mut self, options: impl Into<String>) -> Self {
        let options = options.into().trim().to_string();
        self.options = (!options.is_empty()).then_some(options);
        self
    }

    /// Set the trailing comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into().trim().to_string();
        self
    }

    /// Mark the declaration as commented out.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Copy with a different enabled state.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub(crate) fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = Some(origin);
        self
    }

    /// `deb-src` for source repositories, `deb` otherwise.
    pub fn type_token(&self) -> &'static str {
        if self.source_repo { "deb-src" } else { "deb" }
    }

    pub fn identity(&self) -> Identity<'_> {
        Identity {
            source_repo: self.source_repo,
            options: self.options.as_deref(),
            uri: &self.uri,
            distribution: &self.distribution,
            components: &self.components,
        }
    }

    /// Whether `other` declares the same repository, ignoring cosmetic fields.
    pub fn same_repository(&self, other: &Repository) -> bool {
        self.identity() == other.identity()
    }

    /// Serialize to a single `sources.list` line (no trailing newline).
    pub fn to_line(&self) -> String {
        let mut line = String::new();
        if !self.enabled {
            line.push_str("# ");
        }
        line.push_str(self.type_token());
        if let Some(options) = &self.options {
            line.push_str(" [");
            line.push_str(options);
            line.push(']');
        }
        line.push(' ');
        line.push_str(&self.uri);
        line.push(' ');
        line.push_str(&self.distribution);
        if !self.components.is_empty() {
            line.push(' ');
            line.push_str(&self.components);
        }
        if !self.comment.is_empty() {
            line.push_str(" # ");
            line.push_str(&self.comment);
        }
        line
    }

    /// Check that [`to_line`](Self::to_line) parses back to this declaration.
    ///
    /// Values built by hand can hold text the line grammar cannot carry,
    /// such as whitespace inside the URI or a newline in the comment.
    pub fn validate(&self) -> Result<()> {
        let fail = |reason: &str| Err(Error::malformed(self.to_line(), reason));

        if self.uri.is_empty() || self.uri.chars().any(char::is_whitespace) {
            return fail("URI must be a single non-empty token");
        }
        if self.uri.starts_with('[') || self.uri.starts_with('#') {
            return fail("URI must not start with '[' or '#'");
        }
        if self.distribution.is_empty()
            || self.distribution.chars().any(|c| c.is_whitespace() || c == '#')
        {
            return fail("distribution must be a single token without '#'");
        }
        if self.components.contains('#') || self.components != join_components(&self.components) {
            return fail("components must be single-space separated tokens without '#'");
        }
        if let Some(options) = &self.options {
            if options.trim().is_empty() {
                return fail("options must not be empty when present");
            }
            if options.contains(']') || options.contains('\n') || options.trim() != options {
                return fail("options must not contain ']' or surrounding whitespace");
            }
        }
        if self.comment.contains('\n') || self.comment.trim() != self.comment {
            return fail("comment must be a single trimmed line");
        }
        Ok(())
    }
}

/// Equality over every field except provenance.
impl PartialEq for Repository {
    fn eq(&self, other: &Self) -> bool {
        self.enabled == other.enabled
            && self.identity() == other.identity()
            && self.comment == other.comment
    }
}

impl Eq for Repository {}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line())
    }
}

pub(crate) fn join_components(components: &str) -> String {
    components.split_whitespace().collect::<Vec<_>>().join(" ")
}
