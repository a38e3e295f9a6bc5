//! Line classification for the one-line `sources.list` format.
//!
//! Grammar of a declaration line:
//!
//! ```text
//! [#] deb|deb-src [ [options] ] <uri> <distribution> [components...] [# comment]
//! ```
//!
//! Every line falls into exactly one [`LineKind`], so scanning never fails
//! on content written by other tools.

use regex::Regex;
use std::sync::LazyLock;

use crate::repository::{Repository, join_components};
use crate::{Error, Result};

/// Matches a line that attempts a declaration (type token first)
static TYPE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:deb|deb-src)(?:\s|$)").expect("Invalid type regex"));

/// Captures: 1 type, 2 options, 3 URI, 4 distribution, 5 components, 6 comment
static DECLARATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(deb|deb-src)(?:\s+\[([^\]]*)\])?\s+([^\s\[#]\S*)\s+([^\s#]+)(?:\s+([^#]*))?(?:#(.*))?$",
    )
    .expect("Invalid declaration regex")
});

/// Classification of one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// A declaration, enabled or commented out
    Declaration(Repository),
    /// Blank line, or a `#` line that does not hold a declaration
    Comment,
    /// Content that is neither, kept untouched on rewrite
    Unrecognized { reason: String },
}

impl LineKind {
    pub fn into_declaration(self) -> Option<Repository> {
        match self {
            Self::Declaration(repo) => Some(repo),
            _ => None,
        }
    }
}

/// Classify a single line (without its line terminator).
///
/// A leading `#` marks a disabled declaration only when the rest of the
/// line matches the grammar; otherwise the line is a plain comment.
pub fn classify_line(line: &str) -> LineKind {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Comment;
    }

    if let Some(body) = trimmed.strip_prefix('#') {
        return match parse_body(body.trim_start()) {
            Ok(repo) => LineKind::Declaration(repo.disabled()),
            Err(_) => LineKind::Comment,
        };
    }

    if !TYPE_PATTERN.is_match(trimmed) {
        return LineKind::Unrecognized {
            reason: "not a deb or deb-src declaration".to_string(),
        };
    }

    match parse_body(trimmed) {
        Ok(repo) => LineKind::Declaration(repo),
        Err(reason) => LineKind::Unrecognized { reason },
    }
}

/// Parse a single line into a declaration.
///
/// Returns `Ok(None)` for blank and comment lines and
/// [`Error::Malformed`] for anything that is not a valid declaration.
pub fn parse_line(line: &str) -> Result<Option<Repository>> {
    match classify_line(line) {
        LineKind::Declaration(repo) => Ok(Some(repo)),
        LineKind::Comment => Ok(None),
        LineKind::Unrecognized { reason } => Err(Error::malformed(line.trim(), reason)),
    }
}

/// Parse an uncommented declaration body.
fn parse_body(body: &str) -> std::result::Result<Repository, String> {
    let Some(caps) = DECLARATION_PATTERN.captures(body) else {
        return Err(diagnose(body));
    };

    let source_repo = &caps[1] == "deb-src";
    let uri = caps[3].to_string();
    let distribution = caps[4].to_string();
    let components = caps.get(5).map(|m| m.as_str()).unwrap_or("");

    let mut repo = if source_repo {
        Repository::source(uri, distribution, components)
    } else {
        Repository::binary(uri, distribution, components)
    };
    if let Some(options) = caps.get(2) {
        repo = repo.with_options(options.as_str());
    }
    if let Some(comment) = caps.get(6) {
        repo = repo.with_comment(comment.as_str());
    }
    Ok(repo)
}

/// Explain why a body that starts like a declaration did not match.
fn diagnose(body: &str) -> String {
    let rest = body
        .trim_start_matches("deb-src")
        .trim_start_matches("deb")
        .trim_start();

    if rest.starts_with('[') && !rest.contains(']') {
        return "unterminated options bracket".to_string();
    }
    let rest = match rest.strip_prefix('[') {
        Some(after) => after.split_once(']').map(|(_, tail)| tail).unwrap_or(""),
        None => rest,
    };
    let tokens = join_components(rest.split('#').next().unwrap_or(""));
    match tokens.split(' ').filter(|t| !t.is_empty()).count() {
        0 => "missing URI and distribution".to_string(),
        1 => "missing distribution".to_string(),
        _ => "invalid declaration syntax".to_string(),
    }
}
