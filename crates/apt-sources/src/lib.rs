//! Parsing, scanning and editing of APT `sources.list` declarations.
//!
//! The crate is layered leaves first:
//!
//! - [`repository`]: the [`Repository`] value, its one-line serializer and
//!   identity comparison
//! - [`parser`]: classification of a single line into a declaration, a
//!   comment, or unrecognized content
//! - [`list`]: the ordered [`RepositoryList`] returned by scans
//! - [`scanner`]: read-only walk of `sources.list` and `sources.list.d/`
//! - [`mutation`]: add/edit/remove confined to the one fragment file this
//!   crate owns
//!
//! Reading and writing are split into the [`SourceReader`] and
//! [`SourceWriter`] traits so callers that only need to inspect the
//! configuration never hold a handle capable of modifying it.
//!
//! # Example
//!
//! ```no_run
//! use apt_sources::{Repository, add_repository, scan};
//!
//! let ppa = Repository::binary("http://ppa.launchpad.net/webupd8team/java/ubuntu", "zesty", "main");
//! add_repository(&ppa, "/etc/apt")?;
//!
//! let repos = scan("/etc/apt")?;
//! assert!(repos.contains(&ppa));
//! # Ok::<(), apt_sources::Error>(())
//! ```

pub mod error;
pub mod list;
pub mod mutation;
pub mod parser;
pub mod repository;
pub mod scanner;

pub use error::{Error, ErrorKind, Result};
pub use list::RepositoryList;
pub use mutation::{ManagedSources, SourceWriter, add_repository, edit_repository, remove_repository};
pub use parser::{LineKind, classify_line, parse_line};
pub use repository::{Identity, Origin, Repository};
pub use scanner::{SourceReader, SourcesScanner, scan, scan_file};

pub use apt_fs::SourcesLayout;
