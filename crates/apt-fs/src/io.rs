//! Atomic I/O operations with file locking

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use backoff::ExponentialBackoffBuilder;
use fs2::FileExt;

use crate::{Error, NormalizedPath, Result};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Tuning knobs for [`write_atomic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RobustnessConfig {
    /// How long to keep retrying the advisory lock before giving up.
    pub lock_timeout: Duration,
    /// Whether to `fsync` the temp file before publishing it.
    pub enable_fsync: bool,
}

impl Default for RobustnessConfig {
    fn default() -> Self {
        Self {
            lock_timeout: Duration::from_secs(5),
            enable_fsync: true,
        }
    }
}

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so readers observe either the old or the
/// new content, never a partial write. Missing parent directories are
/// created.
///
/// Writers serialize on an advisory lock held on the target file itself for
/// the whole write, retried with exponential backoff up to
/// [`RobustnessConfig::lock_timeout`]. A target that does not exist yet is
/// created empty so there is something to lock.
pub fn write_atomic(path: &NormalizedPath, content: &[u8], config: RobustnessConfig) -> Result<()> {
    let native_path = path.to_native();

    if let Some(parent) = native_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
    }

    let target = lock_target(&native_path, config.lock_timeout)?;
    let result = replace_via_temp(&native_path, content, config);
    // Dropping the handle releases the lock as well
    let _ = FileExt::unlock(&target);
    result?;

    tracing::trace!(path = %path, bytes = content.len(), "atomic write complete");
    Ok(())
}

/// Open `path` and take an exclusive lock on the file currently at it.
fn lock_target(path: &Path, timeout: Duration) -> Result<File> {
    let lock_failed = || Error::LockFailed {
        path: path.to_path_buf(),
    };
    let policy = ExponentialBackoffBuilder::new()
        .with_initial_interval(Duration::from_millis(10))
        .with_max_elapsed_time(Some(timeout))
        .build();

    backoff::retry(policy, || {
        let target = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .map_err(|e| backoff::Error::permanent(Error::io(path, e)))?;
        target
            .try_lock_exclusive()
            .map_err(|_| backoff::Error::transient(lock_failed()))?;

        // A previous holder may have renamed a new file over the one we locked
        if !still_at_path(&target, path) {
            let _ = FileExt::unlock(&target);
            return Err(backoff::Error::transient(lock_failed()));
        }
        Ok(target)
    })
    .map_err(|e| match e {
        backoff::Error::Permanent(err) | backoff::Error::Transient { err, .. } => err,
    })
}

#[cfg(unix)]
fn still_at_path(file: &File, path: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (file.metadata(), fs::metadata(path)) {
        (Ok(held), Ok(current)) => held.dev() == current.dev() && held.ino() == current.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn still_at_path(_file: &File, path: &Path) -> bool {
    path.exists()
}

/// Write `content` to a temp file next to `path`, then rename it over `path`.
fn replace_via_temp(path: &Path, content: &[u8], config: RobustnessConfig) -> Result<()> {
    // Temp file lives in the same directory so the rename stays on one filesystem
    let temp_name = format!(
        ".{}.{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id(),
        TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
    );
    let temp_path = path.with_file_name(&temp_name);

    let written = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .and_then(|mut temp_file| {
            temp_file.write_all(content)?;
            if config.enable_fsync {
                temp_file.sync_all()?;
            }
            Ok(())
        })
        .map_err(|e| Error::io(&temp_path, e));
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::io(path, e));
    }
    Ok(())
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Read a file as text, replacing invalid UTF-8 with U+FFFD.
///
/// For files owned by other tools, where one stray byte must not make the
/// whole file unreadable. Never use the result to rewrite the file.
pub fn read_text_lossy(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    let bytes = fs::read(&native_path).map_err(|e| Error::io(&native_path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read text content from a file, treating a missing file as `None`.
pub fn read_text_if_exists(path: &NormalizedPath) -> Result<Option<String>> {
    match read_text(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Remove a file.
pub fn remove_file(path: &NormalizedPath) -> Result<()> {
    let native_path = path.to_native();
    fs::remove_file(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// List the regular files directly inside `dir`, sorted by file name.
///
/// A missing directory yields an empty list. Entries that are not regular
/// files (subdirectories, sockets, dangling symlinks) are skipped, and so are
/// temp files left behind by an interrupted [`write_atomic`].
pub fn list_regular_files(dir: &NormalizedPath) -> Result<Vec<NormalizedPath>> {
    let native_dir = dir.to_native();
    let entries = match fs::read_dir(&native_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(Error::io(&native_dir, e)),
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(&native_dir, e))?;
        // Follows symlinks, so a link to a regular file counts
        let is_file = fs::metadata(entry.path())
            .map(|meta| meta.is_file())
            .unwrap_or(false);
        if !is_file {
            tracing::debug!(path = %entry.path().display(), "skipping non-regular entry");
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_temp_name(&name) {
            tracing::debug!(path = %entry.path().display(), "skipping leftover temp file");
            continue;
        }
        names.push(name);
    }
    names.sort();

    Ok(names.iter().map(|name| dir.join(name)).collect())
}

/// Names produced by [`write_atomic`] for its temp files.
fn is_temp_name(name: &str) -> bool {
    name.starts_with('.') && name.ends_with(".tmp")
}
