//! Validated handle on a single log file.
//!
//! The handle holds no open descriptor. Every operation opens the file, does
//! its work and closes it again before returning.

use std::fs::{self, File, FileTimes, Metadata, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::DEFAULT_BACKUP_EXTENSION;
use crate::error::{LogError, Result};
use crate::snapshot::{LogSnapshot, count_lines};

/// A log file that was a regular file when the handle was opened, together
/// with the [`LogSnapshot`] captured at that moment.
#[derive(Debug, Clone)]
pub struct LogHandle {
    path: PathBuf,
    snapshot: LogSnapshot,
}

impl LogHandle {
    /// Validate `path` and capture its size and line count.
    ///
    /// The size comes from filesystem metadata; the line count from one full
    /// sequential read (see [`count_lines`]).
    ///
    /// # Errors
    ///
    /// [`LogError::NotFound`] if the path is missing or is not a regular file
    /// (directories, sockets and devices are all rejected the same way), and
    /// [`LogError::PermissionDenied`] if it cannot be read.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let metadata = regular_file_metadata(path)?;

        let file = File::open(path).map_err(|e| LogError::from_io(path, e))?;
        let line_count = count_lines(file).map_err(|e| LogError::from_io(path, e))?;
        let snapshot = LogSnapshot::new(metadata.len(), line_count);

        debug!(
            path = %path.display(),
            size_bytes = snapshot.size_bytes(),
            line_count = snapshot.line_count(),
            "Captured log snapshot"
        );

        Ok(Self {
            path: path.to_path_buf(),
            snapshot,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Metrics captured when the handle was opened.
    pub fn snapshot(&self) -> LogSnapshot {
        self.snapshot
    }

    pub fn size_bytes(&self) -> u64 {
        self.snapshot.size_bytes()
    }

    pub fn size_megabytes(&self) -> f64 {
        self.snapshot.size_megabytes()
    }

    pub fn line_count(&self) -> u64 {
        self.snapshot.line_count()
    }

    /// The backup slot used when no destination is given: `<path>.prev`.
    pub fn default_backup_path(&self) -> PathBuf {
        let mut backup = self.path.as_os_str().to_os_string();
        backup.push(DEFAULT_BACKUP_EXTENSION);
        PathBuf::from(backup)
    }

    /// Copy the current on-disk content of the log to `destination`, or to
    /// [`default_backup_path`](Self::default_backup_path) when `None` or empty.
    ///
    /// An existing file at the destination is overwritten. Permissions and
    /// access/modification times are carried over to the copy. The content
    /// copied is whatever is on disk now, which may differ from the snapshot.
    ///
    /// Returns the path the backup was written to.
    pub fn clone_to_backup(&self, destination: Option<&Path>) -> Result<PathBuf> {
        let destination = destination
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.default_backup_path());

        copy_with_metadata(&self.path, &destination)?;

        info!(
            path = %self.path.display(),
            backup = %destination.display(),
            "Backed up log"
        );
        Ok(destination)
    }

    /// Truncate the log to zero length in place.
    ///
    /// The file is checked again at call time and is never removed, renamed or
    /// recreated, so its identity is preserved for any writer holding it open.
    /// This handle's snapshot is left untouched.
    pub fn clear_original_file(&self) -> Result<()> {
        regular_file_metadata(&self.path)?;

        // No `create`: a file removed since the check surfaces as NotFound
        // instead of being recreated.
        OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|e| LogError::from_io(&self.path, e))?;

        info!(path = %self.path.display(), "Cleared log");
        Ok(())
    }
}

/// Metadata for `path` if it currently is a regular file (following symlinks).
fn regular_file_metadata(path: &Path) -> Result<Metadata> {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_file() => Ok(metadata),
        Ok(_) => Err(LogError::not_found(path)),
        Err(e) => Err(LogError::from_io(path, e)),
    }
}

fn copy_with_metadata(source: &Path, destination: &Path) -> Result<()> {
    regular_file_metadata(source)?;

    if is_same_file(source, destination) {
        return Err(LogError::Io {
            path: destination.to_path_buf(),
            source: io::Error::new(
                io::ErrorKind::InvalidInput,
                "backup destination is the log file itself",
            ),
        });
    }

    let mut reader = File::open(source).map_err(|e| LogError::from_io(source, e))?;
    let mut writer = File::create(destination).map_err(|e| LogError::from_io(destination, e))?;
    io::copy(&mut reader, &mut writer).map_err(|e| LogError::from_io(source, e))?;

    let metadata = reader.metadata().map_err(|e| LogError::from_io(source, e))?;
    let mut times = FileTimes::new();
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    if let Ok(modified) = metadata.modified() {
        times = times.set_modified(modified);
    }
    writer
        .set_times(times)
        .map_err(|e| LogError::from_io(destination, e))?;
    writer
        .set_permissions(metadata.permissions())
        .map_err(|e| LogError::from_io(destination, e))?;

    Ok(())
}

/// Whether `a` and `b` name the same file, including through symlinks and
/// hard links.
fn is_same_file(a: &Path, b: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;

        match (fs::metadata(a), fs::metadata(b)) {
            (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
            _ => false,
        }
    }

    #[cfg(not(unix))]
    {
        match (fs::canonicalize(a), fs::canonicalize(b)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}
