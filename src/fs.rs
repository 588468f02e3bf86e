//! Filesystem primitives used by the freshness engine.
//!
//! The engine never touches `std::fs` directly; it goes through
//! [`ManifestFs`], which exposes exactly the four operations it needs.
//! [`StdFs`] is the real implementation. Tests substitute an in-memory one.

use std::io;
use std::path::{Path, PathBuf};

use filetime::FileTime;

use crate::error::{ManifestError, Result};

/// The filesystem operations the freshness engine depends on.
///
/// # Errors
///
/// Each method maps its I/O failure to the matching [`ManifestError`]
/// variant, carrying the path involved.
pub trait ManifestFs {
    /// Read a whole file. `Ok(None)` means the file does not exist.
    fn read(&self, path: &Path) -> Result<Option<Vec<u8>>>;

    /// Create or truncate `path` and write `contents` to it.
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;

    /// The modification time of `path`.
    fn mtime(&self, path: &Path) -> Result<FileTime>;

    /// Set the modification time of `path` to the current time.
    fn touch(&self, path: &Path) -> Result<()>;
}

/// [`ManifestFs`] backed by the real filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdFs;

impl ManifestFs for StdFs {
    fn read(&self, path: &Path) -> Result<Option<Vec<u8>>> {
        match std::fs::read(path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ManifestError::ReadOutput {
                path: path.to_owned(),
                source,
            }),
        }
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        std::fs::write(path, contents).map_err(|source| ManifestError::WriteOutput {
            path: path.to_owned(),
            source,
        })
    }

    fn mtime(&self, path: &Path) -> Result<FileTime> {
        let meta = std::fs::metadata(path).map_err(|source| ManifestError::Stat {
            path: path.to_owned(),
            source,
        })?;
        Ok(FileTime::from_last_modification_time(&meta))
    }

    fn touch(&self, path: &Path) -> Result<()> {
        let now = FileTime::now();
        filetime::set_file_times(path, now, now).map_err(|source| ManifestError::Touch {
            path: path.to_owned(),
            source,
        })
    }
}

/// Interpret a manifest entry as a filesystem path.
///
/// Unix paths are arbitrary bytes. Elsewhere the entry must be UTF-8.
///
/// # Errors
///
/// [`ManifestError::InvalidFilename`] for non-UTF-8 names off Unix.
pub fn entry_path(entry: &[u8]) -> Result<PathBuf> {
    #[cfg(unix)]
    {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt as _;
        Ok(PathBuf::from(OsStr::from_bytes(entry)))
    }
    #[cfg(not(unix))]
    {
        std::str::from_utf8(entry)
            .map(PathBuf::from)
            .map_err(|_| ManifestError::InvalidFilename {
                name: entry.to_vec(),
            })
    }
}
