//! Freshness engine: decide whether the manifest must be written, touched,
//! or left alone.
//!
//! The manifest is rewritten only when its canonical content changes. When
//! the content is already current, its modification time is advanced if any
//! listed file is strictly newer than it, so that build rules depending on
//! the manifest still notice edits to the files it names.

use std::fmt;
use std::path::Path;

use crate::canonical::{FileList, ManifestBuffer};
use crate::error::Result;
use crate::fs::{ManifestFs, entry_path};

/// What a refresh did to the manifest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The manifest did not exist and was written.
    Created,
    /// The manifest existed with different content and was overwritten.
    Rewritten,
    /// Content was current but a listed file was newer; mtime advanced.
    Touched,
    /// Nothing to do.
    UpToDate,
}

impl Outcome {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Rewritten => "rewritten",
            Self::Touched => "touched",
            Self::UpToDate => "up-to-date",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bring the manifest at `output` in line with `buffer` and `files`.
///
/// - missing → write `buffer`
/// - different content → overwrite, without looking at mtimes
/// - same content → touch if any file in `files` is strictly newer than the
///   manifest's mtime as read before the check
///
/// The scan stops at the first newer file, so later entries are not stat'ed.
///
/// # Errors
///
/// Fails if the manifest cannot be read or written, if the manifest or a
/// listed file cannot be stat'ed on the mtime path, or if the touch fails.
pub fn refresh<F: ManifestFs>(
    fs: &F,
    output: &Path,
    buffer: &ManifestBuffer,
    files: &FileList,
) -> Result<Outcome> {
    let Some(existing) = fs.read(output)? else {
        tracing::info!(output = %output.display(), "manifest missing, writing");
        fs.write(output, buffer.as_bytes())?;
        return Ok(Outcome::Created);
    };

    if !buffer.matches(&existing) {
        tracing::info!(output = %output.display(), "manifest content changed, rewriting");
        fs.write(output, buffer.as_bytes())?;
        return Ok(Outcome::Rewritten);
    }

    let out_mtime = fs.mtime(output)?;
    tracing::debug!(entries = files.len(), "manifest content current, checking mtimes");

    for entry in files.iter() {
        let path = entry_path(entry)?;
        let mtime = fs.mtime(&path)?;
        if mtime > out_mtime {
            tracing::info!(
                output = %output.display(),
                newer = %path.display(),
                "listed file is newer than manifest, touching"
            );
            fs.touch(output)?;
            return Ok(Outcome::Touched);
        }
    }

    tracing::debug!("manifest up to date");
    Ok(Outcome::UpToDate)
}
