//! manifest library crate.
//!
//! Maintains a canonical, sorted, separator-joined list of filenames on disk
//! for build systems. The pipeline for one invocation is:
//!
//! 1. resolve the separator ([`separator`])
//! 2. canonicalize the input and serialize it ([`canonical`])
//! 3. write or touch the manifest as needed ([`freshness`])
//!
//! The `manifest` binary wraps [`run`] with a command line.

pub mod canonical;
pub mod config;
pub mod error;
pub mod freshness;
pub mod fs;
pub mod separator;
pub mod telemetry;

use std::io::Read;

pub use canonical::{FileList, ManifestBuffer};
pub use config::Config;
pub use error::{ManifestError, Result};
pub use freshness::Outcome;
pub use separator::{Separator, SeparatorChoice};

use crate::fs::{ManifestFs, StdFs};

/// Read the whole file list from `reader` (normally stdin).
///
/// # Errors
///
/// [`ManifestError::ReadInput`] if the reader fails before end of input.
pub fn read_input<R: Read>(mut reader: R) -> Result<Vec<u8>> {
    let mut input = Vec::new();
    reader
        .read_to_end(&mut input)
        .map_err(ManifestError::ReadInput)?;
    Ok(input)
}

/// Run the full pipeline against the real filesystem.
///
/// # Errors
///
/// Any read, write, stat or touch failure; see [`ManifestError`].
pub fn run(config: &Config, input: &[u8]) -> Result<Outcome> {
    run_with(&StdFs, config, input)
}

/// Run the full pipeline against `fs`.
///
/// # Errors
///
/// Propagates every error from [`freshness::refresh`].
#[tracing::instrument(skip_all, fields(output = %config.output().display()))]
pub fn run_with<F: ManifestFs>(fs: &F, config: &Config, input: &[u8]) -> Result<Outcome> {
    let sep = separator::resolve(config.separator, input);
    let files = FileList::canonicalize(input, sep);
    tracing::debug!(separator = %sep, entries = files.len(), "canonicalized input");

    let buffer = files.serialize(sep);
    freshness::refresh(fs, config.output(), &buffer, &files)
}
