//! Error types for manifest maintenance.
//!
//! [`ManifestError`] is the single error type returned by the library. Every
//! variant is fatal to the invocation; the binary reports it on stderr and
//! exits non-zero. A missing output file is not an error: it is the trigger
//! for the initial write.

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned while building or refreshing a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Standard input could not be read to the end.
    #[error("error reading file list from stdin")]
    ReadInput(#[source] std::io::Error),

    /// The output exists but its contents could not be read.
    #[error("error reading from {}", path.display())]
    ReadOutput {
        /// The manifest path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The manifest could not be created or overwritten.
    #[error("error writing to {}", path.display())]
    WriteOutput {
        /// The manifest path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A listed file (or the manifest itself) could not be stat'ed.
    #[error("stat({})", path.display())]
    Stat {
        /// The path whose metadata was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The manifest's modification time could not be advanced.
    #[error("error updating modification time of {}", path.display())]
    Touch {
        /// The manifest path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A listed name cannot be represented as a path on this platform.
    #[error("invalid filename `{}`: not valid UTF-8", String::from_utf8_lossy(name))]
    InvalidFilename {
        /// The raw bytes of the entry.
        name: Vec<u8>,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ManifestError>;
