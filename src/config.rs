//! Per-invocation configuration.
//!
//! [`Config`] carries every setting the pipeline reads. The CLI builds it
//! from flags and environment; library callers construct it directly.

use std::path::{Path, PathBuf};

use crate::separator::SeparatorChoice;

/// Resolved settings for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Explicit separator or auto-detection.
    pub separator: SeparatorChoice,
    /// Location of the manifest file.
    pub output: PathBuf,
}

impl Config {
    /// Auto-detect the separator and write to `output`.
    #[must_use]
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            separator: SeparatorChoice::Auto,
            output: output.into(),
        }
    }

    #[must_use]
    pub const fn with_separator(mut self, separator: SeparatorChoice) -> Self {
        self.separator = separator;
        self
    }

    #[must_use]
    pub fn output(&self) -> &Path {
        &self.output
    }
}
