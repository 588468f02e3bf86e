//! Entry separators and line-ending detection.
//!
//! A manifest is split and joined on exactly one [`Separator`] per run. The
//! separator is either selected explicitly ([`SeparatorChoice::Explicit`]) or
//! detected from the first line ending found in the input.
//!
//! Detection is a three-state scan ([`DetectState`]): nothing seen yet, one
//! CR/LF seen, resolved. It stops as soon as the separator is known, so the
//! rest of the input is never examined.

use std::fmt;

use clap::ValueEnum;

const CR: u8 = b'\r';
const LF: u8 = b'\n';

// ---------------------------------------------------------------------------
// Separator
// ---------------------------------------------------------------------------

/// The byte sequence used to delimit entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Separator {
    /// `\n`
    Lf,
    /// `\r`
    Cr,
    /// `\r\n`
    #[value(name = "crlf")]
    CrLf,
    /// `\n\r`
    #[value(name = "lfcr")]
    LfCr,
    /// `\0`; also the sentinel for input that contains no line ending at all.
    #[value(name = "nul", alias = "0")]
    Nul,
}

impl Separator {
    /// Every recognised separator.
    pub const ALL: [Self; 5] = [Self::Lf, Self::Cr, Self::CrLf, Self::LfCr, Self::Nul];

    /// The raw bytes of this separator.
    #[must_use]
    pub const fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::Lf => b"\n",
            Self::Cr => b"\r",
            Self::CrLf => b"\r\n",
            Self::LfCr => b"\n\r",
            Self::Nul => b"\0",
        }
    }

    /// Short lowercase name, as accepted on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lf => "lf",
            Self::Cr => "cr",
            Self::CrLf => "crlf",
            Self::LfCr => "lfcr",
            Self::Nul => "nul",
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// SeparatorChoice
// ---------------------------------------------------------------------------

/// How the separator for a run is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeparatorChoice {
    /// Use this separator unconditionally.
    Explicit(Separator),
    /// Detect the separator from the input.
    #[default]
    Auto,
}

impl From<Option<Separator>> for SeparatorChoice {
    fn from(sep: Option<Separator>) -> Self {
        sep.map_or(Self::Auto, Self::Explicit)
    }
}

/// Resolve the separator for one run.
#[must_use]
pub fn resolve(choice: SeparatorChoice, input: &[u8]) -> Separator {
    match choice {
        SeparatorChoice::Explicit(sep) => sep,
        SeparatorChoice::Auto => detect(input),
    }
}

// ---------------------------------------------------------------------------
// Detection
// ---------------------------------------------------------------------------

/// A single line-ending byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LineEnd {
    Cr,
    Lf,
}

impl LineEnd {
    const fn classify(byte: u8) -> Option<Self> {
        match byte {
            CR => Some(Self::Cr),
            LF => Some(Self::Lf),
            _ => None,
        }
    }

    const fn alone(self) -> Separator {
        match self {
            Self::Cr => Separator::Cr,
            Self::Lf => Separator::Lf,
        }
    }

    const fn followed_by(self, next: Self) -> Separator {
        match (self, next) {
            (Self::Cr, Self::Lf) => Separator::CrLf,
            (Self::Lf, Self::Cr) => Separator::LfCr,
            // `\r\r` / `\n\n` is a run of single-byte separators
            (first, _) => first.alone(),
        }
    }
}

/// State of the line-ending scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DetectState {
    /// No CR or LF seen yet.
    Unseen,
    /// The first line-ending byte has been seen.
    OneSeen(LineEnd),
    /// The separator is known; further input is irrelevant.
    Resolved(Separator),
}

impl DetectState {
    /// Advance the scan by one input byte.
    pub(crate) const fn step(self, byte: u8) -> Self {
        match self {
            Self::Unseen => match LineEnd::classify(byte) {
                Some(first) => Self::OneSeen(first),
                None => Self::Unseen,
            },
            Self::OneSeen(first) => match LineEnd::classify(byte) {
                Some(next) => Self::Resolved(first.followed_by(next)),
                None => Self::Resolved(first.alone()),
            },
            Self::Resolved(sep) => Self::Resolved(sep),
        }
    }

    /// The separator implied by the input once it is exhausted.
    pub(crate) const fn finish(self) -> Separator {
        match self {
            Self::Unseen => Separator::Nul,
            Self::OneSeen(first) => first.alone(),
            Self::Resolved(sep) => sep,
        }
    }
}

/// Detect the separator from the first line ending in `input`.
///
/// Input without any CR or LF yields [`Separator::Nul`], which makes a single
/// undelimited filename parse as one entry.
#[must_use]
pub fn detect(input: &[u8]) -> Separator {
    let mut state = DetectState::Unseen;
    for &byte in input {
        state = state.step(byte);
        if let DetectState::Resolved(sep) = state {
            return sep;
        }
    }
    state.finish()
}
