//! Canonical file lists and their serialized form.
//!
//! [`FileList::canonicalize`] turns raw input into a deterministic list:
//! split on the separator, drop empty entries, sort byte-wise.
//! [`FileList::serialize`] joins the list back with the same separator and a
//! mandatory trailing separator, producing the [`ManifestBuffer`] that is
//! compared against the manifest on disk.

use crate::separator::Separator;

// ---------------------------------------------------------------------------
// FileList
// ---------------------------------------------------------------------------

/// A sorted list of non-empty filenames, kept as raw bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileList {
    entries: Vec<Vec<u8>>,
}

impl FileList {
    /// Split `input` on `sep`, discard empty entries and sort the remainder
    /// in ascending byte order.
    #[must_use]
    pub fn canonicalize(input: &[u8], sep: Separator) -> Self {
        let mut entries: Vec<Vec<u8>> = split(input, sep.as_bytes())
            .filter(|entry| !entry.is_empty())
            .map(<[u8]>::to_vec)
            .collect();
        entries.sort_unstable();
        Self { entries }
    }

    /// Join the entries with `sep` and append one trailing `sep`.
    ///
    /// An empty list serializes to the separator bytes alone.
    #[must_use]
    pub fn serialize(&self, sep: Separator) -> ManifestBuffer {
        let sep = sep.as_bytes();
        let len = self.entries.iter().map(|e| e.len() + sep.len()).sum::<usize>();
        let mut bytes = Vec::with_capacity(len.max(sep.len()));
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                bytes.extend_from_slice(sep);
            }
            bytes.extend_from_slice(entry);
        }
        bytes.extend_from_slice(sep);
        ManifestBuffer(bytes)
    }

    /// The canonical entries, in order.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.entries.iter().map(Vec::as_slice)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Non-overlapping, left-to-right split of `haystack` on `needle`.
///
/// `needle` is never empty: every separator is at least one byte.
fn split<'a>(haystack: &'a [u8], needle: &'a [u8]) -> impl Iterator<Item = &'a [u8]> + 'a {
    let mut rest = Some(haystack);
    std::iter::from_fn(move || {
        let current = rest?;
        match find(current, needle) {
            Some(at) => {
                rest = Some(&current[at + needle.len()..]);
                Some(&current[..at])
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

// ---------------------------------------------------------------------------
// ManifestBuffer
// ---------------------------------------------------------------------------

/// The canonical serialized manifest: the unit of comparison against the
/// file on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManifestBuffer(Vec<u8>);

impl ManifestBuffer {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Byte-exact comparison with existing manifest contents.
    #[must_use]
    pub fn matches(&self, existing: &[u8]) -> bool {
        self.0 == existing
    }
}
