//! Ordered anchor-number collections and their wire encoding.
//!
//! An [`AnchorSet`] holds every anchor number found on one page, sorted
//! ascending. Duplicates are kept: two `id="pg5"` markers on the same page
//! produce two entries (and later two navigation links), matching what the
//! page actually contains.
//!
//! The persisted representation is a comma-joined decimal string
//! (`"3,5,12"`). Encoding and decoding live here so the format is a single
//! explicit contract at the store boundary instead of string concatenation
//! scattered across callers.

use std::fmt;

/// Error decoding a persisted anchor list.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    /// An item in the comma-joined list is not a decimal integer.
    #[error("invalid anchor number {0:?}")]
    InvalidNumber(String),
}

/// Anchor numbers of a single page, sorted ascending.
///
/// May be empty, but empty sets are never persisted: absence of a store
/// entry means "no anchors".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnchorSet(Vec<u32>);

impl AnchorSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from numbers in any order; sorts ascending.
    #[must_use]
    pub fn from_unsorted(mut numbers: Vec<u32>) -> Self {
        numbers.sort_unstable();
        Self(numbers)
    }

    /// Smallest anchor number, if any.
    ///
    /// This is the sort key used to order subpages in the navigation strip.
    #[must_use]
    pub fn first(&self) -> Option<u32> {
        self.0.first().copied()
    }

    /// True if the page has no anchors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of anchors (duplicates counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Anchor numbers in ascending order.
    #[must_use]
    pub fn numbers(&self) -> &[u32] {
        &self.0
    }

    /// Iterate anchor numbers in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    /// Encode as the persisted comma-joined decimal string (e.g. `"3,5,12"`).
    #[must_use]
    pub fn encode(&self) -> String {
        let mut out = String::new();
        for (i, n) in self.0.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(&n.to_string());
        }
        out
    }

    /// Decode the persisted comma-joined string.
    ///
    /// An empty string decodes to an empty set. The result is re-sorted, so
    /// rows written by older versions with unsorted values still come back
    /// in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidNumber`] if any item is not a decimal
    /// integer that fits in `u32`.
    pub fn decode(encoded: &str) -> Result<Self, DecodeError> {
        if encoded.is_empty() {
            return Ok(Self::new());
        }
        let mut numbers = Vec::new();
        for item in encoded.split(',') {
            let n = item
                .trim()
                .parse::<u32>()
                .map_err(|_| DecodeError::InvalidNumber(item.to_owned()))?;
            numbers.push(n);
        }
        Ok(Self::from_unsorted(numbers))
    }
}

impl fmt::Display for AnchorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl<'a> IntoIterator for &'a AnchorSet {
    type Item = u32;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, u32>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}
