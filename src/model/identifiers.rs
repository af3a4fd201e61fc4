//! Identifier newtypes for rows and dataset namespaces.
//!
//! Both types are thin wrappers around strings. They exist so that row
//! identity and namespace tags cannot be mixed up with each other or with
//! ordinary text at API boundaries.

use std::fmt;

/// Stable identity of one logical row.
///
/// The key must be stable across renders for the same logical row and unique
/// among the rows currently rendered by one list instance. Uniqueness is a
/// documented precondition, not a runtime-checked invariant: duplicate keys
/// lead to unspecified size-cache behavior.
///
/// Numeric identifiers convert via `From`:
///
/// ```
/// use dynlist::model::RowKey;
///
/// let a = RowKey::new("msg-42");
/// let b = RowKey::from(42u64);
/// assert_ne!(a, b);
/// assert_eq!(b.as_str(), "42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowKey(String);

impl RowKey {
    /// Create a row key from anything string-like.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RowKey {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for RowKey {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<u64> for RowKey {
    fn from(raw: u64) -> Self {
        Self(raw.to_string())
    }
}

impl From<usize> for RowKey {
    fn from(raw: usize) -> Self {
        Self(raw.to_string())
    }
}

/// Namespace tag identifying which dataset a list is currently showing.
///
/// Distinct nonces get distinct, independently persisted size tables in the
/// [`SizeStore`](crate::store::SizeStore). Switching a list's nonce swaps its
/// live table and resets the scroll position; switching back restores the
/// sizes measured earlier for that dataset.
///
/// The default nonce is the empty tag, for hosts that only ever show one
/// dataset per list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Nonce(String);

impl Nonce {
    /// Create a namespace tag.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Nonce {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Nonce {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}
