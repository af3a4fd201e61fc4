//! Copy-on-write table of measured row sizes.

use super::RowKey;
use std::collections::HashMap;
use std::sync::Arc;

/// Live mapping from row key to measured size for one dataset namespace.
///
/// The backing map lives behind an [`Arc`], so cloning a table is cheap and
/// produces a snapshot: [`set`](SizeTable::set) never mutates storage that a
/// previously taken clone can observe. A render pass holding an old snapshot
/// keeps reading the sizes it started with.
///
/// Sizes are positive finite numbers; filtering out degenerate measurements
/// is the caller's job (the measurer and the controller both do).
///
/// ```
/// use dynlist::model::{RowKey, SizeTable};
///
/// let mut table = SizeTable::new();
/// assert!(table.set(RowKey::new("a"), 24.0));
/// let snapshot = table.clone();
/// table.set(RowKey::new("a"), 48.0);
///
/// assert_eq!(snapshot.get(&RowKey::new("a")), Some(24.0));
/// assert_eq!(table.get(&RowKey::new("a")), Some(48.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SizeTable {
    entries: Arc<HashMap<RowKey, f64>>,
}

impl SizeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(key, size)` pairs. Later pairs win on key collision.
    pub fn from_entries(entries: impl IntoIterator<Item = (RowKey, f64)>) -> Self {
        Self {
            entries: Arc::new(entries.into_iter().collect()),
        }
    }

    /// Measured size for `key`, if the row has been measured.
    pub fn get(&self, key: &RowKey) -> Option<f64> {
        self.entries.get(key).copied()
    }

    /// Store a measured size for `key`.
    ///
    /// Returns `true` when the stored value actually changed. Re-recording
    /// the value already present is a no-op and returns `false`, which is
    /// what lets callers skip offset invalidation for redundant reports.
    pub fn set(&mut self, key: RowKey, size: f64) -> bool {
        if self.entries.get(&key) == Some(&size) {
            return false;
        }
        Arc::make_mut(&mut self.entries).insert(key, size);
        true
    }

    /// Arithmetic mean of all stored sizes, or `None` when nothing has been
    /// measured yet. Callers substitute their configured default in the
    /// `None` case rather than letting a division by zero escape into layout.
    pub fn mean(&self) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }
        let sum: f64 = self.entries.values().sum();
        Some(sum / self.entries.len() as f64)
    }

    /// Number of measured rows.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no row has been measured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when both tables share the same backing snapshot.
    ///
    /// Distinguishes "same storage" from "equal contents"; a changed table
    /// always fails this check against its pre-change clones.
    pub fn shares_snapshot_with(&self, other: &SizeTable) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }

    /// Iterate over `(key, size)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&RowKey, f64)> {
        self.entries.iter().map(|(k, v)| (k, *v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn key(s: &str) -> RowKey {
        RowKey::new(s)
    }

    #[test]
    fn empty_table_has_no_sizes_and_no_mean() {
        let table = SizeTable::new();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert_eq!(table.get(&key("a")), None);
        assert_eq!(table.mean(), None);
    }

    #[test]
    fn set_stores_and_reports_change() {
        let mut table = SizeTable::new();
        assert!(table.set(key("a"), 20.0));
        assert_eq!(table.get(&key("a")), Some(20.0));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn set_with_unchanged_value_is_noop() {
        let mut table = SizeTable::new();
        table.set(key("a"), 20.0);
        let before = table.clone();

        assert!(!table.set(key("a"), 20.0));
        // No-op updates keep the same backing snapshot.
        assert!(table.shares_snapshot_with(&before));
    }

    #[test]
    fn set_with_new_value_replaces_entry() {
        let mut table = SizeTable::new();
        table.set(key("a"), 20.0);
        assert!(table.set(key("a"), 35.0));
        assert_eq!(table.get(&key("a")), Some(35.0));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn snapshots_are_isolated_from_later_writes() {
        let mut table = SizeTable::new();
        table.set(key("a"), 10.0);
        table.set(key("b"), 30.0);

        let snapshot = table.clone();
        table.set(key("a"), 99.0);
        table.set(key("c"), 50.0);

        assert_eq!(snapshot.get(&key("a")), Some(10.0));
        assert_eq!(snapshot.get(&key("c")), None);
        assert_eq!(snapshot.len(), 2);
        assert!(!table.shares_snapshot_with(&snapshot));
    }

    #[test]
    fn mean_is_arithmetic_average() {
        let mut table = SizeTable::new();
        table.set(key("a"), 10.0);
        table.set(key("b"), 20.0);
        table.set(key("c"), 60.0);
        assert_eq!(table.mean(), Some(30.0));
    }

    #[test]
    fn from_entries_last_pair_wins() {
        let table = SizeTable::from_entries([(key("a"), 1.0), (key("a"), 2.0)]);
        assert_eq!(table.get(&key("a")), Some(2.0));
        assert_eq!(table.len(), 1);
    }

    proptest! {
        /// Replaying any sequence of writes leaves the table equal to one
        /// built from only the last write per key.
        #[test]
        fn replay_is_last_write_wins(
            writes in prop::collection::vec(("[a-d]", 1.0f64..200.0), 0..40)
        ) {
            let mut table = SizeTable::new();
            for (k, size) in &writes {
                table.set(RowKey::new(k.clone()), *size);
            }

            let mut last: std::collections::HashMap<String, f64> =
                std::collections::HashMap::new();
            for (k, size) in &writes {
                last.insert(k.clone(), *size);
            }

            prop_assert_eq!(table.len(), last.len());
            for (k, size) in last {
                prop_assert_eq!(table.get(&RowKey::new(k)), Some(size));
            }
        }

        /// The mean always lies within the range of stored values.
        #[test]
        fn mean_is_bounded_by_extremes(
            sizes in prop::collection::vec(1.0f64..500.0, 1..30)
        ) {
            let table = SizeTable::from_entries(
                sizes.iter().enumerate().map(|(i, s)| (RowKey::from(i), *s)),
            );
            let mean = table.mean().unwrap();
            let min = sizes.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = sizes.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(mean >= min - 1e-9 && mean <= max + 1e-9);
        }
    }
}
