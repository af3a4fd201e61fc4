//! Per-namespace persistence of measured row sizes.

use crate::model::{Nonce, SizeTable};
use lru::LruCache;
use std::cell::RefCell;
use std::num::NonZeroUsize;
use std::rc::Rc;

/// Eviction policy for a [`SizeStore`].
///
/// The store never evicted in the original design; `Unbounded` keeps that
/// behavior and is the default. Long-running hosts that show many distinct
/// datasets can cap growth with `Lru`, trading re-measurement of the least
/// recently shown datasets for bounded memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvictionPolicy {
    /// Keep every namespace entry for the process lifetime.
    Unbounded,
    /// Keep at most this many namespace entries, evicting the least
    /// recently used.
    Lru(NonZeroUsize),
}

impl Default for EvictionPolicy {
    fn default() -> Self {
        Self::Unbounded
    }
}

/// Shared handle to a [`SizeStore`], for single-threaded cooperative access.
pub type SharedSizeStore = Rc<RefCell<SizeStore>>;

/// Mapping from dataset namespace to the size-table snapshot measured for
/// it, so a list revisiting a namespace restores previously measured sizes
/// instead of re-measuring from scratch.
///
/// The store is owned by the composition root and handed to list instances
/// as a [`SharedSizeStore`]; tests construct isolated instances.
///
/// ```
/// use dynlist::model::{Nonce, RowKey, SizeTable};
/// use dynlist::store::SizeStore;
///
/// let mut store = SizeStore::new();
/// let mut table = SizeTable::new();
/// table.set(RowKey::new("a"), 40.0);
/// store.insert(Nonce::new("inbox"), table);
///
/// let restored = store.get(&Nonce::new("inbox")).unwrap();
/// assert_eq!(restored.get(&RowKey::new("a")), Some(40.0));
/// assert!(store.get(&Nonce::new("archive")).is_none());
/// ```
pub struct SizeStore {
    entries: LruCache<Nonce, SizeTable>,
}

impl std::fmt::Debug for SizeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SizeStore")
            .field("namespaces", &self.entries.len())
            .finish()
    }
}

impl SizeStore {
    /// Create an unbounded store.
    pub fn new() -> Self {
        Self::with_policy(EvictionPolicy::Unbounded)
    }

    /// Create a store with an explicit eviction policy.
    pub fn with_policy(policy: EvictionPolicy) -> Self {
        let entries = match policy {
            EvictionPolicy::Unbounded => LruCache::unbounded(),
            EvictionPolicy::Lru(capacity) => LruCache::new(capacity),
        };
        Self { entries }
    }

    /// Create an unbounded store behind a shared handle.
    pub fn shared() -> SharedSizeStore {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Create a policy-configured store behind a shared handle.
    pub fn shared_with(policy: EvictionPolicy) -> SharedSizeStore {
        Rc::new(RefCell::new(Self::with_policy(policy)))
    }

    /// Snapshot stored for `nonce`, refreshing its recency.
    ///
    /// Cloning a [`SizeTable`] is a cheap snapshot clone.
    pub fn get(&mut self, nonce: &Nonce) -> Option<SizeTable> {
        self.entries.get(nonce).cloned()
    }

    /// Store (or replace) the snapshot for `nonce`.
    pub fn insert(&mut self, nonce: Nonce, table: SizeTable) {
        if let Some((evicted, _)) = self.entries.push(nonce, table) {
            if !self.entries.contains(&evicted) {
                tracing::debug!(nonce = %evicted, "size store evicted namespace");
            }
        }
    }

    /// Whether a snapshot exists for `nonce` (without refreshing recency).
    pub fn contains(&self, nonce: &Nonce) -> bool {
        self.entries.contains(nonce)
    }

    /// Number of stored namespaces.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SizeStore {
    fn default() -> Self {
        Self::new()
    }
}
