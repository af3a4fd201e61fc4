//! Lazily built cumulative-offset table with prefix invalidation.
//!
//! Offsets are accumulated on demand from a caller-supplied size lookup and
//! cached per index. Invalidation ("reset after index N") is a constant-time
//! truncation of the valid prefix; the next lookup refills from the current
//! sizes. Rows past the valid prefix contribute an estimated size to the
//! total, so the scrollbar stays plausible before everything is measured.
//!
//! # Complexity
//!
//! - `reset_after`: O(1)
//! - `slot`: O(k) fill for k newly cached rows, O(1) once cached
//! - `start_index_for`: O(log n) binary search over the cached prefix
//!   (plus the one-time fill cost of extending the prefix to the scroll
//!   position)
//! - `total_size`: O(1)

/// Cached geometry for one row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowSlot {
    /// Cumulative offset of the row's leading edge.
    pub offset: f64,
    /// Size the row had when this slot was filled.
    pub size: f64,
}

impl RowSlot {
    /// Offset of the row's trailing edge.
    pub fn bottom(&self) -> f64 {
        self.offset + self.size
    }
}

/// Cumulative-offset cache over a sequence of rows.
///
/// `slots[..valid]` hold correct geometry for the current size function;
/// anything past `valid` is stale storage kept for reuse.
#[derive(Debug, Clone, Default)]
pub struct OffsetIndex {
    slots: Vec<RowSlot>,
    valid: usize,
}

impl OffsetIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows with currently valid cached geometry.
    pub fn valid_len(&self) -> usize {
        self.valid
    }

    /// Discard cached geometry for `index` and everything after it.
    ///
    /// Cheap: later lookups refill from the size function.
    pub fn reset_after(&mut self, index: usize) {
        self.valid = self.valid.min(index);
    }

    /// Geometry for the row at `index`, filling the cache as needed.
    ///
    /// `index` must be less than the item count; the size function is
    /// consulted for every row between the valid prefix and `index`.
    pub fn slot<F>(&mut self, index: usize, size_of: &mut F) -> RowSlot
    where
        F: FnMut(usize) -> f64,
    {
        self.fill_through(index, size_of);
        self.slots[index]
    }

    fn fill_through<F>(&mut self, index: usize, size_of: &mut F)
    where
        F: FnMut(usize) -> f64,
    {
        while self.valid <= index {
            let offset = if self.valid == 0 {
                0.0
            } else {
                self.slots[self.valid - 1].bottom()
            };
            let slot = RowSlot {
                offset,
                size: size_of(self.valid),
            };
            if self.valid < self.slots.len() {
                self.slots[self.valid] = slot;
            } else {
                self.slots.push(slot);
            }
            self.valid += 1;
        }
    }

    /// Index of the first row whose extent contains `offset`.
    ///
    /// Clamped to `count - 1` when `offset` lies past the end of the
    /// content. `count` must be non-zero.
    pub fn start_index_for<F>(&mut self, offset: f64, count: usize, size_of: &mut F) -> usize
    where
        F: FnMut(usize) -> f64,
    {
        debug_assert!(count > 0, "start_index_for on empty content");

        // Extend the cached prefix until it covers the requested offset
        // (or the whole sequence).
        while self.valid < count
            && (self.valid == 0 || self.slots[self.valid - 1].bottom() <= offset)
        {
            self.fill_through(self.valid, size_of);
        }

        let cached = &self.slots[..self.valid];
        let found = cached.partition_point(|slot| slot.bottom() <= offset);
        found.min(count - 1)
    }

    /// Index of the last row whose leading edge lies before `max_offset`,
    /// walking forward from `start`. `count` must be non-zero.
    pub fn stop_index_for<F>(
        &mut self,
        start: usize,
        max_offset: f64,
        count: usize,
        size_of: &mut F,
    ) -> usize
    where
        F: FnMut(usize) -> f64,
    {
        debug_assert!(count > 0, "stop_index_for on empty content");

        let mut index = start;
        let mut bottom = self.slot(start, size_of).bottom();
        while index < count - 1 && bottom < max_offset {
            index += 1;
            bottom += self.slot(index, size_of).size;
        }
        index
    }

    /// Total content size: the exactly accumulated valid prefix plus
    /// `estimate` for every row past it.
    pub fn total_size(&self, count: usize, estimate: f64) -> f64 {
        let measured = self.valid.min(count);
        let measured_end = if measured == 0 {
            0.0
        } else {
            self.slots[measured - 1].bottom()
        };
        measured_end + (count - measured) as f64 * estimate
    }
}
