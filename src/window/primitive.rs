//! Fixed-window primitive: visible-range computation and scroll state.

use super::offsets::OffsetIndex;
use super::range::RenderedRange;
use super::style::RowStyle;

/// Viewport extent of a windowed list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Scrollable axis extent.
    pub height: f64,
    /// Cross-axis extent, handed through to row styles.
    pub width: f64,
}

impl Viewport {
    /// Create a viewport.
    pub fn new(height: f64, width: f64) -> Self {
        Self { height, width }
    }
}

/// The windowing primitive: given an item count, a per-index size lookup,
/// and viewport dimensions, decides which index range is rendered and where
/// each row sits.
///
/// The window holds no row data and never calls back into the host except
/// through the size lookup passed to each operation. Size changes are
/// communicated by [`reset_after`](Window::reset_after), which discards
/// cached cumulative offsets from the given index onward.
///
/// Scroll offsets are clamped to `[0, max(0, total - viewport_height)]` on
/// every mutation, so a blank viewport cannot be produced by scrolling.
#[derive(Debug)]
pub struct Window {
    offsets: OffsetIndex,
    viewport: Viewport,
    scroll_offset: f64,
    overscan: usize,
    resets: u64,
}

impl Window {
    /// Create a window over the given viewport with `overscan` extra rows
    /// rendered on each side of the visible range.
    pub fn new(viewport: Viewport, overscan: usize) -> Self {
        Self {
            offsets: OffsetIndex::new(),
            viewport,
            scroll_offset: 0.0,
            overscan,
            resets: 0,
        }
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Replace the viewport. Offsets are unaffected; callers whose row sizes
    /// depend on width must also invalidate.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Configured overscan row count.
    pub fn overscan(&self) -> usize {
        self.overscan
    }

    /// Current scroll offset from the top of the content.
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Discard cached offsets for `index` and everything after it.
    pub fn reset_after(&mut self, index: usize) {
        self.offsets.reset_after(index);
        self.resets += 1;
        tracing::trace!(index, "window offsets invalidated");
    }

    /// How many times [`reset_after`](Window::reset_after) has been called.
    ///
    /// Lets hosts (and tests) observe that redundant size reports do not
    /// invalidate anything.
    pub fn reset_count(&self) -> u64 {
        self.resets
    }

    /// Number of rows with currently cached geometry.
    pub fn cached_rows(&self) -> usize {
        self.offsets.valid_len()
    }

    /// Set the scroll offset, clamped against the current total size.
    pub fn set_scroll_offset(&mut self, offset: f64, count: usize, estimate: f64) {
        let total = self.total_size(count, estimate);
        let max = (total - self.viewport.height).max(0.0);
        self.scroll_offset = offset.clamp(0.0, max);
    }

    /// Scroll so the row at `index` sits at the top of the viewport
    /// (clamped to valid scroll range, and to the last row for an
    /// out-of-bounds index).
    pub fn scroll_to_item<F>(&mut self, index: usize, count: usize, size_of: &mut F, estimate: f64)
    where
        F: FnMut(usize) -> f64,
    {
        if count == 0 {
            self.scroll_offset = 0.0;
            return;
        }
        let target = self.offsets.slot(index.min(count - 1), size_of).offset;
        self.set_scroll_offset(target, count, estimate);
    }

    /// Compute the rendered index range for the current scroll position.
    ///
    /// Returns `None` when there are no items.
    pub fn range<F>(&mut self, count: usize, size_of: &mut F) -> Option<RenderedRange>
    where
        F: FnMut(usize) -> f64,
    {
        if count == 0 {
            return None;
        }

        let start = self
            .offsets
            .start_index_for(self.scroll_offset, count, size_of);
        let stop = self.offsets.stop_index_for(
            start,
            self.scroll_offset + self.viewport.height,
            count,
            size_of,
        );

        Some(RenderedRange {
            visible_start: start,
            visible_stop: stop,
            overscan_start: start.saturating_sub(self.overscan),
            overscan_stop: (stop + self.overscan).min(count - 1),
        })
    }

    /// Position descriptor for the row at `index`.
    pub fn item_style<F>(&mut self, index: usize, size_of: &mut F) -> RowStyle
    where
        F: FnMut(usize) -> f64,
    {
        let slot = self.offsets.slot(index, size_of);
        RowStyle::vertical(slot.offset, self.viewport.width, slot.size)
    }

    /// Total content size: cached prefix plus `estimate` per uncached row.
    pub fn total_size(&self, count: usize, estimate: f64) -> f64 {
        self.offsets.total_size(count, estimate)
    }
}
