//! The dynamic list controller.

use super::options::{ListOptions, NEAR_END_MARGIN};
use super::row::{RowProps, RowRenderingContext};
use crate::measure::{ReportQueue, RowMeasurer, SizeChannel};
use crate::model::{Nonce, RowKey, SizeTable};
use crate::store::{SharedSizeStore, SharedStyleCache};
use crate::window::{RenderedRange, Viewport, Window};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

/// Result of one render pass.
pub struct RenderPass<T, M> {
    /// Props for every rendered row, in index order.
    pub rows: Vec<RowProps<T, M>>,
    /// The rendered index range; `None` when the list is empty.
    pub range: Option<RenderedRange>,
    /// Total scrollable content size (measured prefix plus estimated tail).
    pub total_size: f64,
}

fn size_lookup<'a, T>(
    table: &'a SizeTable,
    get_id: &'a (dyn Fn(usize, &[T]) -> RowKey),
    items: &'a [T],
    default_size: f64,
) -> impl FnMut(usize) -> f64 + 'a {
    move |index| table.get(&get_id(index, items)).unwrap_or(default_size)
}

/// Orchestrates the windowing primitive for rows whose sizes are discovered
/// lazily.
///
/// The controller owns the live size table for its current namespace,
/// computes the estimated size for unmeasured rows, decides when cached
/// offsets must be discarded, persists measurements into the shared
/// [`SizeStore`](crate::store::SizeStore), and restores scroll state when
/// the namespace changes.
///
/// Size reports flow in asynchronously: rendered rows attach observers
/// through their [`RowMeasurer`]s, reports queue up in the instance's
/// channel, and the next [`render`](DynamicList::render) (or an explicit
/// [`pump_reports`](DynamicList::pump_reports)) applies them. A row that
/// never reports keeps its estimated size indefinitely.
pub struct DynamicList<T, M> {
    options: ListOptions<T, M>,
    items: Arc<Vec<T>>,
    nonce: Nonce,
    table: SizeTable,
    store: SharedSizeStore,
    styles: SharedStyleCache,
    window: Window,
    channel: SizeChannel,
    queue: ReportQueue,
    measurers: HashMap<RowKey, RowMeasurer>,
}

impl<T, M: Clone + PartialEq> DynamicList<T, M> {
    /// Create a list over `items`.
    ///
    /// The store and style cache are owned by the composition root and
    /// shared between list instances; sizes measured earlier for the
    /// options' nonce are restored immediately.
    pub fn new(
        options: ListOptions<T, M>,
        items: Vec<T>,
        store: SharedSizeStore,
        styles: SharedStyleCache,
    ) -> Self {
        let nonce = options.nonce.clone();
        let table = store.borrow_mut().get(&nonce).unwrap_or_default();
        let window = Window::new(options.viewport, options.overscan);

        let channel = SizeChannel::new();
        let queue = ReportQueue::new();
        channel.connect(queue.clone());

        tracing::debug!(
            nonce = %nonce,
            restored_sizes = table.len(),
            items = items.len(),
            "dynamic list created"
        );

        Self {
            options,
            items: Arc::new(items),
            nonce,
            table,
            store,
            styles,
            window,
            channel,
            queue,
            measurers: HashMap::new(),
        }
    }

    /// Number of rows in the data sequence.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the data sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The current data sequence.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The active dataset namespace.
    pub fn nonce(&self) -> &Nonce {
        &self.nonce
    }

    /// The live size table for the active namespace.
    pub fn size_table(&self) -> &SizeTable {
        &self.table
    }

    /// The underlying windowing primitive (read-only).
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Handle to this instance's report channel, for hosts that construct
    /// their own measurers.
    pub fn channel(&self) -> SizeChannel {
        self.channel.clone()
    }

    /// Row identity at `index`. `index` must be within the data sequence.
    pub fn row_id(&self, index: usize) -> RowKey {
        (self.options.get_id)(index, &self.items)
    }

    /// Current size for the row at `index`: its measured size when known,
    /// the configured default otherwise. Never fails.
    pub fn get_size(&self, index: usize) -> f64 {
        let id = self.row_id(index);
        self.table.get(&id).unwrap_or(self.options.default_size)
    }

    /// Layout hint for unmeasured rows: the mean of all measured sizes, or
    /// the configured default while nothing has been measured.
    pub fn estimated_size(&self) -> f64 {
        self.table.mean().unwrap_or(self.options.default_size)
    }

    /// Record a measured size for the row identified by `id`.
    ///
    /// Non-positive and non-finite sizes are ignored. Recording the size
    /// already stored is a no-op. An actual change replaces the table
    /// snapshot, persists it into the store under the active nonce, and
    /// discards every cached offset - offset accumulation downstream of any
    /// size change cannot be trusted.
    pub fn set_size(&mut self, id: RowKey, size: f64) {
        if !size.is_finite() || size <= 0.0 {
            tracing::debug!(%id, size, "ignoring degenerate size report");
            return;
        }
        if !self.table.set(id, size) {
            return;
        }
        self.store
            .borrow_mut()
            .insert(self.nonce.clone(), self.table.clone());
        self.window.reset_after(0);
    }

    /// Apply every size report queued since the last pass, in arrival
    /// order. Returns the number of reports taken from the queue.
    pub fn pump_reports(&mut self) -> usize {
        let reports = self.queue.drain();
        let count = reports.len();
        for report in reports {
            self.set_size(report.id, report.size);
        }
        count
    }

    /// Replace the data sequence.
    ///
    /// Cached offsets are discarded from the first row: sizes may now refer
    /// to different logical rows even where ids collide. Scroll position is
    /// preserved (clamped on the next pass).
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = Arc::new(items);
        self.window.reset_after(0);
    }

    /// Switch to a different dataset namespace.
    ///
    /// The live table is swapped for whatever the store holds under the new
    /// nonce (empty when unseen), cached offsets are discarded, and the
    /// scroll position resets to the first row. Switching to the active
    /// nonce is a no-op.
    pub fn set_nonce(&mut self, nonce: Nonce) {
        if self.nonce == nonce {
            return;
        }
        self.table = self.store.borrow_mut().get(&nonce).unwrap_or_default();
        tracing::debug!(
            from = %self.nonce,
            to = %nonce,
            restored_sizes = self.table.len(),
            "namespace switched"
        );
        self.nonce = nonce;
        let count = self.items.len();
        let estimate = self.estimated_size();
        self.window.reset_after(0);
        self.window.set_scroll_offset(0.0, count, estimate);
    }

    /// Replace the viewport. Rows are re-measured at the new width through
    /// the normal measurer lifecycle.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.window.set_viewport(viewport);
    }

    /// Current scroll offset.
    pub fn scroll_offset(&self) -> f64 {
        self.window.scroll_offset()
    }

    /// Set the scroll offset, clamped to the scrollable range.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        let estimate = self.estimated_size();
        self.window
            .set_scroll_offset(offset, self.items.len(), estimate);
    }

    /// Scroll so the row at `index` sits at the top of the viewport.
    pub fn scroll_to(&mut self, index: usize) {
        let estimate = self.estimated_size();
        let mut size_of = size_lookup(
            &self.table,
            &self.options.get_id,
            &self.items,
            self.options.default_size,
        );
        self.window
            .scroll_to_item(index, self.items.len(), &mut size_of, estimate);
    }

    /// Run one render pass.
    ///
    /// Pending size reports are applied first, then the rendered range is
    /// computed from the resulting sizes, one [`RowProps`] is built per
    /// rendered index (with canonicalized styles), and the measurer set is
    /// reconciled: rows leaving the window drop their observations, rows
    /// whose identity or width changed are detached for re-attachment.
    ///
    /// Fires the near-end callback last, once the rendered range reaches
    /// within [`NEAR_END_MARGIN`] rows of the end. The callback runs on
    /// every qualifying pass; consumers debounce or act idempotently.
    pub fn render(&mut self) -> RenderPass<T, M> {
        self.pump_reports();

        let count = self.items.len();
        let estimate = self.estimated_size();
        let width = self.window.viewport().width;

        let range = {
            let mut size_of = size_lookup(
                &self.table,
                &self.options.get_id,
                &self.items,
                self.options.default_size,
            );
            self.window.range(count, &mut size_of)
        };
        let total_size = self.window.total_size(count, estimate);

        let mut rows = Vec::new();
        match range {
            Some(range) => {
                {
                    let mut size_of = size_lookup(
                        &self.table,
                        &self.options.get_id,
                        &self.items,
                        self.options.default_size,
                    );
                    for index in range.indices() {
                        let id = (self.options.get_id)(index, &self.items);
                        let style = self.window.item_style(index, &mut size_of);
                        let style = self.styles.borrow_mut().canonicalize(style);
                        let extra = self.options.get_props.as_ref().and_then(|get| get(index));
                        rows.push(RowProps {
                            index,
                            id,
                            width,
                            data: Arc::clone(&self.items),
                            style,
                            memo: self.options.memo_state.clone(),
                            extra,
                        });
                    }
                }

                self.reconcile_measurers(&rows, width);

                if range.is_near_end(count, NEAR_END_MARGIN) {
                    if let Some(near_end) = self.options.near_end.as_mut() {
                        near_end();
                    }
                }
            }
            None => self.measurers.clear(),
        }

        RenderPass {
            rows,
            range,
            total_size,
        }
    }

    /// Borrowed render inputs for one row, including its measurer.
    ///
    /// `None` when the row is not currently rendered (its measurer does not
    /// exist).
    pub fn row_context<'a>(
        &'a mut self,
        props: &'a RowProps<T, M>,
    ) -> Option<RowRenderingContext<'a, T, M>> {
        let measurer = self.measurers.get_mut(&props.id)?;
        Some(RowRenderingContext {
            measurer,
            index: props.index,
            id: &props.id,
            width: props.width,
            data: &props.data,
            style: &props.style,
            memo: &props.memo,
        })
    }

    /// The measurer for a rendered row, when present.
    pub fn measurer_mut(&mut self, id: &RowKey) -> Option<&mut RowMeasurer> {
        self.measurers.get_mut(id)
    }

    /// Number of rows with live measurers (rendered rows).
    pub fn measurer_count(&self) -> usize {
        self.measurers.len()
    }

    fn reconcile_measurers(&mut self, rows: &[RowProps<T, M>], width: f64) {
        self.measurers
            .retain(|id, _| rows.iter().any(|row| &row.id == id));

        for row in rows {
            match self.measurers.entry(row.id.clone()) {
                Entry::Occupied(mut occupied) => {
                    occupied.get_mut().set_target(row.id.clone(), width);
                }
                Entry::Vacant(vacant) => {
                    vacant.insert(RowMeasurer::new(
                        row.id.clone(),
                        width,
                        self.channel.clone(),
                    ));
                }
            }
        }
    }
}

impl<T, M> Drop for DynamicList<T, M> {
    fn drop(&mut self) {
        // Leave the slot empty so orphaned measurers drop reports silently.
        self.channel.disconnect();
    }
}
