//! Per-row render inputs.

use super::options::ExtraProps;
use crate::measure::RowMeasurer;
use crate::model::RowKey;
use crate::window::RowStyle;
use std::sync::Arc;

/// Everything a row is rendered from.
///
/// Produced per rendered index by a render pass. The data sequence travels
/// as a shared handle (`Arc`), so sequence identity is observable: two
/// passes over unchanged data hand out the same handle, and the equality
/// policy treats a changed handle as a changed row.
///
/// Hosts keep the previous pass's props around to feed
/// [`should_skip_render`](super::should_skip_render).
pub struct RowProps<T, M> {
    /// Position of the row in the data sequence.
    pub index: usize,
    /// Stable row identity, from the host's id function.
    pub id: RowKey,
    /// Width the row is rendered at (the list width).
    pub width: f64,
    /// The full data sequence.
    pub data: Arc<Vec<T>>,
    /// Canonical position descriptor; identical geometry yields a
    /// pointer-identical style across rows and passes.
    pub style: Arc<RowStyle>,
    /// The host's memo value.
    pub memo: M,
    /// Extra per-row properties, when a `get_props` function is configured.
    pub extra: Option<ExtraProps>,
}

impl<T, M: Clone> Clone for RowProps<T, M> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            id: self.id.clone(),
            width: self.width,
            data: Arc::clone(&self.data),
            style: Arc::clone(&self.style),
            memo: self.memo.clone(),
            extra: self.extra.clone(),
        }
    }
}

/// Borrowed view handed to the host's row-rendering code.
///
/// The measurer is the bind point for size observation: rendering code
/// attaches it to whatever observer watches the row's real content.
pub struct RowRenderingContext<'a, T, M> {
    /// The row's measurer; attach an observer to begin size reporting.
    pub measurer: &'a mut RowMeasurer,
    /// Position of the row in the data sequence.
    pub index: usize,
    /// Stable row identity.
    pub id: &'a RowKey,
    /// Width the row is rendered at.
    pub width: f64,
    /// The full data sequence.
    pub data: &'a [T],
    /// The row's position descriptor.
    pub style: &'a RowStyle,
    /// The host's memo value.
    pub memo: &'a M,
}
