//! Configuration surface for a dynamic list instance.

use super::row::RowProps;
use crate::model::{Nonce, RowKey};
use crate::window::Viewport;

/// Fallback row size used until a row is measured, when no
/// [`ListOptions::default_size`] is configured.
pub const DEFAULT_ROW_SIZE: f64 = 25.0;

/// Rows rendered beyond each edge of the visible range by default.
pub const DEFAULT_OVERSCAN: usize = 2;

/// The near-end callback fires once the rendered range reaches within this
/// many rows of the end of the data.
pub const NEAR_END_MARGIN: usize = 10;

/// Arbitrary per-row extra properties merged into the row container.
pub type ExtraProps = serde_json::Map<String, serde_json::Value>;

/// Maps `(index, data)` to the stable identity of the row at `index`.
pub type IdFn<T> = Box<dyn Fn(usize, &[T]) -> RowKey>;

/// Invoked when the rendered range approaches the end of the data.
pub type NearEndFn = Box<dyn FnMut()>;

/// Caller-supplied semantic row equality, consulted on top of the standard
/// equality when deciding whether a row's previous rendering can be reused.
pub type SamePredicate<T, M> = Box<dyn Fn(&RowProps<T, M>, &RowProps<T, M>) -> bool>;

/// Produces the extra properties for the row at an index.
pub type ExtraPropsFn = Box<dyn Fn(usize) -> Option<ExtraProps>>;

/// Everything a [`DynamicList`](super::DynamicList) needs from its host.
///
/// `T` is the row data type; `M` is an arbitrary memo value threaded through
/// to every row and compared when deciding whether re-rendering can be
/// skipped (use `()` when unused).
pub struct ListOptions<T, M> {
    /// Viewport extent of the list.
    pub viewport: Viewport,
    /// Initial dataset namespace.
    pub nonce: Nonce,
    /// Row identity function. Must be stable across renders and unique among
    /// currently rendered rows.
    pub get_id: IdFn<T>,
    /// Size assumed for rows that have not been measured yet.
    pub default_size: f64,
    /// Rows rendered beyond each edge of the visible range.
    pub overscan: usize,
    /// Incremental-loading hook; see [`NEAR_END_MARGIN`].
    pub near_end: Option<NearEndFn>,
    /// Custom row equality predicate; see the equality policy in
    /// [`should_skip_render`](super::should_skip_render).
    pub is_same: Option<SamePredicate<T, M>>,
    /// Memo value handed to every row.
    pub memo_state: M,
    /// Per-row extra properties.
    pub get_props: Option<ExtraPropsFn>,
}

impl<T, M> ListOptions<T, M> {
    /// Options with the built-in defaults for everything optional.
    pub fn new(
        viewport: Viewport,
        nonce: Nonce,
        get_id: impl Fn(usize, &[T]) -> RowKey + 'static,
        memo_state: M,
    ) -> Self {
        Self {
            viewport,
            nonce,
            get_id: Box::new(get_id),
            default_size: DEFAULT_ROW_SIZE,
            overscan: DEFAULT_OVERSCAN,
            near_end: None,
            is_same: None,
            memo_state,
            get_props: None,
        }
    }

    /// Set the pre-measurement fallback size.
    pub fn with_default_size(mut self, size: f64) -> Self {
        self.default_size = size;
        self
    }

    /// Set the overscan row count.
    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Install the near-end callback.
    pub fn with_near_end(mut self, near_end: impl FnMut() + 'static) -> Self {
        self.near_end = Some(Box::new(near_end));
        self
    }

    /// Install a custom row equality predicate.
    pub fn with_is_same(
        mut self,
        is_same: impl Fn(&RowProps<T, M>, &RowProps<T, M>) -> bool + 'static,
    ) -> Self {
        self.is_same = Some(Box::new(is_same));
        self
    }

    /// Install the per-row extra-properties function.
    pub fn with_get_props(
        mut self,
        get_props: impl Fn(usize) -> Option<ExtraProps> + 'static,
    ) -> Self {
        self.get_props = Some(Box::new(get_props));
        self
    }
}
