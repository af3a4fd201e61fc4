//! Windowing primitive - visible-range math, scroll state, and row styles
//!
//! Given an item count, a per-index size lookup, and viewport dimensions,
//! this layer decides which index range is rendered and where each row sits.
//! It owns the cumulative-offset math directly so that offset invalidation
//! and style generation are first-class operations rather than interception
//! points on a third-party component.
//!
//! # Module Structure
//!
//! - `offsets`: `OffsetIndex` - lazily built cumulative offsets with prefix
//!   invalidation and estimated-size totals
//! - `range`: `RenderedRange` - visible/overscan index bounds
//! - `style`: `RowStyle` - absolute position descriptor per row
//! - `primitive`: `Window` - scroll state and range computation

pub mod offsets;
pub mod primitive;
pub mod range;
pub mod style;

pub use offsets::{OffsetIndex, RowSlot};
pub use primitive::{Viewport, Window};
pub use range::RenderedRange;
pub use style::RowStyle;
