//! Absolute position descriptor for one rendered row.

use serde::Serialize;

/// Where a rendered row sits inside the scrollable content area.
///
/// `top` is the row's cumulative offset from the start of the content (not
/// the viewport), `left` is always 0 for a vertical list, `width` matches the
/// list width, and `height` is the row's current (measured or estimated)
/// size. Hosts translate this into whatever positioning their rendering
/// layer uses.
///
/// Descriptors serialize to a canonical JSON string, which is what the style
/// cache keys on to hand back pointer-identical descriptors for identical
/// geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RowStyle {
    /// Offset from the top of the scrollable content.
    pub top: f64,
    /// Offset from the left edge. Zero for vertical lists.
    pub left: f64,
    /// Row width (the list width).
    pub width: f64,
    /// Row height - measured size if known, estimated otherwise.
    pub height: f64,
}

impl RowStyle {
    /// Descriptor for a vertical-list row at `top` with the given extent.
    pub fn vertical(top: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left: 0.0,
            width,
            height,
        }
    }

    /// Canonical string form, used as the deduplication key.
    ///
    /// Field order is fixed by the struct definition, so value-identical
    /// descriptors always produce identical strings.
    pub fn canonical_key(&self) -> String {
        serde_json::to_string(self).expect("RowStyle serialization is infallible")
    }
}
