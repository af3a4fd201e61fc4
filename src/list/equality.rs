//! Row equality policy for re-render skipping.

use super::options::SamePredicate;
use super::row::RowProps;
use std::sync::Arc;

/// Standard row-props equality.
///
/// `index`, `id`, and `width` compare by value; the data sequence compares
/// by handle identity (a replaced sequence is a changed row even when its
/// contents look alike, because sizes may now refer to different logical
/// rows); the style compares by content, with the pointer check as a fast
/// path - canonical styles make re-generated descriptors pointer-stable, and
/// a fresh but value-identical descriptor is the one identity change this
/// policy always tolerates; the memo value compares by value.
pub fn standard_props_equal<T, M: PartialEq>(
    prev: &RowProps<T, M>,
    next: &RowProps<T, M>,
) -> bool {
    prev.index == next.index
        && prev.id == next.id
        && prev.width == next.width
        && Arc::ptr_eq(&prev.data, &next.data)
        && (Arc::ptr_eq(&prev.style, &next.style) || *prev.style == *next.style)
        && prev.memo == next.memo
}

/// Whether a row's previous rendering output can be reused.
///
/// With no custom predicate, standard equality alone decides (more
/// re-renders, but correct). With a custom predicate, all three must hold:
/// standard equality, the predicate's approval, and shallow equality of the
/// extra per-row properties. The predicate can only veto on top of standard
/// equality - rows differing in `index`, `id`, `width`, or memo value always
/// re-render regardless of what it says.
pub fn should_skip_render<T, M: PartialEq>(
    prev: &RowProps<T, M>,
    next: &RowProps<T, M>,
    is_same: Option<&SamePredicate<T, M>>,
) -> bool {
    if !standard_props_equal(prev, next) {
        return false;
    }
    match is_same {
        None => true,
        Some(predicate) => predicate(prev, next) && prev.extra == next.extra,
    }
}
