//! Dynamic list controller - orchestration of windowing, measurement, and
//! caching
//!
//! # Module Structure
//!
//! - `options`: `ListOptions` - the host-facing configuration surface
//! - `row`: `RowProps` and `RowRenderingContext` - per-row render inputs
//! - `equality`: the composed row equality policy
//! - `controller`: `DynamicList` - the orchestrator itself

pub mod controller;
pub mod equality;
pub mod options;
pub mod row;

pub use controller::{DynamicList, RenderPass};
pub use equality::{should_skip_render, standard_props_equal};
pub use options::{
    ExtraProps, ExtraPropsFn, IdFn, ListOptions, NearEndFn, SamePredicate, DEFAULT_OVERSCAN,
    DEFAULT_ROW_SIZE, NEAR_END_MARGIN,
};
pub use row::{RowProps, RowRenderingContext};
