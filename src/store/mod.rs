//! Process-wide caches owned by the composition root
//!
//! Both caches are explicit objects handed to list instances as shared
//! handles, never hidden module state, so hosts control their lifetime and
//! tests construct isolated instances.
//!
//! # Module Structure
//!
//! - `size_store`: `SizeStore` - namespace -> size-table snapshots with an
//!   injectable eviction policy
//! - `style_cache`: `StyleCache` - canonical position-descriptor objects

pub mod size_store;
pub mod style_cache;

pub use size_store::{EvictionPolicy, SharedSizeStore, SizeStore};
pub use style_cache::{SharedStyleCache, StyleCache};
