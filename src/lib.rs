//! Windowed list engine with lazily measured row sizes.
//!
//! Classic windowed lists need every row size up front to compute scroll
//! offsets and total height. This engine instead discovers sizes as rows are
//! actually rendered and measured: unmeasured rows borrow an estimated size
//! (the mean of everything measured so far), measurements trickle in through
//! an asynchronous reporting channel, and the cumulative-offset table is
//! invalidated and rebuilt as they land - without render thrashing, scroll
//! loss, or redundant re-measurement.
//!
//! Measured sizes persist per dataset namespace in a process-wide store, so
//! revisiting a dataset restores its layout instead of re-measuring from
//! scratch.
//!
//! # Architecture
//!
//! - [`model`]: row identity, namespaces, and the copy-on-write size table
//! - [`store`]: composition-root-owned caches (sizes per namespace,
//!   canonical row styles)
//! - [`window`]: the windowing math - visible ranges, scroll state, offset
//!   invalidation, position styles
//! - [`measure`]: the measurement boundary - observers, the report channel,
//!   and per-row measurer lifecycle
//! - [`list`]: the `DynamicList` controller tying it all together
//! - [`logging`]: optional file-based tracing setup
//!
//! # Example
//!
//! ```
//! use dynlist::list::{DynamicList, ListOptions};
//! use dynlist::model::{Nonce, RowKey};
//! use dynlist::store::{SizeStore, StyleCache};
//! use dynlist::window::Viewport;
//!
//! let options = ListOptions::new(
//!     Viewport::new(240.0, 640.0),
//!     Nonce::new("inbox"),
//!     |index, items: &[String]| RowKey::new(items[index].clone()),
//!     (),
//! );
//! let items: Vec<String> = (0..1000).map(|i| format!("message-{i}")).collect();
//! let mut list = DynamicList::new(options, items, SizeStore::shared(), StyleCache::shared());
//!
//! // First pass renders at estimated sizes.
//! let pass = list.render();
//! assert!(!pass.rows.is_empty());
//!
//! // A measurement arrives; the next pass reflects it.
//! list.set_size(RowKey::new("message-0"), 64.0);
//! let pass = list.render();
//! assert_eq!(pass.rows[0].style.height, 64.0);
//! ```

pub mod list;
pub mod logging;
pub mod measure;
pub mod model;
pub mod store;
pub mod window;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
