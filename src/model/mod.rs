//! Core domain types - row identity, dataset namespaces, and the live size table
//!
//! # Module Structure
//!
//! - `identifiers`: `RowKey` and `Nonce` newtypes
//! - `size_table`: `SizeTable` - copy-on-write row-id -> measured-size map

pub mod identifiers;
pub mod size_table;

pub use identifiers::{Nonce, RowKey};
pub use size_table::SizeTable;
