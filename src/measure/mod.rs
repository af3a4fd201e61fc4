//! Measurement boundary - size observation, reporting conduit, and
//! per-row measurement lifecycle
//!
//! # Module Structure
//!
//! - `observer`: `SizeObserver` trait and the RAII `Observation` guard
//! - `channel`: `SizeChannel` single-slot conduit and `ReportQueue`
//! - `measurer`: `RowMeasurer` - one row's observation lifecycle
//! - `text`: display-width helpers for measuring terminal content

pub mod channel;
pub mod measurer;
pub mod observer;
pub mod text;

pub use channel::{ReportQueue, SizeChannel, SizeReport};
pub use measurer::RowMeasurer;
pub use observer::{Observation, SizeCallback, SizeObserver};
