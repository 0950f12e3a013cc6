#![forbid(unsafe_code)]
//! flash_field: Procedural lightning flashes from biased random walks.
//!
//! Modules:
//! - geometry: points, directed segments, polar construction, angle-between
//! - flash: a single branch grown by a biased random walk, and its tapered outline
//! - field: orchestration of a root flash and its forked branches, plus events
//!
//! All randomness comes from a caller-supplied [`rand::RngCore`]; seed it for
//! reproducible output.
pub mod error;
pub mod field;
pub mod flash;
pub mod geometry;
mod random;

/// Convenient re-exports for common types. Import with `use flash_field::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::field::events::{EventSink, FieldEvent, FnSink, VecSink};
    pub use crate::field::{make_flash, FieldConfig, FlashField};
    pub use crate::flash::{Branch, Flash, OutlinePath, PathCommand, WalkParams, WalkStep};
    pub use crate::geometry::{angle_between, Point, Vector};
}
