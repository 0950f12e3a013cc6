//! Planar geometry primitives used by the walk and the outline builder.
pub mod point;
pub mod vector;

pub use point::Point;
pub use vector::{angle_between, Vector};
