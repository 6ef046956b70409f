//! Core data structures for polycrate
//! 
//! This crate provides the fundamental types for polygonal line processing:
//! point storage with a selectable precision, line cell topology, per-point
//! and per-cell attribute tables, and the geometric primitives the
//! decimation algorithms are built on.

pub mod point;
pub mod cell_array;
pub mod attributes;
pub mod poly_data;
pub mod geometry;
pub mod error;

pub use point::*;
pub use cell_array::*;
pub use attributes::*;
pub use poly_data::*;
pub use geometry::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::Point3;
