//! Polyline simplification and decimation algorithms
//! 
//! This crate provides algorithms for reducing the vertex count of
//! polylines while keeping their endpoints and overall shape:
//! - Greedy point-removal decimation driven by local line distance error
//! - Sequential, cancellable, and parallel drivers over whole datasets

pub mod polyline;
pub mod error_queue;
pub mod assembler;
pub mod abort;
pub mod decimate_polyline;

pub use polyline::*;
pub use error_queue::*;
pub use assembler::*;
pub use abort::*;
pub use decimate_polyline::*;

use polycrate_core::{PolyData, Result};

/// Simplify the polylines of a dataset
pub trait PolylineSimplifier {
    /// Simplify with target reduction ratio (0.0 = no reduction, 1.0 = maximum reduction)
    fn simplify(&self, data: &PolyData, reduction_ratio: f64) -> Result<PolyData>;
}
