//! # polycrate
//!
//! Polyline decimation for Rust.
//!
//! This is the umbrella crate that provides convenient access to all polycrate
//! functionality. You can use this crate to get everything in one place, or use
//! individual crates for more granular control over dependencies.
//!
//! ## Features
//!
//! - **Core**: Points, line cells, attribute tables, geometric primitives
//! - **Simplification**: Greedy polyline decimation
//!
//! ## Quick Start
//!
//! ```rust
//! use polycrate::prelude::*;
//!
//! # fn main() -> anyhow::Result<()> {
//! let points = vec![
//!     Point3d::new(0.0, 0.0, 0.0),
//!     Point3d::new(1.0, 0.01, 0.0),
//!     Point3d::new(2.0, 0.0, 0.0),
//!     Point3d::new(3.0, 0.0, 0.0),
//! ];
//! let lines = CellArray::from_cells([[0usize, 1, 2, 3]]);
//! let data = PolyData::from_points_and_lines(points, lines);
//!
//! let reduced = DecimatePolylineFilter::new()
//!     .with_target_reduction(0.9)
//!     .decimate(&data)?;
//! assert_eq!(reduced.lines.cell(0), &[0, 1]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: Enables core and simplification
//! - `simplification`: Polyline decimation algorithms

// Re-export core functionality
pub use polycrate_core::*;

#[cfg(feature = "simplification")]
pub use polycrate_simplification as simplification;

/// Convenient imports for common use cases
pub mod prelude {
    pub use polycrate_core::*;

    #[cfg(feature = "simplification")]
    pub use polycrate_simplification::*;
}
