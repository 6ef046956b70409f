//! Point types and point storage

use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 3D point with floating point coordinates
pub type Point3f = Point3<f32>;

/// A 3D point with double precision coordinates
pub type Point3d = Point3<f64>;

/// Storage precision of point coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Precision {
    Single,
    Double,
}

/// Precision policy for points produced by a filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OutputPointsPrecision {
    /// Match the precision of the input points
    #[default]
    Default,
    /// Always produce single precision points
    Single,
    /// Always produce double precision points
    Double,
}

impl OutputPointsPrecision {
    /// Resolve the policy against the precision of the input points
    pub fn resolve(self, input: Precision) -> Precision {
        match self {
            OutputPointsPrecision::Default => input,
            OutputPointsPrecision::Single => Precision::Single,
            OutputPointsPrecision::Double => Precision::Double,
        }
    }
}

impl fmt::Display for OutputPointsPrecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputPointsPrecision::Default => "default",
            OutputPointsPrecision::Single => "single",
            OutputPointsPrecision::Double => "double",
        };
        f.write_str(name)
    }
}

/// Randomly accessible coordinate storage indexed by point id.
///
/// Coordinates are kept in their native precision; reads always widen to
/// `f64` so geometric computations are precision independent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Points {
    Single(Vec<Point3f>),
    Double(Vec<Point3d>),
}

impl Points {
    /// Create empty storage with the given precision
    pub fn new(precision: Precision) -> Self {
        Self::with_capacity(precision, 0)
    }

    /// Create empty storage with the given precision and reserved capacity
    pub fn with_capacity(precision: Precision, capacity: usize) -> Self {
        match precision {
            Precision::Single => Points::Single(Vec::with_capacity(capacity)),
            Precision::Double => Points::Double(Vec::with_capacity(capacity)),
        }
    }

    /// Storage precision
    pub fn precision(&self) -> Precision {
        match self {
            Points::Single(_) => Precision::Single,
            Points::Double(_) => Precision::Double,
        }
    }

    /// Number of points
    pub fn len(&self) -> usize {
        match self {
            Points::Single(points) => points.len(),
            Points::Double(points) => points.len(),
        }
    }

    /// Check if there are no points
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get a point, widened to double precision.
    ///
    /// Panics if `id` is out of range, like slice indexing.
    pub fn point(&self, id: usize) -> Point3d {
        match self {
            Points::Single(points) => points[id].cast::<f64>(),
            Points::Double(points) => points[id],
        }
    }

    /// Append a point, converting to the storage precision. Returns its id.
    pub fn push(&mut self, point: Point3d) -> usize {
        match self {
            Points::Single(points) => {
                points.push(point.cast::<f32>());
                points.len() - 1
            }
            Points::Double(points) => {
                points.push(point);
                points.len() - 1
            }
        }
    }
}

impl Default for Points {
    fn default() -> Self {
        Points::Single(Vec::new())
    }
}

impl From<Vec<Point3f>> for Points {
    fn from(points: Vec<Point3f>) -> Self {
        Points::Single(points)
    }
}

impl From<Vec<Point3d>> for Points {
    fn from(points: Vec<Point3d>) -> Self {
        Points::Double(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_push_converts_to_storage_precision() {
        let mut points = Points::new(Precision::Single);
        let id = points.push(Point3d::new(0.1, 0.2, 0.3));
        assert_eq!(id, 0);
        assert_eq!(points.precision(), Precision::Single);
        let p = points.point(0);
        assert_relative_eq!(p.x, 0.1_f32 as f64);
        assert_relative_eq!(p.z, 0.3_f32 as f64);
    }

    #[test]
    fn test_double_storage_is_exact() {
        let points = Points::from(vec![Point3d::new(1.0 / 3.0, 0.0, -2.5)]);
        assert_eq!(points.precision(), Precision::Double);
        assert_eq!(points.point(0).x, 1.0 / 3.0);
    }

    #[test]
    fn test_output_precision_resolution() {
        assert_eq!(OutputPointsPrecision::Default.resolve(Precision::Double), Precision::Double);
        assert_eq!(OutputPointsPrecision::Default.resolve(Precision::Single), Precision::Single);
        assert_eq!(OutputPointsPrecision::Single.resolve(Precision::Double), Precision::Single);
        assert_eq!(OutputPointsPrecision::Double.resolve(Precision::Single), Precision::Double);
    }

    #[test]
    fn test_single_storage_from_f32_points() {
        let mut points = Points::from(vec![
            Point3f::new(0.0, 0.0, 0.0),
            Point3f::new(1.0, 2.0, 3.0),
        ]);
        assert_eq!(points.len(), 2);
        assert_eq!(points.point(1), Point3d::new(1.0, 2.0, 3.0));
        assert_eq!(points.push(Point3d::new(4.0, 5.0, 6.0)), 2);
        assert_eq!(points.precision(), Precision::Single);
    }
}
