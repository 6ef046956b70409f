//! Geometric primitives on 3-component coordinates

use crate::point::Point3d;

/// Squared distance between two points
#[inline]
pub fn distance2_between_points(a: &Point3d, b: &Point3d) -> f64 {
    (b - a).norm_squared()
}

/// Perpendicular distance from `x` to the infinite line through `p1` and `p2`.
///
/// The distance is measured to the line, not the segment: points beyond
/// either end are projected onto the extension. When `p1` and `p2`
/// coincide the line is undefined and the distance to `p1` is returned.
pub fn distance_to_line(x: &Point3d, p1: &Point3d, p2: &Point3d) -> f64 {
    let direction = p2 - p1;
    let length2 = direction.norm_squared();
    let offset = x - p1;
    if length2 == 0.0 {
        return offset.norm();
    }
    // |offset x direction| is exactly zero for collinear lattice points
    offset.cross(&direction).norm() / length2.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance2() {
        let a = Point3d::new(1.0, 2.0, 3.0);
        let b = Point3d::new(4.0, 6.0, 3.0);
        assert_relative_eq!(distance2_between_points(&a, &b), 25.0);
        assert_eq!(distance2_between_points(&a, &a), 0.0);
    }

    #[test]
    fn test_distance_to_line_perpendicular() {
        let p1 = Point3d::new(0.0, 0.0, 0.0);
        let p2 = Point3d::new(2.0, 0.0, 0.0);
        let x = Point3d::new(1.0, 0.5, 0.0);
        assert_relative_eq!(distance_to_line(&x, &p1, &p2), 0.5);
    }

    #[test]
    fn test_distance_to_line_is_not_segment_distance() {
        let p1 = Point3d::new(0.0, 0.0, 0.0);
        let p2 = Point3d::new(1.0, 0.0, 0.0);
        // Far past p2 along the line, offset by 1 in z
        let x = Point3d::new(10.0, 0.0, 1.0);
        assert_relative_eq!(distance_to_line(&x, &p1, &p2), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_distance_to_line_collinear_is_zero() {
        let p1 = Point3d::new(1.0, 1.0, 1.0);
        let p2 = Point3d::new(3.0, 3.0, 3.0);
        let x = Point3d::new(2.0, 2.0, 2.0);
        assert_relative_eq!(distance_to_line(&x, &p1, &p2), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_distance_to_degenerate_line() {
        let p = Point3d::new(0.0, 0.0, 0.0);
        let x = Point3d::new(0.0, 3.0, 4.0);
        assert_relative_eq!(distance_to_line(&x, &p, &p), 5.0);
    }
}
