//! Labeled 3D point.

use serde::{Deserialize, Serialize};

/// A labeled location in 3D space.
///
/// Points are immutable once created. Two points are equal when their ids
/// match, regardless of coordinates: a tour may visit two distinct points
/// that happen to share a location.
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
///
/// let a = Point::new(1, 0.0, 0.0, 0.0);
/// let b = Point::new(2, 1.0, 2.0, 2.0);
/// assert!((a.distance_to(&b) - 3.0).abs() < 1e-10);
/// assert_ne!(a, Point::new(2, 0.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Point {
    id: usize,
    x: f64,
    y: f64,
    z: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(id: usize, x: f64, y: f64, z: f64) -> Self {
        Self { id, x, y, z }
    }

    /// Point ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Z-coordinate.
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Returns `true` if every coordinate is finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Point {}

impl std::hash::Hash for Point {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let p = Point::new(7, 1.0, 2.0, 3.0);
        assert_eq!(p.id(), 7);
        assert_eq!(p.x(), 1.0);
        assert_eq!(p.y(), 2.0);
        assert_eq!(p.z(), 3.0);
    }

    #[test]
    fn test_point_distance() {
        let a = Point::new(0, 0.0, 0.0, 0.0);
        let b = Point::new(1, 2.0, 3.0, 6.0);
        assert!((a.distance_to(&b) - 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_point_distance_symmetric() {
        let a = Point::new(0, 1.0, -2.0, 0.5);
        let b = Point::new(1, 4.0, 6.0, -3.0);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-10);
    }

    #[test]
    fn test_point_distance_to_self_is_zero() {
        let a = Point::new(0, 3.0, 4.0, 5.0);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_equality_by_id() {
        let a = Point::new(1, 0.0, 0.0, 0.0);
        let same_place = Point::new(2, 0.0, 0.0, 0.0);
        let moved = Point::new(1, 9.0, 9.0, 9.0);
        assert_ne!(a, same_place);
        assert_eq!(a, moved);
    }

    #[test]
    fn test_is_finite() {
        assert!(Point::new(0, 1.0, 2.0, 3.0).is_finite());
        assert!(!Point::new(0, f64::NAN, 2.0, 3.0).is_finite());
        assert!(!Point::new(0, 1.0, f64::INFINITY, 3.0).is_finite());
    }

    #[test]
    fn test_serde_round_trip() {
        let p = Point::new(3, 1.5, -2.0, 0.25);
        let json = serde_json::to_string(&p).expect("serialize");
        let back: Point = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.id(), 3);
        assert_eq!(back.z(), 0.25);
    }
}
