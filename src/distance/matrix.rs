//! Dense distance matrix.

use crate::models::Point;

/// A dense n×n distance matrix stored in row-major order.
///
/// Indexed by position in the input point sequence, not by point id.
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
/// use u_tour::distance::DistanceMatrix;
///
/// let points = vec![
///     Point::new(10, 0.0, 0.0, 0.0),
///     Point::new(20, 3.0, 4.0, 0.0),
///     Point::new(30, 0.0, 0.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert!((dm.get(2, 0) - 8.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    fn zeroed(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes the Euclidean distance between every pair of positions.
    ///
    /// Only the upper triangle is measured; the lower triangle mirrors it,
    /// so the matrix is symmetric with a zero diagonal.
    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let mut dm = Self::zeroed(n);
        for (i, a) in points.iter().enumerate() {
            for (j, b) in points.iter().enumerate().skip(i + 1) {
                let d = a.distance_to(b);
                dm.data[i * n + j] = d;
                dm.data[j * n + i] = d;
            }
        }
        dm
    }

    /// Returns the distance between positions `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of positions covered.
    pub fn size(&self) -> usize {
        self.size
    }

    #[cfg(test)]
    fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| ((i + 1)..self.size).all(|j| self.get(i, j) == self.get(j, i)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<Point> {
        vec![
            Point::new(1, 0.0, 0.0, 0.0),
            Point::new(2, 3.0, 4.0, 0.0),
            Point::new(3, 0.0, 0.0, 8.0),
        ]
    }

    #[test]
    fn test_from_points() {
        let dm = DistanceMatrix::from_points(&sample_points());
        assert_eq!(dm.size(), 3);
        assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((dm.get(0, 2) - 8.0).abs() < 1e-10);
        // (3,4,0) -> (0,0,8): sqrt(9 + 16 + 64)
        assert!((dm.get(1, 2) - 89f64.sqrt()).abs() < 1e-10);
    }

    #[test]
    fn test_diagonal_is_zero() {
        let dm = DistanceMatrix::from_points(&sample_points());
        for i in 0..dm.size() {
            assert_eq!(dm.get(i, i), 0.0);
        }
    }

    #[test]
    fn test_symmetric() {
        let points = vec![
            Point::new(1, 0.5, -2.0, 3.25),
            Point::new(2, 7.0, 1.0, -4.0),
            Point::new(3, -1.5, 6.0, 0.0),
            Point::new(4, 2.0, 2.0, 2.0),
        ];
        let dm = DistanceMatrix::from_points(&points);
        assert!(dm.is_symmetric());
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(dm.get(i, j), points[i].distance_to(&points[j]));
            }
        }
    }

    #[test]
    fn test_indexed_by_position_not_id() {
        let points = vec![Point::new(99, 0.0, 0.0, 0.0), Point::new(5, 0.0, 2.0, 0.0)];
        let dm = DistanceMatrix::from_points(&points);
        assert_eq!(dm.size(), 2);
        assert!((dm.get(0, 1) - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_duplicate_coordinates_zero_distance() {
        let points = vec![Point::new(1, 1.0, 1.0, 1.0), Point::new(2, 1.0, 1.0, 1.0)];
        let dm = DistanceMatrix::from_points(&points);
        assert_eq!(dm.get(0, 1), 0.0);
    }
}
