use crate::patch::PointPatch;
use crate::vector::Vector2D;
use std::ops::{Add, Sub};

/// An immutable coordinate in the plane.
///
/// Equality is exact on both components. Use [`Point2D::approx_eq`] when
/// accumulated rounding matters.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const ORIGIN: Point2D = Point2D { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Point2D {
        Point2D { x, y }
    }

    /// Squared Euclidean distance to `other`.
    ///
    /// No square root is taken: `Point2D::new(0.0, 0.0).distance(&Point2D::new(4.0, 4.0))`
    /// is `32.0`. [`Vector2D::magnitude`] is defined on top of this.
    pub fn distance(&self, other: &Point2D) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Returns a new point with the fields present in `patch` replaced.
    pub fn copy(&self, patch: PointPatch) -> Point2D {
        Point2D {
            x: patch.x.unwrap_or(self.x),
            y: patch.y.unwrap_or(self.y),
        }
    }

    pub fn approx_eq(&self, other: &Point2D, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }
}

impl Add<Vector2D> for Point2D {
    type Output = Point2D;

    fn add(self, rhs: Vector2D) -> Point2D {
        Point2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2D {
    type Output = Vector2D;

    fn sub(self, rhs: Point2D) -> Vector2D {
        Vector2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}
