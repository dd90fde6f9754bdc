//! Plane geometry for anchored vectors.
//!
//! [`Point2D`](point::Point2D) and [`Vector2D`](vector::Vector2D) are plain
//! values; [`PositionalVector2D`](positional::PositionalVector2D) anchors a
//! vector at a point and knows how to rotate, rescale, intercept axis lines and
//! describe itself as drawable [`Primitive`](segment::Primitive)s.

pub mod patch;
pub mod point;
pub mod positional;
pub mod segment;
pub mod style;
pub mod vector;

pub mod library {
    pub use crate::patch::{PointPatch, PositionalPatch, VectorPatch};
    pub use crate::point::Point2D;
    pub use crate::positional::PositionalVector2D;
    pub use crate::segment::{Primitive, Segment};
    pub use crate::style::ArrowStyle;
    pub use crate::vector::Vector2D;

    pub fn dot(a: Vector2D, b: Vector2D) -> f64 {
        a.dot(&b)
    }

    pub fn cross(a: Vector2D, b: Vector2D) -> f64 {
        a.cross(&b)
    }

    pub fn find_vector(start: Point2D, end: Point2D) -> Vector2D {
        end - start
    }

    pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }
}
