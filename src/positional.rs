use crate::patch::PositionalPatch;
use crate::point::Point2D;
use crate::segment::{Primitive, Segment};
use crate::style::ArrowStyle;
use crate::vector::Vector2D;
use log::trace;

/// A vector anchored at an origin point.
///
/// Every transformation returns a new value. The single exception is
/// [`PositionalVector2D::set_magnitude`], which rewrites the vector in place.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PositionalVector2D {
    pub origin: Point2D,
    pub vector: Vector2D,
}

impl PositionalVector2D {
    pub fn new(origin_x: f64, origin_y: f64, vector_x: f64, vector_y: f64) -> PositionalVector2D {
        PositionalVector2D {
            origin: Point2D::new(origin_x, origin_y),
            vector: Vector2D::new(vector_x, vector_y),
        }
    }

    pub fn from_parts(origin: Point2D, vector: Vector2D) -> PositionalVector2D {
        PositionalVector2D { origin, vector }
    }

    /// Anchored at `start`, pointing at `end`.
    pub fn from_endpoints(start: Point2D, end: Point2D) -> PositionalVector2D {
        PositionalVector2D {
            origin: start,
            vector: end - start,
        }
    }

    pub fn tip(&self) -> Point2D {
        self.origin + self.vector
    }

    /// Same origin, vector turned +90°.
    pub fn perpendicular(&self) -> PositionalVector2D {
        PositionalVector2D {
            origin: self.origin,
            vector: self.vector.perpendicular(),
        }
    }

    /// Squared length of the vector, see [`Vector2D::magnitude`].
    pub fn magnitude(&self) -> f64 {
        self.vector.magnitude()
    }

    /// Rescales the vector in place to Euclidean length `m`.
    pub fn set_magnitude(&mut self, m: f64) {
        self.vector.set_magnitude(m);
    }

    pub fn with_magnitude(&self, m: f64) -> PositionalVector2D {
        PositionalVector2D {
            origin: self.origin,
            vector: self.vector.with_magnitude(m),
        }
    }

    /// Rotates the vector about the origin.
    pub fn rotated(&self, radians: f64) -> PositionalVector2D {
        PositionalVector2D {
            origin: self.origin,
            vector: self.vector.rotated(radians),
        }
    }

    pub fn copy(&self, patch: PositionalPatch) -> PositionalVector2D {
        PositionalVector2D {
            origin: self.origin.copy(patch.origin()),
            vector: self.vector.copy(patch.vector()),
        }
    }

    /// Multiplies the vector by `k`; the origin does not move.
    pub fn scaled(&self, k: f64) -> PositionalVector2D {
        PositionalVector2D {
            origin: self.origin,
            vector: self.vector.scaled(k),
        }
    }

    pub fn negated(&self) -> PositionalVector2D {
        self.scaled(-1.0)
    }

    pub fn with_origin(&self, origin: Point2D) -> PositionalVector2D {
        PositionalVector2D {
            origin,
            vector: self.vector,
        }
    }

    /// Where the forward ray crosses the vertical line `x = target`.
    ///
    /// Returns `None` when the line is behind the origin, or when the vector is
    /// vertical and the line does not pass through the origin. A vertical vector
    /// lying on the line yields the origin itself. A crossing too far away to be
    /// represented as a finite point is also `None`.
    pub fn intercept_x(&self, target: f64) -> Option<Point2D> {
        if self.vector.x == 0.0 {
            trace!("vertical vector, no single crossing with x = {target}");
            return (self.origin.x == target).then_some(self.origin);
        }
        let t = (target - self.origin.x) / self.vector.x;
        if t.is_nan() || t < 0.0 {
            return None;
        }
        let y = if self.vector.y == 0.0 {
            self.origin.y
        } else {
            self.origin.y + self.vector.y * t
        };
        y.is_finite().then(|| Point2D::new(target, y))
    }

    /// Where the forward ray crosses the horizontal line `y = target`.
    ///
    /// Mirrors [`PositionalVector2D::intercept_x`].
    pub fn intercept_y(&self, target: f64) -> Option<Point2D> {
        if self.vector.y == 0.0 {
            trace!("horizontal vector, no single crossing with y = {target}");
            return (self.origin.y == target).then_some(self.origin);
        }
        let t = (target - self.origin.y) / self.vector.y;
        if t.is_nan() || t < 0.0 {
            return None;
        }
        let x = if self.vector.x == 0.0 {
            self.origin.x
        } else {
            self.origin.x + self.vector.x * t
        };
        x.is_finite().then(|| Point2D::new(x, target))
    }

    pub fn arrow_head_segments(&self) -> [Segment; 2] {
        self.arrow_head_segments_with(&ArrowStyle::default())
    }

    /// The two wings of an arrowhead at the tip, symmetric about the trunk.
    pub fn arrow_head_segments_with(&self, style: &ArrowStyle) -> [Segment; 2] {
        let tip = self.tip();
        let head_base = self.scaled(style.head_base).tip();
        let wing = self
            .perpendicular()
            .scaled(style.wing_scale)
            .with_origin(head_base);
        [
            Segment::new(wing.tip(), tip),
            Segment::new(wing.negated().tip(), tip),
        ]
    }

    pub fn as_segments(&self, with_arrow_head: bool) -> Vec<Primitive> {
        self.as_segments_with(with_arrow_head, &ArrowStyle::default())
    }

    /// Origin marker, then the trunk, then the arrowhead wings if requested.
    pub fn as_segments_with(&self, with_arrow_head: bool, style: &ArrowStyle) -> Vec<Primitive> {
        let mut primitives = vec![
            Primitive::Marker {
                center: self.origin,
                radius: style.marker_radius,
            },
            Primitive::Line(Segment::new(self.origin, self.tip())),
        ];
        if with_arrow_head {
            primitives.extend(
                self.arrow_head_segments_with(style)
                    .into_iter()
                    .map(Primitive::Line),
            );
        }
        primitives
    }

    pub fn approx_eq(&self, other: &PositionalVector2D, eps: f64) -> bool {
        self.origin.approx_eq(&other.origin, eps) && self.vector.approx_eq(&other.vector, eps)
    }
}
