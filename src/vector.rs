use crate::patch::VectorPatch;
use crate::point::Point2D;
use log::trace;
use std::ops::{Add, Mul, Neg, Sub};

/// A free displacement in the plane, not anchored anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Vector2D {
        Vector2D { x, y }
    }

    /// Squared length, measured with [`Point2D::distance`] from the origin to `(x, y)`.
    ///
    /// `Vector2D::new(4.0, 4.0).magnitude()` is `32.0`. The rescaling methods
    /// ([`Vector2D::with_magnitude`], [`Vector2D::set_magnitude`]) work in true
    /// Euclidean length instead; see [`Vector2D::length`].
    pub fn magnitude(&self) -> f64 {
        Point2D::ORIGIN.distance(&Point2D::new(self.x, self.y))
    }

    /// True Euclidean length.
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Rescales this vector in place so its Euclidean length is `m`.
    pub fn set_magnitude(&mut self, m: f64) {
        *self = self.with_magnitude(m);
    }

    /// Ratio and sign preserving rescale to Euclidean length `m`.
    ///
    /// Each component keeps its sign and `|x| / |y|` is unchanged. A horizontal
    /// vector becomes `(sign(x) * m, 0)`. The zero vector has no direction and
    /// stays zero. A negative `m` reverses the direction.
    pub fn with_magnitude(&self, m: f64) -> Vector2D {
        if self.x == 0.0 && self.y == 0.0 {
            trace!("rescaling the zero vector to {m}, keeping it zero");
            return Vector2D::ZERO;
        }
        if self.y == 0.0 {
            trace!("horizontal vector, rescaling x directly");
            return Vector2D::new(self.x.signum() * m, 0.0);
        }

        // Solve for the larger component so the ratio stays within [0, 1]:
        // ratio² · big'² + big'² = m²
        let (big, small) = if self.x.abs() > self.y.abs() {
            (self.x, self.y)
        } else {
            (self.y, self.x)
        };
        let ratio = small.abs() / big.abs();
        let new_big = m / (ratio * ratio + 1.0).sqrt();
        let new_small = ratio * new_big;
        let (new_x, new_y) = if self.x.abs() > self.y.abs() {
            (new_big, new_small)
        } else {
            (new_small, new_big)
        };
        Vector2D::new(sign_of(self.x) * new_x, sign_of(self.y) * new_y)
    }

    /// Divides both components by [`Vector2D::magnitude`] (the squared length).
    ///
    /// The zero vector normalizes to zero.
    pub fn normalized(&self) -> Vector2D {
        let mag = self.magnitude();
        if mag == 0.0 {
            trace!("normalizing the zero vector");
            return Vector2D::ZERO;
        }
        Vector2D::new(self.x / mag, self.y / mag)
    }

    pub fn copy(&self, patch: VectorPatch) -> Vector2D {
        Vector2D {
            x: patch.x.unwrap_or(self.x),
            y: patch.y.unwrap_or(self.y),
        }
    }

    pub fn dot(&self, other: &Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn cross(&self, other: &Vector2D) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn scaled(&self, k: f64) -> Vector2D {
        Vector2D::new(self.x * k, self.y * k)
    }

    pub fn negated(&self) -> Vector2D {
        self.scaled(-1.0)
    }

    /// Rotated by +90°: `(x, y) -> (-y, x)`.
    pub fn perpendicular(&self) -> Vector2D {
        Vector2D::new(-self.y, self.x)
    }

    /// Counter-clockwise rotation by `radians` (standard rotation matrix).
    pub fn rotated(&self, radians: f64) -> Vector2D {
        let (sin, cos) = radians.sin_cos();
        Vector2D::new(
            self.x * cos - self.y * sin,
            self.x * sin + self.y * cos,
        )
    }

    pub fn approx_eq(&self, other: &Vector2D, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }
}

// Zero has no sign to carry over; the rescaled component is zero anyway.
fn sign_of(v: f64) -> f64 {
    if v < 0.0 { -1.0 } else { 1.0 }
}

impl Add for Vector2D {
    type Output = Vector2D;

    fn add(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;

    fn sub(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        self.negated()
    }
}

impl Mul<f64> for Vector2D {
    type Output = Vector2D;

    fn mul(self, k: f64) -> Vector2D {
        self.scaled(k)
    }
}

impl Mul<Vector2D> for f64 {
    type Output = Vector2D;

    fn mul(self, v: Vector2D) -> Vector2D {
        v.scaled(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-9;

    #[test]
    fn magnitude_is_squared_length() {
        assert_eq!(Vector2D::new(4.0, 4.0).magnitude(), 32.0);
        assert_eq!(Vector2D::new(3.0, 4.0).length(), 5.0);
    }

    #[test]
    fn with_magnitude_keeps_ratio_and_signs() {
        let v = Vector2D::new(-3.0, 4.0).with_magnitude(10.0);
        assert!(v.approx_eq(&Vector2D::new(-6.0, 8.0), EPS));

        let v = Vector2D::new(2.0, -2.0).with_magnitude(2.0_f64.sqrt());
        assert!(v.approx_eq(&Vector2D::new(1.0, -1.0), EPS));
    }

    #[test]
    fn with_magnitude_on_horizontal_vector() {
        assert_eq!(Vector2D::new(-7.0, 0.0).with_magnitude(3.0), Vector2D::new(-3.0, 0.0));
        assert_eq!(Vector2D::new(0.5, 0.0).with_magnitude(3.0), Vector2D::new(3.0, 0.0));
    }

    #[test]
    fn with_magnitude_on_vertical_vector() {
        let v = Vector2D::new(0.0, -2.0).with_magnitude(6.0);
        assert_eq!(v.x, 0.0);
        assert_eq!(v.y, -6.0);
    }

    #[test]
    fn with_magnitude_with_extreme_ratio() {
        let v = Vector2D::new(1.0, 1e-200).with_magnitude(5.0);
        assert_eq!(v.x, 5.0);
        assert!(v.y > 0.0);

        let v = Vector2D::new(-1e-300, 1e10).with_magnitude(2.0);
        assert!(v.x < 0.0);
        assert_eq!(v.y, 2.0);
    }

    #[test]
    fn with_magnitude_on_zero_vector_stays_zero() {
        assert_eq!(Vector2D::ZERO.with_magnitude(5.0), Vector2D::ZERO);
    }

    #[test]
    fn negative_target_reverses_direction() {
        let v = Vector2D::new(3.0, 4.0).with_magnitude(-5.0);
        assert!(v.approx_eq(&Vector2D::new(-3.0, -4.0), EPS));
    }

    #[test]
    fn set_magnitude_mutates_in_place() {
        let mut v = Vector2D::new(3.0, 4.0);
        v.set_magnitude(1.0);
        assert!(v.approx_eq(&Vector2D::new(0.6, 0.8), EPS));
    }

    #[test]
    fn normalized_divides_by_squared_magnitude() {
        assert_eq!(Vector2D::new(2.0, 0.0).normalized(), Vector2D::new(0.5, 0.0));
        assert_eq!(Vector2D::ZERO.normalized(), Vector2D::ZERO);
    }

    #[test]
    fn perpendicular_is_orthogonal() {
        let v = Vector2D::new(1.25, -7.5);
        assert_eq!(v.dot(&v.perpendicular()), 0.0);
        assert_eq!(v.perpendicular(), Vector2D::new(7.5, 1.25));
    }

    #[test]
    fn rotation_by_quarter_turn() {
        let v = Vector2D::new(1.0, 0.0).rotated(PI / 2.0);
        assert!(v.approx_eq(&Vector2D::new(0.0, 1.0), EPS));
    }

    #[test]
    fn scaling_operators_match_methods() {
        let v = Vector2D::new(1.0, -2.0);
        assert_eq!(0.5 * v, v.scaled(0.5));
        assert_eq!(v * 3.0, Vector2D::new(3.0, -6.0));
        assert_eq!(-v, v.negated());
        assert_eq!(v + v - v, v);
    }

    #[test]
    fn copy_replaces_only_given_fields() {
        let v = Vector2D::new(1.0, 2.0);
        assert_eq!(v.copy(VectorPatch::new().x(9.0)), Vector2D::new(9.0, 2.0));
    }
}
