mod common;

use crate::common::{EPS, assert_vectors_close, random_positional, random_vector, rng};
use posvec::library::*;
use rand::Rng;
use std::f64::consts::TAU;

#[test]
fn rescale_reaches_target_length_and_keeps_signs() {
    let mut rng = rng();
    for _ in 0..500 {
        let v = random_vector(&mut rng);
        let m: f64 = rng.random_range(0.001..1e4);
        let scaled = v.with_magnitude(m);

        assert!(
            approx_eq(scaled.length(), m, EPS * m),
            "{:?} rescaled to {} has length {}",
            v,
            m,
            scaled.length()
        );
        assert_eq!(scaled.x.signum(), v.x.signum());
        assert_eq!(scaled.y.signum(), v.y.signum());
        assert!(approx_eq(scaled.x / scaled.y, v.x / v.y, 1e-9 * (v.x / v.y).abs().max(1.0)));
    }
}

#[test]
fn rescale_survives_extreme_ratios() {
    for v in [
        Vector2D::new(1.0, 1e-200),
        Vector2D::new(-1e-200, 1.0),
        Vector2D::new(1e200, -1e-200),
        Vector2D::new(-1e-300, -1e300),
    ] {
        let scaled = v.with_magnitude(5.0);
        assert!(approx_eq(scaled.length(), 5.0, EPS), "{:?} -> {:?}", v, scaled);
        assert_eq!(scaled.x.signum(), v.x.signum());
        assert_eq!(scaled.y.signum(), v.y.signum());
    }
}

#[test]
fn rescale_to_zero_collapses_vector() {
    let mut rng = rng();
    for _ in 0..50 {
        let v = random_vector(&mut rng);
        assert_eq!(v.with_magnitude(0.0).length(), 0.0);
    }
}

#[test]
fn rotation_is_undone_by_opposite_rotation() {
    let mut rng = rng();
    for _ in 0..500 {
        let p = random_positional(&mut rng);
        let theta: f64 = rng.random_range(-10.0..10.0);
        let back = p.rotated(theta).rotated(-theta);
        assert_eq!(back.origin, p.origin);
        assert_vectors_close(back.vector, p.vector, EPS);
    }
}

#[test]
fn full_turn_is_identity() {
    let mut rng = rng();
    for _ in 0..500 {
        let p = random_positional(&mut rng);
        assert_vectors_close(p.rotated(TAU).vector, p.vector, EPS);
    }
}

#[test]
fn rotation_keeps_length() {
    let mut rng = rng();
    for _ in 0..200 {
        let v = random_vector(&mut rng);
        let theta: f64 = rng.random_range(-TAU..TAU);
        assert!(approx_eq(v.rotated(theta).length(), v.length(), EPS * v.length()));
    }
}

#[test]
fn perpendicular_is_exactly_orthogonal() {
    let mut rng = rng();
    for _ in 0..1000 {
        let p = random_positional(&mut rng);
        let perp = p.perpendicular();
        assert_eq!(dot(p.vector, perp.vector), 0.0);
        assert_eq!(perp.origin, p.origin);
    }
}

#[test]
fn equality_does_not_depend_on_construction() {
    let mut rng = rng();
    for _ in 0..200 {
        let p = random_positional(&mut rng);
        let rebuilt = PositionalVector2D::new(p.origin.x, p.origin.y, p.vector.x, p.vector.y);
        let from_parts = PositionalVector2D::from_parts(p.origin, p.vector);
        let patched = PositionalVector2D::default().copy(
            PositionalPatch::new()
                .origin_x(p.origin.x)
                .origin_y(p.origin.y)
                .vector_x(p.vector.x)
                .vector_y(p.vector.y),
        );

        assert_eq!(p, p);
        assert_eq!(p, rebuilt);
        assert_eq!(rebuilt, p);
        assert_eq!(from_parts, patched);
    }
}

#[test]
fn forward_intercepts_lie_on_the_ray() {
    let mut rng = rng();
    for _ in 0..500 {
        let p = random_positional(&mut rng);
        let target: f64 = rng.random_range(-2e3..2e3);

        let ahead = (target - p.origin.x) / p.vector.x >= 0.0;
        match p.intercept_x(target) {
            Some(hit) => {
                assert!(ahead);
                assert_eq!(hit.x, target);
                let along = find_vector(p.origin, hit);
                assert!(cross(along, p.vector).abs() <= 1e-6 * along.length().max(1.0) * p.vector.length());
                assert!(dot(along, p.vector) >= 0.0);
            }
            None => assert!(!ahead),
        }
    }
}
