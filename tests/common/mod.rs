#![allow(dead_code)]

use posvec::library::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const EPS: f64 = 1e-9;

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

fn signed(rng: &mut StdRng, magnitude: f64) -> f64 {
    if rng.random_bool(0.5) { magnitude } else { -magnitude }
}

/// Random vector with both components non-zero, spread over 300 orders of
/// magnitude so the x/y ratio can be extreme.
pub fn random_vector(rng: &mut StdRng) -> Vector2D {
    let mut component = || {
        let exponent: i32 = rng.random_range(-150..=150);
        let magnitude = rng.random_range(1.0..10.0) * 10f64.powi(exponent);
        signed(rng, magnitude)
    };
    Vector2D::new(component(), component())
}

/// Random vector with screen-sized, non-zero components.
pub fn random_moderate_vector(rng: &mut StdRng) -> Vector2D {
    let mut component = || {
        let magnitude: f64 = rng.random_range(0.01..500.0);
        signed(rng, magnitude)
    };
    Vector2D::new(component(), component())
}

pub fn random_positional(rng: &mut StdRng) -> PositionalVector2D {
    let origin = Point2D::new(rng.random_range(-1e3..1e3), rng.random_range(-1e3..1e3));
    PositionalVector2D::from_parts(origin, random_moderate_vector(rng))
}

pub fn assert_vectors_close(actual: Vector2D, expected: Vector2D, eps: f64) {
    let scale = expected.length().max(1.0);
    assert!(
        actual.approx_eq(&expected, eps * scale),
        "vectors differ: {:?} vs {:?}",
        actual,
        expected
    );
}
