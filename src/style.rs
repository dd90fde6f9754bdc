//! Proportions used when a positional vector is turned into drawable primitives.

/// Where the arrowhead wings sit along the trunk, as a fraction of the vector.
pub const HEAD_BASE: f64 = 0.9;
/// Wing length, as a fraction of the perpendicular of the vector.
pub const WING_SCALE: f64 = 0.05;
/// Radius of the marker drawn at the origin.
pub const MARKER_RADIUS: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowStyle {
    pub head_base: f64,
    pub wing_scale: f64,
    pub marker_radius: f64,
}

impl ArrowStyle {
    pub fn new(
        head_base: Option<f64>,
        wing_scale: Option<f64>,
        marker_radius: Option<f64>,
    ) -> ArrowStyle {
        ArrowStyle {
            head_base: head_base.unwrap_or(HEAD_BASE),
            wing_scale: wing_scale.unwrap_or(WING_SCALE),
            marker_radius: marker_radius.unwrap_or(MARKER_RADIUS),
        }
    }
}

impl Default for ArrowStyle {
    fn default() -> Self {
        ArrowStyle::new(None, None, None)
    }
}
