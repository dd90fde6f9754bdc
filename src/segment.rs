//! Drawable output handed to a renderer.
//!
//! Everything is expressed in the same coordinate space as the input geometry.
//! Colour, stroke width and fill belong to whoever draws these.

use crate::point::Point2D;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2D,
    pub end: Point2D,
}

impl Segment {
    pub fn new(start: Point2D, end: Point2D) -> Segment {
        Segment { start, end }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// Small circle marking a point, e.g. the origin of a positional vector.
    Marker { center: Point2D, radius: f64 },
    Line(Segment),
}
