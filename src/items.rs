use posvec::library::*;
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels::Color;
use sdl2::render::{Canvas, RenderTarget};

fn to_abgr(color: Color) -> Color {
    Color::RGBA(color.a, color.b, color.g, color.r)
}

/// A positional vector as it appears on screen.
pub struct Arrow {
    pub id: usize,
    pub vector: PositionalVector2D,
    pub width: u8,
    pub color: Color,
}

impl Arrow {
    pub fn new(vector: PositionalVector2D, width: Option<u8>, color: Option<Color>) -> Arrow {
        Arrow {
            id: 0,
            vector,
            width: width.unwrap_or(3),
            color: color.unwrap_or(Color::GREEN),
        }
    }

    /// The arrow as it should look after the scene has turned by `angle` radians.
    pub fn turned(&self, angle: f64) -> PositionalVector2D {
        self.vector.rotated(angle)
    }

    pub fn draw<T: RenderTarget>(
        &self,
        canvas: &mut Canvas<T>,
        angle: f64,
        with_arrow_head: bool,
        style: &ArrowStyle,
    ) {
        let primitives = self.turned(angle).as_segments_with(with_arrow_head, style);
        draw_primitives(canvas, &primitives, self.width, self.color);
    }
}

/// Strokes every primitive with one colour; failures of single strokes are ignored.
pub fn draw_primitives<T: RenderTarget>(
    canvas: &mut Canvas<T>,
    primitives: &[Primitive],
    width: u8,
    color: Color,
) {
    let color = to_abgr(color);
    for primitive in primitives {
        match primitive {
            Primitive::Marker { center, radius } => {
                let x = center.x as i16;
                let y = center.y as i16;
                let rad = radius.round().max(1.0) as i16;
                let _ = canvas.filled_circle(x, y, rad, color);
            }
            Primitive::Line(segment) => {
                let x1 = segment.start.x as i16;
                let y1 = segment.start.y as i16;
                let x2 = segment.end.x as i16;
                let y2 = segment.end.y as i16;
                let _ = canvas.thick_line(x1, y1, x2, y2, width, color);
            }
        }
    }
}

/// Hollow ring marking where a ray leaves the frame.
pub fn draw_intercept<T: RenderTarget>(canvas: &mut Canvas<T>, point: Point2D, radius: i16, color: Color) {
    let _ = canvas.circle(point.x as i16, point.y as i16, radius, to_abgr(color));
}
