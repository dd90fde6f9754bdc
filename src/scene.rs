use crate::items::{Arrow, draw_intercept, draw_primitives};
use anyhow::{Result, anyhow};
use log::debug;
use posvec::library::*;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, RenderTarget};
use sdl2::ttf::Font;
use sdl2::video::Window;

const INTERCEPT_RADIUS: i16 = 6;
const PERPENDICULAR_COLOR: Color = Color::RGB(90, 90, 160);
const INTERCEPT_COLOR: Color = Color::YELLOW;

pub struct Scene {
    width: f64,
    height: f64,
    arrows: Vec<Arrow>,
    arrow_id: usize,
    /// Rotation applied to every arrow, in radians.
    pub angle: f64,
    pub arrow_heads: bool,
    style: ArrowStyle,
}

impl Scene {
    pub fn new(width: u32, height: u32, style: ArrowStyle) -> Scene {
        Scene {
            width: width as f64,
            height: height as f64,
            arrows: Vec::new(),
            arrow_id: 0,
            angle: 0.0,
            arrow_heads: true,
            style,
        }
    }

    pub fn add_arrow(&mut self, mut arrow: Arrow) {
        arrow.id = self.arrow_id;
        self.arrow_id += 1;
        debug!("arrow {} added: {:?}", arrow.id, arrow.vector);
        self.arrows.push(arrow);
    }

    pub fn arrows(&self) -> &[Arrow] {
        &self.arrows
    }

    pub fn turn(&mut self, radians: f64) {
        self.angle = (self.angle + radians) % std::f64::consts::TAU;
    }

    /// Grows the first arrow by `delta` along its own direction.
    ///
    /// The arrow never shrinks below one pixel. A zero-length arrow has no
    /// direction to grow along, so `Args` only accepts positive lengths.
    pub fn resize_primary(&mut self, delta: f64) {
        if let Some(arrow) = self.arrows.first_mut() {
            let length = (arrow.vector.vector.length() + delta).max(1.0);
            arrow.vector.set_magnitude(length);
        }
    }

    /// Points where the forward ray of `vector` crosses the frame borders.
    pub fn border_intercepts(&self, vector: &PositionalVector2D) -> Vec<Point2D> {
        [
            vector.intercept_x(0.0),
            vector.intercept_x(self.width),
            vector.intercept_y(0.0),
            vector.intercept_y(self.height),
        ]
        .into_iter()
        .flatten()
        .filter(|p| self.contains(p))
        .collect()
    }

    fn contains(&self, p: &Point2D) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }

    pub fn draw_frame<T: RenderTarget>(&self, canvas: &mut Canvas<T>) {
        for arrow in &self.arrows {
            let turned = arrow.turned(self.angle);

            let perpendicular = turned.perpendicular().as_segments_with(false, &self.style);
            draw_primitives(canvas, &perpendicular, 1, PERPENDICULAR_COLOR);

            for point in self.border_intercepts(&turned) {
                draw_intercept(canvas, point, INTERCEPT_RADIUS, INTERCEPT_COLOR);
            }

            arrow.draw(canvas, self.angle, self.arrow_heads, &self.style);
        }
    }

    pub fn draw_angle(&self, canvas: &mut Canvas<Window>, font: &Font) -> Result<()> {
        let text = format!("{:.1}°", self.angle.to_degrees());
        let text_surface = font
            .render(&text)
            .blended(Color::RGB(255, 255, 255))
            .map_err(|e| anyhow!("rendering angle text: {e}"))?;
        let texture_creator = canvas.texture_creator();
        let text_texture = texture_creator
            .create_texture_from_surface(&text_surface)
            .map_err(|e| anyhow!("creating angle texture: {e}"))?;
        let query = text_texture.query();
        let target_rect = Rect::new(10, 10, query.width, query.height);
        canvas
            .copy(&text_texture, None, Some(target_rect))
            .map_err(|e| anyhow!("copying angle texture: {e}"))
    }
}
