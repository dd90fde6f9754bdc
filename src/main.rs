//! Interactive viewer for positional vectors.
//!
//! A vector anchored at the centre of the window turns continuously. Its
//! arrowhead, its perpendicular and the points where its ray leaves the frame
//! are drawn from the primitives the geometry library emits.
//!
//! Keys: Left/Right turn, Up/Down resize, Space adds a random arrow,
//! Tab toggles arrowheads, Escape quits.

mod args;
mod items;
mod scene;

use crate::args::Args;
use crate::items::Arrow;
use crate::scene::Scene;
use anyhow::{Context, Result, anyhow};
use clap::Parser;
use log::{info, warn};
use posvec::library::*;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use std::time::{Duration, Instant};

/// Window title displayed in the title bar
const TITLE: &str = "Positional vectors";
/// Background color for the canvas
const BACKGROUND: Color = Color::BLACK;
/// Angle change per Left/Right key press, in degrees
const TURN_STEP: f64 = 5.0;
/// Length change per Up/Down key press, in pixels
const RESIZE_STEP: f64 = 10.0;
/// Frames per second the loop aims for
const FPS: u32 = 60;

/// Adds an arrow with a random anchor and direction somewhere inside the frame.
///
/// The anchor keeps a 20 pixel margin from every border, which is why `Args`
/// refuses windows smaller than `MIN_WINDOW_SIDE`.
///
/// # Arguments
///
/// * `scene` - The scene to add the arrow to
/// * `width` - Width of the frame in pixels
/// * `height` - Height of the frame in pixels
fn spawn_arrow(scene: &mut Scene, width: u32, height: u32) {
    let x: f64 = rand::random_range(20.0..(width as f64 - 20.0));
    let y: f64 = rand::random_range(20.0..(height as f64 - 20.0));
    let vx: f64 = rand::random_range(-150.0..150.0);
    let vy: f64 = rand::random_range(-150.0..150.0);
    let color = Color::RGB(
        rand::random_range(80..=255),
        rand::random_range(80..=255),
        rand::random_range(80..=255),
    );
    scene.add_arrow(Arrow::new(PositionalVector2D::new(x, y, vx, vy), Some(2), Some(color)));
    info!("{} arrows on screen", scene.arrows().len());
}

/// Main entry point for the viewer.
///
/// Parses the command line, initializes SDL2 (video and TTF), creates the
/// window and canvas, places the main arrow at the centre of the frame and
/// runs the event/draw loop at 60 FPS until Escape or the window is closed.
///
/// # Errors
///
/// Fails if SDL2, the window or the canvas cannot be initialized. A missing
/// font only disables the angle readout.
fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let sdl_context = sdl2::init().map_err(|e| anyhow!(e)).context("initialising SDL")?;
    let video_subsystem = sdl_context
        .video()
        .map_err(|e| anyhow!(e))
        .context("initialising video")?;
    let ttf_context = sdl2::ttf::init().map_err(|e| anyhow!("initialising TTF: {e}"))?;

    let window = video_subsystem
        .window(TITLE, args.width, args.height)
        .position_centered()
        .build()
        .context("creating window")?;
    let font = match ttf_context.load_font(&args.font, 20) {
        Ok(font) => Some(font),
        Err(e) => {
            warn!("no angle readout, could not load {}: {e}", args.font);
            None
        }
    };

    let mut canvas = window.into_canvas().build().context("creating canvas")?;
    canvas.set_draw_color(BACKGROUND);
    canvas.clear();
    canvas.present();

    let mut scene = Scene::new(args.width, args.height, ArrowStyle::default());
    scene.arrow_heads = !args.no_arrow_head;
    scene.turn(args.angle.to_radians());
    let centre = Point2D::new(args.width as f64 / 2.0, args.height as f64 / 2.0);
    let main_arrow = PositionalVector2D::from_parts(centre, Vector2D::new(1.0, 0.0))
        .with_magnitude(args.length);
    scene.add_arrow(Arrow::new(main_arrow, None, None));
    info!("{}x{} window, {} deg/s", args.width, args.height, args.speed);

    let speed = args.speed.to_radians();
    let mut last_frame_time = Instant::now();
    let mut event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => match key {
                    Keycode::Left => scene.turn(-TURN_STEP.to_radians()),
                    Keycode::Right => scene.turn(TURN_STEP.to_radians()),
                    Keycode::Up => scene.resize_primary(RESIZE_STEP),
                    Keycode::Down => scene.resize_primary(-RESIZE_STEP),
                    Keycode::Space => spawn_arrow(&mut scene, args.width, args.height),
                    Keycode::Tab => scene.arrow_heads = !scene.arrow_heads,
                    _ => {}
                },
                _ => {}
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(last_frame_time).as_secs_f64();
        last_frame_time = now;
        scene.turn(speed * dt);

        canvas.set_draw_color(BACKGROUND);
        canvas.clear();
        scene.draw_frame(&mut canvas);
        if let Some(font) = &font {
            if let Err(e) = scene.draw_angle(&mut canvas, font) {
                warn!("{e:#}");
            }
        }
        canvas.present();

        ::std::thread::sleep(Duration::new(0, 1_000_000_000u32 / FPS));
    }

    Ok(())
}
