use clap::Parser;

/// Width of the window in pixels
pub const WINDOW_WIDTH: u32 = 800;
/// Height of the window in pixels
pub const WINDOW_HEIGHT: u32 = 600;
/// Smallest accepted window side; random arrows keep a margin from the borders
pub const MIN_WINDOW_SIDE: u32 = 64;
/// Path to the font used for the angle readout
pub const FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

#[derive(Parser, Debug)]
#[command(
    name = "posvec",
    version,
    about = "Rotating positional vector with arrowhead, perpendicular and border intercepts"
)]
pub struct Args {
    /// Window width (pixels)
    #[arg(long, default_value_t = WINDOW_WIDTH, value_parser = clap::value_parser!(u32).range(MIN_WINDOW_SIDE as i64..))]
    pub width: u32,

    /// Window height (pixels)
    #[arg(long, default_value_t = WINDOW_HEIGHT, value_parser = clap::value_parser!(u32).range(MIN_WINDOW_SIDE as i64..))]
    pub height: u32,

    /// Starting angle (degrees)
    #[arg(long, default_value_t = 0.0)]
    pub angle: f64,

    /// Angular speed (degrees per second); 0 keeps the arrow still
    #[arg(long, default_value_t = 30.0)]
    pub speed: f64,

    /// Length of the main arrow (pixels)
    #[arg(long, default_value_t = 200.0, value_parser = positive_length)]
    pub length: f64,

    /// TTF font for the angle readout
    #[arg(long, default_value = FONT_PATH)]
    pub font: String,

    /// Draw trunks only
    #[arg(long)]
    pub no_arrow_head: bool,
}

fn positive_length(s: &str) -> Result<f64, String> {
    let length: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if length.is_finite() && length > 0.0 {
        Ok(length)
    } else {
        Err(format!("length must be a positive number of pixels, got {s}"))
    }
}
