use crate::controllers::cli::config::{ConfigError, RenderConfig};
use crate::core::colour_schemes::ColourScheme;
use crate::core::fractals::fractal_kinds::FractalKind;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "fractal-render", about = "Render a Mandelbrot or Julia set to a PPM image")]
#[command(version)]
pub struct RenderArgs {
    /// Settings file (TOML); flags given here override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Fractal to render (mandelbrot, julia)
    #[arg(short, long)]
    pub fractal: Option<FractalKind>,

    /// Real part of the view center
    #[arg(long, allow_negative_numbers = true)]
    pub center_re: Option<f64>,

    /// Imaginary part of the view center
    #[arg(long, allow_negative_numbers = true)]
    pub center_im: Option<f64>,

    /// Magnification; 1 shows the whole set
    #[arg(short, long)]
    pub zoom: Option<f64>,

    #[arg(long)]
    pub width: Option<u32>,

    #[arg(long)]
    pub height: Option<u32>,

    /// Iteration budget per pixel
    #[arg(short, long)]
    pub iterations: Option<u32>,

    /// Real part of the Julia constant
    #[arg(long, allow_negative_numbers = true)]
    pub julia_re: Option<f64>,

    /// Imaginary part of the Julia constant
    #[arg(long, allow_negative_numbers = true)]
    pub julia_im: Option<f64>,

    /// Colour scheme (aurora, classic, mathematical, ocean, thermal, fire, purple)
    #[arg(short, long)]
    pub scheme: Option<ColourScheme>,

    /// Named location (Mandelbrot) or constant (Julia), e.g. "Seahorse Valley"
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Render this many rows at a time instead of the whole frame at once
    #[arg(long)]
    pub chunk_rows: Option<u32>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output file path
    #[arg(short, long, default_value = "fractal.ppm")]
    pub output: PathBuf,
}

impl RenderArgs {
    /// Loads `--config` when given, then lays the explicit flags over it.
    pub fn to_config(&self) -> Result<RenderConfig, ConfigError> {
        let base = match &self.config {
            Some(path) => RenderConfig::load(path)?,
            None => RenderConfig::default(),
        };

        Ok(self.apply(base))
    }

    #[must_use]
    pub fn apply(&self, mut config: RenderConfig) -> RenderConfig {
        if let Some(fractal) = self.fractal {
            config.fractal = fractal;
        }

        if self.center_re.is_some() || self.center_im.is_some() {
            let [re, im] = config.center.unwrap_or_else(|| {
                let home = config.fractal.default_center();
                [home.re, home.im]
            });
            config.center = Some([self.center_re.unwrap_or(re), self.center_im.unwrap_or(im)]);
        }

        if let Some(zoom) = self.zoom {
            config.zoom = zoom;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(iterations) = self.iterations {
            config.max_iterations = iterations;
        }
        if let Some(re) = self.julia_re {
            config.julia_constant[0] = re;
        }
        if let Some(im) = self.julia_im {
            config.julia_constant[1] = im;
        }
        if let Some(scheme) = self.scheme {
            config.scheme = scheme;
        }
        if self.preset.is_some() {
            config.preset.clone_from(&self.preset);
        }
        if self.chunk_rows.is_some() {
            config.chunk_rows = self.chunk_rows;
        }

        config
    }
}
