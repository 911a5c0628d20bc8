use num_complex::Complex64;
use thiserror::Error;

/// Half the visible imaginary extent at zoom 1.
pub const BASE_RANGE: f64 = 3.0;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("viewport center must be finite: ({real}, {imag})")]
    NonFiniteCenter { real: f64, imag: f64 },
    #[error("viewport zoom must be finite and positive: {zoom}")]
    InvalidZoom { zoom: f64 },
    #[error("viewport size must be positive: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
    #[error("view around ({real}, {imag}) at zoom {zoom} does not fit in f64")]
    UnrepresentableBounds { real: f64, imag: f64, zoom: f64 },
}

/// Region of the complex plane covered by a viewport.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ComplexBounds {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Every edge and both extents are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        [
            self.x_min,
            self.x_max,
            self.y_min,
            self.y_max,
            self.width(),
            self.height(),
        ]
        .iter()
        .all(|value| value.is_finite())
    }
}

/// Maps pixel coordinates onto the complex plane.
///
/// The visible imaginary range is `2 * BASE_RANGE / zoom`; the real range is
/// widened by the aspect ratio so non-square images are not stretched.
/// Pixel row 0 maps to the smallest imaginary value.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    center: Complex64,
    zoom: f64,
    width: u32,
    height: u32,
    max_iterations: u32,
}

impl Viewport {
    pub fn new(
        center: Complex64,
        zoom: f64,
        width: u32,
        height: u32,
        max_iterations: u32,
    ) -> Result<Self, ViewportError> {
        if !center.re.is_finite() || !center.im.is_finite() {
            return Err(ViewportError::NonFiniteCenter {
                real: center.re,
                imag: center.im,
            });
        }

        if !zoom.is_finite() || zoom <= 0.0 || !(BASE_RANGE / zoom).is_finite() {
            return Err(ViewportError::InvalidZoom { zoom });
        }

        if width == 0 || height == 0 {
            return Err(ViewportError::InvalidSize { width, height });
        }

        if max_iterations == 0 {
            return Err(ViewportError::ZeroMaxIterations);
        }

        let viewport = Self {
            center,
            zoom,
            width,
            height,
            max_iterations,
        };

        // a finite range can still overflow once widened or offset
        if !viewport.bounds().is_finite() {
            return Err(ViewportError::UnrepresentableBounds {
                real: center.re,
                imag: center.im,
                zoom,
            });
        }

        Ok(viewport)
    }

    #[must_use]
    pub fn center(&self) -> Complex64 {
        self.center
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    #[must_use]
    pub fn range(&self) -> f64 {
        BASE_RANGE / self.zoom
    }

    #[must_use]
    pub fn bounds(&self) -> ComplexBounds {
        let range = self.range();
        let half_width = range * self.aspect_ratio();

        ComplexBounds {
            x_min: self.center.re - half_width,
            x_max: self.center.re + half_width,
            y_min: self.center.im - range,
            y_max: self.center.im + range,
        }
    }

    /// Complex coordinate under pixel `(px, py)`. Fractional positions are
    /// accepted so pointer coordinates can be mapped without rounding.
    #[must_use]
    pub fn pixel_to_complex(&self, px: f64, py: f64) -> Complex64 {
        let bounds = self.bounds();

        Complex64::new(
            bounds.x_min + (px / f64::from(self.width)) * bounds.width(),
            bounds.y_min + (py / f64::from(self.height)) * bounds.height(),
        )
    }

    pub fn with_view(&self, center: Complex64, zoom: f64) -> Result<Self, ViewportError> {
        Self::new(center, zoom, self.width, self.height, self.max_iterations)
    }

    pub fn with_size(&self, width: u32, height: u32) -> Result<Self, ViewportError> {
        Self::new(self.center, self.zoom, width, height, self.max_iterations)
    }

    pub fn with_max_iterations(&self, max_iterations: u32) -> Result<Self, ViewportError> {
        Self::new(self.center, self.zoom, self.width, self.height, max_iterations)
    }
}
