use crate::core::colour_schemes::{ColourMap, ColourScheme, colour_map_factory};
use crate::core::data::pixel_buffer::BYTES_PER_PIXEL;
use crate::core::data::viewport::{ComplexBounds, Viewport};
use crate::core::fractals::kernel::escape_time;
use crate::core::fractals::params::FractalParams;
use num_complex::Complex64;

/// Everything needed to fill one row of RGBA bytes, resolved once per render.
pub(crate) struct Scanline<'a> {
    bounds: ComplexBounds,
    width: f64,
    height: f64,
    max_iterations: u32,
    params: &'a FractalParams,
    colour_map: &'static dyn ColourMap,
}

impl<'a> Scanline<'a> {
    pub(crate) fn new(
        viewport: &Viewport,
        params: &'a FractalParams,
        scheme: ColourScheme,
    ) -> Self {
        Self {
            bounds: viewport.bounds(),
            width: f64::from(viewport.width()),
            height: f64::from(viewport.height()),
            max_iterations: viewport.max_iterations(),
            params,
            colour_map: colour_map_factory(scheme),
        }
    }

    /// Must agree with [`Viewport::pixel_to_complex`] so click targets land
    /// on the pixel that was drawn there.
    #[inline]
    fn point(&self, x: usize, y: usize) -> Complex64 {
        Complex64::new(
            self.bounds.x_min + (x as f64 / self.width) * self.bounds.width(),
            self.bounds.y_min + (y as f64 / self.height) * self.bounds.height(),
        )
    }

    pub(crate) fn fill_row(&self, y: usize, row: &mut [u8]) {
        for (x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
            let result = escape_time(self.params, self.point(x, y), self.max_iterations);
            let colour = self.colour_map.colourize(result, self.max_iterations);

            pixel.copy_from_slice(&colour.to_rgba());
        }
    }
}
