use crate::core::actions::render::{ChunkedRender, render};
use crate::core::colour_schemes::ColourScheme;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::params::FractalParams;

/// Snapshot of everything one render needs, taken when the render starts so
/// later interaction cannot change a frame mid-flight.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderJob {
    pub generation: u64,
    pub viewport: Viewport,
    pub params: FractalParams,
    pub scheme: ColourScheme,
}

impl RenderJob {
    #[must_use]
    pub fn render(&self) -> PixelBuffer {
        render(&self.viewport, &self.params, self.scheme)
    }

    #[must_use]
    pub fn chunked(&self, chunk_rows: u32) -> ChunkedRender {
        ChunkedRender::new(self.viewport, self.params, self.scheme, chunk_rows)
    }
}
