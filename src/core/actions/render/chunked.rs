use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::render::render::RenderError;
use crate::core::actions::render::scanline::Scanline;
use crate::core::colour_schemes::ColourScheme;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::params::FractalParams;
use rayon::prelude::*;
use tracing::{debug, trace};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ChunkProgress {
    InProgress { rows_completed: u32, total_rows: u32 },
    Complete,
}

/// A render split into bands of `chunk_rows` rows so a host loop can yield
/// between bands. The finished image is identical to [`render`].
///
/// The buffer is only released once every row has been drawn.
///
/// [`render`]: crate::core::actions::render::render::render
#[derive(Debug)]
pub struct ChunkedRender {
    viewport: Viewport,
    params: FractalParams,
    scheme: ColourScheme,
    chunk_rows: u32,
    next_row: u32,
    buffer: PixelBuffer,
}

impl ChunkedRender {
    /// `chunk_rows` of zero is treated as one.
    #[must_use]
    pub fn new(
        viewport: Viewport,
        params: FractalParams,
        scheme: ColourScheme,
        chunk_rows: u32,
    ) -> Self {
        Self {
            buffer: PixelBuffer::for_viewport(&viewport),
            viewport,
            params,
            scheme,
            chunk_rows: chunk_rows.max(1),
            next_row: 0,
        }
    }

    #[must_use]
    pub fn rows_completed(&self) -> u32 {
        self.next_row
    }

    #[must_use]
    pub fn total_rows(&self) -> u32 {
        self.viewport.height()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.next_row >= self.total_rows()
    }

    /// Fraction of rows drawn so far, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        f64::from(self.next_row) / f64::from(self.total_rows())
    }

    /// Draws the next band. Calling this after completion is a no-op.
    pub fn step(&mut self) -> ChunkProgress {
        if self.is_complete() {
            return ChunkProgress::Complete;
        }

        let first_row = self.next_row;
        let last_row = (first_row + self.chunk_rows).min(self.total_rows());
        let scanline = Scanline::new(&self.viewport, &self.params, self.scheme);
        let stride = self.buffer.row_stride();
        let band = &mut self.buffer.data_mut()
            [first_row as usize * stride..last_row as usize * stride];

        band.par_chunks_mut(stride)
            .enumerate()
            .for_each(|(offset, row)| scanline.fill_row(first_row as usize + offset, row));

        self.next_row = last_row;
        trace!(first_row, last_row, total_rows = self.total_rows(), "rendered band");

        if self.is_complete() {
            debug!(
                width = self.viewport.width(),
                height = self.viewport.height(),
                chunk_rows = self.chunk_rows,
                "chunked render complete"
            );
            ChunkProgress::Complete
        } else {
            ChunkProgress::InProgress {
                rows_completed: self.next_row,
                total_rows: self.total_rows(),
            }
        }
    }

    /// Asks `cancel` about the first row of the next band before drawing
    /// it. A cancelled step leaves the render where it was.
    pub fn step_cancelable<C: CancelToken>(
        &mut self,
        cancel: &C,
    ) -> Result<ChunkProgress, Cancelled> {
        if self.is_complete() {
            return Ok(ChunkProgress::Complete);
        }

        cancel
            .check(self.next_row)
            .inspect_err(|cancelled| debug!(row = cancelled.row, "chunked render cancelled"))?;

        Ok(self.step())
    }

    /// Steps until every row is drawn and returns the image.
    #[must_use]
    pub fn finish(mut self) -> PixelBuffer {
        while self.step() != ChunkProgress::Complete {}

        self.buffer
    }

    /// The finished image, or [`RenderError::Incomplete`] if rows remain.
    pub fn into_buffer(self) -> Result<PixelBuffer, RenderError> {
        if !self.is_complete() {
            return Err(RenderError::Incomplete {
                rows_completed: self.next_row,
                total_rows: self.total_rows(),
            });
        }

        Ok(self.buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::NeverCancel;
    use crate::core::actions::render::render::{render, render_serial};
    use num_complex::Complex64;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn viewport() -> Viewport {
        Viewport::new(Complex64::new(-0.743_643_887, 0.131_825_904), 200.0, 45, 37, 300).unwrap()
    }

    #[test]
    fn chunked_matches_parallel_and_serial_for_any_chunk_size() {
        let viewport = viewport();
        let params = FractalParams::Mandelbrot;
        let expected = render(&viewport, &params, ColourScheme::Classic);

        assert_eq!(expected, render_serial(&viewport, &params, ColourScheme::Classic));

        for chunk_rows in [1, 2, 5, 36, 37, 1000] {
            let chunked =
                ChunkedRender::new(viewport, params, ColourScheme::Classic, chunk_rows).finish();

            assert_eq!(chunked, expected, "chunk_rows = {}", chunk_rows);
        }
    }

    #[test]
    fn step_reports_progress_until_complete() {
        let mut chunked = ChunkedRender::new(
            viewport(),
            FractalParams::Mandelbrot,
            ColourScheme::Fire,
            16,
        );

        assert_eq!(
            chunked.step(),
            ChunkProgress::InProgress {
                rows_completed: 16,
                total_rows: 37
            }
        );
        assert_eq!(
            chunked.step(),
            ChunkProgress::InProgress {
                rows_completed: 32,
                total_rows: 37
            }
        );
        assert_eq!(chunked.step(), ChunkProgress::Complete);
        assert_eq!(chunked.step(), ChunkProgress::Complete);
        assert!(chunked.is_complete());
        assert_eq!(chunked.progress(), 1.0);
    }

    #[test]
    fn zero_chunk_rows_advances_one_row_at_a_time() {
        let mut chunked = ChunkedRender::new(
            viewport(),
            FractalParams::Mandelbrot,
            ColourScheme::Fire,
            0,
        );

        chunked.step();

        assert_eq!(chunked.rows_completed(), 1);
    }

    #[test]
    fn partial_render_cannot_become_a_buffer() {
        let mut chunked = ChunkedRender::new(
            viewport(),
            FractalParams::Mandelbrot,
            ColourScheme::Ocean,
            10,
        );
        chunked.step();

        assert_eq!(
            chunked.into_buffer(),
            Err(RenderError::Incomplete {
                rows_completed: 10,
                total_rows: 37
            })
        );
    }

    #[test]
    fn cancelled_step_does_not_advance() {
        let mut chunked = ChunkedRender::new(
            viewport(),
            FractalParams::Mandelbrot,
            ColourScheme::Ocean,
            10,
        );
        let polls = AtomicUsize::new(0);
        let cancel_after_first = |_row: u32| polls.fetch_add(1, Ordering::Relaxed) >= 1;

        assert!(chunked.step_cancelable(&cancel_after_first).is_ok());
        assert_eq!(
            chunked.step_cancelable(&cancel_after_first),
            Err(Cancelled { row: 10 })
        );
        assert_eq!(chunked.rows_completed(), 10);
    }

    #[test]
    fn band_containing_the_stop_row_is_drawn_up_to_it() {
        let mut chunked = ChunkedRender::new(
            viewport(),
            FractalParams::Mandelbrot,
            ColourScheme::Thermal,
            8,
        );
        let stop_from_twenty = |row: u32| row >= 20;

        while chunked.step_cancelable(&stop_from_twenty).is_ok() {}

        assert_eq!(chunked.rows_completed(), 24);
        assert_eq!(
            chunked.step_cancelable(&stop_from_twenty),
            Err(Cancelled { row: 24 })
        );
    }

    #[test]
    fn completed_render_releases_buffer() {
        let viewport = viewport();
        let params = FractalParams::julia(Complex64::new(-0.4, 0.6)).unwrap();
        let mut chunked = ChunkedRender::new(viewport, params, ColourScheme::Purple, 8);

        while chunked.step_cancelable(&NeverCancel).unwrap() != ChunkProgress::Complete {}

        assert_eq!(
            chunked.into_buffer().unwrap(),
            render(&viewport, &params, ColourScheme::Purple)
        );
    }
}
