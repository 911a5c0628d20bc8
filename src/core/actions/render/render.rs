use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::render::scanline::Scanline;
use crate::core::colour_schemes::ColourScheme;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::params::FractalParams;
use rayon::prelude::*;
use std::time::Instant;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error(
        "buffer is {buffer_width}x{buffer_height} but viewport is {viewport_width}x{viewport_height}"
    )]
    SizeMismatch {
        buffer_width: u32,
        buffer_height: u32,
        viewport_width: u32,
        viewport_height: u32,
    },
    #[error("chunked render stopped at row {rows_completed} of {total_rows}")]
    Incomplete { rows_completed: u32, total_rows: u32 },
}

/// Renders one frame, rows in parallel.
///
/// For cancel-aware rendering use [`render_cancelable`].
#[must_use]
pub fn render(viewport: &Viewport, params: &FractalParams, scheme: ColourScheme) -> PixelBuffer {
    let mut buffer = PixelBuffer::for_viewport(viewport);

    match fill_parallel(&mut buffer, viewport, params, scheme, &NeverCancel) {
        Ok(()) => buffer,
        Err(Cancelled { .. }) => unreachable!("NeverCancel token should never signal cancellation"),
    }
}

/// Renders into an existing buffer, overwriting every pixel.
pub fn render_into(
    buffer: &mut PixelBuffer,
    viewport: &Viewport,
    params: &FractalParams,
    scheme: ColourScheme,
) -> Result<(), RenderError> {
    check_dimensions(buffer, viewport)?;
    fill_parallel(buffer, viewport, params, scheme, &NeverCancel)?;

    Ok(())
}

/// Like [`render`], but asks `cancel` before each row. A cancelled render
/// never hands back a partially filled buffer; the error names the row that
/// was refused.
pub fn render_cancelable<C: CancelToken>(
    viewport: &Viewport,
    params: &FractalParams,
    scheme: ColourScheme,
    cancel: &C,
) -> Result<PixelBuffer, RenderError> {
    let mut buffer = PixelBuffer::for_viewport(viewport);

    fill_parallel(&mut buffer, viewport, params, scheme, cancel)?;

    Ok(buffer)
}

/// Single-threaded reference render. Produces the same bytes as [`render`].
#[must_use]
pub fn render_serial(
    viewport: &Viewport,
    params: &FractalParams,
    scheme: ColourScheme,
) -> PixelBuffer {
    let mut buffer = PixelBuffer::for_viewport(viewport);
    let scanline = Scanline::new(viewport, params, scheme);
    let stride = buffer.row_stride();

    for (y, row) in buffer.data_mut().chunks_exact_mut(stride).enumerate() {
        scanline.fill_row(y, row);
    }

    buffer
}

pub(crate) fn check_dimensions(
    buffer: &PixelBuffer,
    viewport: &Viewport,
) -> Result<(), RenderError> {
    if buffer.width() != viewport.width() || buffer.height() != viewport.height() {
        return Err(RenderError::SizeMismatch {
            buffer_width: buffer.width(),
            buffer_height: buffer.height(),
            viewport_width: viewport.width(),
            viewport_height: viewport.height(),
        });
    }

    Ok(())
}

fn fill_parallel<C: CancelToken>(
    buffer: &mut PixelBuffer,
    viewport: &Viewport,
    params: &FractalParams,
    scheme: ColourScheme,
    cancel: &C,
) -> Result<(), Cancelled> {
    let start = Instant::now();
    let scanline = Scanline::new(viewport, params, scheme);
    let stride = buffer.row_stride();

    buffer
        .data_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .try_for_each(|(y, row)| {
            cancel.check(y as u32)?;
            scanline.fill_row(y, row);
            Ok(())
        })
        .inspect_err(|cancelled: &Cancelled| debug!(row = cancelled.row, "render cancelled"))?;

    debug!(
        width = viewport.width(),
        height = viewport.height(),
        max_iterations = viewport.max_iterations(),
        kind = %params.kind(),
        %scheme,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "rendered frame"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colour_schemes::{INTERIOR_COLOUR, colourize};
    use crate::core::fractals::kernel::escape_time;
    use crate::core::fractals::params::DEFAULT_JULIA_CONSTANT;
    use num_complex::Complex64;
    use crate::core::actions::cancellation::CancelFlag;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn overview(width: u32, height: u32) -> Viewport {
        Viewport::new(Complex64::new(-0.5, 0.0), 1.0, width, height, 100).unwrap()
    }

    #[test]
    fn test_buffer_has_rgba_size_and_opaque_alpha() {
        let buffer = render(&overview(40, 30), &FractalParams::Mandelbrot, ColourScheme::Classic);

        assert_eq!(buffer.buffer_size(), 40 * 30 * 4);
        assert!(buffer.buffer().chunks_exact(4).all(|pixel| pixel[3] == 255));
    }

    #[test]
    fn test_image_center_is_interior_for_mandelbrot_overview() {
        let buffer = render(&overview(800, 600), &FractalParams::Mandelbrot, ColourScheme::Aurora);

        assert_eq!(buffer.pixel(400, 300).unwrap(), INTERIOR_COLOUR);
    }

    #[test]
    fn test_pixels_match_kernel_and_colour_map() {
        let viewport = Viewport::new(Complex64::new(0.0, 0.0), 1.5, 31, 17, 64).unwrap();
        let params = FractalParams::julia(DEFAULT_JULIA_CONSTANT).unwrap();
        let buffer = render(&viewport, &params, ColourScheme::Ocean);

        for (x, y) in [(0, 0), (5, 9), (15, 8), (30, 16)] {
            let point = viewport.pixel_to_complex(f64::from(x), f64::from(y));
            let expected = colourize(
                escape_time(&params, point, viewport.max_iterations()),
                viewport.max_iterations(),
                ColourScheme::Ocean,
            );

            assert_eq!(buffer.pixel(x, y).unwrap(), expected);
        }
    }

    #[test]
    fn test_rendering_twice_is_byte_identical() {
        let viewport = overview(64, 48);
        let first = render(&viewport, &FractalParams::Mandelbrot, ColourScheme::Thermal);
        let second = render(&viewport, &FractalParams::Mandelbrot, ColourScheme::Thermal);

        assert_eq!(first, second);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let viewport = Viewport::new(Complex64::new(-0.7463, 0.1102), 40.0, 97, 53, 250).unwrap();

        for params in [
            FractalParams::Mandelbrot,
            FractalParams::julia(Complex64::new(-0.8, 0.156)).unwrap(),
        ] {
            assert_eq!(
                render(&viewport, &params, ColourScheme::Mathematical),
                render_serial(&viewport, &params, ColourScheme::Mathematical)
            );
        }
    }

    #[test]
    fn test_render_into_overwrites_previous_contents() {
        let viewport = overview(16, 12);
        let mut buffer = PixelBuffer::from_data(16, 12, vec![0xAB; 16 * 12 * 4]).unwrap();

        render_into(&mut buffer, &viewport, &FractalParams::Mandelbrot, ColourScheme::Purple)
            .unwrap();

        assert_eq!(
            buffer,
            render(&viewport, &FractalParams::Mandelbrot, ColourScheme::Purple)
        );
    }

    #[test]
    fn test_render_into_rejects_mismatched_buffer() {
        let mut buffer = PixelBuffer::new(10, 10).unwrap();
        let result = render_into(
            &mut buffer,
            &overview(10, 11),
            &FractalParams::Mandelbrot,
            ColourScheme::Classic,
        );

        assert_eq!(
            result,
            Err(RenderError::SizeMismatch {
                buffer_width: 10,
                buffer_height: 10,
                viewport_width: 10,
                viewport_height: 11,
            })
        );
    }

    #[test]
    fn test_cancelable_matches_render_when_not_cancelled() {
        let viewport = overview(33, 21);
        let result = render_cancelable(
            &viewport,
            &FractalParams::Mandelbrot,
            ColourScheme::Fire,
            &NeverCancel,
        )
        .unwrap();

        assert_eq!(
            result,
            render(&viewport, &FractalParams::Mandelbrot, ColourScheme::Fire)
        );
    }

    #[test]
    fn test_cancelable_returns_cancelled_when_flag_is_raised() {
        let flag = CancelFlag::new();
        flag.cancel();

        let result = render_cancelable(
            &overview(20, 20),
            &FractalParams::Mandelbrot,
            ColourScheme::Classic,
            &flag,
        );

        assert!(matches!(result, Err(RenderError::Cancelled(Cancelled { row })) if row < 20));
    }

    #[test]
    fn test_cancelled_error_names_the_refused_row() {
        let stop_at_seven = |row: u32| row == 7;

        let result = render_cancelable(
            &overview(16, 12),
            &FractalParams::Mandelbrot,
            ColourScheme::Classic,
            &stop_at_seven,
        );

        assert_eq!(result, Err(RenderError::Cancelled(Cancelled { row: 7 })));
    }

    #[test]
    fn test_cancellation_polled_at_row_start() {
        let poll_count = AtomicUsize::new(0);
        let cancel_token = |_row: u32| {
            poll_count.fetch_add(1, Ordering::Relaxed);
            false
        };

        let result = render_cancelable(
            &overview(3, 9),
            &FractalParams::Mandelbrot,
            ColourScheme::Classic,
            &cancel_token,
        );

        assert!(result.is_ok());
        assert_eq!(poll_count.load(Ordering::Relaxed), 9);
    }

    #[test]
    fn test_render_does_not_mutate_inputs() {
        let viewport = overview(12, 12);
        let params = FractalParams::julia(DEFAULT_JULIA_CONSTANT).unwrap();
        let (viewport_before, params_before) = (viewport, params);

        let _ = render(&viewport, &params, ColourScheme::Classic);

        assert_eq!(viewport, viewport_before);
        assert_eq!(params, params_before);
    }
}
