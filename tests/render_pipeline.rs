use approx::assert_relative_eq;
use fractal_canvas::core::actions::render::{ChunkProgress, render_serial};
use fractal_canvas::core::colour_schemes::map::normalise;
use fractal_canvas::core::colour_schemes::{INTERIOR_COLOUR, colour_map_factory};
use fractal_canvas::core::data::colour::Colour;
use fractal_canvas::core::fractals::kernel::{julia, mandelbrot};
use fractal_canvas::{
    ChunkedRender, ColourScheme, EscapeResult, FractalParams, RenderError, Viewport, colourize,
    render, render_cancelable, render_into,
};
use num_complex::Complex64;
use std::sync::atomic::{AtomicUsize, Ordering};

fn overview(width: u32, height: u32) -> Viewport {
    Viewport::new(Complex64::new(-0.5, 0.0), 1.0, width, height, 150).unwrap()
}

#[test]
fn default_view_center_pixel_is_interior() {
    let viewport = overview(800, 600);

    assert_eq!(
        viewport.pixel_to_complex(400.0, 300.0),
        Complex64::new(-0.5, 0.0)
    );

    let buffer = render(&viewport, &FractalParams::Mandelbrot, ColourScheme::Aurora);

    assert_eq!(buffer.width(), 800);
    assert_eq!(buffer.height(), 600);
    assert_eq!(buffer.pixel(400, 300).unwrap(), INTERIOR_COLOUR);
}

#[test]
fn corner_pixel_escapes_immediately() {
    let viewport = overview(800, 600);
    let corner = viewport.pixel_to_complex(0.0, 0.0);

    assert_relative_eq!(corner.re, -4.5);
    assert_relative_eq!(corner.im, -3.0);
    assert!(matches!(
        mandelbrot(corner, 150),
        EscapeResult::Escaped { iterations: 1, .. }
    ));
}

#[test]
fn every_pixel_is_opaque() {
    let viewport = overview(64, 48);

    for scheme in ColourScheme::ALL {
        let buffer = render(&viewport, &FractalParams::Mandelbrot, *scheme);

        assert!(buffer.buffer().chunks_exact(4).all(|pixel| pixel[3] == 255));
    }
}

#[test]
fn parallel_serial_and_chunked_renders_agree() {
    let viewport =
        Viewport::new(Complex64::new(-0.743_643_9, 0.131_825_9), 50.0, 97, 61, 300).unwrap();
    let params = FractalParams::Mandelbrot;
    let scheme = ColourScheme::Thermal;

    let parallel = render(&viewport, &params, scheme);
    let serial = render_serial(&viewport, &params, scheme);

    let mut chunked = ChunkedRender::new(viewport, params, scheme, 7);
    let mut steps = 0;
    while let ChunkProgress::InProgress { .. } = chunked.step() {
        steps += 1;
    }

    assert_eq!(steps, 8);
    assert_eq!(parallel, serial);
    assert_eq!(parallel, chunked.into_buffer().unwrap());
}

#[test]
fn julia_render_fills_a_reused_buffer() {
    let viewport = Viewport::new(Complex64::new(0.0, 0.0), 1.0, 40, 30, 100).unwrap();
    let params = FractalParams::julia(Complex64::new(-0.7, 0.27015)).unwrap();
    let mut buffer = render(&viewport, &FractalParams::Mandelbrot, ColourScheme::Ocean);

    render_into(&mut buffer, &viewport, &params, ColourScheme::Ocean).unwrap();

    assert_eq!(buffer, render(&viewport, &params, ColourScheme::Ocean));
}

#[test]
fn render_into_rejects_a_mis_sized_buffer() {
    let mut buffer = render(&overview(10, 10), &FractalParams::Mandelbrot, ColourScheme::Fire);
    let result = render_into(
        &mut buffer,
        &overview(20, 10),
        &FractalParams::Mandelbrot,
        ColourScheme::Fire,
    );

    assert!(matches!(result, Err(RenderError::SizeMismatch { .. })));
}

#[test]
fn cancelling_part_way_returns_no_buffer() {
    let polls = AtomicUsize::new(0);
    let cancel = |_row: u32| polls.fetch_add(1, Ordering::Relaxed) >= 5;

    let result = render_cancelable(
        &overview(32, 200),
        &FractalParams::Mandelbrot,
        ColourScheme::Classic,
        &cancel,
    );

    assert!(matches!(result, Err(RenderError::Cancelled(_))));
}

#[test]
fn unfinished_chunked_render_has_no_buffer() {
    let mut chunked = ChunkedRender::new(
        overview(16, 16),
        FractalParams::Mandelbrot,
        ColourScheme::Purple,
        4,
    );
    chunked.step();

    assert!(matches!(
        chunked.into_buffer(),
        Err(RenderError::Incomplete {
            rows_completed: 4,
            total_rows: 16
        })
    ));
}

#[test]
fn bounded_points_use_interior_colour_in_every_scheme() {
    for scheme in ColourScheme::ALL {
        assert_eq!(
            fractal_canvas::colourize(EscapeResult::Bounded, 100, *scheme),
            Colour::new(0, 0, 0)
        );
    }
}

#[test]
fn julia_center_pixel_matches_kernel_at_origin() {
    let c = Complex64::new(-0.7, 0.27015);
    let viewport = Viewport::new(Complex64::new(0.0, 0.0), 1.0, 800, 600, 150).unwrap();
    let params = FractalParams::julia(c).unwrap();

    assert_eq!(
        viewport.pixel_to_complex(400.0, 300.0),
        Complex64::new(0.0, 0.0)
    );

    for &scheme in ColourScheme::ALL {
        let buffer = render(&viewport, &params, scheme);
        let expected = colourize(julia(Complex64::new(0.0, 0.0), c, 150), 150, scheme);

        assert_eq!(buffer.pixel(400, 300).unwrap(), expected, "{scheme}");
    }
}

/// Real start point whose orbit under `z²` first leaves `|z| <= 2` after
/// exactly `steps` squarings.
fn escapes_after(steps: i32) -> Complex64 {
    Complex64::new(2f64.powf(1.0 / 2f64.powi(steps)) * (1.0 + 1e-9), 0.0)
}

#[test]
fn escape_on_last_iteration_is_coloured_by_the_ramp() {
    let origin = Complex64::new(0.0, 0.0);

    for max_iterations in [1u32, 2, 3, 8, 20] {
        let point = escapes_after(max_iterations as i32 - 1);
        let result = julia(point, origin, max_iterations);

        let EscapeResult::Escaped {
            iterations,
            smoothed,
        } = result
        else {
            panic!("budget {max_iterations}: expected an escape, got {result:?}");
        };
        assert_eq!(iterations, max_iterations - 1);
        assert!(
            smoothed > f64::from(iterations) && smoothed <= f64::from(max_iterations),
            "budget {max_iterations}: smoothed {smoothed}"
        );

        let t = normalise(smoothed, max_iterations);
        for &scheme in ColourScheme::ALL {
            assert_eq!(
                colourize(result, max_iterations, scheme),
                colour_map_factory(scheme).ramp(t),
                "{scheme} at budget {max_iterations}"
            );
        }

        if max_iterations > 1 {
            let one_short = julia(point, origin, max_iterations - 1);

            assert_eq!(one_short, EscapeResult::Bounded);
            for &scheme in ColourScheme::ALL {
                assert_eq!(colourize(one_short, max_iterations - 1, scheme), INTERIOR_COLOUR);
            }
        }
    }
}
