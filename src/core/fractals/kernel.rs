use crate::core::data::escape_result::EscapeResult;
use crate::core::fractals::params::FractalParams;
use num_complex::Complex64;

/// Squared escape radius. Once `|z| > 2` the orbit of `z² + c` diverges.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Iterates `z ← z² + c` from `z0` until `|z|² > 4` or the budget runs out.
///
/// A zero budget is treated as one step so the loop always terminates.
#[must_use]
pub fn iterate(z0: Complex64, c: Complex64, max_iterations: u32) -> EscapeResult {
    let max_iterations = max_iterations.max(1);
    let mut z = z0;
    let mut iterations = 0;

    while z.norm_sqr() <= ESCAPE_RADIUS_SQUARED && iterations < max_iterations {
        z = z * z + c;
        iterations += 1;
    }

    if iterations < max_iterations {
        EscapeResult::Escaped {
            iterations,
            smoothed: smooth_iterations(iterations, z.norm_sqr()),
        }
    } else {
        EscapeResult::Bounded
    }
}

/// Continuous escape count `n + 1 - log2(log2(|z|))`, written in terms of
/// `|z|²` so no square root is taken.
#[must_use]
pub fn smooth_iterations(iterations: u32, magnitude_squared: f64) -> f64 {
    f64::from(iterations) + 1.0 - (magnitude_squared.log2() / 2.0).log2()
}

#[must_use]
pub fn mandelbrot(point: Complex64, max_iterations: u32) -> EscapeResult {
    iterate(Complex64::new(0.0, 0.0), point, max_iterations)
}

#[must_use]
pub fn julia(point: Complex64, c: Complex64, max_iterations: u32) -> EscapeResult {
    iterate(point, c, max_iterations)
}

/// Dispatches a point to the kernel selected by `params`.
#[inline]
#[must_use]
pub fn escape_time(params: &FractalParams, point: Complex64, max_iterations: u32) -> EscapeResult {
    match params {
        FractalParams::Mandelbrot => mandelbrot(point, max_iterations),
        FractalParams::Julia { c } => julia(point, *c, max_iterations),
    }
}
