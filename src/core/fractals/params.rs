use crate::core::fractals::fractal_kinds::FractalKind;
use num_complex::Complex64;
use thiserror::Error;

/// Constant used by the Julia explorer until the user picks another one.
pub const DEFAULT_JULIA_CONSTANT: Complex64 = Complex64::new(-0.7, 0.27015);

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ParamsError {
    #[error("julia constant must be finite: ({real}, {imag})")]
    NonFiniteJuliaConstant { real: f64, imag: f64 },
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FractalParams {
    Mandelbrot,
    Julia { c: Complex64 },
}

impl FractalParams {
    pub fn julia(c: Complex64) -> Result<Self, ParamsError> {
        if !c.re.is_finite() || !c.im.is_finite() {
            return Err(ParamsError::NonFiniteJuliaConstant {
                real: c.re,
                imag: c.im,
            });
        }

        Ok(Self::Julia { c })
    }

    #[must_use]
    pub fn kind(&self) -> FractalKind {
        match self {
            Self::Mandelbrot => FractalKind::Mandelbrot,
            Self::Julia { .. } => FractalKind::Julia,
        }
    }
}

impl Default for FractalParams {
    fn default() -> Self {
        Self::Mandelbrot
    }
}
