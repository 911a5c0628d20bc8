use crate::core::colour_schemes::kinds::ColourScheme;
use crate::core::data::colour::Colour;
use crate::core::data::escape_result::EscapeResult;

/// Colour of every point that never escaped, whatever the scheme.
pub const INTERIOR_COLOUR: Colour = Colour::new(0, 0, 0);

/// Maps a normalised escape value `t ∈ [0, 1]` to a colour.
pub trait ColourMap: Send + Sync {
    fn kind(&self) -> ColourScheme;

    fn ramp(&self, t: f64) -> Colour;

    fn display_name(&self) -> &'static str {
        self.kind().display_name()
    }

    fn colourize(&self, result: EscapeResult, max_iterations: u32) -> Colour {
        match result {
            EscapeResult::Bounded => INTERIOR_COLOUR,
            EscapeResult::Escaped { smoothed, .. } => {
                self.ramp(normalise(smoothed, max_iterations))
            }
        }
    }
}

/// `smoothed / max_iterations` clamped into `[0, 1]`; NaN becomes 0.
#[must_use]
pub fn normalise(smoothed: f64, max_iterations: u32) -> f64 {
    let t = smoothed / f64::from(max_iterations.max(1));

    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}
