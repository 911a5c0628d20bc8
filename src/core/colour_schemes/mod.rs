pub mod factory;
pub mod gradients;
pub mod kinds;
pub mod map;
pub mod periodic;

use crate::core::data::colour::Colour;
use crate::core::data::escape_result::EscapeResult;

pub use factory::colour_map_factory;
pub use kinds::{ColourScheme, UnknownColourScheme};
pub use map::{ColourMap, INTERIOR_COLOUR};

/// Colour for one escape result under `scheme`.
#[must_use]
pub fn colourize(result: EscapeResult, max_iterations: u32, scheme: ColourScheme) -> Colour {
    colour_map_factory(scheme).colourize(result, max_iterations)
}
