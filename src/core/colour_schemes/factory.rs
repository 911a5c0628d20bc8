use crate::core::colour_schemes::gradients::{Fire, Purple, Thermal};
use crate::core::colour_schemes::kinds::ColourScheme;
use crate::core::colour_schemes::map::ColourMap;
use crate::core::colour_schemes::periodic::{Aurora, Classic, Mathematical, Ocean};

/// Resolves a scheme to its map. The maps carry no state, so a static
/// reference is handed out instead of a fresh allocation per render.
#[must_use]
pub fn colour_map_factory(scheme: ColourScheme) -> &'static dyn ColourMap {
    match scheme {
        ColourScheme::Classic => &Classic,
        ColourScheme::Aurora => &Aurora,
        ColourScheme::Mathematical => &Mathematical,
        ColourScheme::Ocean => &Ocean,
        ColourScheme::Thermal => &Thermal,
        ColourScheme::Fire => &Fire,
        ColourScheme::Purple => &Purple,
    }
}
