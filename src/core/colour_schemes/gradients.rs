//! Piecewise-linear ramps that brighten monotonically with `t`.

use crate::core::colour_schemes::kinds::ColourScheme;
use crate::core::colour_schemes::map::ColourMap;
use crate::core::data::colour::Colour;

fn unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Black → red → yellow → white in four equal bands.
#[derive(Debug, Clone, Copy, Default)]
pub struct Thermal;

impl ColourMap for Thermal {
    fn kind(&self) -> ColourScheme {
        ColourScheme::Thermal
    }

    fn ramp(&self, t: f64) -> Colour {
        if t < 0.25 {
            Colour::from_channels(t * 4.0 * 255.0, 0.0, 0.0)
        } else if t < 0.5 {
            Colour::from_channels(255.0, (t - 0.25) * 4.0 * 255.0, 0.0)
        } else if t < 0.75 {
            Colour::from_channels(255.0, 255.0, (t - 0.5) * 4.0 * 255.0)
        } else {
            Colour::new(255, 255, 255)
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Fire;

impl ColourMap for Fire {
    fn kind(&self) -> ColourScheme {
        ColourScheme::Fire
    }

    fn ramp(&self, t: f64) -> Colour {
        Colour::from_channels(
            255.0 * unit(t * 2.0),
            255.0 * unit((t - 0.3) * 2.0),
            255.0 * unit((t - 0.7) * 3.0),
        )
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Purple;

impl ColourMap for Purple {
    fn kind(&self) -> ColourScheme {
        ColourScheme::Purple
    }

    fn ramp(&self, t: f64) -> Colour {
        Colour::from_channels(
            255.0 * unit(t * 1.5),
            255.0 * unit((t - 0.3) * 1.5),
            255.0 * unit(t * 2.0),
        )
    }
}
