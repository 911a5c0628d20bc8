//! Schemes built from hue sweeps and sinusoids.

use crate::core::colour_schemes::kinds::ColourScheme;
use crate::core::colour_schemes::map::ColourMap;
use crate::core::data::colour::Colour;
use std::f64::consts::{E, PI};

const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Full hue sweep at 100% saturation, 50% lightness.
#[derive(Debug, Clone, Copy, Default)]
pub struct Classic;

impl ColourMap for Classic {
    fn kind(&self) -> ColourScheme {
        ColourScheme::Classic
    }

    fn ramp(&self, t: f64) -> Colour {
        hsl_to_rgb(t * 360.0, 1.0, 0.5)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Aurora;

impl ColourMap for Aurora {
    fn kind(&self) -> ColourScheme {
        ColourScheme::Aurora
    }

    fn ramp(&self, t: f64) -> Colour {
        let phase = t + 1.0;

        Colour::from_channels(
            155.0 * (phase * PI * 1.5).sin() + 100.0,
            155.0 * (phase * PI * 2.0).sin() + 50.0,
            255.0 * (phase * PI * 0.8 + 1.0).sin() + 100.0,
        )
    }
}

/// Sinusoids whose frequencies are the golden ratio, `e` and `π`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mathematical;

impl ColourMap for Mathematical {
    fn kind(&self) -> ColourScheme {
        ColourScheme::Mathematical
    }

    fn ramp(&self, t: f64) -> Colour {
        Colour::from_channels(
            200.0 * (t * GOLDEN_RATIO * PI).sin() + 55.0,
            180.0 * (t * E * PI / 2.0).sin() + 75.0,
            255.0 * (t * PI * PI / 2.0).sin() + 100.0,
        )
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Ocean;

impl ColourMap for Ocean {
    fn kind(&self) -> ColourScheme {
        ColourScheme::Ocean
    }

    fn ramp(&self, t: f64) -> Colour {
        Colour::from_channels(
            30.0 + 100.0 * t,
            80.0 + 150.0 * (t * PI).sin(),
            120.0 + 135.0 * (t * PI * 2.0).sin(),
        )
    }
}

/// `hue` in degrees, `saturation` and `lightness` in `[0, 1]`.
#[must_use]
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Colour {
    let h = hue / 360.0;
    let a = saturation * lightness.min(1.0 - lightness);
    let channel = |n: f64| {
        let k = (n + h * 12.0) % 12.0;
        let value = lightness - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        value * 255.0
    };

    Colour::from_channels(channel(0.0), channel(8.0), channel(4.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsl_primary_hues() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), Colour::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), Colour::new(0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), Colour::new(0, 0, 255));
    }

    #[test]
    fn hsl_zero_saturation_is_grey() {
        let colour = hsl_to_rgb(200.0, 0.0, 0.5);

        assert_eq!(colour, Colour::new(127, 127, 127));
    }

    #[test]
    fn classic_wraps_back_to_red_at_both_ends() {
        assert_eq!(Classic.ramp(0.0), Colour::new(255, 0, 0));
        assert_eq!(Classic.ramp(1.0), Colour::new(255, 0, 0));
    }

    #[test]
    fn classic_midpoint_is_cyan() {
        assert_eq!(Classic.ramp(0.5), Colour::new(0, 255, 255));
    }

    #[test]
    fn mathematical_starts_at_phase_offsets() {
        assert_eq!(Mathematical.ramp(0.0), Colour::new(55, 75, 100));
    }

    #[test]
    fn ocean_starts_deep_blue_green() {
        assert_eq!(Ocean.ramp(0.0), Colour::new(30, 80, 120));
    }

    #[test]
    fn ocean_red_channel_grows_linearly() {
        assert_eq!(Ocean.ramp(1.0).r, 130);
        assert_eq!(Ocean.ramp(0.5).r, 80);
    }

    #[test]
    fn aurora_negative_channels_clamp_to_zero() {
        // sin(1.5π) = -1 pushes red to -55.
        assert_eq!(Aurora.ramp(0.0).r, 0);
    }
}
