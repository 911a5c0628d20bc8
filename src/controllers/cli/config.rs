use crate::controllers::interactive::DEFAULT_MAX_ITERATIONS;
use crate::core::colour_schemes::ColourScheme;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::params::{DEFAULT_JULIA_CONSTANT, FractalParams, ParamsError};
use crate::core::fractals::presets::{find_julia_preset, find_location};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialise config")]
    Serialise(#[from] toml::ser::Error),
    #[error("no {kind} preset named {name:?}")]
    UnknownPreset { kind: FractalKind, name: String },
    #[error(transparent)]
    Viewport(#[from] ViewportError),
    #[error(transparent)]
    Params(#[from] ParamsError),
}

/// One-shot render settings as read from a TOML file. Every field is
/// optional in the file; missing ones take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub fractal: FractalKind,
    /// `[re, im]`. Falls back to the fractal's home position.
    pub center: Option<[f64; 2]>,
    pub zoom: f64,
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    /// `[re, im]`, only used for Julia renders.
    pub julia_constant: [f64; 2],
    pub scheme: ColourScheme,
    /// Named Mandelbrot location or Julia constant; overrides the view or
    /// constant for the selected fractal.
    pub preset: Option<String>,
    /// Render in bands of this many rows instead of one parallel pass.
    pub chunk_rows: Option<u32>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            fractal: FractalKind::default(),
            center: None,
            zoom: 1.0,
            width: 800,
            height: 600,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            julia_constant: [DEFAULT_JULIA_CONSTANT.re, DEFAULT_JULIA_CONSTANT.im],
            scheme: ColourScheme::default(),
            preset: None,
            chunk_rows: None,
        }
    }
}

/// Validated, ready-to-render form of a [`RenderConfig`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderSettings {
    pub viewport: Viewport,
    pub params: FractalParams,
    pub scheme: ColourScheme,
    pub chunk_rows: Option<u32>,
}

impl RenderConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&contents)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn build(&self) -> Result<RenderSettings, ConfigError> {
        let mut center = self
            .center
            .map_or_else(|| self.fractal.default_center(), |[re, im]| Complex64::new(re, im));
        let mut zoom = self.zoom;
        let mut c = Complex64::new(self.julia_constant[0], self.julia_constant[1]);

        if let Some(name) = &self.preset {
            let unknown = || ConfigError::UnknownPreset {
                kind: self.fractal,
                name: name.clone(),
            };

            match self.fractal {
                FractalKind::Mandelbrot => {
                    let location = find_location(name).ok_or_else(unknown)?;
                    center = location.center;
                    zoom = location.zoom;
                }
                FractalKind::Julia => {
                    c = find_julia_preset(name).ok_or_else(unknown)?.c;
                }
            }
        }

        let viewport = Viewport::new(center, zoom, self.width, self.height, self.max_iterations)?;
        let params = match self.fractal {
            FractalKind::Mandelbrot => FractalParams::Mandelbrot,
            FractalKind::Julia => FractalParams::julia(c)?,
        };

        Ok(RenderSettings {
            viewport,
            params,
            scheme: self.scheme,
            chunk_rows: self.chunk_rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = RenderConfig::from_toml_str("").unwrap();

        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn defaults_round_trip_through_toml() {
        let config = RenderConfig::default();
        let text = config.to_toml().unwrap();

        assert_eq!(RenderConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let config = RenderConfig::from_toml_str(
            r#"
            fractal = "julia"
            scheme = "thermal"
            julia_constant = [-0.8, 0.156]
            width = 320
            "#,
        )
        .unwrap();

        assert_eq!(config.fractal, FractalKind::Julia);
        assert_eq!(config.scheme, ColourScheme::Thermal);
        assert_eq!(config.width, 320);
        assert_eq!(config.height, 600);
        assert_eq!(config.max_iterations, DEFAULT_MAX_ITERATIONS);
    }

    #[test]
    fn unknown_scheme_is_a_parse_error() {
        let result = RenderConfig::from_toml_str(r#"scheme = "plasma""#);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn build_uses_kind_default_center() {
        let julia = RenderConfig {
            fractal: FractalKind::Julia,
            ..RenderConfig::default()
        };

        let settings = julia.build().unwrap();

        assert_eq!(settings.viewport.center(), Complex64::new(0.0, 0.0));
        assert_eq!(
            settings.params,
            FractalParams::Julia {
                c: DEFAULT_JULIA_CONSTANT
            }
        );
    }

    #[test]
    fn build_applies_mandelbrot_location_preset() {
        let config = RenderConfig {
            preset: Some("elephant valley".to_string()),
            center: Some([9.0, 9.0]),
            ..RenderConfig::default()
        };

        let settings = config.build().unwrap();

        assert_eq!(settings.viewport.center(), Complex64::new(0.25, 0.0));
        assert_eq!(settings.viewport.zoom(), 100.0);
    }

    #[test]
    fn build_applies_julia_preset() {
        let config = RenderConfig {
            fractal: FractalKind::Julia,
            preset: Some("Dendrite".to_string()),
            ..RenderConfig::default()
        };

        let settings = config.build().unwrap();

        assert_eq!(
            settings.params,
            FractalParams::Julia {
                c: Complex64::new(0.3, 0.5)
            }
        );
    }

    #[test]
    fn build_rejects_unknown_preset() {
        let config = RenderConfig {
            preset: Some("Douady Rabbit".to_string()),
            ..RenderConfig::default()
        };

        assert!(matches!(
            config.build(),
            Err(ConfigError::UnknownPreset {
                kind: FractalKind::Mandelbrot,
                ..
            })
        ));
    }

    #[test]
    fn build_rejects_invalid_viewport() {
        let config = RenderConfig {
            zoom: 0.0,
            ..RenderConfig::default()
        };

        assert!(matches!(
            config.build(),
            Err(ConfigError::Viewport(ViewportError::InvalidZoom { .. }))
        ));
    }
}
