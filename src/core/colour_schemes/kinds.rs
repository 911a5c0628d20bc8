use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColourScheme {
    #[default]
    Aurora,
    Classic,
    Mathematical,
    Ocean,
    Thermal,
    Fire,
    Purple,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown colour scheme: {0}")]
pub struct UnknownColourScheme(pub String);

impl ColourScheme {
    pub const ALL: &'static [Self] = &[
        Self::Aurora,
        Self::Classic,
        Self::Mathematical,
        Self::Ocean,
        Self::Thermal,
        Self::Fire,
        Self::Purple,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Aurora => "Aurora",
            Self::Classic => "Classic",
            Self::Mathematical => "Mathematical",
            Self::Ocean => "Ocean",
            Self::Thermal => "Thermal",
            Self::Fire => "Fire",
            Self::Purple => "Purple",
        }
    }
}

impl fmt::Display for ColourScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for ColourScheme {
    type Err = UnknownColourScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|scheme| scheme.display_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownColourScheme(s.to_string()))
    }
}
