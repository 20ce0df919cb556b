//! The closed set of built-in markdown rendering styles.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ThemeError;

/// A built-in markdown style, recognised by exact name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    Ascii,
    Light,
    Dark,
    /// No colour codes at all.
    Notty,
    Pink,
    Dracula,
    TokyoNight,
}

impl Preset {
    /// Every preset, in declaration order.
    pub const ALL: [Preset; 7] = [
        Preset::Ascii,
        Preset::Light,
        Preset::Dark,
        Preset::Notty,
        Preset::Pink,
        Preset::Dracula,
        Preset::TokyoNight,
    ];

    /// The name the renderer knows this style by.
    pub fn as_str(self) -> &'static str {
        match self {
            Preset::Ascii => "ascii",
            Preset::Light => "light",
            Preset::Dark => "dark",
            Preset::Notty => "notty",
            Preset::Pink => "pink",
            Preset::Dracula => "dracula",
            Preset::TokyoNight => "tokyo-night",
        }
    }

    /// Looks up a preset by exact, case-sensitive name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == name)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ThemeError::UnknownPreset(s.to_string()))
    }
}
