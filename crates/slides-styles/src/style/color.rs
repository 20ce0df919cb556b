//! Color value parsing.
//!
//! Supports:
//!
//! - Named colors: `red`, `green`, `blue`, etc. (8 ANSI colors)
//! - Bright variants: `bright_red`, `bright_green`, etc.
//! - 256-color palette: `"0"` through `"255"`
//! - RGB hex: `"#E8B4BC"` or `"#fff"` (3 or 6 digit)
//!
//! RGB colors are rendered through the 256-color palette, since that is what
//! `console` can emit.

use console::Color;

use crate::error::ThemeError;
use crate::util::rgb_to_ansi256;

/// Parsed color definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDef {
    /// Named ANSI color.
    Named(Color),
    /// 256-color palette index.
    Color256(u8),
    /// True color RGB.
    Rgb(u8, u8, u8),
}

impl ColorDef {
    /// Parses a color from a string value.
    pub fn parse(s: &str) -> Result<Self, ThemeError> {
        let s = s.trim();

        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex).map_err(|reason| ThemeError::invalid_color(s, reason));
        }

        if let Ok(index) = s.parse::<u16>() {
            return u8::try_from(index).map(ColorDef::Color256).map_err(|_| {
                ThemeError::invalid_color(s, "palette index out of range (0-255)")
            });
        }

        Self::parse_named(s).map_err(|reason| ThemeError::invalid_color(s, reason))
    }

    fn parse_hex(hex: &str) -> Result<Self, String> {
        let channel = |digits: &str| {
            u8::from_str_radix(digits, 16).map_err(|_| format!("invalid hex digits '{}'", digits))
        };
        if !hex.is_ascii() {
            return Err("hex colors must be ASCII".to_string());
        }
        match hex.len() {
            // #rgb -> #rrggbb
            3 => Ok(ColorDef::Rgb(
                channel(&hex[0..1])? * 17,
                channel(&hex[1..2])? * 17,
                channel(&hex[2..3])? * 17,
            )),
            6 => Ok(ColorDef::Rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err("hex colors must have 3 or 6 digits".to_string()),
        }
    }

    fn parse_named(name: &str) -> Result<Self, String> {
        let name_lower = name.to_lowercase();

        if let Some(base) = name_lower.strip_prefix("bright_") {
            // console exposes bright colors as palette indices 8-15
            let index = match base {
                "black" => 8,
                "red" => 9,
                "green" => 10,
                "yellow" => 11,
                "blue" => 12,
                "magenta" => 13,
                "cyan" => 14,
                "white" => 15,
                _ => return Err(format!("unknown bright color: bright_{}", base)),
            };
            return Ok(ColorDef::Color256(index));
        }

        let color = match name_lower.as_str() {
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" | "gray" | "grey" => Color::White,
            _ => return Err(format!("unknown color name: {}", name)),
        };

        Ok(ColorDef::Named(color))
    }

    /// Converts this color definition to a `console::Color`.
    pub fn to_console_color(self) -> Color {
        match self {
            ColorDef::Named(c) => c,
            ColorDef::Color256(n) => Color::Color256(n),
            ColorDef::Rgb(r, g, b) => Color::Color256(rgb_to_ansi256((r, g, b))),
        }
    }
}
