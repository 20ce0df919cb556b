//! Error types for theme loading and style parsing.
//!
//! The theme resolver never returns these to its callers; it folds them into
//! the default-theme fallback. They surface only from the lower-level APIs
//! ([`ThemeFetcher`](crate::ThemeFetcher), [`ColorDef::parse`](crate::style::ColorDef::parse),
//! [`RendererOptions::load_style_json`](crate::RendererOptions::load_style_json)).

use std::io;
use std::path::PathBuf;

/// Errors that can occur while fetching, reading or parsing theme data.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// The HTTP request failed at the transport level, or its body could not be read.
    #[error("Failed to fetch theme from {url}: {message}")]
    Fetch { url: String, message: String },

    /// A theme file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Theme bytes are not valid JSON.
    #[error("Invalid theme JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A colour value could not be parsed.
    #[error("Invalid color '{value}': {reason}")]
    InvalidColor { value: String, reason: String },

    /// The name is not one of the built-in presets.
    #[error("Unknown preset '{0}'")]
    UnknownPreset(String),
}

impl ThemeError {
    /// Create a fetch error.
    pub fn fetch(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fetch {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create an invalid colour error.
    pub fn invalid_color(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
            reason: reason.into(),
        }
    }
}
