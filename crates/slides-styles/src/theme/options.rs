//! Markdown renderer options produced by theme resolution.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};
use serde_json::Value;

use super::preset::Preset;
use crate::error::ThemeError;

/// Where the renderer takes its base style from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleSource {
    /// A built-in style, by name.
    Preset(Preset),
    /// A JSON style document held in memory.
    Json(#[serde(serialize_with = "serialize_byte_count")] Cow<'static, [u8]>),
    /// A JSON style document on disk, read when the renderer needs it.
    File(PathBuf),
}

fn serialize_byte_count<S: Serializer>(bytes: &Cow<'static, [u8]>, s: S) -> Result<S::Ok, S::Error> {
    #[derive(Serialize)]
    struct Summary {
        bytes: usize,
    }
    Summary { bytes: bytes.len() }.serialize(s)
}

/// Output mode of the syntax highlighter used for fenced code blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Formatter {
    /// 8/16 colour escapes.
    #[serde(rename = "terminal")]
    Terminal,
    /// 256 colour escapes.
    #[default]
    #[serde(rename = "terminal256")]
    Terminal256,
    /// 24-bit colour escapes.
    #[serde(rename = "terminal16m")]
    Terminal16m,
}

impl Formatter {
    pub fn as_str(self) -> &'static str {
        match self {
            Formatter::Terminal => "terminal",
            Formatter::Terminal256 => "terminal256",
            Formatter::Terminal16m => "terminal16m",
        }
    }
}

/// Configuration handed to the markdown renderer: a style source plus the
/// syntax-highlighting formatter.
///
/// Highlighting is always on; [`RendererOptions::new`] selects
/// [`Formatter::Terminal256`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RendererOptions {
    style: StyleSource,
    formatter: Formatter,
}

impl RendererOptions {
    pub fn new(style: StyleSource) -> Self {
        Self {
            style,
            formatter: Formatter::Terminal256,
        }
    }

    /// Shorthand for a built-in style.
    pub fn preset(preset: Preset) -> Self {
        Self::new(StyleSource::Preset(preset))
    }

    /// Shorthand for an in-memory JSON style.
    pub fn json(bytes: impl Into<Cow<'static, [u8]>>) -> Self {
        Self::new(StyleSource::Json(bytes.into()))
    }

    /// Shorthand for a JSON style file.
    pub fn file(path: impl AsRef<Path>) -> Self {
        Self::new(StyleSource::File(path.as_ref().to_path_buf()))
    }

    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn style(&self) -> &StyleSource {
        &self.style
    }

    pub fn formatter(&self) -> Formatter {
        self.formatter
    }

    /// Reads and parses the JSON style document behind this configuration.
    ///
    /// Returns `Ok(None)` for presets, which have no document. This is the
    /// lazy load a renderer performs; resolution itself never reads files.
    ///
    /// # Errors
    ///
    /// [`ThemeError::Io`] if a style file cannot be read, [`ThemeError::Parse`]
    /// if the bytes are not JSON.
    pub fn load_style_json(&self) -> Result<Option<Value>, ThemeError> {
        match &self.style {
            StyleSource::Preset(_) => Ok(None),
            StyleSource::Json(bytes) => Ok(Some(serde_json::from_slice(bytes)?)),
            StyleSource::File(path) => {
                let bytes = std::fs::read(path).map_err(|source| ThemeError::Io {
                    path: path.clone(),
                    source,
                })?;
                Ok(Some(serde_json::from_slice(&bytes)?))
            }
        }
    }
}
