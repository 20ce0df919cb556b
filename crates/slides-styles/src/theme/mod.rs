//! Markdown theme resolution.
//!
//! A slide deck names its markdown theme with a single string. That string
//! may be a built-in preset, a URL to a JSON style, a path to a JSON style,
//! or nothing useful at all. [`ThemeResolver`] maps it to [`RendererOptions`]
//! for the markdown renderer and never fails: unusable identifiers and failed
//! downloads fall back to a default chosen from the terminal's capabilities.
//!
//! ## Default-theme fallback
//!
//! 1. `NO_COLOR` (or `CLICOLOR=0`) in the environment: the `notty` preset.
//! 2. Light terminal background: the `light` preset. The terminal is asked
//!    for its background colour; no answer counts as dark.
//! 3. Otherwise: the JSON style embedded in the crate ([`DEFAULT_THEME`]).
//!
//! ## Testing
//!
//! The network and the terminal are injected. [`MockFetcher`] and
//! [`MockProbe`] replace them without touching the real environment:
//!
//! ```rust
//! use slides_styles::{MockFetcher, MockProbe, Preset, StyleSource, ThemeResolver};
//!
//! let resolver = ThemeResolver::with_parts(MockFetcher::ok("{}"), MockProbe::no_color());
//! assert_eq!(
//!     resolver.resolve("").style(),
//!     &StyleSource::Preset(Preset::Notty),
//! );
//! ```

mod adaptive;
mod env;
mod fetch;
mod options;
mod preset;
mod resolver;

pub use adaptive::{
    desktop_color_mode, detect_color_mode, reset_theme_detector, set_theme_detector, ColorMode,
};
pub use env::{EnvReader, MockEnv, MockProbe, RealEnv, SystemProbe, TerminalProbe};
pub use fetch::{FetchedTheme, HttpFetcher, MockFetcher, ThemeFetcher};
pub use options::{Formatter, RendererOptions, StyleSource};
pub use preset::Preset;
pub use resolver::{select_theme, ThemeResolver, DEFAULT_THEME};
