//! # Slides Styles - Theming for Terminal Slide Decks
//!
//! `slides-styles` holds the visual styling of a terminal slide presentation:
//!
//! - [`style::ChromeStyles`]: pre-built styles for the author byline, date,
//!   page counter, slide body, status bar and search prompt
//! - [`join_horizontal`] / [`join_vertical`]: glue two rendered blocks so they
//!   fill an exact width or height
//! - [`ThemeResolver`] / [`select_theme`]: turn a theme identifier into
//!   options for the markdown renderer
//!
//! ## Status Bar
//!
//! ```rust
//! use slides_styles::{join_horizontal, style::ChromeStyles};
//!
//! let chrome = ChromeStyles::new();
//! let left = chrome.author.render_with_color("Ada", false);
//! let right = chrome.page.render_with_color("Slide 1 / 3", false);
//!
//! let bar = join_horizontal(&left, &right, 30);
//! assert_eq!(bar, "  Ada           Slide 1 / 3   ");
//! ```
//!
//! ## Theme Resolution
//!
//! ```rust,no_run
//! use slides_styles::select_theme;
//!
//! // Preset, URL, file path, or anything else (falls back to a default).
//! let options = select_theme("tokyo-night");
//! println!("{:?} via {}", options.style(), options.formatter().as_str());
//! ```
//!
//! Resolution never returns an error. Fallbacks are reported through
//! `tracing` events; install a subscriber to see them.

mod error;
pub mod layout;
pub mod style;
pub mod theme;
mod util;

pub use error::ThemeError;

pub use layout::{join_horizontal, join_vertical, place_horizontal, place_vertical, Position};

pub use theme::{
    desktop_color_mode, detect_color_mode, reset_theme_detector, select_theme,
    set_theme_detector, ColorMode, EnvReader, FetchedTheme, Formatter, HttpFetcher, MockEnv,
    MockFetcher, MockProbe, Preset, RealEnv, RendererOptions, StyleSource, SystemProbe,
    TerminalProbe, ThemeFetcher, ThemeResolver, DEFAULT_THEME,
};

pub use util::{display_height, display_width, rgb_to_ansi256};
