//! Terminal background detection.
//!
//! The default-theme fallback picks a light or dark style depending on the
//! terminal's background. [`detect_color_mode`] asks the terminal for its
//! background colour (OSC 11 through `termbg`), then looks at `COLORFGBG`,
//! and assumes a dark background when neither answers.
//!
//! Override the detector with [`set_theme_detector`], either with a fixed
//! answer in tests or with [`desktop_color_mode`] to follow the OS setting:
//!
//! ```rust
//! use slides_styles::{detect_color_mode, set_theme_detector, ColorMode};
//!
//! set_theme_detector(|| ColorMode::Light);
//! assert_eq!(detect_color_mode(), ColorMode::Light);
//! # slides_styles::reset_theme_detector();
//! ```

use std::sync::Mutex;
use std::time::Duration;

use console::Term;
use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;

/// How long to wait for the terminal to answer the background query.
const QUERY_TIMEOUT: Duration = Duration::from_millis(100);

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Light background, dark text.
    Light,
    /// Dark background, light text.
    Dark,
}

type ThemeDetector = fn() -> ColorMode;

static THEME_DETECTOR: Lazy<Mutex<ThemeDetector>> =
    Lazy::new(|| Mutex::new(terminal_color_mode));

/// Overrides the detector used to decide whether the background is light or dark.
pub fn set_theme_detector(detector: ThemeDetector) {
    let mut guard = THEME_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = detector;
}

/// Restores terminal detection after [`set_theme_detector`].
pub fn reset_theme_detector() {
    set_theme_detector(terminal_color_mode);
}

/// Detects the user's preferred color mode.
pub fn detect_color_mode() -> ColorMode {
    let detector = THEME_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    (*detector)()
}

/// The OS desktop light/dark preference, via `dark-light`.
///
/// Not consulted by default: headless sessions report light here. Install it
/// with `set_theme_detector(desktop_color_mode)`.
pub fn desktop_color_mode() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        OsThemeMode::Light => ColorMode::Light,
    }
}

fn terminal_color_mode() -> ColorMode {
    let queried = query_terminal();
    let colorfgbg = std::env::var("COLORFGBG").ok();
    background_mode(queried, colorfgbg.as_deref())
}

fn query_terminal() -> Option<ColorMode> {
    if !Term::stdout().is_term() {
        return None;
    }
    match termbg::theme(QUERY_TIMEOUT) {
        Ok(termbg::Theme::Dark) => Some(ColorMode::Dark),
        Ok(termbg::Theme::Light) => Some(ColorMode::Light),
        Err(err) => {
            tracing::debug!(error = ?err, "terminal did not report its background colour");
            None
        }
    }
}

/// Combines the background sources, first answer wins. Unknown means dark.
fn background_mode(queried: Option<ColorMode>, colorfgbg: Option<&str>) -> ColorMode {
    queried
        .or_else(|| colorfgbg.and_then(parse_colorfgbg))
        .unwrap_or(ColorMode::Dark)
}

/// Reads the background palette index from `COLORFGBG` (`fg;bg` or `fg;x;bg`).
fn parse_colorfgbg(value: &str) -> Option<ColorMode> {
    let index: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(if palette_lightness(index) < 255 {
        ColorMode::Dark
    } else {
        ColorMode::Light
    })
}

/// Twice the HSL lightness (0-510) of an xterm palette entry.
fn palette_lightness(index: u8) -> u16 {
    const ANSI: [(u8, u8, u8); 16] = [
        (0, 0, 0),
        (128, 0, 0),
        (0, 128, 0),
        (128, 128, 0),
        (0, 0, 128),
        (128, 0, 128),
        (0, 128, 128),
        (192, 192, 192),
        (128, 128, 128),
        (255, 0, 0),
        (0, 255, 0),
        (255, 255, 0),
        (0, 0, 255),
        (255, 0, 255),
        (0, 255, 255),
        (255, 255, 255),
    ];
    const CUBE: [u8; 6] = [0, 95, 135, 175, 215, 255];

    let (r, g, b) = match index {
        0..=15 => ANSI[index as usize],
        16..=231 => {
            let i = index - 16;
            (
                CUBE[(i / 36) as usize],
                CUBE[((i / 6) % 6) as usize],
                CUBE[(i % 6) as usize],
            )
        }
        _ => {
            let level = 8 + 10 * (index - 232);
            (level, level, level)
        }
    };
    let max = r.max(g).max(b) as u16;
    let min = r.min(g).min(b) as u16;
    max + min
}
