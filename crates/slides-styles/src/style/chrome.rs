//! Styles for the presentation chrome: byline, date, page counter, slide body,
//! status bar and search prompt.

use once_cell::sync::Lazy;

use super::color::ColorDef;
use super::descriptor::{Align, StyleDescriptor};

/// Accent colour used for the author byline and the page counter (`#E8B4BC`).
pub const SALMON: ColorDef = ColorDef::Rgb(0xE8, 0xB4, 0xBC);

static CHROME: Lazy<ChromeStyles> = Lazy::new(ChromeStyles::new);

/// The fixed set of styles for the UI elements around a slide.
///
/// Build one with [`ChromeStyles::new`] and hand it to whatever draws the
/// screen, or borrow the shared instance from [`ChromeStyles::global`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromeStyles {
    /// Author text in the bottom-left corner.
    pub author: StyleDescriptor,
    /// Date text in the bottom-left corner, after the author.
    pub date: StyleDescriptor,
    /// Pagination progress in the bottom-right corner.
    pub page: StyleDescriptor,
    /// The slide body.
    pub slide: StyleDescriptor,
    /// The status bar at the bottom of the screen.
    pub status: StyleDescriptor,
    /// The search input shown in the bottom-left corner while searching.
    pub search: StyleDescriptor,
}

impl ChromeStyles {
    pub fn new() -> Self {
        Self {
            author: StyleDescriptor::new()
                .fg(SALMON)
                .align(Align::Left)
                .margin_left(2),
            date: StyleDescriptor::new()
                .faint(true)
                .align(Align::Left)
                .margin(0, 1),
            page: StyleDescriptor::new()
                .fg(SALMON)
                .align(Align::Right)
                .margin_right(3),
            slide: StyleDescriptor::new().padding(1),
            status: StyleDescriptor::new().padding(1),
            search: StyleDescriptor::new()
                .faint(true)
                .align(Align::Left)
                .margin_left(2),
        }
    }

    /// The process-wide instance, built on first use.
    pub fn global() -> &'static ChromeStyles {
        &CHROME
    }
}

impl Default for ChromeStyles {
    fn default() -> Self {
        Self::new()
    }
}
