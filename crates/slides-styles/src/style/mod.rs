//! Style descriptors and the chrome style table.
//!
//! A [`StyleDescriptor`] bundles foreground colour, alignment, margin,
//! padding and the faint/bold flags. Descriptors are plain values: build them
//! once, share them freely, render text with [`StyleDescriptor::render`].
//!
//! ```rust
//! use slides_styles::style::ChromeStyles;
//!
//! let chrome = ChromeStyles::new();
//! let page = chrome.page.render_with_color("Slide 2 / 10", false);
//! assert_eq!(page, "Slide 2 / 10   ");
//! ```

mod chrome;
mod color;
mod descriptor;

pub use chrome::{ChromeStyles, SALMON};
pub use color::ColorDef;
pub use descriptor::{Align, Spacing, StyleDescriptor};
