//! Style descriptors: colour, alignment and box spacing for a block of text.

use console::{pad_str, Alignment, Style};

use super::color::ColorDef;
use crate::util::{display_height, display_width};

/// Horizontal alignment of the lines inside a rendered block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl From<Align> for Alignment {
    fn from(align: Align) -> Self {
        match align {
            Align::Left => Alignment::Left,
            Align::Center => Alignment::Center,
            Align::Right => Alignment::Right,
        }
    }
}

/// Per-side spacing, in columns for left/right and lines for top/bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Spacing {
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub left: usize,
}

impl Spacing {
    /// The same spacing on every side.
    pub fn all(n: usize) -> Self {
        Self {
            top: n,
            right: n,
            bottom: n,
            left: n,
        }
    }

    /// `vertical` lines above and below, `horizontal` columns left and right.
    pub fn symmetric(vertical: usize, horizontal: usize) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

/// An immutable bundle of text-rendering attributes applied to a UI element.
///
/// Built by value, one attribute at a time:
///
/// ```rust
/// use slides_styles::style::{Align, ColorDef, StyleDescriptor};
///
/// let page = StyleDescriptor::new()
///     .fg(ColorDef::Rgb(0xE8, 0xB4, 0xBC))
///     .align(Align::Right)
///     .margin_right(3);
///
/// assert_eq!(page.render_with_color("1/3", false), "1/3   ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleDescriptor {
    fg: Option<ColorDef>,
    align: Align,
    margin: Spacing,
    padding: Spacing,
    faint: bool,
    bold: bool,
}

impl StyleDescriptor {
    /// Creates a descriptor with no attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the foreground colour.
    pub fn fg(mut self, color: ColorDef) -> Self {
        self.fg = Some(color);
        self
    }

    /// Sets the horizontal alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Sets the margin: `vertical` lines above and below, `horizontal` columns on each side.
    pub fn margin(mut self, vertical: usize, horizontal: usize) -> Self {
        self.margin = Spacing::symmetric(vertical, horizontal);
        self
    }

    pub fn margin_top(mut self, n: usize) -> Self {
        self.margin.top = n;
        self
    }

    pub fn margin_right(mut self, n: usize) -> Self {
        self.margin.right = n;
        self
    }

    pub fn margin_bottom(mut self, n: usize) -> Self {
        self.margin.bottom = n;
        self
    }

    pub fn margin_left(mut self, n: usize) -> Self {
        self.margin.left = n;
        self
    }

    /// Sets the same padding on every side.
    pub fn padding(mut self, n: usize) -> Self {
        self.padding = Spacing::all(n);
        self
    }

    pub fn padding_left(mut self, n: usize) -> Self {
        self.padding.left = n;
        self
    }

    pub fn padding_right(mut self, n: usize) -> Self {
        self.padding.right = n;
        self
    }

    pub fn faint(mut self, yes: bool) -> Self {
        self.faint = yes;
        self
    }

    pub fn bold(mut self, yes: bool) -> Self {
        self.bold = yes;
        self
    }

    pub fn foreground(&self) -> Option<ColorDef> {
        self.fg
    }

    pub fn alignment(&self) -> Align {
        self.align
    }

    pub fn margins(&self) -> Spacing {
        self.margin
    }

    pub fn paddings(&self) -> Spacing {
        self.padding
    }

    pub fn is_faint(&self) -> bool {
        self.faint
    }

    pub fn is_bold(&self) -> bool {
        self.bold
    }

    /// Renders `text` with this descriptor, emitting ANSI codes when `console`
    /// reports colours as enabled for stdout.
    pub fn render(&self, text: &str) -> String {
        self.render_with_color(text, console::colors_enabled())
    }

    /// Renders `text` with this descriptor.
    ///
    /// Lines are aligned to the widest line, then padded, coloured, and
    /// finally surrounded by the (uncoloured) margin.
    pub fn render_with_color(&self, text: &str, color: bool) -> String {
        let block_width = display_width(text);
        let inner_width = block_width + self.padding.left + self.padding.right;
        let style = self.console_style();

        let paint = |line: String| -> String {
            if color {
                style.apply_to(line).to_string()
            } else {
                line
            }
        };

        let mut inner =
            Vec::with_capacity(display_height(text) + self.padding.top + self.padding.bottom);
        for _ in 0..self.padding.top {
            inner.push(paint(" ".repeat(inner_width)));
        }
        for line in text.split('\n') {
            let aligned = pad_str(line, block_width, self.align.into(), None);
            inner.push(paint(format!(
                "{}{}{}",
                " ".repeat(self.padding.left),
                aligned,
                " ".repeat(self.padding.right)
            )));
        }
        for _ in 0..self.padding.bottom {
            inner.push(paint(" ".repeat(inner_width)));
        }

        let outer_width = inner_width + self.margin.left + self.margin.right;
        let mut lines = Vec::with_capacity(inner.len() + self.margin.top + self.margin.bottom);
        for _ in 0..self.margin.top {
            lines.push(" ".repeat(outer_width));
        }
        for line in inner {
            lines.push(format!(
                "{}{}{}",
                " ".repeat(self.margin.left),
                line,
                " ".repeat(self.margin.right)
            ));
        }
        for _ in 0..self.margin.bottom {
            lines.push(" ".repeat(outer_width));
        }

        lines.join("\n")
    }

    /// Display width of `text` once rendered with this descriptor.
    pub fn width(&self, text: &str) -> usize {
        display_width(text)
            + self.padding.left
            + self.padding.right
            + self.margin.left
            + self.margin.right
    }

    /// Display height of `text` once rendered with this descriptor.
    pub fn height(&self, text: &str) -> usize {
        display_height(text)
            + self.padding.top
            + self.padding.bottom
            + self.margin.top
            + self.margin.bottom
    }

    fn console_style(&self) -> Style {
        let mut style = Style::new().force_styling(true);
        if let Some(fg) = self.fg {
            style = style.fg(fg.to_console_color());
        }
        if self.faint {
            style = style.dim();
        }
        if self.bold {
            style = style.bold();
        }
        style
    }
}
