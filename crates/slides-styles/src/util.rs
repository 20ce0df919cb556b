//! Text measurement and colour conversion helpers.

use console::measure_text_width;

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// Grays go to the 24-step grayscale ramp, everything else to the 6x6x6 cube.
///
/// # Example
///
/// ```rust
/// use slides_styles::rgb_to_ansi256;
///
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
/// assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

/// Returns the display width of a block: the width of its widest line.
///
/// ANSI escape sequences don't count, CJK characters count as two columns.
///
/// ```rust
/// use slides_styles::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
/// assert_eq!(display_width("a\nlonger"), 6);
/// ```
pub fn display_width(s: &str) -> usize {
    s.split('\n').map(measure_text_width).max().unwrap_or(0)
}

/// Returns the number of lines in a block. An empty string is one line tall.
///
/// ```rust
/// use slides_styles::display_height;
///
/// assert_eq!(display_height(""), 1);
/// assert_eq!(display_height("a\nb\nc"), 3);
/// ```
pub fn display_height(s: &str) -> usize {
    s.matches('\n').count() + 1
}
