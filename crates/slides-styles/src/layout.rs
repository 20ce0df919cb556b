//! Placing and joining pre-rendered text blocks.
//!
//! All measurements use display width (ANSI escapes ignored, wide characters
//! counted as two columns) and line count. Nothing here panics on blocks that
//! are larger than the requested size: the available space saturates at zero
//! and the content is left as is.

use console::{pad_str, Alignment};

use crate::util::{display_height, display_width};

/// Where a block sits inside the space it is placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    /// Left, or top.
    #[default]
    Start,
    Center,
    /// Right, or bottom.
    End,
}

/// Pads every line of `s` to `width` columns.
///
/// Lines already wider than `width` are left untouched.
///
/// ```rust
/// use slides_styles::{place_horizontal, Position};
///
/// assert_eq!(place_horizontal(5, Position::Start, "ab"), "ab   ");
/// assert_eq!(place_horizontal(5, Position::End, "ab"), "   ab");
/// ```
pub fn place_horizontal(width: usize, pos: Position, s: &str) -> String {
    let align = match pos {
        Position::Start => Alignment::Left,
        Position::Center => Alignment::Center,
        Position::End => Alignment::Right,
    };
    s.split('\n')
        .map(|line| pad_str(line, width, align, None))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Adds blank lines to `s` until it is `height` lines tall.
///
/// Blank lines are as wide as the block. Blocks already taller than `height`
/// are returned unchanged.
///
/// ```rust
/// use slides_styles::{place_vertical, Position};
///
/// assert_eq!(place_vertical(3, Position::Start, "ab"), "ab\n  \n  ");
/// assert_eq!(place_vertical(3, Position::End, "ab"), "  \n  \nab");
/// ```
pub fn place_vertical(height: usize, pos: Position, s: &str) -> String {
    let content_height = display_height(s);
    let gap = height.saturating_sub(content_height);
    if gap == 0 {
        return s.to_string();
    }

    let blank = " ".repeat(display_width(s));
    let (above, below) = match pos {
        Position::Start => (0, gap),
        Position::Center => (gap / 2, gap - gap / 2),
        Position::End => (gap, 0),
    };

    let mut lines = Vec::with_capacity(height);
    lines.extend(std::iter::repeat(blank.as_str()).take(above));
    lines.extend(s.split('\n'));
    lines.extend(std::iter::repeat(blank.as_str()).take(below));
    lines.join("\n")
}

/// Joins two blocks side by side so the result fills `width` columns.
///
/// `left` is anchored to the left edge of the space that `right` leaves over,
/// and `right` follows it, so it ends at the right edge. If `right` alone is
/// wider than `width`, `left` gets no padding.
///
/// Multi-line blocks are joined row by row with their last rows aligned, so
/// `right` stays in the bottom-right corner. A block with fewer rows
/// contributes blank cells as wide as its column.
///
/// ```rust
/// use slides_styles::join_horizontal;
///
/// assert_eq!(join_horizontal("AB", "CD", 10), "AB      CD");
/// assert_eq!(join_horizontal("a\nb", "XY", 6), "a     \nb   XY");
/// ```
pub fn join_horizontal(left: &str, right: &str, width: usize) -> String {
    let right_width = display_width(right);
    let left_space = width.saturating_sub(right_width);

    let left_lines: Vec<&str> = left.split('\n').collect();
    let right_lines: Vec<&str> = right.split('\n').collect();
    let rows = left_lines.len().max(right_lines.len());
    let left_skip = rows - left_lines.len();
    let right_skip = rows - right_lines.len();

    (0..rows)
        .map(|i| {
            let l = i
                .checked_sub(left_skip)
                .and_then(|i| left_lines.get(i))
                .copied()
                .unwrap_or("");
            let r = i
                .checked_sub(right_skip)
                .and_then(|i| right_lines.get(i))
                .copied()
                .unwrap_or("");
            format!(
                "{}{}",
                pad_str(l, left_space, Alignment::Left, None),
                pad_str(r, right_width, Alignment::Left, None)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Joins two blocks one above the other so the result is `height` lines tall.
///
/// `top` is anchored to the top of the space that `bottom` leaves over and
/// `bottom` follows on the next line, so it ends on the last line. If
/// `bottom` alone is taller than `height`, `top` gets no filler.
///
/// ```rust
/// use slides_styles::join_vertical;
///
/// assert_eq!(join_vertical("A", "B", 4), "A\n \n \nB");
/// ```
pub fn join_vertical(top: &str, bottom: &str, height: usize) -> String {
    let top_space = height.saturating_sub(display_height(bottom));
    format!(
        "{}\n{}",
        place_vertical(top_space, Position::Start, top),
        bottom
    )
}
