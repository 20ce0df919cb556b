//! Layout helpers exercised with styled chrome and arbitrary input.

use proptest::prelude::*;
use slides_styles::style::ChromeStyles;
use slides_styles::{display_height, display_width, join_horizontal, join_vertical};

#[test]
fn join_horizontal_fills_width() {
    assert_eq!(join_horizontal("AB", "CD", 10), "AB      CD");
}

#[test]
fn join_vertical_fills_height() {
    let joined = join_vertical("AB", "CD", 10);
    let lines: Vec<&str> = joined.split('\n').collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines.first(), Some(&"AB"));
    assert_eq!(lines.last(), Some(&"CD"));
    assert!(lines[1..9].iter().all(|l| l.trim().is_empty()));
}

#[test]
fn status_bar_with_coloured_chrome_has_exact_width() {
    let chrome = ChromeStyles::new();
    let left = format!(
        "{}{}",
        chrome.author.render_with_color("Ada Lovelace", true),
        chrome.date.render_with_color("1843-07-10", true)
    );
    let right = chrome.page.render_with_color("Slide 4 / 9", true);

    let bar = join_horizontal(&left, &right, 80);
    assert_eq!(display_width(&bar), 80);
    assert!(bar.ends_with(&right));
}

#[test]
fn slide_body_above_status_bar_has_exact_height() {
    let chrome = ChromeStyles::new();
    let slide = chrome.slide.render_with_color("# Title\n\nSome text", false);
    let status = chrome.status.render_with_color("  Ada   1 / 2", false);

    let screen = join_vertical(&slide, &status, 24);
    assert_eq!(display_height(&screen), 24);
    assert!(screen.ends_with(&status));
}

fn single_line() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 日本]{0,12}"
}

proptest! {
    #[test]
    fn join_horizontal_width_is_max_of_target_and_content(
        left in single_line(),
        right in single_line(),
        width in 0usize..40,
    ) {
        let joined = join_horizontal(&left, &right, width);
        let needed = display_width(&left) + display_width(&right);
        prop_assert_eq!(display_width(&joined), width.max(needed));
        prop_assert!(joined.starts_with(left.as_str()));
        prop_assert!(joined.ends_with(right.as_str()));
    }

    #[test]
    fn join_vertical_height_is_max_of_target_and_content(
        top_lines in 1usize..5,
        bottom_lines in 1usize..5,
        height in 0usize..12,
    ) {
        let top = vec!["t"; top_lines].join("\n");
        let bottom = vec!["b"; bottom_lines].join("\n");
        let joined = join_vertical(&top, &bottom, height);
        prop_assert_eq!(display_height(&joined), height.max(top_lines + bottom_lines));
        prop_assert!(joined.starts_with(top.as_str()));
        prop_assert!(joined.ends_with(bottom.as_str()));
    }
}
