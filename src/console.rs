//! Colored text for console lines.
//!
//! Lines are built as strings here and written through a
//! [`Terminal`](crate::progress::Terminal), so they interleave correctly with
//! an active progress bar.

use colored::{Color, Colorize};

/// `text` in `color`, or unchanged in minimal mode.
#[must_use]
pub fn tint(text: &str, color: Color, minimal: bool) -> String {
    if minimal {
        text.to_owned()
    } else {
        text.color(color).to_string()
    }
}

/// `text` in `color` regardless of minimal mode.
#[must_use]
pub fn paint(text: &str, color: Color) -> String {
    text.color(color).to_string()
}

/// `number` and `suffix`, left-aligned in a column wide enough for a
/// `width`-digit number.
#[must_use]
pub fn padded_number(number: i64, suffix: &str, width: usize) -> String {
    let text = format!("{number}{suffix}");
    let column = width.saturating_add(suffix.len());
    format!("{text:<column$}")
}

/// Red above `red`, yellow above `yellow`, white otherwise.
#[must_use]
pub fn threshold_color(value: i64, yellow: i64, red: i64) -> Color {
    if value > red {
        Color::Red
    } else if value > yellow {
        Color::Yellow
    } else {
        Color::White
    }
}
