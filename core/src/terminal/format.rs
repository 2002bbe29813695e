//! Line builders shared by the handlers. They return strings so the caller
//! decides where the line goes.

use std::fmt::Display;

use colored::*;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

pub trait WithDefaultColor {
    fn with_default(self, default_color: Color) -> ColoredString;
}

impl WithDefaultColor for &str {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for String {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for ColoredString {
    fn with_default(self, _default_color: Color) -> ColoredString {
        self
    }
}

/// `=== Title ===` in the given color.
pub fn section(title: &str, color: Color) -> String {
    format!("=== {title} ===").color(color).bold().to_string()
}

/// Width of the widest key, used to line up [`aligned_line`] colons.
pub fn key_width(keys: &[&str]) -> usize {
    keys.iter()
        .map(|key| UnicodeWidthStr::width(*key))
        .max()
        .unwrap_or(0)
}

/// `Key.....: value` padded so every colon in a block sits in one column.
pub fn aligned_line<V>(key: &str, value: V, width: usize) -> String
where
    V: Display + WithDefaultColor,
{
    let dots: String = ".".repeat((width + 1).saturating_sub(UnicodeWidthStr::width(key)));
    let colon: String = format!(
        "{}{}",
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    let value: ColoredString = value.with_default(colors::TEXT_DEFAULT);
    status(format!("{}{} {}", key.color(colors::PRIMARY), colon, value))
}

pub fn status<T: AsRef<str>>(msg: T) -> String {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT))
}

/// `n. text` with the number in the accent color.
pub fn numbered(n: usize, text: &str) -> String {
    format!(
        "{}{} {}",
        n.to_string().color(colors::ACCENT),
        ".".color(colors::SEPARATOR),
        text.color(colors::TEXT_DEFAULT)
    )
}

pub fn fat_separator() -> String {
    "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR).to_string()
}

/// Centers `msg` within [`TOTAL_WIDTH`], ignoring color codes.
pub fn centered(msg: &str) -> String {
    let space: String = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    format!("{space}{msg}")
}
