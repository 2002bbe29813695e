use colored::Color;

pub const PRIMARY: Color = Color::Cyan;
pub const ACCENT: Color = Color::Yellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const HIGHLIGHT: Color = Color::Magenta;
pub const SUCCESS: Color = Color::Green;
pub const FAILURE: Color = Color::Red;
pub const LINK: Color = Color::Blue;

pub const SECTION_DETAILS: Color = Color::BrightGreen;
pub const SECTION_PROJECTS: Color = Color::BrightYellow;
