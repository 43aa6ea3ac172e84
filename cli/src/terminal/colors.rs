use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const ADDR: Color = Color::Cyan;
pub const INSIDE: Color = Color::Green;
pub const OUTSIDE: Color = Color::Red;
