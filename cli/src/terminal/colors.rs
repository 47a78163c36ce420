use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 110, g: 200, b: 140 };
pub const SECONDARY: Color = Color::TrueColor { r: 120, g: 170, b: 230 };
pub const ACCENT: Color = Color::TrueColor { r: 235, g: 190, b: 95 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 210, g: 210, b: 210 };

pub const TYPE_NAME: Color = Color::TrueColor { r: 180, g: 140, b: 230 };
pub const EXPRESSION: Color = Color::TrueColor { r: 230, g: 150, b: 110 };
pub const FAILURE: Color = Color::Red;
