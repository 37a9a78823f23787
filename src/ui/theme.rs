use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x7a, 0xa2, 0xf7);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const ROW_SECONDARY: Color = Color::Rgb(0x9e, 0x9e, 0x9e);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x2d, 0x32, 0x3b);
pub const STATUS_OK: Color = Color::Rgb(0x4c, 0xaf, 0x50);
pub const STATUS_WARN: Color = Color::Rgb(0xe5, 0xc0, 0x7b);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x53, 0x50);
