use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const QUOTE_TEXT: Color = Color::Rgb(0xf5, 0xf5, 0xf4);
pub const AUTHOR_TEXT: Color = Color::Rgb(0xa8, 0xa2, 0x9e);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const TOAST_TEXT: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const TRIGGER_DISABLED: Color = Color::Rgb(0x52, 0x52, 0x5b);
