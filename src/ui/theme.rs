use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xd9, 0x8e, 0x04);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const PANE_TITLE: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const TEXT: Color = Color::Rgb(0xd4, 0xd4, 0xd4);
pub const TEXT_DIM: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const SELECTION_BG: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const NOTICE: Color = Color::Rgb(0xef, 0x44, 0x44);
