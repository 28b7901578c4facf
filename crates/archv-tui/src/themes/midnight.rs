//! Midnight theme
//! Neutral greys on near-black

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        page_bg: Color::Rgb(0x0a, 0x0a, 0x0a),   // neutral-950
        page_text: Color::Rgb(0xf5, 0xf5, 0xf5), // neutral-100
        faint: Color::Rgb(0xa3, 0xa3, 0xa3),     // neutral-400
        card: Color::Rgb(0x17, 0x17, 0x17),
        border: Color::Rgb(0x26, 0x26, 0x26),
        accent: Color::Rgb(0xd4, 0xd4, 0xd4),
        cta: Color::Rgb(0xe5, 0xe5, 0xe5),
        signal: Color::Rgb(0xff, 0x6a, 0x00),
    }
}
