//! Daylight theme
//! Monochrome zinc tokens on an off-white page

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        page_bg: Color::Rgb(0xf7, 0xf7, 0xf8),
        page_text: Color::Rgb(0x18, 0x18, 0x1b), // zinc-900
        faint: Color::Rgb(0x52, 0x52, 0x5b),     // zinc-600
        card: Color::Rgb(0xff, 0xff, 0xff),
        border: Color::Rgb(0xe4, 0xe4, 0xe7),    // zinc-200
        accent: Color::Rgb(0x3f, 0x3f, 0x46),    // zinc-700
        cta: Color::Rgb(0x27, 0x27, 0x2a),       // zinc-800
        signal: Color::Rgb(0xff, 0x6a, 0x00),
    }
}
