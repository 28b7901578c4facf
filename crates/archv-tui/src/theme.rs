use ratatui::style::Color;

/// Color tokens shared by every page
///
/// Tokens are purely cosmetic; nothing here affects animation timing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub page_bg: Color,
    pub page_text: Color,
    /// Secondary copy, labels, hints
    pub faint: Color,
    pub card: Color,
    pub border: Color,
    pub accent: Color,
    pub cta: Color,
    /// Contact page label band
    pub signal: Color,
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::daylight()
    }
}

impl Theme {
    /// Mix page text into the page background by `opacity` in [0, 1].
    ///
    /// Terminals have no alpha channel, so fades are drawn by interpolating
    /// the foreground toward the background. Non-RGB colors snap at 0.5.
    pub fn text_at(&self, opacity: f64) -> Color {
        blend(self.page_bg, self.page_text, opacity)
    }
}

/// Linear mix of two colors
pub fn blend(from: Color, to: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => {
            let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
            Color::Rgb(mix(r0, r1), mix(g0, g1), mix(b0, b1))
        }
        _ => {
            if t < 0.5 {
                from
            } else {
                to
            }
        }
    }
}
