use std::time::Instant;

use archv_core::kinetic::Marquee;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::Theme;

/// Single-line scrolling status strip
pub struct TickerWidget;

impl TickerWidget {
    pub fn render(frame: &mut Frame, area: Rect, marquee: &Marquee, theme: &Theme, now: Instant) {
        let text = marquee.visible(now, area.width as usize);
        let line = Line::from(Span::styled(
            text,
            Style::default().fg(theme.faint).bg(theme.card),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }
}
