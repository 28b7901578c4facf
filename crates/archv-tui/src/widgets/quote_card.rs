use std::time::Instant;

use archv_core::kinetic::timing::lerp_u16;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::pages::PhilosophyState;
use crate::theme::Theme;

/// Fading quote with a shrinking bar and seconds until the next one
pub struct QuoteCardWidget;

impl QuoteCardWidget {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        state: &PhilosophyState,
        theme: &Theme,
        now: Instant,
    ) {
        let opacity = state.quotes.opacity(now);
        let quote_style = Style::default()
            .fg(theme.text_at(opacity))
            .bg(theme.card)
            .add_modifier(Modifier::ITALIC);
        let faint = Style::default().fg(theme.faint).bg(theme.card);
        let lit = Style::default().fg(theme.page_text).bg(theme.card);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .style(Style::default().bg(theme.card));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [body, meter, footer] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let quote = Line::from(Span::styled(format!("“{}”", state.quotes.display()), quote_style));
        frame.render_widget(Paragraph::new(quote).wrap(Wrap { trim: true }), body);

        let rotation = state.quotes.rotation();
        let label = format!(" {}s", rotation.seconds_left());
        let track = meter.width.saturating_sub(label.len() as u16);
        let filled = lerp_u16(0, track, rotation.progress()).min(track);
        let bar = Line::from(vec![
            Span::styled("━".repeat(filled as usize), lit),
            Span::styled("─".repeat((track - filled) as usize), faint),
            Span::styled(label, faint),
        ]);
        frame.render_widget(Paragraph::new(bar), meter);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled("— Archv", faint)))
                .alignment(Alignment::Right),
            footer,
        );
    }
}
