use chrono::Local;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::App;
use crate::nav::format_clock;
use crate::pages::Page;

pub struct NavBarWidget;

impl NavBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let base = Style::default().fg(theme.page_text).bg(theme.page_bg);
        let faint = Style::default().fg(theme.faint).bg(theme.page_bg);

        let brand = format!(" {} ", app.nav.brand());
        let mut used = brand.width();
        let mut spans = vec![Span::styled(brand, base.add_modifier(Modifier::BOLD))];

        // Links collapse from the right as the strip is stowed
        let links: Vec<(Page, String)> = Page::PRIMARY
            .iter()
            .map(|page| (*page, format!(" {} ", page.title())))
            .collect();
        let total: usize = links.iter().map(|(_, label)| label.width()).sum();
        let mut budget = (total as f64 * app.nav.links_visible()).round() as usize;
        for (page, label) in links {
            if budget == 0 {
                break;
            }
            let shown = take_width(&label, budget);
            budget = budget.saturating_sub(label.width());
            let style = if page == app.page {
                Style::default()
                    .fg(theme.accent)
                    .bg(theme.page_bg)
                    .add_modifier(Modifier::UNDERLINED)
            } else {
                faint
            };
            used += shown.width();
            spans.push(Span::styled(shown, style));
        }

        let right = format!(
            " {} · {} ",
            app.theme_mode.label(),
            format_clock(&Local::now())
        );
        let padding = (area.width as usize).saturating_sub(used + right.width());
        spans.push(Span::styled(" ".repeat(padding), base));
        spans.push(Span::styled(right, faint));

        frame.render_widget(Paragraph::new(Line::from(spans)).style(base), area);
    }
}

/// Longest prefix of `s` that fits in `max` display cells
fn take_width(s: &str, max: usize) -> String {
    let mut width = 0;
    s.chars()
        .take_while(|c| {
            width += c.width().unwrap_or(0);
            width <= max
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_width() {
        assert_eq!(take_width(" Home ", 3), " Ho");
        assert_eq!(take_width(" Home ", 10), " Home ");
        assert_eq!(take_width("今日は", 3), "今");
    }
}
