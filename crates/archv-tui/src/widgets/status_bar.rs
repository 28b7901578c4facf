use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::copy;
use crate::input::Action;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let bar = Style::default().fg(theme.page_text).bg(theme.border);
        let hint_style = Style::default().fg(theme.faint).bg(theme.border);

        let motion = if app.gate.is_reduced() { "reduced" } else { "full" };
        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            format!(
                " {} | motion: {} | © {} Archv · {}",
                app.page.title(),
                motion,
                app.today().format("%Y"),
                copy::FOOTER_RIGHT
            )
        };

        let key = |action: Action| app.keymap.hint(action).unwrap_or_else(|| "-".to_string());
        let help_hint = format!(
            " {}:quit {}/{}:pages {}:nav {}:theme {}:motion {}:replay ",
            key(Action::Quit),
            key(Action::PrevPage),
            key(Action::NextPage),
            key(Action::ToggleNav),
            key(Action::ToggleTheme),
            key(Action::ToggleMotion),
            key(Action::Replay),
        );
        let padding_len =
            (area.width as usize).saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(status_text, bar),
            Span::styled(" ".repeat(padding_len), bar),
            Span::styled(help_hint, hint_style),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
