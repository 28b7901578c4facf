use std::time::Instant;

use chrono::Local;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::copy;
use crate::nav::format_clock;
use crate::pages::{
    ContactState, LoginState, PageState, PhilosophyState, PlatformState, SecurityState,
};
use crate::theme::Theme;
use crate::widgets::{QuoteCardWidget, TickerWidget};

/// Body of the current page
pub struct PageViewWidget;

impl PageViewWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
        let theme = &app.theme;
        let block = Block::default()
            .borders(Borders::NONE)
            .padding(Padding::horizontal(2))
            .style(Style::default().fg(theme.page_text).bg(theme.page_bg));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        match &app.page_state {
            PageState::Home => render_home(frame, inner, app),
            PageState::Platform(state) => render_platform(frame, inner, state, theme),
            PageState::Security(state) => render_security(frame, inner, state, theme, now),
            PageState::Philosophy(state) => render_philosophy(frame, inner, state, theme, now),
            PageState::Contact(state) => render_contact(frame, inner, state, theme, now),
            PageState::Login(state) => render_login(frame, inner, state, theme),
        }
    }
}

struct Styles {
    text: Style,
    faint: Style,
    heading: Style,
    accent: Style,
    cta: Style,
}

impl Styles {
    fn new(theme: &Theme) -> Self {
        let text = Style::default().fg(theme.page_text).bg(theme.page_bg);
        Self {
            text,
            faint: Style::default().fg(theme.faint).bg(theme.page_bg),
            heading: text.add_modifier(Modifier::BOLD),
            accent: Style::default().fg(theme.accent).bg(theme.page_bg),
            cta: Style::default()
                .fg(theme.page_bg)
                .bg(theme.cta)
                .add_modifier(Modifier::BOLD),
        }
    }
}

fn paragraph(lines: Vec<Line<'static>>) -> Paragraph<'static> {
    Paragraph::new(lines).wrap(Wrap { trim: false })
}

/// `label    value` rows with the labels padded to a common width
fn ledger(rows: &[(&str, &str)], styles: &Styles) -> Vec<Line<'static>> {
    let width = rows.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);
    rows.iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{:<width$}  ", label, width = width), styles.faint),
                Span::styled(value.to_string(), styles.text),
            ])
        })
        .collect()
}

fn chips(items: &[&str], styles: &Styles) -> Line<'static> {
    let mut spans = Vec::with_capacity(items.len() * 2);
    for item in items {
        spans.push(Span::styled(format!("[{}]", item), styles.accent));
        spans.push(Span::styled(" ", styles.text));
    }
    Line::from(spans)
}

fn cta(label: &str, styles: &Styles) -> Line<'static> {
    Line::from(Span::styled(format!(" {} ", label), styles.cta))
}

fn render_home(frame: &mut Frame, area: Rect, app: &App) {
    let styles = Styles::new(&app.theme);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(copy::home::TITLE, styles.heading)),
        Line::from(""),
        Line::from(Span::styled(copy::home::INTRO, styles.text)),
        Line::from(""),
        Line::from(Span::styled(
            format!("© {} Archv", app.today().format("%Y")),
            styles.faint,
        )),
    ];
    frame.render_widget(paragraph(lines), area);
}

fn render_platform(frame: &mut Frame, area: Rect, state: &PlatformState, theme: &Theme) {
    let styles = Styles::new(theme);
    let mut lines = vec![
        Line::from(Span::styled(copy::platform::TITLE, styles.heading)),
        Line::from(Span::styled(copy::platform::INTRO, styles.text)),
        Line::from(""),
    ];
    lines.extend(
        copy::platform::FEATURES
            .iter()
            .map(|f| Line::from(Span::styled(format!("▪ {}", f), styles.text))),
    );
    lines.push(Line::from(""));
    lines.push(cta(copy::platform::CTA, &styles));
    lines.push(Line::from(""));

    // Ghost layer around the swap
    let phrase = state.phrases.display().to_string();
    if state.phrases.is_glitching() {
        lines.push(Line::from(Span::styled(
            format!(" {}", phrase),
            Style::default().fg(theme.signal).bg(theme.page_bg),
        )));
        lines.push(Line::from(Span::styled(
            phrase,
            styles.heading.add_modifier(Modifier::ITALIC),
        )));
    } else {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(phrase, styles.heading)));
    }
    lines.push(Line::from(""));
    lines.extend(ledger(copy::platform::SPECS, &styles));

    frame.render_widget(paragraph(lines), area);
}

fn render_security(
    frame: &mut Frame,
    area: Rect,
    state: &SecurityState,
    theme: &Theme,
    now: Instant,
) {
    let styles = Styles::new(theme);
    let [body, ticker] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let mut lines = vec![
        Line::from(Span::styled(state.statement.display().to_string(), styles.heading)),
        Line::from(Span::styled(copy::security::LEAD, styles.text)),
        Line::from(""),
    ];
    lines.extend(ledger(copy::security::RAIL, &styles));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        copy::security::KINETIC_LINE,
        styles.accent.add_modifier(Modifier::BOLD),
    )));
    lines.push(scan_bar(state, &styles, now));
    lines.push(Line::from(vec![
        Span::styled("Status ", styles.faint),
        Span::styled(format!("{} Operational", state.status.frame()), styles.text),
        Span::styled("   Last Updated ", styles.faint),
        Span::styled(state.updated.format("%b %-d, %Y").to_string(), styles.text),
        Span::styled("   Environment ", styles.faint),
        Span::styled(copy::security::ENVIRONMENT, styles.text),
    ]));
    lines.push(Line::from(""));
    for (title, points) in copy::security::CARDS {
        let mut spans = vec![Span::styled(format!("{}: ", title), styles.heading)];
        spans.push(Span::styled(points.join(" "), styles.text));
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(""));
    lines.push(chips(copy::security::CONTROLS, &styles));
    lines.push(Line::from(""));
    lines.extend(ledger(copy::security::LEDGER, &styles));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(format!(" {} ", copy::security::CTA), styles.cta),
        Span::styled(format!("  {}", copy::security::CTA_NOTE), styles.faint),
    ]));

    frame.render_widget(paragraph(lines), body);
    TickerWidget::render(frame, ticker, &state.ticker, theme, now);
}

fn render_philosophy(
    frame: &mut Frame,
    area: Rect,
    state: &PhilosophyState,
    theme: &Theme,
    now: Instant,
) {
    let styles = Styles::new(theme);
    let [head, quote, rest] = Layout::vertical([
        Constraint::Length(7),
        Constraint::Length(7),
        Constraint::Min(0),
    ])
    .areas(area);

    let mut lines = vec![
        Line::from(Span::styled(copy::philosophy::TITLE, styles.faint)),
        Line::from(Span::styled(state.motto.display().to_string(), styles.heading)),
        Line::from(Span::styled(copy::philosophy::INDEX.join(" · "), styles.accent)),
        Line::from(""),
    ];
    lines.extend(
        copy::philosophy::NOTES
            .iter()
            .map(|n| Line::from(Span::styled(*n, styles.text))),
    );
    frame.render_widget(paragraph(lines), head);

    QuoteCardWidget::render(frame, quote, state, theme, now);

    let mut lines = vec![Line::from(chips(&["calm", "software"], &styles))];
    lines.extend(ledger(copy::philosophy::BLOCKS, &styles));
    lines.push(Line::from(""));
    lines.extend(ledger(copy::philosophy::LEDGER, &styles));
    lines.push(Line::from(""));
    lines.push(cta(copy::philosophy::CTA, &styles));
    frame.render_widget(paragraph(lines), rest);
}

fn render_contact(
    frame: &mut Frame,
    area: Rect,
    state: &ContactState,
    theme: &Theme,
    now: Instant,
) {
    let styles = Styles::new(theme);
    let band = Style::default()
        .fg(theme.page_bg)
        .bg(theme.signal)
        .add_modifier(Modifier::BOLD);
    let bits = Style::default()
        .fg(theme.text_at(state.matrix.opacity(now)))
        .bg(theme.page_bg);

    let mut lines = vec![
        Line::from(Span::styled(format!(" {} ", copy::contact::TITLE), band)),
        Line::from(""),
        Line::from(Span::styled("encoded inquiry", styles.faint)),
    ];
    lines.extend(
        state
            .matrix
            .lines()
            .into_iter()
            .map(|row| Line::from(Span::styled(row, bits))),
    );
    lines.extend([
        Line::from(Span::styled("decoded", styles.faint)),
        Line::from(Span::styled(state.inquiry.display().to_string(), styles.accent)),
        Line::from(""),
        Line::from(Span::styled(copy::contact::TAGLINE, styles.heading)),
        Line::from(Span::styled(copy::contact::BODY, styles.text)),
        chips(copy::contact::PILLS, &styles),
        Line::from(""),
    ]);
    for (title, body, action) in copy::contact::CARDS {
        lines.push(Line::from(Span::styled(*title, styles.heading)));
        lines.push(Line::from(Span::styled(*body, styles.text)));
        lines.push(cta(action, &styles));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(vec![
        Span::styled("Email  ", styles.faint),
        Span::styled(copy::contact::EMAIL, styles.accent.add_modifier(Modifier::UNDERLINED)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("AVLB: ", styles.faint),
        Span::styled(state.availability.clone(), styles.text),
        Span::styled(format!(" ● {}", format_clock(&Local::now())), styles.faint),
    ]));

    frame.render_widget(paragraph(lines), area);
}

/// Lit cells sweep left to right along the track
fn scan_bar(state: &SecurityState, styles: &Styles, now: Instant) -> Line<'static> {
    let spans = state
        .scan
        .window(now, copy::security::SCAN_TRACK)
        .into_iter()
        .rev()
        .map(|lit| {
            if lit {
                Span::styled("━", styles.accent)
            } else {
                Span::styled("─", styles.faint)
            }
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

fn render_login(frame: &mut Frame, area: Rect, state: &LoginState, theme: &Theme) {
    let styles = Styles::new(theme);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(state.greeting.display().to_string(), styles.accent)),
        Line::from(""),
        Line::from(Span::styled(copy::login::TITLE, styles.heading)),
        Line::from(Span::styled(copy::login::LEAD, styles.text)),
        Line::from(""),
        cta(copy::login::PORTAL, &styles),
        Line::from(Span::styled(copy::login::HELP, styles.faint)),
    ];

    let card = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(theme.card));
    frame.render_widget(paragraph(lines).block(card), area);
}
