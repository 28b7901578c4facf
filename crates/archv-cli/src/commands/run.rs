use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use chrono::Local;
use crossterm::{
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Terminal,
};
use tracing::{info, warn};

use archv_core::{AppConfig, MotionGate, PreferencesStore};
use archv_tui::{
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    widgets::{NavBarWidget, PageViewWidget, StatusBarWidget},
    App, Page,
};

type Term = Terminal<CrosstermBackend<Stdout>>;

pub async fn run(config: Arc<AppConfig>, page: Page, gate: MotionGate) -> Result<()> {
    let prefs = match PreferencesStore::load(config.preferences_path()) {
        Ok(prefs) => prefs,
        Err(e) => {
            warn!("Could not load preferences, continuing without persistence: {}", e);
            PreferencesStore::in_memory()
        }
    };

    let mut app = App::new(
        config.clone(),
        prefs,
        gate,
        page,
        Local::now().date_naive(),
        Instant::now(),
    );
    info!(page = page.title(), reduced = gate.is_reduced(), "Starting TUI");

    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.animation_fps);

    let mut terminal = setup_terminal()?;
    let result = run_loop(&mut terminal, &mut app, &event_handler);
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, SetTitle("Archv")) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    let backend = CrosstermBackend::new(stdout);
    match Terminal::new(backend) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            Err(e.into())
        }
    }
}

fn restore_terminal(terminal: &mut Term) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_loop(terminal: &mut Term, app: &mut App, event_handler: &EventHandler) -> Result<()> {
    loop {
        let now = Instant::now();
        // Checked before drawing so the frame reflects this instant
        let needs_fast_update = app.tick(now);

        terminal.draw(|frame| {
            let [nav, body, status] = Layout::vertical([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .areas(frame.area());

            NavBarWidget::render(frame, nav, app);
            PageViewWidget::render(frame, body, app, now);
            StatusBarWidget::render(frame, status, app);
        })?;

        // Poll at frame rate while animating, otherwise sleep until the next
        // phase boundary or the idle tick
        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else if let Some(wake) = app.next_wake(now) {
            event_handler.next_within(wake)?
        } else {
            event_handler.next()?
        };

        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app.keymap);
                    app.handle_action(action, Instant::now());
                }
                AppEvent::Resize(_, _) | AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
