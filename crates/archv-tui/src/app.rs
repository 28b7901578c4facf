use std::sync::Arc;
use std::time::{Duration, Instant};

use archv_core::kinetic::FrameWindowConfig;
use archv_core::{AppConfig, MotionGate, PreferencesStore, ThemeMode};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

use crate::input::Action;
use crate::keymap::Keymap;
use crate::nav::NavBar;
use crate::pages::{MountContext, Page, PageState};
use crate::theme::Theme;
use crate::themes::{configured_mode, load_theme};

/// Main application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub keymap: Keymap,
    pub page: Page,
    pub page_state: PageState,
    pub nav: NavBar,
    pub theme: Theme,
    pub theme_mode: ThemeMode,
    pub prefs: PreferencesStore,
    pub gate: MotionGate,
    pub should_quit: bool,
    pub status_message: Option<String>,
    mount: MountContext,
    rng: StdRng,
}

impl App {
    pub fn new(
        config: Arc<AppConfig>,
        prefs: PreferencesStore,
        gate: MotionGate,
        page: Page,
        today: NaiveDate,
        now: Instant,
    ) -> Self {
        Self::with_rng(config, prefs, gate, page, today, now, StdRng::from_entropy())
    }

    /// Use a specific RNG (seeded in tests)
    pub fn with_rng(
        config: Arc<AppConfig>,
        prefs: PreferencesStore,
        gate: MotionGate,
        page: Page,
        today: NaiveDate,
        now: Instant,
        mut rng: StdRng,
    ) -> Self {
        let theme_mode = prefs.theme_or(configured_mode(&config.ui.theme));
        let theme = load_theme(theme_mode, &config.ui.theme);
        let mount = MountContext::from_config(&config, gate, today);
        let nav = NavBar::new(
            &config.ui,
            FrameWindowConfig::from(&config.scramble),
            gate,
            prefs.nav_stowed(),
            StdRng::seed_from_u64(rng.gen()),
            now,
        );
        let page_state = PageState::mount(page, &mount, &mut rng, now);

        Self {
            keymap: Keymap::from_config(&config.keymap),
            config,
            page,
            page_state,
            nav,
            theme,
            theme_mode,
            prefs,
            gate,
            should_quit: false,
            status_message: None,
            mount,
            rng,
        }
    }

    /// Show `page`, mounting fresh state; the current page is left alone
    pub fn go_to(&mut self, page: Page, now: Instant) {
        if page == self.page {
            return;
        }
        self.page = page;
        self.page_state = PageState::mount(page, &self.mount, &mut self.rng, now);
    }

    pub fn next_page(&mut self, now: Instant) {
        self.go_to(self.page.next(), now);
    }

    pub fn prev_page(&mut self, now: Instant) {
        self.go_to(self.page.prev(), now);
    }

    /// Stow or reveal the navigation links for the rest of the session
    pub fn toggle_nav(&mut self, now: Instant) {
        let stowed = !self.nav.is_stowed();
        self.prefs.set_nav_stowed(stowed);
        self.nav.set_stowed(stowed, now);
    }

    /// Switch light/dark and remember the choice
    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggled();
        self.theme = load_theme(self.theme_mode, &self.config.ui.theme);
        match self.prefs.set_theme(self.theme_mode) {
            Ok(()) => info!(theme = self.theme_mode.label(), "Theme changed"),
            Err(e) => {
                warn!("Failed to save theme preference: {}", e);
                self.set_status(format!("Theme not saved: {}", e));
            }
        }
    }

    /// Flip reduced motion and push it to every mounted component
    pub fn toggle_motion(&mut self, now: Instant) {
        self.gate = self.gate.toggled();
        self.mount.gate = self.gate;
        let reduced = self.gate.is_reduced();
        self.nav.set_reduced_motion(reduced);
        self.page_state.set_reduced_motion(reduced, now);
        info!(reduced, "Reduced motion toggled");
        self.set_status(if reduced {
            "Reduced motion: on"
        } else {
            "Reduced motion: off"
        });
    }

    /// Re-run the current page's entrance animations
    pub fn replay(&mut self, now: Instant) {
        self.page_state = PageState::mount(self.page, &self.mount, &mut self.rng, now);
        self.nav.replay(now);
    }

    /// Advance everything to `now`. Returns true while anything animates.
    pub fn tick(&mut self, now: Instant) -> bool {
        let nav = self.nav.tick(now);
        let page = self.page_state.tick(now);
        nav || page
    }

    /// Longest the main loop may sleep before something needs redrawing
    pub fn next_wake(&self, now: Instant) -> Option<Duration> {
        self.page_state.next_wake(now)
    }

    pub fn handle_action(&mut self, action: Action, now: Instant) {
        if action != Action::None {
            self.clear_status();
        }
        match action {
            Action::Quit => self.should_quit = true,
            Action::NextPage => self.next_page(now),
            Action::PrevPage => self.prev_page(now),
            Action::GoTo(page) => self.go_to(page, now),
            Action::ToggleNav => self.toggle_nav(now),
            Action::ToggleTheme => self.toggle_theme(),
            Action::ToggleMotion => self.toggle_motion(now),
            Action::Replay => self.replay(now),
            Action::None => {}
        }
    }

    /// Calendar date the session was started on
    pub fn today(&self) -> NaiveDate {
        self.mount.today
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
    }

    fn app(gate: MotionGate, prefs: PreferencesStore, now: Instant) -> App {
        App::with_rng(
            Arc::new(AppConfig::default()),
            prefs,
            gate,
            Page::Home,
            today(),
            now,
            StdRng::seed_from_u64(11),
        )
    }

    #[test]
    fn test_page_navigation() {
        let now = Instant::now();
        let mut app = app(MotionGate::full(), PreferencesStore::in_memory(), now);
        app.handle_action(Action::NextPage, now);
        assert_eq!(app.page, Page::Platform);
        assert_eq!(app.page_state.page(), Page::Platform);
        app.handle_action(Action::PrevPage, now);
        app.handle_action(Action::PrevPage, now);
        assert_eq!(app.page, Page::Login);
        app.handle_action(Action::GoTo(Page::Contact), now);
        assert_eq!(app.page_state.page(), Page::Contact);
    }

    #[test]
    fn test_quit() {
        let now = Instant::now();
        let mut app = app(MotionGate::full(), PreferencesStore::in_memory(), now);
        app.handle_action(Action::Quit, now);
        assert!(app.should_quit);
    }

    #[test]
    fn test_stow_survives_page_switch() {
        let now = Instant::now();
        let mut app = app(MotionGate::full(), PreferencesStore::in_memory(), now);
        app.handle_action(Action::ToggleNav, now);
        app.handle_action(Action::GoTo(Page::Security), now);
        assert!(app.nav.is_stowed());
        assert!(app.prefs.nav_stowed());
    }

    #[test]
    fn test_theme_toggle_persists() {
        let path = std::env::temp_dir().join(format!("archv-prefs-{}.json", Uuid::new_v4()));
        let now = Instant::now();
        {
            let prefs = PreferencesStore::load(&path).unwrap();
            let mut app = app(MotionGate::full(), prefs, now);
            assert_eq!(app.theme_mode, ThemeMode::Light);
            app.handle_action(Action::ToggleTheme, now);
            assert_eq!(app.theme_mode, ThemeMode::Dark);
            assert_eq!(app.theme, crate::themes::midnight());
        }

        let prefs = PreferencesStore::load(&path).unwrap();
        let app = app(MotionGate::full(), prefs, now);
        assert_eq!(app.theme_mode, ThemeMode::Dark);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_toggle_motion_settles_everything() {
        let now = Instant::now();
        let mut app = app(MotionGate::full(), PreferencesStore::in_memory(), now);
        app.handle_action(Action::GoTo(Page::Contact), now);
        assert!(app.tick(now + Duration::from_millis(16)));

        app.handle_action(Action::ToggleMotion, now + Duration::from_millis(16));
        assert!(app.gate.is_reduced());
        assert_eq!(app.nav.brand(), "ARCHV");
        assert!(!app.tick(now + Duration::from_millis(32)));
        assert!(app.status_message.is_some());

        // Pages mounted afterwards start settled too
        app.handle_action(Action::GoTo(Page::Security), now + Duration::from_millis(32));
        let crate::pages::PageState::Security(sec) = &app.page_state else {
            panic!("wrong state");
        };
        assert_eq!(sec.statement.display(), crate::copy::security::STATEMENT);
    }

    #[test]
    fn test_replay_restarts_page() {
        let now = Instant::now();
        let mut app = app(MotionGate::full(), PreferencesStore::in_memory(), now);
        app.handle_action(Action::GoTo(Page::Contact), now);
        let mut t = now;
        while app.tick(t) {
            t += Duration::from_millis(16);
        }
        app.handle_action(Action::Replay, t);
        let crate::pages::PageState::Contact(contact) = &app.page_state else {
            panic!("wrong state");
        };
        assert_ne!(contact.inquiry.display(), crate::copy::contact::INQUIRY);
    }
}
