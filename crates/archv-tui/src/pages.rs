//! Pages and the kinetic state each one mounts
//!
//! A page's state is built fresh every time the page is shown and dropped when
//! it is left, so nothing from a previous visit keeps animating.

use std::time::{Duration, Instant};

use archv_core::config::AppConfig;
use archv_core::kinetic::{
    ticker_row, BitMatrix, FrameWindowConfig, LoopStrip, Marquee, PhaseController, PhaseTimings,
    ScramblePreset, ScrambleText, Spinner, TransitionStyle,
};
use archv_core::MotionGate;
use chrono::{Datelike, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::copy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Platform,
    Security,
    Philosophy,
    Contact,
    Login,
}

impl Page {
    /// Every page in navigation order
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Platform,
        Page::Security,
        Page::Philosophy,
        Page::Contact,
        Page::Login,
    ];

    /// Pages listed as links in the navigation bar
    pub const PRIMARY: [Page; 5] = [
        Page::Home,
        Page::Platform,
        Page::Security,
        Page::Philosophy,
        Page::Contact,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Platform => "Platform",
            Page::Security => "Security",
            Page::Philosophy => "Philosophy",
            Page::Contact => "Contact",
            Page::Login => "Login",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn next(self) -> Page {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Page {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn from_name(name: &str) -> Option<Page> {
        Self::ALL
            .into_iter()
            .find(|p| p.title().eq_ignore_ascii_case(name.trim()))
    }
}

/// Everything a page needs to mount its components
#[derive(Debug, Clone, Copy)]
pub struct MountContext {
    pub gate: MotionGate,
    pub windows: FrameWindowConfig,
    pub poll_interval: Duration,
    pub ticker_period: Duration,
    pub ticker_refresh: Duration,
    /// Date behind the "last updated" and availability stamps
    pub today: NaiveDate,
}

impl MountContext {
    pub fn from_config(config: &AppConfig, gate: MotionGate, today: NaiveDate) -> Self {
        Self {
            gate,
            windows: FrameWindowConfig::from(&config.scramble),
            poll_interval: Duration::from_millis(config.rotation.poll_interval_ms),
            ticker_period: Duration::from_millis(config.ui.ticker_period_ms),
            ticker_refresh: Duration::from_millis(config.ui.ticker_refresh_ms),
            today,
        }
    }
}

pub struct PlatformState {
    pub phrases: PhaseController,
}

pub struct SecurityState {
    pub statement: ScrambleText,
    /// Lit cells of the bar sweeping under the kinetic line
    pub scan: LoopStrip<bool>,
    pub ticker: Marquee,
    pub status: Spinner,
    pub updated: NaiveDate,
    rng: StdRng,
}

pub struct PhilosophyState {
    pub motto: ScrambleText,
    pub quotes: PhaseController,
}

pub struct ContactState {
    pub matrix: BitMatrix,
    pub inquiry: ScrambleText,
    pub availability: String,
    rng: StdRng,
}

pub struct LoginState {
    pub greeting: PhaseController,
}

/// Live components of the page being shown
pub enum PageState {
    Home,
    Platform(PlatformState),
    Security(SecurityState),
    Philosophy(PhilosophyState),
    Contact(ContactState),
    Login(LoginState),
}

fn child_rng(rng: &mut StdRng) -> StdRng {
    StdRng::seed_from_u64(rng.gen())
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Roman numerals for `n`; zero is empty
pub fn to_roman(mut n: u32) -> String {
    const NUMERALS: [(u32, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];
    let mut out = String::new();
    for (value, symbol) in NUMERALS {
        while n >= value {
            out.push_str(symbol);
            n -= value;
        }
    }
    out
}

/// Availability stamp, e.g. `OCT.2026 (MMXXVI)`
pub fn availability(date: NaiveDate) -> String {
    let year = date.year().max(0) as u32;
    format!(
        "{}.{} ({})",
        date.format("%b").to_string().to_uppercase(),
        date.year(),
        to_roman(year)
    )
}

impl PageState {
    /// Build and start the components of `page`
    pub fn mount(page: Page, ctx: &MountContext, rng: &mut StdRng, now: Instant) -> Self {
        debug!(page = page.title(), "Mounting page");
        let gate = ctx.gate;
        match page {
            Page::Home => PageState::Home,
            Page::Platform => {
                let timings = PhaseTimings::split(
                    Duration::from_millis(copy::platform::INTERVAL_MS),
                    Duration::from_millis(copy::platform::GLITCH_BEFORE_MS),
                    Duration::from_millis(copy::platform::GLITCH_AFTER_MS),
                );
                let phrases = PhaseController::with_rng(
                    owned(copy::platform::PHRASES),
                    timings,
                    TransitionStyle::Glitch,
                    gate,
                    now,
                    child_rng(rng),
                )
                .with_poll_interval(ctx.poll_interval, now);
                PageState::Platform(PlatformState { phrases })
            }
            Page::Security => {
                let mut statement = ScrambleText::with_rng(
                    ScramblePreset::headline(
                        Duration::from_millis(copy::security::STATEMENT_MS),
                        copy::security::STATEMENT_SHIFT,
                    ),
                    gate,
                    child_rng(rng),
                );
                statement.mount(copy::security::STATEMENT, now);

                let track = (0..copy::security::SCAN_TRACK)
                    .map(|i| i < copy::security::SCAN_WIDTH)
                    .collect();
                let scan = LoopStrip::new(
                    track,
                    Duration::from_millis(copy::security::SCAN_MS),
                    gate,
                    now,
                );

                let mut ticker_rng = child_rng(rng);
                let ticker =
                    Marquee::new(&ticker_row(&mut ticker_rng), ctx.ticker_period, gate, now)
                        .with_refresh(ctx.ticker_refresh);

                PageState::Security(SecurityState {
                    statement,
                    scan,
                    ticker,
                    status: Spinner::line(gate, now),
                    updated: ctx.today,
                    rng: ticker_rng,
                })
            }
            Page::Philosophy => {
                let mut motto = ScrambleText::with_rng(
                    ScramblePreset::headline(
                        Duration::from_millis(copy::philosophy::MOTTO_MS),
                        copy::philosophy::MOTTO_SHIFT,
                    ),
                    gate,
                    child_rng(rng),
                );
                motto.mount(copy::philosophy::MOTTO, now);

                let timings = PhaseTimings::split(
                    Duration::from_millis(copy::philosophy::QUOTE_INTERVAL_MS),
                    Duration::from_millis(copy::philosophy::QUOTE_FADE_OUT_MS),
                    Duration::from_millis(copy::philosophy::QUOTE_FADE_IN_MS),
                );
                let quotes = PhaseController::with_rng(
                    owned(copy::philosophy::QUOTES),
                    timings,
                    TransitionStyle::Fade,
                    gate,
                    now,
                    child_rng(rng),
                )
                .with_poll_interval(ctx.poll_interval, now);

                PageState::Philosophy(PhilosophyState { motto, quotes })
            }
            Page::Contact => {
                let mut inquiry = ScrambleText::with_rng(
                    ScramblePreset::decode(Duration::from_millis(copy::contact::DECODE_MS)),
                    gate,
                    child_rng(rng),
                );
                inquiry.mount(copy::contact::INQUIRY, now);

                let matrix = BitMatrix::new(
                    copy::contact::INQUIRY,
                    copy::contact::MATRIX_COLS,
                    copy::contact::MATRIX_ROWS,
                    gate,
                    now,
                )
                .with_jitter(
                    copy::contact::MATRIX_FLIPS,
                    Duration::from_millis(copy::contact::MATRIX_JITTER_MS),
                )
                .with_fade(
                    Duration::from_millis(copy::contact::MATRIX_FADE_DELAY_MS),
                    Duration::from_millis(copy::contact::MATRIX_FADE_MS),
                    copy::contact::MATRIX_FADE_FLOOR,
                );

                PageState::Contact(ContactState {
                    matrix,
                    inquiry,
                    availability: availability(ctx.today),
                    rng: child_rng(rng),
                })
            }
            Page::Login => {
                let greeting = PhaseController::with_rng(
                    owned(copy::login::PHRASES),
                    PhaseTimings::scramble_rotator(Duration::from_millis(copy::login::INTERVAL_MS)),
                    TransitionStyle::scramble(),
                    gate,
                    now,
                    child_rng(rng),
                )
                .with_poll_interval(ctx.poll_interval, now);
                PageState::Login(LoginState { greeting })
            }
        }
    }

    pub fn page(&self) -> Page {
        match self {
            PageState::Home => Page::Home,
            PageState::Platform(_) => Page::Platform,
            PageState::Security(_) => Page::Security,
            PageState::Philosophy(_) => Page::Philosophy,
            PageState::Contact(_) => Page::Contact,
            PageState::Login(_) => Page::Login,
        }
    }

    /// Advance every component to `now`
    ///
    /// Returns true while something on the page needs frame-rate redraws.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self {
            PageState::Home => false,
            PageState::Platform(state) => {
                state.phrases.update(now);
                state.phrases.is_glitching()
            }
            PageState::Security(state) => {
                let statement = state.statement.tick(now);
                state.status.update(now);
                if state.ticker.refresh_due(now) {
                    let row = ticker_row(&mut state.rng);
                    state.ticker.set_chunks(&row, now);
                }
                statement || state.ticker.strip().is_running() || state.scan.is_running()
            }
            PageState::Philosophy(state) => {
                let motto = state.motto.tick(now);
                state.quotes.update(now);
                state.quotes.countdown(now);
                motto || state.quotes.opacity(now) < 1.0
            }
            PageState::Contact(state) => {
                let inquiry = state.inquiry.tick(now);
                state.matrix.tick(now, &mut state.rng);
                inquiry || state.matrix.is_fading(now)
            }
            PageState::Login(state) => {
                state.greeting.update(now);
                state.greeting.is_animating()
            }
        }
    }

    /// Time until a timer-driven component next changes
    pub fn next_wake(&self, now: Instant) -> Option<Duration> {
        match self {
            PageState::Platform(state) => state.phrases.next_boundary_in(now),
            PageState::Philosophy(state) => {
                let boundary = state.quotes.next_boundary_in(now);
                let poll = state.quotes.rotation().next_poll_in(now);
                match (boundary, poll) {
                    (Some(a), Some(b)) => Some(a.min(b)),
                    (a, b) => a.or(b),
                }
            }
            PageState::Contact(state) => state.matrix.next_change_in(now),
            PageState::Login(state) => state.greeting.next_boundary_in(now),
            _ => None,
        }
    }

    /// Propagate a changed reduced-motion preference; every component settles
    pub fn set_reduced_motion(&mut self, reduced: bool, now: Instant) {
        match self {
            PageState::Home => {}
            PageState::Platform(state) => state.phrases.set_reduced_motion(reduced, now),
            PageState::Security(state) => {
                state.statement.set_reduced_motion(reduced);
                state.scan.set_reduced_motion(reduced, now);
                state.ticker.set_reduced_motion(reduced, now);
                state.status.set_reduced_motion(reduced, now);
            }
            PageState::Philosophy(state) => {
                state.motto.set_reduced_motion(reduced);
                state.quotes.set_reduced_motion(reduced, now);
            }
            PageState::Contact(state) => {
                state.inquiry.set_reduced_motion(reduced);
                state.matrix.set_reduced_motion(reduced, now);
            }
            PageState::Login(state) => state.greeting.set_reduced_motion(reduced, now),
        }
    }
}
