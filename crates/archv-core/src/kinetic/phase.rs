//! Phase transition controller
//!
//! Drives the `entering -> holding -> exiting -> entering(next)` cycle of a
//! rotating list. Exactly one phase is live at a time; when `update` is called
//! late, every elapsed boundary is processed in order before the current frame
//! is rendered.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use super::alphabet::Alphabet;
use super::rotation::{RotationScheduler, DEFAULT_POLL_INTERVAL};
use super::scramble::ScrambleJob;
use super::timing::progress;
use crate::motion::MotionGate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Holding,
    Exiting,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Entering => "entering",
            Phase::Holding => "holding",
            Phase::Exiting => "exiting",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTimings {
    pub enter: Duration,
    pub hold: Duration,
    pub exit: Duration,
}

impl PhaseTimings {
    pub fn new(enter: Duration, hold: Duration, exit: Duration) -> Self {
        Self { enter, hold, exit }
    }

    /// Scrambling rotator: short reveal, hold of `max(1200, interval - 800)`,
    /// short scramble-out
    pub fn scramble_rotator(interval: Duration) -> Self {
        Self::new(
            Duration::from_millis(400),
            interval
                .saturating_sub(Duration::from_millis(800))
                .max(Duration::from_millis(1200)),
            Duration::from_millis(240),
        )
    }

    /// A fixed `interval` split into exit, enter and whatever hold is left
    pub fn split(interval: Duration, exit: Duration, enter: Duration) -> Self {
        Self::new(enter, interval.saturating_sub(exit + enter), exit)
    }

    /// Length of a whole cycle
    pub fn cycle(&self) -> Duration {
        self.enter + self.hold + self.exit
    }

    fn of(&self, phase: Phase) -> Duration {
        match phase {
            Phase::Entering => self.enter,
            Phase::Holding => self.hold,
            Phase::Exiting => self.exit,
        }
    }
}

/// How the text changes between items
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionStyle {
    /// Forward scramble on enter, reverse scramble toward blanks on exit.
    /// Each scramble runs for its own duration inside the phase window.
    Scramble {
        alphabet: Alphabet,
        shift: u32,
        reveal: Duration,
        conceal: Duration,
    },
    /// Glyphs unchanged; opacity fades out on exit and in on enter
    Fade,
    /// Glyphs swap at the exit/enter boundary with a ghost layer around it
    Glitch,
}

impl TransitionStyle {
    pub fn scramble() -> Self {
        TransitionStyle::Scramble {
            alphabet: Alphabet::glitch(),
            shift: 37,
            reveal: Duration::from_millis(360),
            conceal: Duration::from_millis(220),
        }
    }
}

#[derive(Debug)]
pub struct PhaseController {
    items: Vec<String>,
    timings: PhaseTimings,
    style: TransitionStyle,
    phase: Phase,
    phase_start: Instant,
    rotation: RotationScheduler,
    job: Option<ScrambleJob>,
    display: String,
    is_static: bool,
    rng: StdRng,
}

impl PhaseController {
    pub fn new(
        items: Vec<String>,
        timings: PhaseTimings,
        style: TransitionStyle,
        gate: MotionGate,
        now: Instant,
    ) -> Self {
        Self::with_rng(items, timings, style, gate, now, StdRng::from_entropy())
    }

    pub fn with_rng(
        items: Vec<String>,
        timings: PhaseTimings,
        style: TransitionStyle,
        gate: MotionGate,
        now: Instant,
        rng: StdRng,
    ) -> Self {
        let rotation =
            RotationScheduler::new(items.len(), timings.cycle(), DEFAULT_POLL_INTERVAL, gate, now);
        let mut controller = Self {
            display: items.first().cloned().unwrap_or_default(),
            items,
            timings,
            style,
            phase: Phase::Holding,
            phase_start: now,
            rotation,
            job: None,
            is_static: true,
            rng,
        };
        if controller.rotation.is_enabled() {
            controller.is_static = false;
            controller.enter_phase(Phase::Entering, now);
        }
        controller
    }

    /// Replace the countdown polling cadence
    pub fn with_poll_interval(mut self, poll_interval: Duration, now: Instant) -> Self {
        let enabled = self.rotation.is_enabled();
        self.rotation = RotationScheduler::new(
            self.items.len(),
            self.timings.cycle(),
            poll_interval,
            MotionGate::new(!enabled),
            now,
        );
        self
    }

    /// Process every elapsed phase boundary, then render the frame for `now`.
    ///
    /// Returns the new active index if a cycle completed.
    pub fn update(&mut self, now: Instant) -> Option<usize> {
        if self.is_static {
            return None;
        }

        let mut advanced = None;
        loop {
            let end = self.phase_start + self.timings.of(self.phase);
            if now < end {
                break;
            }
            match self.phase {
                Phase::Entering => self.enter_phase(Phase::Holding, end),
                Phase::Holding => self.enter_phase(Phase::Exiting, end),
                Phase::Exiting => {
                    self.rotation.advance(end);
                    advanced = Some(self.rotation.active_index());
                    debug!(index = self.rotation.active_index(), "Phase cycle completed");
                    self.enter_phase(Phase::Entering, end);
                }
            }
        }

        if let Some(job) = self.job.as_mut() {
            let more = job.advance(now, &mut self.rng);
            self.display.clear();
            self.display.push_str(job.display());
            if !more {
                self.job = None;
            }
        }
        advanced
    }

    fn enter_phase(&mut self, phase: Phase, at: Instant) {
        // whatever the previous phase had in flight is dropped first
        self.job = None;
        self.phase = phase;
        self.phase_start = at;

        let current = self.current_item().to_string();
        let job = match (&self.style, phase) {
            (
                TransitionStyle::Scramble {
                    alphabet,
                    shift,
                    reveal,
                    ..
                },
                Phase::Entering,
            ) => Some(ScrambleJob::timed(&current, alphabet.clone(), *reveal, *shift, false, at)),
            (
                TransitionStyle::Scramble {
                    alphabet,
                    shift,
                    conceal,
                    ..
                },
                Phase::Exiting,
            ) => Some(ScrambleJob::timed(&current, alphabet.clone(), *conceal, *shift, true, at)),
            _ => None,
        };
        match job {
            Some(job) => self.start_job(job),
            None => self.display = current,
        }
    }

    fn start_job(&mut self, job: ScrambleJob) {
        self.display = job.display().to_string();
        if !job.is_done() {
            self.job = Some(job);
        }
    }

    fn current_item(&self) -> &str {
        self.items
            .get(self.rotation.active_index())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Text to draw right now
    #[inline]
    pub fn display(&self) -> &str {
        &self.display
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn active_index(&self) -> usize {
        self.rotation.active_index()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn timings(&self) -> PhaseTimings {
        self.timings
    }

    pub fn style(&self) -> &TransitionStyle {
        &self.style
    }

    /// No rotation happens (zero or one item, reduced motion, empty cycle)
    #[inline]
    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// Whether per-frame updates are needed, as opposed to countdown polling
    pub fn is_animating(&self) -> bool {
        !self.is_static && self.phase != Phase::Holding
    }

    /// Sample the cycle countdown on the polling cadence
    pub fn countdown(&mut self, now: Instant) -> Option<Duration> {
        self.rotation.sample(now)
    }

    pub fn rotation(&self) -> &RotationScheduler {
        &self.rotation
    }

    /// Opacity for fading styles; 1.0 for everything else
    pub fn opacity(&self, now: Instant) -> f64 {
        if self.is_static || self.style != TransitionStyle::Fade {
            return 1.0;
        }
        match self.phase {
            Phase::Entering => progress(self.phase_start, now, self.timings.enter),
            Phase::Holding => 1.0,
            Phase::Exiting => 1.0 - progress(self.phase_start, now, self.timings.exit),
        }
    }

    /// Ghost layers are drawn around the swap of a glitching style
    pub fn is_glitching(&self) -> bool {
        !self.is_static && self.style == TransitionStyle::Glitch && self.phase != Phase::Holding
    }

    /// Time until the next phase boundary
    pub fn next_boundary_in(&self, now: Instant) -> Option<Duration> {
        if self.is_static {
            return None;
        }
        let end = self.phase_start + self.timings.of(self.phase);
        Some(end.saturating_duration_since(now))
    }

    /// Apply a changed reduced-motion preference.
    ///
    /// Reducing freezes on the current item fully resolved. Restoring motion
    /// resumes with a fresh hold of the current item.
    pub fn set_reduced_motion(&mut self, reduced: bool, now: Instant) {
        if reduced {
            if self.is_static {
                return;
            }
            self.rotation.disable();
            self.job = None;
            self.is_static = true;
            self.phase = Phase::Holding;
            self.display = self.current_item().to_string();
            debug!(index = self.rotation.active_index(), "Rotation frozen for reduced motion");
        } else {
            self.rotation.set_reduced_motion(false, now);
            if self.rotation.is_enabled() && self.is_static {
                self.is_static = false;
                self.enter_phase(Phase::Holding, now);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn items(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn controller(list: &[&str], style: TransitionStyle, now: Instant) -> PhaseController {
        PhaseController::with_rng(
            items(list),
            PhaseTimings::new(ms(100), ms(1000), ms(100)),
            style,
            MotionGate::full(),
            now,
            StdRng::seed_from_u64(3),
        )
    }

    #[test]
    fn test_full_cycle_order() {
        let start = Instant::now();
        let mut c = controller(&["A", "B", "C"], TransitionStyle::Fade, start);
        assert_eq!(c.phase(), Phase::Entering);
        assert_eq!(c.display(), "A");

        assert_eq!(c.update(start + ms(99)), None);
        assert_eq!(c.phase(), Phase::Entering);
        c.update(start + ms(100));
        assert_eq!(c.phase(), Phase::Holding);
        c.update(start + ms(1100));
        assert_eq!(c.phase(), Phase::Exiting);
        assert_eq!(c.display(), "A");

        assert_eq!(c.update(start + ms(1200)), Some(1));
        assert_eq!(c.phase(), Phase::Entering);
        assert_eq!(c.display(), "B");
    }

    #[test]
    fn test_late_update_processes_each_boundary() {
        let start = Instant::now();
        let mut c = controller(&["A", "B", "C"], TransitionStyle::Fade, start);
        // two full cycles plus part of an entering phase
        let advanced = c.update(start + ms(2450));
        assert_eq!(advanced, Some(2));
        assert_eq!(c.active_index(), 2);
        assert_eq!(c.phase(), Phase::Entering);
        assert_eq!(c.display(), "C");
    }

    #[test]
    fn test_scramble_style_resolves_and_blanks() {
        let start = Instant::now();
        let mut c = controller(&["HELLO", "WORLD"], TransitionStyle::scramble(), start);
        c.update(start + ms(100));
        assert_eq!(c.display(), "HELLO");

        c.update(start + ms(1150));
        assert_eq!(c.phase(), Phase::Exiting);
        assert_eq!(c.display().chars().count(), 5);

        // the exit scramble ends blank; the next enter starts right away
        c.update(start + ms(1200));
        assert_eq!(c.active_index(), 1);
        c.update(start + ms(1300));
        assert_eq!(c.display(), "WORLD");
    }

    #[test]
    fn test_scramble_runs_inside_phase_window() {
        let start = Instant::now();
        let mut c = PhaseController::with_rng(
            items(&["HELLO", "WORLD"]),
            PhaseTimings::scramble_rotator(ms(4200)),
            TransitionStyle::scramble(),
            MotionGate::full(),
            start,
            StdRng::seed_from_u64(5),
        );

        c.update(start + ms(200));
        assert_ne!(c.display(), "HELLO");
        // the reveal takes 360ms of the 400ms entering window
        c.update(start + ms(370));
        assert_eq!(c.phase(), Phase::Entering);
        assert_eq!(c.display(), "HELLO");

        // exiting starts at 3800 and the scramble-out takes 220 of its 240ms
        c.update(start + ms(3900));
        assert_eq!(c.phase(), Phase::Exiting);
        assert_ne!(c.display(), "     ");
        c.update(start + ms(4025));
        assert_eq!(c.phase(), Phase::Exiting);
        assert_eq!(c.display(), "     ");
    }

    #[test]
    fn test_single_item_is_static() {
        let start = Instant::now();
        let mut c = controller(&["Only"], TransitionStyle::scramble(), start);
        assert!(c.is_static());
        assert_eq!(c.phase(), Phase::Holding);
        for i in 0..20 {
            assert_eq!(c.update(start + ms(500 * i)), None);
        }
        assert_eq!(c.display(), "Only");
        assert_eq!(c.active_index(), 0);
        assert!(c.countdown(start + ms(5000)).is_none());
    }

    #[test]
    fn test_empty_items_render_nothing() {
        let start = Instant::now();
        let mut c = controller(&[], TransitionStyle::Glitch, start);
        assert!(c.is_static());
        assert_eq!(c.update(start + ms(10_000)), None);
        assert_eq!(c.display(), "");
        assert!(c.next_boundary_in(start).is_none());
    }

    #[test]
    fn test_reduced_motion_starts_resolved() {
        let start = Instant::now();
        let mut c = PhaseController::new(
            items(&["Ready?", "Listo?"]),
            PhaseTimings::scramble_rotator(ms(4200)),
            TransitionStyle::scramble(),
            MotionGate::reduced(),
            start,
        );
        assert_eq!(c.display(), "Ready?");
        assert!(c.is_static());
        assert_eq!(c.update(start + ms(60_000)), None);
        assert_eq!(c.display(), "Ready?");
    }

    #[test]
    fn test_runtime_reduced_motion_settles_mid_scramble() {
        let start = Instant::now();
        let mut c = controller(&["HELLO", "WORLD"], TransitionStyle::scramble(), start);
        c.update(start + ms(10));
        c.set_reduced_motion(true, start + ms(10));
        assert_eq!(c.display(), "HELLO");
        assert_eq!(c.update(start + ms(5000)), None);
        assert_eq!(c.display(), "HELLO");

        c.set_reduced_motion(false, start + ms(5000));
        assert_eq!(c.phase(), Phase::Holding);
        assert_eq!(c.update(start + ms(6100)), Some(1));
    }

    #[test]
    fn test_fade_opacity() {
        let start = Instant::now();
        let mut c = controller(&["A", "B"], TransitionStyle::Fade, start);
        assert!((c.opacity(start + ms(50)) - 0.5).abs() < 1e-9);
        c.update(start + ms(500));
        assert!((c.opacity(start + ms(500)) - 1.0).abs() < 1e-9);
        c.update(start + ms(1125));
        assert!((c.opacity(start + ms(1125)) - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_glitch_window_surrounds_swap() {
        let start = Instant::now();
        let timings = PhaseTimings::split(ms(2600), ms(150), ms(170));
        assert_eq!(timings.hold, ms(2280));
        let mut c = PhaseController::with_rng(
            items(&["Fast", "Quiet"]),
            timings,
            TransitionStyle::Glitch,
            MotionGate::full(),
            start,
            StdRng::seed_from_u64(1),
        );
        c.update(start + ms(170));
        assert!(!c.is_glitching());
        c.update(start + ms(2450));
        assert!(c.is_glitching());
        assert_eq!(c.display(), "Fast");
        c.update(start + ms(2600));
        assert!(c.is_glitching());
        assert_eq!(c.display(), "Quiet");
        c.update(start + ms(2770));
        assert!(!c.is_glitching());
    }

    #[test]
    fn test_countdown_spans_whole_cycle() {
        let start = Instant::now();
        let mut c = controller(&["A", "B"], TransitionStyle::Fade, start);
        c.update(start + ms(600));
        assert_eq!(c.countdown(start + ms(600)), Some(ms(600)));
        assert_eq!(c.countdown(start + ms(650)), None);
        assert_eq!(c.rotation().seconds_left(), 1);
        assert!((c.rotation().progress() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_scramble_rotator_timings() {
        let t = PhaseTimings::scramble_rotator(ms(4200));
        assert_eq!(t.hold, ms(3400));
        let t = PhaseTimings::scramble_rotator(ms(1000));
        assert_eq!(t.hold, ms(1200));
    }

    #[test]
    fn test_zero_length_cycle_is_static() {
        let start = Instant::now();
        let c = PhaseController::new(
            items(&["A", "B"]),
            PhaseTimings::new(Duration::ZERO, Duration::ZERO, Duration::ZERO),
            TransitionStyle::Fade,
            MotionGate::full(),
            start,
        );
        assert!(c.is_static());
    }
}
