//! Scramble engine
//!
//! A [`ScrambleJob`] advances a string from a scrambled form toward a target,
//! one frame at a time. Two schedules are supported:
//!
//! - frame windows: every character gets its own random `[start, end)` frame
//!   range; it shows the previous character before `start`, random filler
//!   inside the window and the target character from `end` on.
//! - timed: a single `t = elapsed / duration` drives how many leading
//!   characters are revealed; the rest cycle through the alphabet with an
//!   offset that shifts as `t` grows.
//!
//! [`ScrambleText`] is the owner of at most one live job. Starting a new job
//! drops the previous one, so a superseded job can never write display state.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::alphabet::Alphabet;
use super::timing::progress;
use crate::config::ScrambleConfig;
use crate::motion::MotionGate;

/// Randomisation ranges for per-character frame windows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameWindowConfig {
    /// Start frame is drawn from `[0, start_max)`
    pub start_max: u32,
    /// Window length is `length_min + [0, length_span)`
    pub length_min: u32,
    pub length_span: u32,
}

impl Default for FrameWindowConfig {
    fn default() -> Self {
        Self {
            start_max: 8,
            length_min: 8,
            length_span: 10,
        }
    }
}

impl From<&ScrambleConfig> for FrameWindowConfig {
    fn from(config: &ScrambleConfig) -> Self {
        Self {
            start_max: config.frame_start_max,
            length_min: config.frame_length_min,
            length_span: config.frame_length_span,
        }
    }
}

impl FrameWindowConfig {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> (u32, u32) {
        let start = if self.start_max == 0 {
            0
        } else {
            rng.gen_range(0..self.start_max)
        };
        let extra = if self.length_span == 0 {
            0
        } else {
            rng.gen_range(0..self.length_span)
        };
        (start, start + self.length_min + extra)
    }

    /// Upper bound on the frames any job built from this config can take
    pub fn max_frames(&self) -> u32 {
        self.start_max.saturating_sub(1) + self.length_min + self.length_span.saturating_sub(1) + 1
    }
}

/// How a job schedules its reveal
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrambleMode {
    FrameWindow(FrameWindowConfig),
    Timed {
        duration: Duration,
        /// Tuning constant for the shifting filler offset
        shift: u32,
        /// Start resolved and scramble toward a blank line
        reverse: bool,
    },
}

/// Alphabet plus mode, the parameters that distinguish one call site from another
#[derive(Debug, Clone, PartialEq)]
pub struct ScramblePreset {
    pub alphabet: Alphabet,
    pub mode: ScrambleMode,
}

impl ScramblePreset {
    pub fn new(alphabet: Alphabet, mode: ScrambleMode) -> Self {
        Self { alphabet, mode }
    }

    /// Navigation brand: frame windows over the symbol set
    pub fn brand() -> Self {
        Self::new(
            Alphabet::symbols(),
            ScrambleMode::FrameWindow(FrameWindowConfig::default()),
        )
    }

    /// Page headline revealed once on mount
    pub fn headline(duration: Duration, shift: u32) -> Self {
        Self::new(
            Alphabet::glitch(),
            ScrambleMode::Timed {
                duration,
                shift,
                reverse: false,
            },
        )
    }

    /// Decoded-message reveal over the binary set
    pub fn decode(duration: Duration) -> Self {
        Self::new(
            Alphabet::binary(),
            ScrambleMode::Timed {
                duration,
                shift: 50,
                reverse: false,
            },
        )
    }

    /// Replace the frame-window ranges (no effect on timed presets)
    pub fn with_windows(mut self, windows: FrameWindowConfig) -> Self {
        if let ScrambleMode::FrameWindow(_) = self.mode {
            self.mode = ScrambleMode::FrameWindow(windows);
        }
        self
    }
}

#[derive(Debug, Clone)]
struct CharWindow {
    from: Option<char>,
    to: Option<char>,
    start: u32,
    end: u32,
}

impl CharWindow {
    /// Character shown before the window opens. Positions inside the target
    /// always hold exactly one cell so later characters never shift.
    fn leading(&self) -> Option<char> {
        match (self.from, self.to) {
            (_, Some(' ')) => Some(' '),
            (Some(c), _) => Some(c),
            (None, Some(_)) => Some(' '),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Clone)]
enum Schedule {
    Frames {
        windows: Vec<CharWindow>,
        frame: u32,
    },
    Timed {
        target: Vec<char>,
        start: Instant,
        duration: Duration,
        shift: u32,
        reverse: bool,
    },
    Settled,
}

/// One in-flight reveal
#[derive(Debug, Clone)]
pub struct ScrambleJob {
    alphabet: Alphabet,
    schedule: Schedule,
    display: String,
    resolved: String,
}

impl ScrambleJob {
    /// A job that is already resolved to `target`
    pub fn settled(target: &str) -> Self {
        Self {
            alphabet: Alphabet::default(),
            schedule: Schedule::Settled,
            display: target.to_string(),
            resolved: target.to_string(),
        }
    }

    /// Frame-window reveal from `previous` toward `target`
    ///
    /// Pairs characters over the longer of the two strings; positions past
    /// the end of `target` resolve to nothing.
    pub fn frame_window<R: Rng + ?Sized>(
        previous: &str,
        target: &str,
        alphabet: Alphabet,
        windows: FrameWindowConfig,
        rng: &mut R,
    ) -> Self {
        if target.is_empty() || previous == target {
            return Self::settled(target);
        }

        let from: Vec<char> = previous.chars().collect();
        let to: Vec<char> = target.chars().collect();
        let len = from.len().max(to.len());

        let windows: Vec<CharWindow> = (0..len)
            .map(|i| {
                let (start, end) = windows.sample(rng);
                CharWindow {
                    from: from.get(i).copied(),
                    to: to.get(i).copied(),
                    start,
                    end,
                }
            })
            .collect();
        let display = windows.iter().filter_map(CharWindow::leading).collect();

        Self {
            alphabet,
            schedule: Schedule::Frames { windows, frame: 0 },
            display,
            resolved: target.to_string(),
        }
    }

    /// Duration-based reveal starting at `start`
    pub fn timed(
        target: &str,
        alphabet: Alphabet,
        duration: Duration,
        shift: u32,
        reverse: bool,
        start: Instant,
    ) -> Self {
        let resolved = if reverse {
            " ".repeat(target.chars().count())
        } else {
            target.to_string()
        };

        if duration.is_zero() || target.is_empty() {
            if duration.is_zero() {
                debug!("Zero scramble duration, resolving immediately");
            }
            return Self {
                alphabet,
                schedule: Schedule::Settled,
                display: resolved.clone(),
                resolved,
            };
        }

        let mut job = Self {
            alphabet,
            schedule: Schedule::Timed {
                target: target.chars().collect(),
                start,
                duration,
                shift,
                reverse,
            },
            display: String::new(),
            resolved,
        };
        job.display = job.render_timed(0.0);
        job
    }

    /// Build a job for `preset`
    pub fn from_preset<R: Rng + ?Sized>(
        preset: &ScramblePreset,
        previous: &str,
        target: &str,
        now: Instant,
        rng: &mut R,
    ) -> Self {
        match preset.mode {
            ScrambleMode::FrameWindow(windows) => {
                Self::frame_window(previous, target, preset.alphabet.clone(), windows, rng)
            }
            ScrambleMode::Timed {
                duration,
                shift,
                reverse,
            } => Self::timed(target, preset.alphabet.clone(), duration, shift, reverse, now),
        }
    }

    /// Produce the next frame. Returns true while more frames are needed.
    ///
    /// Once resolved, further calls leave the display untouched.
    pub fn advance<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) -> bool {
        match &mut self.schedule {
            Schedule::Settled => false,
            Schedule::Frames { windows, frame } => {
                let mut out = String::with_capacity(windows.len());
                let mut complete = 0;
                for w in windows.iter() {
                    if *frame >= w.end {
                        complete += 1;
                        if let Some(c) = w.to {
                            out.push(c);
                        }
                    } else if w.to == Some(' ') {
                        out.push(' ');
                    } else if *frame >= w.start {
                        out.push(self.alphabet.pick(rng));
                    } else if let Some(c) = w.leading() {
                        out.push(c);
                    }
                }
                *frame += 1;

                if complete == windows.len() {
                    self.display = self.resolved.clone();
                    self.schedule = Schedule::Settled;
                    false
                } else {
                    self.display = out;
                    true
                }
            }
            Schedule::Timed {
                start, duration, ..
            } => {
                let t = progress(*start, now, *duration);
                if t >= 1.0 {
                    self.display = self.resolved.clone();
                    self.schedule = Schedule::Settled;
                    false
                } else {
                    self.display = self.render_timed(t);
                    true
                }
            }
        }
    }

    fn render_timed(&self, t: f64) -> String {
        let Schedule::Timed {
            target,
            shift,
            reverse,
            ..
        } = &self.schedule
        else {
            return self.display.clone();
        };

        let prog = if *reverse { 1.0 - t } else { t };
        let reveal = (prog * target.len() as f64).floor() as usize;
        let offset = ((1.0 - prog) * *shift as f64).floor() as usize;

        target
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                if i < reveal || c == ' ' {
                    c
                } else {
                    self.alphabet.at(i + offset)
                }
            })
            .collect()
    }

    /// Jump straight to the final state
    pub fn settle(&mut self) {
        self.display = self.resolved.clone();
        self.schedule = Schedule::Settled;
    }

    #[inline]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Value the job ends on: the target, or a blank line for reverse jobs
    #[inline]
    pub fn resolved(&self) -> &str {
        &self.resolved
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        matches!(self.schedule, Schedule::Settled)
    }
}

/// A displayed string that owns at most one live [`ScrambleJob`]
#[derive(Debug)]
pub struct ScrambleText {
    preset: ScramblePreset,
    gate: MotionGate,
    job: Option<ScrambleJob>,
    display: String,
    target: String,
    key: Option<String>,
    generation: u64,
    rng: StdRng,
}

impl ScrambleText {
    pub fn new(preset: ScramblePreset, gate: MotionGate) -> Self {
        Self::with_rng(preset, gate, StdRng::from_entropy())
    }

    /// Use a specific RNG (seeded in tests)
    pub fn with_rng(preset: ScramblePreset, gate: MotionGate, rng: StdRng) -> Self {
        Self {
            preset,
            gate,
            job: None,
            display: String::new(),
            target: String::new(),
            key: None,
            generation: 0,
            rng,
        }
    }

    /// Reveal toward `target`, transitioning from whatever is shown now
    ///
    /// Re-revealing the current target is a no-op.
    pub fn reveal(&mut self, target: &str, now: Instant) {
        if target == self.target && (self.job.is_some() || self.display == target) {
            return;
        }
        let previous = self.display.clone();
        self.start(&previous, target, now);
    }

    /// Restart from a fresh scrambled seed, as on a first mount
    pub fn mount(&mut self, target: &str, now: Instant) {
        let seed = self.preset.alphabet.seed(target);
        self.start(&seed, target, now);
    }

    /// Restart when the identity key changes; unchanged keys are ignored
    pub fn restart(&mut self, key: &str, target: &str, now: Instant) {
        if self.key.as_deref() == Some(key) {
            self.reveal(target, now);
            return;
        }
        self.key = Some(key.to_string());
        self.mount(target, now);
    }

    fn start(&mut self, previous: &str, target: &str, now: Instant) {
        self.cancel();
        self.target = target.to_string();

        if self.gate.is_reduced() {
            self.display = target.to_string();
            return;
        }

        let job = ScrambleJob::from_preset(&self.preset, previous, target, now, &mut self.rng);
        self.display = job.display().to_string();
        if !job.is_done() {
            debug!(generation = self.generation, "Starting scramble toward {:?}", target);
            self.job = Some(job);
        }
    }

    /// Advance the live job, if any. Returns true while more frames are needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(job) = self.job.as_mut() else {
            return false;
        };
        let more = job.advance(now, &mut self.rng);
        self.display.clear();
        self.display.push_str(job.display());
        if !more {
            self.job = None;
        }
        more
    }

    /// Drop the live job, leaving the current display in place
    pub fn cancel(&mut self) {
        if self.job.take().is_some() {
            debug!(generation = self.generation, "Cancelled scramble");
        }
        self.generation += 1;
    }

    /// Jump to the resolved state of the live job
    pub fn settle(&mut self) {
        if let Some(mut job) = self.job.take() {
            job.settle();
            self.display = job.display().to_string();
        }
    }

    /// Apply a changed reduced-motion preference; settles immediately when set
    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.gate = MotionGate::new(reduced);
        if reduced {
            self.settle();
        }
    }

    #[inline]
    pub fn display(&self) -> &str {
        &self.display
    }

    #[inline]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[inline]
    pub fn needs_update(&self) -> bool {
        self.job.is_some()
    }

    /// Identifies the live job; bumped whenever a job starts or is cancelled
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn preset(&self) -> &ScramblePreset {
        &self.preset
    }
}
