//! Seam-free looping strips
//!
//! A [`LoopStrip`] renders its items twice in a row and translates the strip
//! linearly by one copy's length per period, then snaps back to zero. Because
//! the second copy is identical to the first the snap is invisible.

use std::time::{Duration, Instant};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::motion::MotionGate;

/// Separator placed between ticker chunks and at the wrap point
pub const TICKER_SEPARATOR: &str = "    •    ";

#[derive(Debug, Clone)]
pub struct LoopStrip<T> {
    items: Vec<T>,
    period: Duration,
    start: Instant,
    gate: MotionGate,
}

impl<T: Clone> LoopStrip<T> {
    pub fn new(items: Vec<T>, period: Duration, gate: MotionGate, start: Instant) -> Self {
        Self {
            items,
            period,
            start,
            gate,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Swap the content without restarting the motion
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
    }

    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// `items ++ items`
    pub fn rendered(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.items.len() * 2);
        out.extend_from_slice(&self.items);
        out.extend_from_slice(&self.items);
        out
    }

    /// Whether the strip moves at all
    pub fn is_running(&self) -> bool {
        self.gate.allows_motion() && !self.items.is_empty() && !self.period.is_zero()
    }

    /// Translation as a fraction of the rendered strip, in `[0, 0.5)`
    pub fn offset_fraction(&self, now: Instant) -> f64 {
        if !self.is_running() {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(self.start).as_nanos();
        let into = elapsed % self.period.as_nanos();
        (into as f64 / self.period.as_nanos() as f64) * 0.5
    }

    /// Translation in whole items, in `[0, items.len())`
    pub fn offset_items(&self, now: Instant) -> usize {
        let len = self.items.len() * 2;
        let offset = (self.offset_fraction(now) * len as f64).floor() as usize;
        // float rounding must never reach the second copy's end
        offset.min(self.items.len().saturating_sub(1))
    }

    /// `n` consecutive items starting at the current offset
    pub fn window(&self, now: Instant, n: usize) -> Vec<T> {
        if self.items.is_empty() {
            return Vec::new();
        }
        let offset = self.offset_items(now);
        self.items
            .iter()
            .cycle()
            .skip(offset)
            .take(n)
            .cloned()
            .collect()
    }

    pub fn set_reduced_motion(&mut self, reduced: bool, now: Instant) {
        if reduced == self.gate.is_reduced() {
            return;
        }
        self.gate = MotionGate::new(reduced);
        if !reduced {
            self.start = now;
        }
    }
}

/// A scrolling line of text built from chunks joined by [`TICKER_SEPARATOR`]
#[derive(Debug, Clone)]
pub struct Marquee {
    strip: LoopStrip<char>,
    refresh: Option<Duration>,
    last_refresh: Instant,
}

impl Marquee {
    pub fn new(chunks: &[String], period: Duration, gate: MotionGate, now: Instant) -> Self {
        Self {
            strip: LoopStrip::new(unit(chunks), period, gate, now),
            refresh: None,
            last_refresh: now,
        }
    }

    /// Ask for new content every `interval`
    pub fn with_refresh(mut self, interval: Duration) -> Self {
        self.refresh = (!interval.is_zero()).then_some(interval);
        self
    }

    /// One copy of the looping text
    pub fn content(&self) -> String {
        self.strip.items().iter().collect()
    }

    pub fn set_chunks(&mut self, chunks: &[String], now: Instant) {
        self.strip.set_items(unit(chunks));
        self.last_refresh = now;
    }

    /// Whether the refresh interval has elapsed since the content last changed
    pub fn refresh_due(&self, now: Instant) -> bool {
        match self.refresh {
            Some(interval) => now.saturating_duration_since(self.last_refresh) >= interval,
            None => false,
        }
    }

    /// `width` characters starting at the current offset
    pub fn visible(&self, now: Instant, width: usize) -> String {
        self.strip.window(now, width).into_iter().collect()
    }

    pub fn strip(&self) -> &LoopStrip<char> {
        &self.strip
    }

    pub fn set_reduced_motion(&mut self, reduced: bool, now: Instant) {
        self.strip.set_reduced_motion(reduced, now);
    }
}

fn unit(chunks: &[String]) -> Vec<char> {
    if chunks.is_empty() {
        return Vec::new();
    }
    let mut text = chunks.join(TICKER_SEPARATOR);
    text.push_str(TICKER_SEPARATOR);
    text.chars().collect()
}

fn hex<R: Rng + ?Sized>(rng: &mut R, n: usize) -> String {
    const DIGITS: &[u8] = b"0123456789ABCDEF";
    (0..n)
        .map(|_| DIGITS[rng.gen_range(0..DIGITS.len())] as char)
        .collect()
}

/// A shuffled row of pseudo status chunks for the security ticker
pub fn ticker_row<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
    let mut row = vec![
        format!("SIG ok:{}", hex(rng, 6)),
        format!("hash:{}{}", hex(rng, 8), hex(rng, 4)),
        "audit:pass".to_string(),
        format!("kdf:{} rounds", hex(rng, 4)),
        format!("region:us-{}", rng.gen_range(1..=3)),
        format!("key-rot:{}h", rng.gen_range(0..24)),
        "rbac:clean".to_string(),
        "enc:tls1.3".to_string(),
        format!("vault:{}", hex(rng, 5)),
    ];
    row.shuffle(rng);
    row
}
