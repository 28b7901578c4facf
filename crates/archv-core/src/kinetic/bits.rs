//! Jittering bit matrix
//!
//! Shows a message as rows of its binary encoding, flips a few random bits on
//! a fixed cadence, and dims to a floor opacity after a delay. Under reduced
//! motion it is the plain encoding, already dimmed.

use std::time::{Duration, Instant};

use rand::Rng;
use tracing::debug;

use super::timing::{lerp, progress};
use crate::motion::MotionGate;

/// Encode `text` as `rows` lines of `cols` bits.
///
/// Every UTF-16 unit becomes at least eight binary digits. Lines are cut
/// from the concatenated bits, wrapping to the start once the bits run out,
/// and a short last line is padded with zeros.
pub fn binary_lines(text: &str, cols: usize, rows: usize) -> Vec<Vec<bool>> {
    let bits: Vec<bool> = text
        .encode_utf16()
        .flat_map(|unit| format!("{:08b}", unit).into_bytes())
        .map(|b| b == b'1')
        .collect();

    let mut lines = Vec::with_capacity(rows);
    let mut ptr = 0;
    for _ in 0..rows {
        let mut line: Vec<bool> = bits.iter().skip(ptr).take(cols).copied().collect();
        line.resize(cols, false);
        lines.push(line);
        ptr += cols;
        if ptr >= bits.len() {
            ptr = 0;
        }
    }
    lines
}

#[derive(Debug, Clone)]
pub struct BitMatrix {
    encoded: Vec<Vec<bool>>,
    rows: Vec<Vec<bool>>,
    flips: usize,
    interval: Duration,
    fade_delay: Duration,
    fade_duration: Duration,
    floor: f64,
    start: Instant,
    last_flip: Instant,
    gate: MotionGate,
}

impl BitMatrix {
    pub fn new(text: &str, cols: usize, rows: usize, gate: MotionGate, now: Instant) -> Self {
        let encoded = binary_lines(text, cols, rows);
        Self {
            rows: encoded.clone(),
            encoded,
            flips: 16,
            interval: Duration::from_millis(70),
            fade_delay: Duration::ZERO,
            fade_duration: Duration::ZERO,
            floor: 1.0,
            start: now,
            last_flip: now,
            gate,
        }
    }

    /// Flip `flips` random bits every `interval`
    pub fn with_jitter(mut self, flips: usize, interval: Duration) -> Self {
        self.flips = flips;
        self.interval = interval;
        self
    }

    /// After `delay`, fade to `floor` opacity over `duration`
    pub fn with_fade(mut self, delay: Duration, duration: Duration, floor: f64) -> Self {
        self.fade_delay = delay;
        self.fade_duration = duration;
        self.floor = floor.clamp(0.0, 1.0);
        self
    }

    fn jitters(&self) -> bool {
        self.gate.allows_motion()
            && self.flips > 0
            && !self.interval.is_zero()
            && !self.rows.is_empty()
            && self.rows.iter().any(|row| !row.is_empty())
    }

    /// Flip a batch of bits if one is due. Missed batches are skipped rather
    /// than replayed. Returns true if any bit changed.
    pub fn tick<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) -> bool {
        if !self.jitters() {
            return false;
        }
        let elapsed = now.saturating_duration_since(self.last_flip);
        if elapsed < self.interval {
            return false;
        }
        let steps = (elapsed.as_nanos() / self.interval.as_nanos()) as u32;
        self.last_flip += self.interval * steps;

        let height = self.rows.len();
        for _ in 0..self.flips {
            let r = rng.gen_range(0..height);
            let width = self.rows[r].len();
            if width == 0 {
                continue;
            }
            let c = rng.gen_range(0..width);
            self.rows[r][c] = !self.rows[r][c];
        }
        true
    }

    /// Opacity to draw the matrix at
    pub fn opacity(&self, now: Instant) -> f64 {
        if self.gate.is_reduced() {
            return self.floor;
        }
        let fade_start = self.start + self.fade_delay;
        if now < fade_start {
            return 1.0;
        }
        lerp(1.0, self.floor, progress(fade_start, now, self.fade_duration))
    }

    /// Whether the fade is in progress and needs frame-rate redraws
    pub fn is_fading(&self, now: Instant) -> bool {
        if self.gate.is_reduced() || self.floor >= 1.0 {
            return false;
        }
        let fade_start = self.start + self.fade_delay;
        now >= fade_start && now < fade_start + self.fade_duration
    }

    /// Time until the next batch of flips or the start of the fade
    pub fn next_change_in(&self, now: Instant) -> Option<Duration> {
        let fade_start = self.start + self.fade_delay;
        let fade = (self.gate.allows_motion() && now < fade_start)
            .then(|| fade_start.saturating_duration_since(now));
        let flip = self
            .jitters()
            .then(|| (self.last_flip + self.interval).saturating_duration_since(now));
        match (fade, flip) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Rows rendered as `0`/`1` strings
    pub fn lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|&b| if b { '1' } else { '0' }).collect())
            .collect()
    }

    /// Reducing restores the plain encoding; restoring motion resumes jitter from `now`
    pub fn set_reduced_motion(&mut self, reduced: bool, now: Instant) {
        if reduced == self.gate.is_reduced() {
            return;
        }
        self.gate = MotionGate::new(reduced);
        if reduced {
            self.rows = self.encoded.clone();
            debug!("Bit matrix settled for reduced motion");
        } else {
            self.last_flip = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn matrix(gate: MotionGate, now: Instant) -> BitMatrix {
        BitMatrix::new("We’re interested", 44, 8, gate, now)
            .with_jitter(22, ms(70))
            .with_fade(ms(1400), ms(700), 0.25)
    }

    fn differing(a: &[String], b: &[String]) -> usize {
        a.iter()
            .zip(b)
            .map(|(x, y)| x.chars().zip(y.chars()).filter(|(p, q)| p != q).count())
            .sum()
    }

    #[test]
    fn test_binary_lines_encoding() {
        let lines = binary_lines("A", 10, 2);
        let text: Vec<String> = lines
            .iter()
            .map(|row| row.iter().map(|&b| if b { '1' } else { '0' }).collect())
            .collect();
        // "A" is 01000001; the second line wraps back to the start
        assert_eq!(text, vec!["0100000100", "0100000100"]);
    }

    #[test]
    fn test_wide_units_keep_all_digits() {
        // U+2019 needs 14 binary digits
        let lines = binary_lines("’", 14, 1);
        assert_eq!(lines[0].iter().filter(|&&b| b).count(), 4);
        assert!(lines[0][0]);
    }

    #[test]
    fn test_empty_text_is_zeros() {
        let lines = binary_lines("", 4, 3);
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().flatten().all(|&b| !b));
    }

    #[test]
    fn test_flips_on_cadence() {
        let start = Instant::now();
        let mut rng = StdRng::seed_from_u64(9);
        let mut m = matrix(MotionGate::full(), start);
        let before = m.lines();

        assert!(!m.tick(start + ms(69), &mut rng));
        assert_eq!(m.lines(), before);

        assert!(m.tick(start + ms(70), &mut rng));
        let after = m.lines();
        let changed = differing(&before, &after);
        assert!(changed > 0 && changed <= 22, "{} bits changed", changed);
        assert_eq!(after.len(), 8);
        assert!(after.iter().all(|row| row.len() == 44));

        // a late tick flips one batch and re-aligns to the cadence
        assert!(m.tick(start + ms(500), &mut rng));
        assert_eq!(m.next_change_in(start + ms(500)), Some(ms(60)));
    }

    #[test]
    fn test_fade_to_floor() {
        let start = Instant::now();
        let m = matrix(MotionGate::full(), start);
        assert_eq!(m.opacity(start + ms(1399)), 1.0);
        assert!(!m.is_fading(start + ms(1399)));
        assert!((m.opacity(start + ms(1750)) - 0.625).abs() < 1e-9);
        assert!(m.is_fading(start + ms(1750)));
        assert!((m.opacity(start + ms(5000)) - 0.25).abs() < 1e-9);
        assert!(!m.is_fading(start + ms(5000)));
    }

    #[test]
    fn test_reduced_motion_is_static_and_dim() {
        let start = Instant::now();
        let mut rng = StdRng::seed_from_u64(9);
        let mut m = matrix(MotionGate::reduced(), start);
        let encoded = m.lines();
        for i in 1..20 {
            assert!(!m.tick(start + ms(70 * i), &mut rng));
        }
        assert_eq!(m.lines(), encoded);
        assert_eq!(m.opacity(start), 0.25);
        assert_eq!(m.next_change_in(start), None);
    }

    #[test]
    fn test_runtime_reduce_restores_encoding() {
        let start = Instant::now();
        let mut rng = StdRng::seed_from_u64(10);
        let mut m = matrix(MotionGate::full(), start);
        let encoded = m.lines();
        m.tick(start + ms(70), &mut rng);
        assert_ne!(m.lines(), encoded);

        m.set_reduced_motion(true, start + ms(100));
        assert_eq!(m.lines(), encoded);
        assert_eq!(m.opacity(start + ms(100)), 0.25);

        m.set_reduced_motion(false, start + ms(1000));
        assert!(!m.tick(start + ms(1050), &mut rng));
        assert!(m.tick(start + ms(1070), &mut rng));
    }
}
