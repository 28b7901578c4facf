//! Fixed-cadence frame cycling for small status indicators

use std::time::{Duration, Instant};

use super::rotation::{RotationScheduler, DEFAULT_POLL_INTERVAL};
use crate::motion::MotionGate;

/// Classic line spinner
pub const LINE_FRAMES: &[&str] = &["-", "\\", "|", "/"];

/// Steps through its frames on a timer; pinned to the first frame when
/// motion is reduced
#[derive(Debug, Clone)]
pub struct Spinner {
    frames: &'static [&'static str],
    rotation: RotationScheduler,
}

impl Spinner {
    pub fn new(
        frames: &'static [&'static str],
        interval: Duration,
        gate: MotionGate,
        start: Instant,
    ) -> Self {
        Self {
            frames,
            rotation: RotationScheduler::new(
                frames.len(),
                interval,
                DEFAULT_POLL_INTERVAL,
                gate,
                start,
            ),
        }
    }

    /// Line spinner stepping every 250ms
    pub fn line(gate: MotionGate, start: Instant) -> Self {
        Self::new(LINE_FRAMES, Duration::from_millis(250), gate, start)
    }

    /// Step to the frame due at `now`. Returns true if it changed.
    pub fn update(&mut self, now: Instant) -> bool {
        self.rotation.update(now)
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.rotation.active_index()
    }

    pub fn frame(&self) -> &'static str {
        self.frames.get(self.index()).copied().unwrap_or("")
    }

    /// Reducing freezes on the current frame; restoring steps again from `now`
    pub fn set_reduced_motion(&mut self, reduced: bool, now: Instant) {
        self.rotation.set_reduced_motion(reduced, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_steps_every_interval() {
        let start = Instant::now();
        let mut spinner = Spinner::line(MotionGate::full(), start);
        assert!(!spinner.update(start + ms(249)));
        assert_eq!(spinner.frame(), "-");

        let mut frames = Vec::new();
        for i in 1..=5 {
            assert!(spinner.update(start + ms(250 * i)));
            frames.push(spinner.frame());
        }
        assert_eq!(frames, vec!["\\", "|", "/", "-", "\\"]);
    }

    #[test]
    fn test_late_update_lands_on_the_due_frame() {
        let start = Instant::now();
        let mut spinner = Spinner::line(MotionGate::full(), start);
        spinner.update(start + ms(760));
        assert_eq!(spinner.frame(), "/");
    }

    #[test]
    fn test_frozen_under_reduced_motion() {
        let start = Instant::now();
        let mut spinner = Spinner::line(MotionGate::reduced(), start);
        assert!(!spinner.update(start + ms(750)));
        assert_eq!(spinner.frame(), "-");

        spinner.set_reduced_motion(false, start + ms(1000));
        spinner.update(start + ms(1250));
        assert_eq!(spinner.frame(), "\\");
    }

    #[test]
    fn test_empty_frames() {
        let start = Instant::now();
        let mut spinner = Spinner::new(&[], ms(100), MotionGate::full(), start);
        assert!(!spinner.update(start + ms(500)));
        assert_eq!(spinner.frame(), "");
    }
}
