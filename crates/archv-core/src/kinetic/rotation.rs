//! Rotation scheduler
//!
//! Owns the active index of a rotating list and its repeat timer. The index
//! advances either on the scheduler's own interval (`update`) or when a phase
//! cycle reports completion (`advance`). A countdown is sampled on a fixed
//! polling cadence for progress indicators.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::motion::MotionGate;

/// Default countdown sampling cadence
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub struct RotationScheduler {
    len: usize,
    active_index: usize,
    interval: Duration,
    cycle_start: Instant,
    poll_interval: Duration,
    last_poll: Option<Instant>,
    remaining: Duration,
    enabled: bool,
}

impl RotationScheduler {
    /// Rotation is disabled for fewer than two items, a zero interval, or
    /// under reduced motion.
    pub fn new(
        len: usize,
        interval: Duration,
        poll_interval: Duration,
        gate: MotionGate,
        now: Instant,
    ) -> Self {
        let enabled = len > 1 && !interval.is_zero() && gate.allows_motion();
        Self {
            len,
            active_index: 0,
            interval,
            cycle_start: now,
            poll_interval,
            last_poll: None,
            remaining: interval,
            enabled,
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[inline]
    pub fn cycle_start(&self) -> Instant {
        self.cycle_start
    }

    /// Timer-driven advance: `elapsed >= interval` moves to the next item.
    ///
    /// The new cycle starts at the boundary instant, so late calls don't
    /// accumulate drift. Returns true if the index changed.
    pub fn update(&mut self, now: Instant) -> bool {
        if !self.enabled {
            return false;
        }
        let elapsed = now.saturating_duration_since(self.cycle_start);
        if elapsed < self.interval {
            return false;
        }

        let cycles = (elapsed.as_nanos() / self.interval.as_nanos()) as u32;
        let boundary = self.cycle_start + self.interval * cycles;
        self.active_index = (self.active_index + cycles as usize) % self.len;
        self.restart_cycle(boundary);
        debug!(index = self.active_index, "Rotation advanced on timer");
        true
    }

    /// Externally driven advance (a phase cycle finished at `now`)
    pub fn advance(&mut self, now: Instant) -> bool {
        if !self.enabled {
            return false;
        }
        self.active_index = (self.active_index + 1) % self.len;
        self.restart_cycle(now);
        debug!(index = self.active_index, "Rotation advanced");
        true
    }

    fn restart_cycle(&mut self, at: Instant) {
        self.cycle_start = at;
        self.remaining = self.interval;
        self.last_poll = None;
    }

    /// `max(0, interval - (elapsed mod interval))`
    pub fn remaining_at(&self, now: Instant) -> Duration {
        if !self.enabled {
            return self.interval;
        }
        let elapsed = now.saturating_duration_since(self.cycle_start).as_nanos();
        let into = elapsed % self.interval.as_nanos();
        self.interval.saturating_sub(Duration::from_nanos(into as u64))
    }

    /// Sample the countdown if a poll is due. Returns the new remaining time,
    /// or None between polls and while disabled.
    pub fn sample(&mut self, now: Instant) -> Option<Duration> {
        if !self.enabled {
            return None;
        }
        if let Some(last) = self.last_poll {
            if now.saturating_duration_since(last) < self.poll_interval {
                return None;
            }
        }
        self.last_poll = Some(now);
        let remaining = self.remaining_at(now);
        // never climbs back up within a cycle
        self.remaining = self.remaining.min(remaining);
        Some(self.remaining)
    }

    /// Last sampled remaining time
    #[inline]
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Last sampled remaining fraction in [0, 1]
    pub fn progress(&self) -> f64 {
        if self.interval.is_zero() {
            return 0.0;
        }
        (self.remaining.as_secs_f64() / self.interval.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Whole seconds left, rounded up
    pub fn seconds_left(&self) -> u64 {
        let millis = self.remaining.as_millis() as u64;
        millis.div_ceil(1000)
    }

    /// Time until the next poll is due, for event-loop scheduling
    pub fn next_poll_in(&self, now: Instant) -> Option<Duration> {
        if !self.enabled {
            return None;
        }
        Some(match self.last_poll {
            Some(last) => self.poll_interval.saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        })
    }

    /// Stop rotating; the index freezes and polling ends
    pub fn disable(&mut self) {
        if self.enabled {
            debug!(index = self.active_index, "Rotation disabled");
        }
        self.enabled = false;
        self.remaining = self.interval;
        self.last_poll = None;
    }

    /// Re-enable (if there is anything to rotate), starting a fresh cycle at `now`
    pub fn enable(&mut self, now: Instant) {
        self.enabled = self.len > 1 && !self.interval.is_zero();
        self.restart_cycle(now);
    }

    /// Apply a changed reduced-motion preference
    pub fn set_reduced_motion(&mut self, reduced: bool, now: Instant) {
        if reduced {
            self.disable();
        } else if !self.enabled {
            self.enable(now);
        }
    }
}
