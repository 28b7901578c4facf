//! Navigation bar state
//!
//! The brand scramble, the stow/expand transition of the link strip and the
//! live clock. Rendering lives in `widgets::nav_bar`.

use std::time::{Duration, Instant};

use archv_core::config::{EasingType, UiConfig};
use archv_core::kinetic::timing::{is_complete, lerp, progress};
use archv_core::kinetic::{FrameWindowConfig, ScramblePreset, ScrambleText};
use archv_core::MotionGate;
use chrono::Timelike;
use rand::rngs::StdRng;
use tracing::debug;

use crate::copy;

/// Restart key for the brand while the links are shown
pub const BRAND_KEY_OUT: &str = "archv-out";
/// Restart key for the brand while the links are stowed
pub const BRAND_KEY_IN: &str = "archv-in";

fn brand_key(stowed: bool) -> &'static str {
    if stowed {
        BRAND_KEY_IN
    } else {
        BRAND_KEY_OUT
    }
}

#[derive(Debug, Clone)]
struct ActiveTransition {
    start: Instant,
    from: f64,
    to: f64,
}

/// Eased transition of the link strip between shown (1.0) and stowed (0.0)
#[derive(Debug, Clone)]
pub struct StowAnimator {
    animation: Option<ActiveTransition>,
    duration: Duration,
    easing: EasingType,
    gate: MotionGate,
    /// Visible fraction of the link strip (always up-to-date)
    current: f64,
}

impl StowAnimator {
    pub fn new(duration: Duration, easing: EasingType, gate: MotionGate, stowed: bool) -> Self {
        Self {
            animation: None,
            duration,
            easing,
            gate,
            current: if stowed { 0.0 } else { 1.0 },
        }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Visible fraction of the link strip in [0, 1]
    #[inline]
    pub fn visible(&self) -> f64 {
        self.current
    }

    /// Start moving toward the stowed or shown state
    ///
    /// Jumps immediately under reduced motion or with a zero duration.
    pub fn set_stowed(&mut self, stowed: bool, now: Instant) {
        let target = if stowed { 0.0 } else { 1.0 };

        if self.gate.is_reduced() || self.duration.is_zero() || self.easing == EasingType::None {
            self.current = target;
            self.animation = None;
            return;
        }

        // Start from current visible position
        if (self.current - target).abs() < f64::EPSILON {
            self.animation = None;
            return;
        }

        self.animation = Some(ActiveTransition {
            start: now,
            from: self.current,
            to: target,
        });
    }

    /// Advance the transition and return the visible fraction
    pub fn update(&mut self, now: Instant) -> f64 {
        if let Some(ref anim) = self.animation {
            if is_complete(anim.start, now, self.duration) {
                self.current = anim.to;
                self.animation = None;
            } else {
                let t = self.easing.ease(progress(anim.start, now, self.duration));
                self.current = lerp(anim.from, anim.to, t);
            }
        }
        self.current
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.gate = MotionGate::new(reduced);
        if reduced {
            if let Some(anim) = self.animation.take() {
                self.current = anim.to;
            }
        }
    }
}

/// Navigation bar: brand scramble plus the stowable link strip
pub struct NavBar {
    brand: ScrambleText,
    stow: StowAnimator,
    stowed: bool,
}

impl NavBar {
    pub fn new(
        ui: &UiConfig,
        windows: FrameWindowConfig,
        gate: MotionGate,
        stowed: bool,
        rng: StdRng,
        now: Instant,
    ) -> Self {
        let mut brand =
            ScrambleText::with_rng(ScramblePreset::brand().with_windows(windows), gate, rng);
        brand.restart(brand_key(stowed), copy::BRAND, now);
        Self {
            brand,
            stow: StowAnimator::new(
                Duration::from_millis(ui.nav_transition_ms),
                ui.nav_easing,
                gate,
                stowed,
            ),
            stowed,
        }
    }

    pub fn brand(&self) -> &str {
        self.brand.display()
    }

    pub fn is_stowed(&self) -> bool {
        self.stowed
    }

    /// Visible fraction of the link strip
    pub fn links_visible(&self) -> f64 {
        self.stow.visible()
    }

    /// Stow or reveal the links; a change re-keys and restarts the brand scramble
    pub fn set_stowed(&mut self, stowed: bool, now: Instant) {
        if stowed == self.stowed {
            return;
        }
        debug!(stowed, "Toggling navigation");
        self.stowed = stowed;
        self.stow.set_stowed(stowed, now);
        self.brand.restart(brand_key(stowed), copy::BRAND, now);
    }

    /// Replay the brand reveal from its seed
    pub fn replay(&mut self, now: Instant) {
        self.brand.mount(copy::BRAND, now);
    }

    /// Advance brand and stow transition. Returns true while either animates.
    pub fn tick(&mut self, now: Instant) -> bool {
        let brand = self.brand.tick(now);
        self.stow.update(now);
        brand || self.stow.is_animating()
    }

    pub fn needs_update(&self) -> bool {
        self.brand.needs_update() || self.stow.is_animating()
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.brand.set_reduced_motion(reduced);
        self.stow.set_reduced_motion(reduced);
    }
}

/// 12-hour clock with seconds and no leading zero on the hour, e.g. `9:05:03 PM`
pub fn format_clock<T: Timelike>(time: &T) -> String {
    let (pm, hour) = time.hour12();
    format!(
        "{}:{:02}:{:02} {}",
        hour,
        time.minute(),
        time.second(),
        if pm { "PM" } else { "AM" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use rand::SeedableRng;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_format_clock() {
        let t = NaiveTime::from_hms_opt(21, 5, 3).unwrap();
        assert_eq!(format_clock(&t), "9:05:03 PM");
        let t = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
        assert_eq!(format_clock(&t), "12:00:00 AM");
        let t = NaiveTime::from_hms_opt(12, 30, 59).unwrap();
        assert_eq!(format_clock(&t), "12:30:59 PM");
        let t = NaiveTime::from_hms_opt(7, 45, 10).unwrap();
        assert_eq!(format_clock(&t), "7:45:10 AM");
    }

    #[test]
    fn test_stow_eases_out() {
        let now = Instant::now();
        let mut stow = StowAnimator::new(ms(400), EasingType::Cubic, MotionGate::full(), false);
        stow.set_stowed(true, now);
        assert!(stow.is_animating());

        let half = stow.update(now + ms(200));
        // 1 - (1 - 0.5)^3 = 0.875 of the way to stowed
        assert!((half - 0.125).abs() < 1e-9);

        assert_eq!(stow.update(now + ms(400)), 0.0);
        assert!(!stow.is_animating());
    }

    #[test]
    fn test_stow_instant_when_reduced() {
        let now = Instant::now();
        let mut stow = StowAnimator::new(ms(400), EasingType::Cubic, MotionGate::reduced(), false);
        stow.set_stowed(true, now);
        assert!(!stow.is_animating());
        assert_eq!(stow.visible(), 0.0);
    }

    #[test]
    fn test_stow_reverses_from_current_position() {
        let now = Instant::now();
        let mut stow = StowAnimator::new(ms(400), EasingType::Linear, MotionGate::full(), false);
        stow.set_stowed(true, now);
        stow.update(now + ms(100));
        stow.set_stowed(false, now + ms(100));
        assert!((stow.update(now + ms(100)) - 0.75).abs() < 1e-9);
        assert_eq!(stow.update(now + ms(500)), 1.0);
    }

    #[test]
    fn test_reducing_mid_transition_settles() {
        let now = Instant::now();
        let mut stow = StowAnimator::new(ms(400), EasingType::Cubic, MotionGate::full(), false);
        stow.set_stowed(true, now);
        stow.update(now + ms(50));
        stow.set_reduced_motion(true);
        assert!(!stow.is_animating());
        assert_eq!(stow.visible(), 0.0);
    }

    #[test]
    fn test_toggle_restarts_brand() {
        let now = Instant::now();
        let mut nav = NavBar::new(
            &UiConfig::default(),
            FrameWindowConfig::default(),
            MotionGate::full(),
            false,
            StdRng::seed_from_u64(7),
            now,
        );
        // Run the initial reveal to completion
        let mut t = now;
        while nav.tick(t) {
            t += ms(16);
        }
        assert_eq!(nav.brand(), "ARCHV");

        nav.set_stowed(true, t);
        assert!(nav.is_stowed());
        assert!(nav.needs_update());
        assert_ne!(nav.brand(), "ARCHV");

        // Setting the same state again does not restart
        let generation_before = nav.brand.generation();
        nav.set_stowed(true, t);
        assert_eq!(nav.brand.generation(), generation_before);
    }

    #[test]
    fn test_reduced_nav_is_static() {
        let now = Instant::now();
        let mut nav = NavBar::new(
            &UiConfig::default(),
            FrameWindowConfig::default(),
            MotionGate::reduced(),
            false,
            StdRng::seed_from_u64(7),
            now,
        );
        assert_eq!(nav.brand(), "ARCHV");
        nav.set_stowed(true, now);
        assert_eq!(nav.brand(), "ARCHV");
        assert_eq!(nav.links_visible(), 0.0);
        assert!(!nav.tick(now));
    }
}
