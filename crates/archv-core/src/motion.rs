//! Reduced-motion gate
//!
//! A single boolean consulted by every kinetic component at the point where it
//! would otherwise schedule another frame. When it is set, components settle
//! synchronously on their final state instead.

use crate::config::MotionSetting;

/// Environment variable read when the setting is `auto`
pub const REDUCE_MOTION_ENV: &str = "REDUCE_MOTION";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MotionGate {
    reduced: bool,
}

impl MotionGate {
    pub fn new(reduced: bool) -> Self {
        Self { reduced }
    }

    /// Motion allowed
    pub fn full() -> Self {
        Self::new(false)
    }

    /// Motion suppressed
    pub fn reduced() -> Self {
        Self::new(true)
    }

    /// Decide the gate once at start-up from the configured setting
    pub fn resolve(setting: MotionSetting) -> Self {
        match setting {
            MotionSetting::Reduce => Self::reduced(),
            MotionSetting::Full => Self::full(),
            MotionSetting::Auto => {
                let value = std::env::var(REDUCE_MOTION_ENV).ok();
                Self::new(signals_reduced(value.as_deref()))
            }
        }
    }

    #[inline]
    pub fn is_reduced(&self) -> bool {
        self.reduced
    }

    /// Whether recurring frames may be scheduled
    #[inline]
    pub fn allows_motion(&self) -> bool {
        !self.reduced
    }

    pub fn toggled(self) -> Self {
        Self::new(!self.reduced)
    }
}

/// Interpret the platform signal: set, non-empty and not an explicit "off"
fn signals_reduced(value: Option<&str>) -> bool {
    match value.map(str::trim) {
        None | Some("") => false,
        Some(v) => !matches!(v.to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off"),
    }
}
