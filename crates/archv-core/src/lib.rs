pub mod config;
pub mod error;
pub mod kinetic;
pub mod motion;
pub mod prefs;

pub use config::{AppConfig, EasingType, MotionSetting};
pub use error::{Error, Result};
pub use motion::MotionGate;
pub use prefs::{PreferencesStore, ThemeMode};
