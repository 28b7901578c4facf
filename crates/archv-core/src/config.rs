use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub scramble: ScrambleConfig,
    #[serde(default)]
    pub rotation: RotationConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (preferences live here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// How the reduced-motion preference is decided
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionSetting {
    /// Follow the platform signal (the `REDUCE_MOTION` environment variable)
    #[default]
    Auto,
    /// Always settle immediately
    Reduce,
    /// Always animate
    Full,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MotionConfig {
    #[serde(default)]
    pub reduced_motion: MotionSetting,
}

/// Frame-window randomisation ranges for the scramble engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrambleConfig {
    /// Upper bound (exclusive) of a character's start frame
    #[serde(default = "default_frame_start_max")]
    pub frame_start_max: u32,
    /// Minimum number of frames a character scrambles for
    #[serde(default = "default_frame_length_min")]
    pub frame_length_min: u32,
    /// Random extra frames added on top of the minimum (exclusive bound)
    #[serde(default = "default_frame_length_span")]
    pub frame_length_span: u32,
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self {
            frame_start_max: default_frame_start_max(),
            frame_length_min: default_frame_length_min(),
            frame_length_span: default_frame_length_span(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotationConfig {
    /// Countdown sampling cadence in milliseconds
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval(),
        }
    }
}

/// Easing curve for interpolated transitions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EasingType {
    /// Jump straight to the end value
    None,
    Linear,
    /// Cubic ease-out
    #[default]
    Cubic,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Idle tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Poll rate while any component is animating
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Time for the ticker strip to travel one full copy of its content
    #[serde(default = "default_ticker_period")]
    pub ticker_period_ms: u64,
    /// How often the ticker row content is regenerated
    #[serde(default = "default_ticker_refresh")]
    pub ticker_refresh_ms: u64,
    /// Duration of the navigation stow/expand transition
    #[serde(default = "default_nav_transition")]
    pub nav_transition_ms: u64,
    /// Easing for the navigation transition
    #[serde(default)]
    pub nav_easing: EasingType,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            ticker_period_ms: default_ticker_period(),
            ticker_refresh_ms: default_ticker_refresh(),
            nav_transition_ms: default_nav_transition(),
            nav_easing: EasingType::default(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Theme configuration
/// Can be specified as a simple string (theme name) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name ("light" or "dark")
    pub name: String,
    /// Optional color overrides for semantic tokens
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// Accept either a bare theme name or a table with `name` and `colors`
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string (theme name) or a map with 'name' and optional 'colors'")
            }

            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => name = Some(map.next_value()?),
                        "colors" => colors = Some(map.next_value()?),
                        _ => {
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

fn default_theme_name() -> String {
    "light".to_string()
}

/// Optional color overrides for theme tokens
/// Each color is a hex string (e.g., "#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    pub page_bg: Option<String>,
    pub page_text: Option<String>,
    pub faint: Option<String>,
    pub card: Option<String>,
    pub border: Option<String>,
    pub accent: Option<String>,
    pub cta: Option<String>,
    /// Contact page label band
    pub signal: Option<String>,
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "<C-j>" (Ctrl+j), "<S-Tab>" (Shift+Tab), "<CR>", "<Esc>", "<Space>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    #[serde(default = "default_key_quit")]
    pub quit: String,
    #[serde(default = "default_key_next_page")]
    pub next_page: String,
    #[serde(default = "default_key_prev_page")]
    pub prev_page: String,
    /// Stow or reveal the navigation links
    #[serde(default = "default_key_toggle_nav")]
    pub toggle_nav: String,
    #[serde(default = "default_key_toggle_theme")]
    pub toggle_theme: String,
    /// Flip the reduced-motion preference at runtime
    #[serde(default = "default_key_toggle_motion")]
    pub toggle_motion: String,
    /// Re-run the current page's entrance animations
    #[serde(default = "default_key_replay")]
    pub replay: String,
    #[serde(default = "default_key_login")]
    pub login: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            next_page: default_key_next_page(),
            prev_page: default_key_prev_page(),
            toggle_nav: default_key_toggle_nav(),
            toggle_theme: default_key_toggle_theme(),
            toggle_motion: default_key_toggle_motion(),
            replay: default_key_replay(),
            login: default_key_login(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_next_page() -> String { "l".to_string() }
fn default_key_prev_page() -> String { "h".to_string() }
fn default_key_toggle_nav() -> String { "s".to_string() }
fn default_key_toggle_theme() -> String { "t".to_string() }
fn default_key_toggle_motion() -> String { "m".to_string() }
fn default_key_replay() -> String { "r".to_string() }
fn default_key_login() -> String { "L".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("archv")
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_frame_start_max() -> u32 {
    8
}

fn default_frame_length_min() -> u32 {
    8
}

fn default_frame_length_span() -> u32 {
    10
}

fn default_poll_interval() -> u64 {
    100
}

fn default_tick_rate() -> u64 {
    250
}

fn default_animation_fps() -> u32 {
    60
}

fn default_ticker_period() -> u64 {
    30_000
}

fn default_ticker_refresh() -> u64 {
    8_000
}

fn default_nav_transition() -> u64 {
    400
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from the default location or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file, falling back to defaults if it is missing
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/archv/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("archv")
            .join("config.toml")
    }

    /// Get the preferences file path
    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir().join("preferences.json")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}
