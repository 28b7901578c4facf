//! Persisted user preferences
//!
//! Two scopes live here. The local scope (theme) is loaded once at start-up
//! from `preferences.json` and written back on every change. The session scope
//! (navigation stow flag) survives page switches for the lifetime of the
//! process and is never written to disk.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" | "daylight" => Some(ThemeMode::Light),
            "dark" | "midnight" => Some(ThemeMode::Dark),
            _ => None,
        }
    }
}

/// On-disk shape of the local scope
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct LocalPreferences {
    #[serde(default)]
    theme: Option<ThemeMode>,
}

#[derive(Debug, Clone, Default)]
struct SessionPreferences {
    nav_stowed: bool,
}

/// Preferences store passed by reference to the components that need it
#[derive(Debug)]
pub struct PreferencesStore {
    path: Option<PathBuf>,
    local: LocalPreferences,
    session: SessionPreferences,
}

impl PreferencesStore {
    /// Purely in-memory store (nothing is persisted)
    pub fn in_memory() -> Self {
        Self {
            path: None,
            local: LocalPreferences::default(),
            session: SessionPreferences::default(),
        }
    }

    /// Load from disk. A missing file yields defaults; a corrupt one is
    /// logged and replaced by defaults on the next write.
    pub fn load(path: impl Into<PathBuf>) -> crate::Result<Self> {
        let path = path.into();
        let local = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            match serde_json::from_str::<LocalPreferences>(&content) {
                Ok(local) => local,
                Err(e) => {
                    warn!("Ignoring unreadable preferences at {}: {}", path.display(), e);
                    LocalPreferences::default()
                }
            }
        } else {
            debug!("No preferences file at {}, using defaults", path.display());
            LocalPreferences::default()
        };

        Ok(Self {
            path: Some(path),
            local,
            session: SessionPreferences::default(),
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Stored theme, or `fallback` when none has been chosen yet
    pub fn theme_or(&self, fallback: ThemeMode) -> ThemeMode {
        self.local.theme.unwrap_or(fallback)
    }

    pub fn theme(&self) -> Option<ThemeMode> {
        self.local.theme
    }

    pub fn set_theme(&mut self, theme: ThemeMode) -> crate::Result<()> {
        if self.local.theme == Some(theme) {
            return Ok(());
        }
        self.local.theme = Some(theme);
        self.persist()
    }

    pub fn nav_stowed(&self) -> bool {
        self.session.nav_stowed
    }

    pub fn set_nav_stowed(&mut self, stowed: bool) {
        self.session.nav_stowed = stowed;
    }

    fn persist(&self) -> crate::Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.local)?;
        std::fs::write(path, content)?;
        info!("Saved preferences to {}", path.display());
        Ok(())
    }
}
