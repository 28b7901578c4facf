//! Theme registry and loader
//!
//! Two built-in themes (daylight, midnight) with per-token user overrides.

mod daylight;
mod midnight;

use archv_core::config::{ThemeColorOverrides, ThemeConfig};
use archv_core::ThemeMode;
use ratatui::style::Color;
use tracing::warn;

use crate::theme::Theme;

pub fn daylight() -> Theme {
    daylight::default()
}

pub fn midnight() -> Theme {
    midnight::default()
}

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        // Short form: RGB -> RRGGBB
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

/// Mode named by the configuration, defaulting to light
pub fn configured_mode(config: &ThemeConfig) -> ThemeMode {
    ThemeMode::from_name(&config.name).unwrap_or_else(|| {
        warn!("Unknown theme '{}', using light", config.name);
        ThemeMode::Light
    })
}

/// Load the theme for `mode` with the configured overrides applied
pub fn load_theme(mode: ThemeMode, config: &ThemeConfig) -> Theme {
    let base = match mode {
        ThemeMode::Light => daylight::default(),
        ThemeMode::Dark => midnight::default(),
    };
    apply_overrides(base, &config.colors)
}

/// Apply user color overrides to a base theme
fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    let slots: [(&Option<String>, &mut Color); 8] = [
        (&overrides.page_bg, &mut theme.page_bg),
        (&overrides.page_text, &mut theme.page_text),
        (&overrides.faint, &mut theme.faint),
        (&overrides.card, &mut theme.card),
        (&overrides.border, &mut theme.border),
        (&overrides.accent, &mut theme.accent),
        (&overrides.cta, &mut theme.cta),
        (&overrides.signal, &mut theme.signal),
    ];
    for (hex, slot) in slots {
        if let Some(hex) = hex {
            match parse_hex_color(hex) {
                Some(color) => *slot = color,
                None => warn!("Ignoring invalid color override '{}'", hex),
            }
        }
    }
    theme
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color_6digit() {
        let color = parse_hex_color("#ff6a00").unwrap();
        assert!(matches!(color, Color::Rgb(255, 106, 0)));
    }

    #[test]
    fn test_parse_hex_color_3digit() {
        let color = parse_hex_color("#f50").unwrap();
        assert!(matches!(color, Color::Rgb(255, 85, 0)));
    }

    #[test]
    fn test_parse_hex_color_invalid() {
        assert!(parse_hex_color("invalid").is_none());
        assert!(parse_hex_color("#gg0000").is_none());
        assert!(parse_hex_color("é12").is_none());
    }

    #[test]
    fn test_load_theme_default_is_daylight() {
        let config = ThemeConfig::default();
        let theme = load_theme(configured_mode(&config), &config);
        assert_eq!(theme.page_bg, Color::Rgb(0xf7, 0xf7, 0xf8));
    }

    #[test]
    fn test_load_theme_with_override() {
        let config = ThemeConfig {
            name: "dark".to_string(),
            colors: ThemeColorOverrides {
                accent: Some("#ff0000".to_string()),
                border: Some("nope".to_string()),
                ..Default::default()
            },
        };
        let theme = load_theme(configured_mode(&config), &config);
        assert_eq!(theme.accent, Color::Rgb(255, 0, 0));
        assert_eq!(theme.border, midnight().border);
        assert_eq!(theme.page_bg, midnight().page_bg);
    }

    #[test]
    fn test_unknown_name_falls_back_to_light() {
        let config = ThemeConfig {
            name: "sepia".to_string(),
            colors: ThemeColorOverrides::default(),
        };
        assert_eq!(configured_mode(&config), ThemeMode::Light);
    }
}
