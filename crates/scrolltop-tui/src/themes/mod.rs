//! Theme registry and loader
//!
//! Built-in themes by name, with per-color hex overrides from config.

mod dracula;
pub(crate) mod gruvbox;
mod nord;
mod one_dark;

use ratatui::style::Color;
use scrolltop_core::config::{ThemeColorOverrides, ThemeConfig};
use tracing::warn;

use crate::theme::Theme;

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
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
        6 => u32::from_str_radix(hex, 16).ok().map(crate::theme::rgb),
        _ => None,
    }
}

/// Load a theme by name from config
pub fn load_theme(config: &ThemeConfig) -> Theme {
    let base = match config.name.to_lowercase().as_str() {
        "gruvbox-dark" | "gruvbox" => gruvbox::dark(),
        "gruvbox-light" => gruvbox::light(),
        "nord" => nord::default(),
        "dracula" => dracula::default(),
        "one-dark" | "onedark" => one_dark::default(),
        other => {
            warn!("Unknown theme '{}', falling back to gruvbox-dark", other);
            gruvbox::dark()
        }
    };

    apply_overrides(base, &config.colors)
}

/// Apply user color overrides to a base theme
fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    let slots = [
        ("bg0", &overrides.bg0, &mut theme.bg0),
        ("bg1", &overrides.bg1, &mut theme.bg1),
        ("bg2", &overrides.bg2, &mut theme.bg2),
        ("fg0", &overrides.fg0, &mut theme.fg0),
        ("fg1", &overrides.fg1, &mut theme.fg1),
        ("accent", &overrides.accent, &mut theme.accent),
        ("selection", &overrides.selection, &mut theme.selection),
        ("error", &overrides.error, &mut theme.error),
        ("success", &overrides.success, &mut theme.success),
        ("warning", &overrides.warning, &mut theme.warning),
        ("info", &overrides.info, &mut theme.info),
    ];

    for (name, hex, slot) in slots {
        let Some(hex) = hex else {
            continue;
        };
        match parse_hex_color(hex) {
            Some(color) => *slot = color,
            None => warn!("Invalid color '{}' for {}, keeping theme default", hex, name),
        }
    }

    theme
}

/// Get list of available theme names
pub fn available_themes() -> Vec<&'static str> {
    vec!["gruvbox-dark", "gruvbox-light", "nord", "dracula", "one-dark"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color_6digit() {
        let color = parse_hex_color("#ff5500").unwrap();
        assert!(matches!(color, Color::Rgb(255, 85, 0)));
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
        assert!(parse_hex_color("+fffff").is_none());
    }

    #[test]
    fn test_load_theme_default() {
        let theme = load_theme(&ThemeConfig::default());
        assert!(matches!(theme.bg0, Color::Rgb(0x28, 0x28, 0x28)));
    }

    #[test]
    fn test_every_listed_theme_loads() {
        for name in available_themes() {
            let config = ThemeConfig {
                name: name.to_string(),
                ..ThemeConfig::default()
            };
            // Only the explicit gruvbox names may resolve to the fallback palette
            if !name.starts_with("gruvbox") {
                assert_ne!(load_theme(&config), gruvbox::dark(), "{}", name);
            }
        }
    }

    #[test]
    fn test_load_theme_with_override() {
        let config = ThemeConfig {
            name: "nord".to_string(),
            colors: ThemeColorOverrides {
                accent: Some("#ff0000".to_string()),
                info: Some("nonsense".to_string()),
                ..Default::default()
            },
        };
        let theme = load_theme(&config);
        assert!(matches!(theme.accent, Color::Rgb(255, 0, 0)));
        assert_eq!(theme.info, nord::default().info);
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let config = ThemeConfig {
            name: "solarized-neon".to_string(),
            ..ThemeConfig::default()
        };
        assert_eq!(load_theme(&config), gruvbox::dark());
    }
}
