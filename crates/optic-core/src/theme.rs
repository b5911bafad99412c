//! Theme configuration
//!
//! Font stack and the two named colors the page is drawn with. The default
//! matches `tailwind.config.js`; a JSON file can override it at server
//! start-up.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{CoreError, CoreResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub black: String,
    pub white: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            black: "#000000".to_string(),
            white: "#FFFFFF".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub font_family: Vec<String>,
    pub colors: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            font_family: vec!["Inter".to_string(), "sans-serif".to_string()],
            colors: Palette::default(),
        }
    }
}

impl Theme {
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let theme: Theme = serde_json::from_str(json)?;
        theme.validate()?;
        Ok(theme)
    }

    pub fn load(path: &Path) -> CoreResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.font_family.iter().all(|f| f.trim().is_empty()) {
            return Err(CoreError::Config("font_family must name at least one font".into()));
        }
        for (name, value) in [("black", &self.colors.black), ("white", &self.colors.white)] {
            if !is_hex_color(value) {
                return Err(CoreError::Config(format!(
                    "color {} is not a hex color: {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// CSS font stack, quoting names that contain spaces
    pub fn font_stack(&self) -> String {
        self.font_family
            .iter()
            .map(|f| f.trim())
            .filter(|f| !f.is_empty())
            .map(|f| {
                if f.contains(' ') {
                    format!("\"{}\"", f)
                } else {
                    f.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Stylesheet exposing the theme as custom properties. Colors are
    /// emitted as space-separated RGB channels so Tailwind opacity modifiers
    /// (`text-white/90`) keep working.
    pub fn css_variables(&self) -> String {
        format!(
            ":root{{--color-black:{};--color-white:{};--font-sans:{};}}",
            rgb_channels(&self.colors.black).unwrap_or_else(|| "0 0 0".to_string()),
            rgb_channels(&self.colors.white).unwrap_or_else(|| "255 255 255".to_string()),
            self.font_stack()
        )
    }
}

fn is_hex_color(value: &str) -> bool {
    rgb_channels(value).is_some()
}

/// `#RGB` / `#RRGGBB` to `"r g b"`
fn rgb_channels(value: &str) -> Option<String> {
    let hex = value.strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return None,
    };
    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    Some(format!("{} {} {}", channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = Theme::default();
        assert_eq!(theme.font_stack(), "Inter, sans-serif");
        assert_eq!(theme.colors.black, "#000000");
        assert_eq!(theme.colors.white, "#FFFFFF");
        assert!(theme.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let theme = Theme::from_json(r#"{"font_family": ["Space Grotesk", "sans-serif"]}"#).unwrap();
        assert_eq!(theme.font_stack(), "\"Space Grotesk\", sans-serif");
        assert_eq!(theme.colors, Palette::default());
    }

    #[test]
    fn test_invalid_color_rejected() {
        let err = Theme::from_json(r##"{"colors": {"black": "black", "white": "#fff"}}"##).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn test_empty_font_family_rejected() {
        let err = Theme::from_json(r#"{"font_family": []}"#).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn test_css_variables() {
        let css = Theme::default().css_variables();
        assert!(css.contains("--color-black:0 0 0;"));
        assert!(css.contains("--color-white:255 255 255;"));
        assert!(css.contains("--font-sans:Inter, sans-serif;"));
    }

    #[test]
    fn test_rgb_channels() {
        assert_eq!(rgb_channels("#fff").as_deref(), Some("255 255 255"));
        assert_eq!(rgb_channels("#1A2b3C").as_deref(), Some("26 43 60"));
        assert_eq!(rgb_channels("#12345").as_deref(), None);
        assert_eq!(rgb_channels("000000").as_deref(), None);
        assert_eq!(rgb_channels("#gggggg").as_deref(), None);
    }

    #[test]
    fn test_missing_file() {
        let err = Theme::load(Path::new("/nonexistent/optic-theme.json")).unwrap_err();
        assert!(matches!(err, CoreError::Io(_)));
    }
}
