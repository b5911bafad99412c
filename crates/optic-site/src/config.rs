//! Site configuration
//!
//! Address, output directories and reload port come from the Leptos
//! configuration in the workspace manifest. Everything else is read from the
//! environment.

use optic_core::{CoreResult, Theme};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// JSON theme overriding the built-in one
    pub theme_path: Option<PathBuf>,
    /// Directory served under `/assets`
    pub assets_dir: PathBuf,
}

impl SiteConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            theme_path: lookup("OPTIC_THEME_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            assets_dir: lookup("OPTIC_ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("assets")),
        }
    }

    pub fn load_theme(&self) -> CoreResult<Theme> {
        match &self.theme_path {
            Some(path) => {
                info!(path = %path.display(), "Loading theme");
                Theme::load(path)
            }
            None => Ok(Theme::default()),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SiteConfig::from_lookup(lookup(&[]));
        assert_eq!(config.theme_path, None);
        assert_eq!(config.assets_dir, PathBuf::from("assets"));
        assert_eq!(config.load_theme().unwrap(), Theme::default());
    }

    #[test]
    fn test_overrides() {
        let config = SiteConfig::from_lookup(lookup(&[
            ("OPTIC_THEME_PATH", "/etc/optic/theme.json"),
            ("OPTIC_ASSETS_DIR", "/srv/optic/assets"),
        ]));
        assert_eq!(config.theme_path, Some(PathBuf::from("/etc/optic/theme.json")));
        assert_eq!(config.assets_dir, PathBuf::from("/srv/optic/assets"));
    }

    #[test]
    fn test_blank_theme_path_ignored() {
        let config = SiteConfig::from_lookup(lookup(&[("OPTIC_THEME_PATH", "  ")]));
        assert_eq!(config.theme_path, None);
    }

    #[test]
    fn test_missing_theme_file_is_error() {
        let config = SiteConfig::from_lookup(lookup(&[(
            "OPTIC_THEME_PATH",
            "/nonexistent/optic-theme.json",
        )]));
        assert!(config.load_theme().is_err());
    }
}
