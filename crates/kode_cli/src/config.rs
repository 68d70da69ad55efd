//! Kode configuration file handling

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use kode_paint::Color;
use kode_theme::{ColorScheme, ColorToken, Density, Theme};
use kode_widgets::StyleAttributes;
use serde::Deserialize;

/// Top-level configuration file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KodeConfig {
    /// Slot input styling
    #[serde(default)]
    pub style: StyleAttributes,
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Theme selection
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ThemeConfig {
    #[serde(default)]
    pub scheme: ColorScheme,
    #[serde(default)]
    pub density: Density,
    /// Per-token color overrides, e.g. `control-highlight = "#00AA00"`
    #[serde(default)]
    pub overrides: HashMap<ColorToken, String>,
}

impl ThemeConfig {
    /// Build the theme, applying overrides on top of the scheme palette
    pub fn build(&self) -> Result<Theme> {
        let mut theme = Theme::for_scheme(self.scheme);
        for (token, hex) in &self.overrides {
            let color = Color::parse_hex(hex)
                .with_context(|| format!("Invalid color {hex:?} for {token:?}"))?;
            theme.set_color_override(*token, color);
        }
        Ok(theme)
    }
}

impl KodeConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!("No config file found at {}", path.display());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: KodeConfig = toml::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kode_theme::ThemeResolver;

    #[test]
    fn empty_file_uses_defaults() {
        let config = KodeConfig::from_toml_str("").unwrap();
        assert_eq!(config.style, StyleAttributes::default());
        assert_eq!(config.theme.scheme, ColorScheme::Light);
        assert_eq!(config.theme.density, Density::default());
    }

    #[test]
    fn parses_style_and_theme_tables() {
        let config = KodeConfig::from_toml_str(
            r##"
            [style]
            max-length = 6
            slot-spacing = 8.0

            [theme]
            scheme = "dark"
            density = 2.0

            [theme.overrides]
            primary-dark = "#00AA00"
            "##,
        )
        .unwrap();

        assert_eq!(config.style.max_length, Some(6));
        assert_eq!(config.theme.scheme, ColorScheme::Dark);
        assert_eq!(config.theme.density, Density::new(2.0));

        let theme = config.theme.build().unwrap();
        assert_eq!(
            theme.resolve_color(ColorToken::PrimaryDark),
            Color::from_rgb_hex(0x00AA00)
        );
    }

    #[test]
    fn bad_override_color_is_reported() {
        let config =
            KodeConfig::from_toml_str("[theme.overrides]\naccent = \"pink\"").unwrap();
        assert!(config.theme.build().is_err());
    }

    #[test]
    fn unknown_override_token_fails_to_parse() {
        let err = KodeConfig::from_toml_str("[theme.overrides]\nsurface = \"#000000\"")
            .unwrap_err();
        assert!(err.to_string().contains("surface"), "{err}");
    }

    #[test]
    fn unknown_sections_are_rejected() {
        assert!(KodeConfig::from_toml_str("[layout]\nwidth = 3").is_err());
    }
}
