//! Themes and color resolution

use crate::tokens::{ColorToken, ColorTokens};
use kode_paint::Color;
use rustc_hash::FxHashMap;
use serde::Deserialize;

/// Light or dark appearance
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

/// Resolves semantic color tokens to concrete colors
pub trait ThemeResolver {
    fn resolve_color(&self, token: ColorToken) -> Color;
}

/// A theme: the palette for one color scheme plus runtime overrides
#[derive(Clone, Debug)]
pub struct Theme {
    colors: ColorTokens,
    /// Dynamic color overrides
    color_overrides: FxHashMap<ColorToken, Color>,
}

impl Theme {
    pub fn new(colors: ColorTokens) -> Self {
        Self {
            colors,
            color_overrides: FxHashMap::default(),
        }
    }

    /// Built-in palette for a color scheme
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        let colors = match scheme {
            ColorScheme::Light => ColorTokens::light(),
            ColorScheme::Dark => ColorTokens::dark(),
        };
        Self::new(colors)
    }

    /// Base palette, ignoring overrides
    pub fn colors(&self) -> &ColorTokens {
        &self.colors
    }

    /// Override a single token
    pub fn set_color_override(&mut self, token: ColorToken, color: Color) {
        tracing::debug!(?token, color = %color.to_hex_string(), "theme color override");
        self.color_overrides.insert(token, color);
    }

    /// Drop the override for a token, returning to the palette value
    pub fn clear_color_override(&mut self, token: ColorToken) {
        self.color_overrides.remove(&token);
    }

    /// Clear all overrides
    pub fn clear_overrides(&mut self) {
        self.color_overrides.clear();
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::for_scheme(ColorScheme::default())
    }
}

impl ThemeResolver for Theme {
    fn resolve_color(&self, token: ColorToken) -> Color {
        self.color_overrides
            .get(&token)
            .copied()
            .unwrap_or_else(|| self.colors.get(token))
    }
}
