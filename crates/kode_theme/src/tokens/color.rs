//! Color tokens for theming

use kode_paint::Color;
use serde::Deserialize;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorToken {
    // Brand colors
    Primary,
    PrimaryDark,
    Accent,

    // Control states
    ControlNormal,
    ControlHighlight,
    ControlActivated,

    // Text colors
    TextPrimary,
    TextSecondary,

    // Surface
    Background,
}

impl ColorToken {
    pub const ALL: [ColorToken; 9] = [
        ColorToken::Primary,
        ColorToken::PrimaryDark,
        ColorToken::Accent,
        ColorToken::ControlNormal,
        ColorToken::ControlHighlight,
        ColorToken::ControlActivated,
        ColorToken::TextPrimary,
        ColorToken::TextSecondary,
        ColorToken::Background,
    ];
}

/// Complete set of semantic color tokens
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTokens {
    pub primary: Color,
    pub primary_dark: Color,
    pub accent: Color,
    pub control_normal: Color,
    pub control_highlight: Color,
    pub control_activated: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub background: Color,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Primary => self.primary,
            ColorToken::PrimaryDark => self.primary_dark,
            ColorToken::Accent => self.accent,
            ColorToken::ControlNormal => self.control_normal,
            ColorToken::ControlHighlight => self.control_highlight,
            ColorToken::ControlActivated => self.control_activated,
            ColorToken::TextPrimary => self.text_primary,
            ColorToken::TextSecondary => self.text_secondary,
            ColorToken::Background => self.background,
        }
    }

    /// Light palette
    pub fn light() -> Self {
        let accent = Color::from_rgb_hex(0xFF4081);
        Self {
            primary: Color::from_rgb_hex(0x3F51B5),
            primary_dark: Color::from_rgb_hex(0x303F9F),
            accent,
            control_normal: Color::from_rgba8(0, 0, 0, 0x8A),
            control_highlight: Color::from_rgba8(0, 0, 0, 0x1F),
            control_activated: accent,
            text_primary: Color::from_rgba8(0, 0, 0, 0xDE),
            text_secondary: Color::from_rgba8(0, 0, 0, 0x8A),
            background: Color::from_rgb_hex(0xFAFAFA),
        }
    }

    /// Dark palette
    pub fn dark() -> Self {
        let accent = Color::from_rgb_hex(0xFF80AB);
        Self {
            primary: Color::from_rgb_hex(0x7986CB),
            primary_dark: Color::from_rgb_hex(0x5C6BC0),
            accent,
            control_normal: Color::from_rgba8(0xFF, 0xFF, 0xFF, 0xB3),
            control_highlight: Color::from_rgba8(0xFF, 0xFF, 0xFF, 0x33),
            control_activated: accent,
            text_primary: Color::WHITE,
            text_secondary: Color::from_rgba8(0xFF, 0xFF, 0xFF, 0xB3),
            background: Color::from_rgb_hex(0x303030),
        }
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self::light()
    }
}
