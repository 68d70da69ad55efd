//! Resolved, immutable slot input configuration

use std::time::Duration;

use kode_core::{KodeError, Result};
use kode_paint::Color;
use kode_theme::{ColorToken, Density, ThemeResolver};

use super::attributes::StyleAttributes;

pub const DEFAULT_LINE_STROKE_DP: f32 = 1.0;
pub const DEFAULT_MAX_LENGTH: usize = 4;
pub const DEFAULT_SLOT_SPACING_DP: f32 = 4.0;
pub const DEFAULT_TEXT_SIZE_DP: f32 = 16.0;
pub const DEFAULT_CARET_BLINK_MS: u64 = 500;

/// Slot input configuration, in pixels
#[derive(Clone, Debug, PartialEq)]
pub struct SlotInputConfig {
    /// Number of slots (always > 0 once validated)
    pub slot_count: usize,
    pub line_stroke_width: f32,
    pub focused_line_stroke_width: f32,
    pub line_color: Color,
    pub focused_line_color: Color,
    pub active_slot_line_color: Color,
    pub slot_spacing: f32,
    pub text_size: f32,
    pub text_color: Color,
    pub caret_blink_interval: Duration,
}

impl SlotInputConfig {
    /// Build a config from styling input, filling gaps from defaults and the
    /// theme and converting dimensions to pixels.
    pub fn resolve(
        attrs: &StyleAttributes,
        theme: &dyn ThemeResolver,
        density: Density,
    ) -> Result<Self> {
        if !(density.scale() > 0.0) {
            return Err(KodeError::InvalidConfig(format!(
                "density must be positive, got {}",
                density.scale()
            )));
        }

        let slot_count = match attrs.max_length {
            None => DEFAULT_MAX_LENGTH,
            Some(value) if value > 0 => usize::try_from(value).map_err(|_| {
                KodeError::InvalidConfig(format!("max length {value} is out of range"))
            })?,
            Some(value) => {
                return Err(KodeError::InvalidConfig(format!(
                    "max length must be positive, got {value}"
                )))
            }
        };

        let dimension = |value: Option<f32>, default: f32| density.to_px(value.unwrap_or(default));

        let config = Self {
            slot_count,
            line_stroke_width: dimension(attrs.line_stroke_width, DEFAULT_LINE_STROKE_DP),
            focused_line_stroke_width: dimension(
                attrs.focused_line_stroke_width,
                DEFAULT_LINE_STROKE_DP,
            ),
            line_color: color_attr(
                attrs.line_color.as_deref(),
                theme,
                ColorToken::ControlHighlight,
            )?,
            focused_line_color: color_attr(
                attrs.focused_line_color.as_deref(),
                theme,
                ColorToken::PrimaryDark,
            )?,
            active_slot_line_color: color_attr(
                attrs.active_slot_line_color.as_deref(),
                theme,
                ColorToken::ControlActivated,
            )?,
            slot_spacing: dimension(attrs.slot_spacing, DEFAULT_SLOT_SPACING_DP),
            text_size: dimension(attrs.text_size, DEFAULT_TEXT_SIZE_DP),
            text_color: color_attr(attrs.text_color.as_deref(), theme, ColorToken::TextPrimary)?,
            caret_blink_interval: Duration::from_millis(
                attrs.caret_blink_interval_ms.unwrap_or(DEFAULT_CARET_BLINK_MS),
            ),
        };
        config.validate()?;

        tracing::debug!(
            slots = config.slot_count,
            spacing = config.slot_spacing,
            stroke = config.line_stroke_width,
            focused_stroke = config.focused_line_stroke_width,
            "resolved slot input config"
        );
        Ok(config)
    }

    /// Check the invariants drawing relies on
    pub fn validate(&self) -> Result<()> {
        if self.slot_count == 0 {
            return Err(KodeError::InvalidConfig(
                "slot count must be positive".to_string(),
            ));
        }
        positive("line stroke width", self.line_stroke_width)?;
        positive("focused line stroke width", self.focused_line_stroke_width)?;
        positive("text size", self.text_size)?;
        if !(self.slot_spacing >= 0.0) {
            return Err(KodeError::InvalidConfig(format!(
                "slot spacing must not be negative, got {}",
                self.slot_spacing
            )));
        }
        if self.caret_blink_interval.is_zero() {
            return Err(KodeError::InvalidConfig(
                "caret blink interval must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

fn positive(name: &str, value: f32) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(KodeError::InvalidConfig(format!(
            "{name} must be positive, got {value}"
        )))
    }
}

fn color_attr(value: Option<&str>, theme: &dyn ThemeResolver, fallback: ColorToken) -> Result<Color> {
    match value {
        Some(hex) => Color::parse_hex(hex).ok_or_else(|| KodeError::InvalidColor(hex.to_string())),
        None => Ok(theme.resolve_color(fallback)),
    }
}
