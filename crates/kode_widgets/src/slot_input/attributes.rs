//! Styling input for the slot input
//!
//! Every attribute is optional; anything left unset falls back to a
//! default or a theme color when the config is resolved. Dimensions are in
//! density-independent units.

use kode_core::{KodeError, Result};
use serde::Deserialize;

/// Raw styling attributes, as read from a style sheet
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct StyleAttributes {
    /// Unfocused underline thickness
    pub line_stroke_width: Option<f32>,
    /// Underline thickness while focused, also used for the caret
    pub focused_line_stroke_width: Option<f32>,
    /// Number of slots
    pub max_length: Option<i64>,
    /// Unfocused underline color
    pub line_color: Option<String>,
    /// Focused, non-active underline color
    pub focused_line_color: Option<String>,
    /// Active slot underline and caret color
    pub active_slot_line_color: Option<String>,
    /// Gap between adjacent slots
    pub slot_spacing: Option<f32>,
    pub text_size: Option<f32>,
    pub text_color: Option<String>,
    pub caret_blink_interval_ms: Option<u64>,
}

impl StyleAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse attributes from a TOML table
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|err| KodeError::AttributeParse(err.to_string()))
    }

    pub fn line_stroke_width(mut self, dp: f32) -> Self {
        self.line_stroke_width = Some(dp);
        self
    }

    pub fn focused_line_stroke_width(mut self, dp: f32) -> Self {
        self.focused_line_stroke_width = Some(dp);
        self
    }

    pub fn max_length(mut self, slots: i64) -> Self {
        self.max_length = Some(slots);
        self
    }

    pub fn line_color(mut self, hex: impl Into<String>) -> Self {
        self.line_color = Some(hex.into());
        self
    }

    pub fn focused_line_color(mut self, hex: impl Into<String>) -> Self {
        self.focused_line_color = Some(hex.into());
        self
    }

    pub fn active_slot_line_color(mut self, hex: impl Into<String>) -> Self {
        self.active_slot_line_color = Some(hex.into());
        self
    }

    pub fn slot_spacing(mut self, dp: f32) -> Self {
        self.slot_spacing = Some(dp);
        self
    }

    pub fn text_size(mut self, dp: f32) -> Self {
        self.text_size = Some(dp);
        self
    }

    pub fn text_color(mut self, hex: impl Into<String>) -> Self {
        self.text_color = Some(hex.into());
        self
    }

    pub fn caret_blink_interval_ms(mut self, ms: u64) -> Self {
        self.caret_blink_interval_ms = Some(ms);
        self
    }
}
