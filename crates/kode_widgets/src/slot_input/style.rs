//! Underline style resolution

use kode_paint::StrokeStyle;

use super::config::SlotInputConfig;

/// Underline style for one slot.
///
/// | focused | active | width               | color                |
/// |---------|--------|---------------------|----------------------|
/// | no      | any    | line stroke         | line color           |
/// | yes     | no     | focused line stroke | focused line color   |
/// | yes     | yes    | focused line stroke | active slot color    |
pub fn underline_style(config: &SlotInputConfig, focused: bool, is_active: bool) -> StrokeStyle {
    match (focused, is_active) {
        (false, _) => StrokeStyle::new(config.line_color, config.line_stroke_width),
        (true, false) => StrokeStyle::new(config.focused_line_color, config.focused_line_stroke_width),
        (true, true) => StrokeStyle::new(
            config.active_slot_line_color,
            config.focused_line_stroke_width,
        ),
    }
}

/// Caret stroke: the active slot color at the focused stroke width
pub fn caret_style(config: &SlotInputConfig) -> StrokeStyle {
    StrokeStyle::new(config.active_slot_line_color, config.focused_line_stroke_width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot_input::StyleAttributes;
    use kode_paint::Color;
    use kode_theme::{Density, Theme};

    fn config() -> SlotInputConfig {
        let attrs = StyleAttributes::new()
            .line_stroke_width(1.0)
            .focused_line_stroke_width(3.0)
            .line_color("#111111")
            .focused_line_color("#222222")
            .active_slot_line_color("#333333");
        SlotInputConfig::resolve(&attrs, &Theme::default(), Density::default()).unwrap()
    }

    #[test]
    fn all_focus_and_active_combinations() {
        let config = config();
        let line = Color::from_rgb_hex(0x111111);
        let focused = Color::from_rgb_hex(0x222222);
        let active = Color::from_rgb_hex(0x333333);

        let cases = [
            (false, false, line, 1.0),
            (false, true, line, 1.0),
            (true, false, focused, 3.0),
            (true, true, active, 3.0),
        ];
        for (has_focus, is_active, color, width) in cases {
            let style = underline_style(&config, has_focus, is_active);
            assert_eq!(style.color, color, "focused={has_focus} active={is_active}");
            assert_eq!(style.width, width, "focused={has_focus} active={is_active}");
        }
    }

    #[test]
    fn caret_matches_active_underline() {
        let config = config();
        assert_eq!(caret_style(&config), underline_style(&config, true, true));
    }
}
