//! Integration tests for the slot input driven through a widget context
//!
//! These tests verify that:
//! - Underlines, glyphs and the caret land where the layout says
//! - Focus and text events restyle the slots
//! - The caret blink loop stops on focus loss and survives rapid refocus
//! - External listeners run after the widget's own handling

use std::sync::{Arc, Mutex};
use std::time::Duration;

use kode_core::{Event, KodeError};
use kode_paint::{Color, FixedAdvanceMeasurer, PaintContext, Rect};
use kode_theme::{Density, Theme};
use kode_widgets::{
    CaretPhase, SelectionAction, SelectionActionHandler, SlotInput, StyleAttributes, Widget,
    WidgetContext,
};

const EPSILON: f32 = 1e-3;
const BLINK: Duration = Duration::from_millis(500);

const LINE: u32 = 0x111111;
const FOCUSED: u32 = 0x222222;
const ACTIVE: u32 = 0x333333;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// 4 slots, 100px wide, no padding, spacing 4: each slot is 22px wide
fn four_slot_input() -> SlotInput {
    let attrs = StyleAttributes::new()
        .max_length(4)
        .line_stroke_width(1.0)
        .focused_line_stroke_width(2.0)
        .line_color("#111111")
        .focused_line_color("#222222")
        .active_slot_line_color("#333333");
    let mut input =
        SlotInput::from_attributes(&attrs, &Theme::default(), Density::default()).unwrap();
    input.set_bounds(Rect::new(0.0, 0.0, 100.0, 40.0));
    input
}

fn paint(input: &SlotInput) -> PaintContext {
    let mut ctx = PaintContext::new();
    input.paint(&mut ctx, &FixedAdvanceMeasurer::default());
    ctx
}

fn advance(ctx: &mut WidgetContext, input: &mut SlotInput, dt: Duration) {
    ctx.advance(dt, |ctx, event| input.handle_event(ctx, &event));
}

#[test]
fn unfocused_content_draws_plain_underlines_and_centered_glyphs() {
    let mut input = four_slot_input();
    let mut ctx = WidgetContext::new();
    let target = input.id().as_u64();
    input.handle_event(&mut ctx, &Event::text_changed(target, "12"));

    let painted = paint(&input);

    let lines: Vec<_> = painted.lines().collect();
    assert_eq!(lines.len(), 4, "no caret while unfocused");
    for (from, to, style) in &lines {
        assert_eq!(style.color, Color::from_rgb_hex(LINE));
        assert_eq!(style.width, 1.0);
        assert!(approx(from.y, 40.0) && approx(to.y, 40.0));
    }

    let glyphs: Vec<_> = painted.texts().collect();
    assert_eq!(glyphs.len(), 2);
    // advance = 0.6 * 16 = 9.6, slot centers at 11 and 37
    assert_eq!(glyphs[0].0, "1");
    assert!(approx(glyphs[0].1.x, 11.0 - 4.8));
    assert_eq!(glyphs[1].0, "2");
    assert!(approx(glyphs[1].1.x, 37.0 - 4.8));
    // baseline = underline - stroke - descent (0.2 * 16)
    assert!(approx(glyphs[0].1.y, 40.0 - 1.0 - 3.2));
}

#[test]
fn focused_visible_caret_marks_the_active_slot() {
    let mut input = four_slot_input();
    let mut ctx = WidgetContext::new();
    let target = input.id().as_u64();
    input.handle_event(&mut ctx, &Event::text_changed(target, "12"));
    input.handle_event(&mut ctx, &Event::focus_changed(target, true));
    assert_eq!(input.caret_phase(), CaretPhase::Invisible);

    advance(&mut ctx, &mut input, BLINK);
    assert_eq!(input.caret_phase(), CaretPhase::Visible);

    let painted = paint(&input);
    let lines: Vec<_> = painted.lines().collect();
    assert_eq!(lines.len(), 5);

    for (index, (_, _, style)) in lines.iter().take(4).enumerate() {
        let expected = if index == 2 { ACTIVE } else { FOCUSED };
        assert_eq!(style.color, Color::from_rgb_hex(expected), "slot {index}");
        assert_eq!(style.width, 2.0);
    }

    let (from, to, style) = lines[4];
    assert!(approx(from.x, 63.0) && approx(to.x, 63.0), "caret centered in slot 2");
    // starts just above the 2px focused underline
    assert!(approx(from.y, 38.0));
    // baseline 35.8 minus ascent 12.8
    assert!(approx(to.y, 23.0));
    assert_eq!(style.color, Color::from_rgb_hex(ACTIVE));
    assert_eq!(style.width, 2.0);
}

#[test]
fn caret_toggles_once_per_interval_while_focused() {
    let mut input = four_slot_input();
    let mut ctx = WidgetContext::new();
    let target = input.id().as_u64();
    input.handle_event(&mut ctx, &Event::focus_changed(target, true));
    ctx.take_dirty();

    let mut phases = Vec::new();
    for _ in 0..4 {
        advance(&mut ctx, &mut input, BLINK);
        assert_eq!(ctx.take_dirty(), vec![input.id()]);
        phases.push(input.caret_phase());
    }

    assert_eq!(
        phases,
        vec![
            CaretPhase::Visible,
            CaretPhase::Invisible,
            CaretPhase::Visible,
            CaretPhase::Invisible
        ]
    );
    assert_eq!(ctx.scheduler().pending_for(target), 1);
}

#[test]
fn focus_loss_mid_blink_hides_caret_and_stops_ticking() {
    let mut input = four_slot_input();
    let mut ctx = WidgetContext::new();
    let target = input.id().as_u64();
    input.handle_event(&mut ctx, &Event::focus_changed(target, true));
    advance(&mut ctx, &mut input, BLINK);
    assert_eq!(input.caret_phase(), CaretPhase::Visible);

    input.handle_event(&mut ctx, &Event::focus_changed(target, false));
    assert_eq!(input.caret_phase(), CaretPhase::Invisible);
    assert_eq!(ctx.scheduler().pending_for(target), 0);

    let painted = paint(&input);
    assert_eq!(painted.lines().count(), 4);

    ctx.take_dirty();
    advance(&mut ctx, &mut input, BLINK * 4);
    assert_eq!(input.caret_phase(), CaretPhase::Invisible);
    assert!(ctx.take_dirty().is_empty());
}

#[test]
fn rapid_refocus_keeps_a_single_blink_chain() {
    let mut input = four_slot_input();
    let mut ctx = WidgetContext::new();
    let target = input.id().as_u64();

    input.handle_event(&mut ctx, &Event::focus_changed(target, true));
    advance(&mut ctx, &mut input, Duration::from_millis(200));
    input.handle_event(&mut ctx, &Event::focus_changed(target, false));
    input.handle_event(&mut ctx, &Event::focus_changed(target, true));
    assert_eq!(ctx.scheduler().pending_for(target), 1);

    // A tick from the first episode that slipped through is ignored
    ctx.take_dirty();
    input.handle_event(&mut ctx, &Event::timer(target, 1));
    assert_eq!(input.caret_phase(), CaretPhase::Invisible);
    assert!(ctx.take_dirty().is_empty());

    // The old chain would have fired at 500ms; the new one fires at 700ms
    advance(&mut ctx, &mut input, Duration::from_millis(400));
    assert_eq!(input.caret_phase(), CaretPhase::Invisible);
    advance(&mut ctx, &mut input, Duration::from_millis(100));
    assert_eq!(input.caret_phase(), CaretPhase::Visible);
    advance(&mut ctx, &mut input, BLINK);
    assert_eq!(input.caret_phase(), CaretPhase::Invisible);
}

#[test]
fn full_content_activates_the_last_slot() {
    let mut input = four_slot_input();
    let mut ctx = WidgetContext::new();
    let target = input.id().as_u64();
    input.handle_event(&mut ctx, &Event::text_changed(target, "1234"));
    input.handle_event(&mut ctx, &Event::focus_changed(target, true));

    assert_eq!(input.active_slot(), 3);
    let painted = paint(&input);
    let colors: Vec<Color> = painted.lines().map(|(_, _, style)| style.color).collect();
    assert_eq!(colors[3], Color::from_rgb_hex(ACTIVE));
    assert!(colors[..3].iter().all(|c| *c == Color::from_rgb_hex(FOCUSED)));
}

#[test]
fn click_moves_cursor_to_end_then_calls_listener() {
    let mut input = four_slot_input();
    let mut ctx = WidgetContext::new();
    let target = input.id().as_u64();
    input.handle_event(&mut ctx, &Event::text_changed(target, "123"));
    input.set_cursor(1);
    assert_eq!(input.cursor(), 1);

    let clicks = Arc::new(Mutex::new(Vec::new()));
    let clicks_clone = clicks.clone();
    input.set_on_click(move |event| clicks_clone.lock().unwrap().push(event.timestamp));

    input.handle_event(&mut ctx, &Event::click(target, 3.0, 20.0).at(42));
    assert_eq!(input.cursor(), 3);
    assert_eq!(*clicks.lock().unwrap(), vec![42]);
}

#[test]
fn focus_listener_sees_every_transition() {
    let mut input = four_slot_input();
    let mut ctx = WidgetContext::new();
    let target = input.id().as_u64();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = seen.clone();
    input.set_on_focus_change(move |focused| seen_clone.lock().unwrap().push(focused));

    input.handle_event(&mut ctx, &Event::focus_changed(target, true));
    input.handle_event(&mut ctx, &Event::focus_changed(target, false));
    input.handle_event(&mut ctx, &Event::focus_changed(target, true));

    assert_eq!(*seen.lock().unwrap(), vec![true, false, true]);
    assert!(input.is_focused());
}

#[test]
fn selection_handler_fails_in_any_state() {
    struct Toolbar;
    impl SelectionActionHandler for Toolbar {
        fn on_create(&mut self) -> bool {
            true
        }
        fn on_action(&mut self, _action: SelectionAction) -> bool {
            true
        }
    }

    let mut input = four_slot_input();
    let mut ctx = WidgetContext::new();
    let target = input.id().as_u64();

    let before = input.set_custom_selection_action_handler(Box::new(Toolbar));
    input.handle_event(&mut ctx, &Event::text_changed(target, "99"));
    input.handle_event(&mut ctx, &Event::focus_changed(target, true));
    let after = input.set_custom_selection_action_handler(Box::new(Toolbar));

    for result in [before, after] {
        assert!(matches!(
            result,
            Err(KodeError::UnsupportedOperation(_))
        ));
    }
}

#[test]
fn theme_overrides_feed_default_colors() {
    let mut theme = Theme::default();
    let custom = Color::from_rgb_hex(0x00AA00);
    theme.set_color_override(kode_theme::ColorToken::ControlHighlight, custom);

    let mut input =
        SlotInput::from_attributes(&StyleAttributes::default(), &theme, Density::new(2.0))
            .unwrap();
    input.set_bounds(Rect::new(0.0, 0.0, 200.0, 40.0));

    let painted = paint(&input);
    for (_, _, style) in painted.lines() {
        assert_eq!(style.color, custom);
        assert_eq!(style.width, 2.0);
    }
}
