//! Slot input widget
//!
//! A single-line text input drawn as a fixed row of underlined slots, one
//! per character. The host owns the real text field (IME, key handling)
//! and feeds the widget events; the widget owns layout, underline styling
//! and the blinking caret.
//!
//! Event handling follows one rule: internal logic runs first, then the
//! event is forwarded to the zero-or-one external listener registered for
//! its type.
//!
//! ```rust
//! use kode_core::Event;
//! use kode_paint::{FixedAdvanceMeasurer, Insets, PaintContext, Rect};
//! use kode_theme::{Density, Theme};
//! use kode_widgets::{SlotInput, StyleAttributes, Widget, WidgetContext};
//!
//! let attrs = StyleAttributes::new().max_length(6);
//! let mut input = SlotInput::from_attributes(&attrs, &Theme::default(), Density::default())?;
//! input.set_bounds(Rect::new(0.0, 0.0, 240.0, 48.0));
//! input.set_padding(Insets::uniform(4.0));
//!
//! let mut ctx = WidgetContext::new();
//! let target = input.id().as_u64();
//! input.handle_event(&mut ctx, &Event::text_changed(target, "42"));
//!
//! let mut paint = PaintContext::new();
//! input.paint(&mut paint, &FixedAdvanceMeasurer::default());
//! assert_eq!(paint.lines().count(), 6);
//! assert_eq!(paint.texts().count(), 2);
//! # Ok::<(), kode_core::KodeError>(())
//! ```

mod attributes;
pub mod caret;
mod config;
pub mod layout;
pub mod style;

pub use attributes::StyleAttributes;
pub use caret::{CaretPhase, TickOutcome};
pub use config::{
    SlotInputConfig, DEFAULT_CARET_BLINK_MS, DEFAULT_LINE_STROKE_DP, DEFAULT_MAX_LENGTH,
    DEFAULT_SLOT_SPACING_DP, DEFAULT_TEXT_SIZE_DP,
};

use kode_core::events::{event_types, EventData};
use kode_core::{Event, KodeError, ListenerRegistry, Result};
use kode_paint::{DrawContext, Insets, Point, Rect, TextMeasurer};
use kode_theme::{Density, ThemeResolver};

use crate::context::WidgetContext;
use crate::widget::{Widget, WidgetId};

use caret::CaretBlink;
use layout::{active_slot_index, SlotLayout};
use style::{caret_style, underline_style};

/// Host text-selection actions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionAction {
    Cut,
    Copy,
    Paste,
    SelectAll,
}

/// Custom handler for the host's text-selection toolbar
pub trait SelectionActionHandler {
    /// Called when the selection toolbar is about to appear; return `false`
    /// to suppress it.
    fn on_create(&mut self) -> bool;

    /// Called when an action is picked; return `true` if handled.
    fn on_action(&mut self, action: SelectionAction) -> bool;
}

/// Segmented fixed-length text input
pub struct SlotInput {
    id: WidgetId,
    config: SlotInputConfig,
    bounds: Rect,
    padding: Insets,
    text: String,
    /// Insertion point, as a char index into `text`
    cursor: usize,
    focused: bool,
    caret: CaretBlink,
    listeners: ListenerRegistry,
}

impl SlotInput {
    /// Create a slot input from a resolved config
    pub fn new(config: SlotInputConfig) -> Result<Self> {
        config.validate()?;
        let caret = CaretBlink::new(config.caret_blink_interval);
        Ok(Self {
            id: WidgetId::next(),
            config,
            bounds: Rect::default(),
            padding: Insets::ZERO,
            text: String::new(),
            cursor: 0,
            focused: false,
            caret,
            listeners: ListenerRegistry::new(),
        })
    }

    /// Resolve styling input against a theme and create the widget
    pub fn from_attributes(
        attrs: &StyleAttributes,
        theme: &dyn ThemeResolver,
        density: Density,
    ) -> Result<Self> {
        Self::new(SlotInputConfig::resolve(attrs, theme, density)?)
    }

    pub fn config(&self) -> &SlotInputConfig {
        &self.config
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn padding(&self) -> Insets {
        self.padding
    }

    pub fn set_padding(&mut self, padding: Insets) {
        self.padding = padding;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Insertion point as a char index
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Mirror an insertion point move made by the host field, clamped to
    /// the content length
    pub fn set_cursor(&mut self, index: usize) {
        self.cursor = index.min(self.text.chars().count());
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn caret_phase(&self) -> CaretPhase {
        self.caret.phase()
    }

    /// Slot the next character goes into
    pub fn active_slot(&self) -> usize {
        active_slot_index(self.text.chars().count(), self.config.slot_count)
    }

    /// Register the external click listener, replacing any previous one.
    ///
    /// It runs after the widget has moved the insertion point to the end.
    pub fn set_on_click<F>(&mut self, listener: F)
    where
        F: FnMut(&Event) + Send + 'static,
    {
        self.listeners.set(event_types::CLICK, listener);
    }

    /// Register the external focus listener, replacing any previous one.
    ///
    /// It runs after the widget has started or stopped the caret.
    pub fn set_on_focus_change<F>(&mut self, mut listener: F)
    where
        F: FnMut(bool) + Send + 'static,
    {
        self.listeners
            .set(event_types::FOCUS_CHANGED, move |event: &Event| {
                if let EventData::Focus { focused } = event.data {
                    listener(focused);
                }
            });
    }

    /// Free-form selection does not fit slot rendering; this always fails.
    pub fn set_custom_selection_action_handler(
        &mut self,
        _handler: Box<dyn SelectionActionHandler + Send>,
    ) -> Result<()> {
        tracing::error!(widget = self.id.as_u64(), "custom selection handler rejected");
        Err(KodeError::UnsupportedOperation(
            "custom selection action handler",
        ))
    }

    fn on_click(&mut self, ctx: &mut WidgetContext) {
        self.cursor = self.text.chars().count();
        ctx.mark_dirty(self.id);
    }

    fn on_focus_changed(&mut self, ctx: &mut WidgetContext, focused: bool) {
        tracing::debug!(widget = self.id.as_u64(), focused, "focus changed");
        self.focused = focused;
        if focused {
            self.caret.start(self.id.as_u64(), ctx.scheduler_mut());
        } else {
            self.caret.stop(ctx.scheduler_mut());
        }
        ctx.mark_dirty(self.id);
    }

    fn on_text_changed(&mut self, ctx: &mut WidgetContext, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.cursor = self.text.chars().count();
        ctx.mark_dirty(self.id);
    }

    fn on_timer(&mut self, ctx: &mut WidgetContext, token: u64) {
        let outcome = self
            .caret
            .on_tick(token, self.focused, self.id.as_u64(), ctx.scheduler_mut());
        tracing::trace!(widget = self.id.as_u64(), ?outcome, "caret tick");
        if outcome != TickOutcome::Stale {
            ctx.mark_dirty(self.id);
        }
    }
}

impl Widget for SlotInput {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn paint(&self, ctx: &mut dyn DrawContext, measurer: &dyn TextMeasurer) {
        let config = &self.config;
        let Some(layout) = SlotLayout::compute(
            self.bounds,
            self.padding,
            config.slot_count,
            config.slot_spacing,
        ) else {
            tracing::warn!(
                widget = self.id.as_u64(),
                width = self.bounds.width,
                "slot geometry degenerate, skipping draw"
            );
            return;
        };
        tracing::trace!(
            widget = self.id.as_u64(),
            slot_width = layout.slot_width(),
            "slot layout"
        );

        let active = self.active_slot();
        let underline_y = layout.underline_y();
        for (index, span) in layout.slots().iter().enumerate() {
            let style = underline_style(config, self.focused, index == active);
            ctx.draw_line(
                Point::new(span.start, underline_y),
                Point::new(span.end, underline_y),
                &style,
            );
        }

        let metrics = measurer.metrics(config.text_size);
        let baseline = layout.baseline_y(config.line_stroke_width, metrics.descent);
        let advances = measurer.glyph_advances(&self.text, config.text_size);
        let mut buf = [0u8; 4];
        for (index, (ch, advance)) in self
            .text
            .chars()
            .zip(advances.iter())
            .take(config.slot_count)
            .enumerate()
        {
            ctx.draw_text(
                ch.encode_utf8(&mut buf),
                Point::new(layout.glyph_x(index, *advance), baseline),
                config.text_size,
                config.text_color,
            );
        }

        if self.focused && self.caret.phase() == CaretPhase::Visible {
            let x = layout.slot(active).center();
            ctx.draw_line(
                Point::new(x, underline_y - config.focused_line_stroke_width),
                Point::new(x, baseline - metrics.ascent),
                &caret_style(config),
            );
        }
    }

    fn handle_event(&mut self, ctx: &mut WidgetContext, event: &Event) {
        if event.target != self.id.as_u64() {
            return;
        }

        match &event.data {
            EventData::Pointer { .. } if event.event_type == event_types::CLICK => {
                self.on_click(ctx)
            }
            EventData::Focus { focused } => self.on_focus_changed(ctx, *focused),
            EventData::Text { text } => self.on_text_changed(ctx, text),
            EventData::Timer { token } => {
                // Ticks are internal and never forwarded
                self.on_timer(ctx, *token);
                return;
            }
            _ => {}
        }

        self.listeners.dispatch(event);
    }
}
