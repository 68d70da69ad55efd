//! Kode CLI - headless slot input renderer
//!
//! Builds a slot input from a TOML style file, replays a short interaction
//! (text, focus, click, elapsed time) and prints the resulting paint
//! commands, one per line.

mod config;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use kode_core::Event;
use kode_paint::{FixedAdvanceMeasurer, Insets, PaintCommand, PaintContext, Rect};
use kode_theme::Density;
use kode_widgets::{SlotInput, Widget, WidgetContext};

use crate::config::KodeConfig;

/// Render a slot input headlessly and print its paint commands
#[derive(Parser, Debug)]
#[command(name = "kode")]
#[command(about = "Render a slot input headlessly and print its paint commands")]
#[command(version)]
struct Args {
    /// Style and theme file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Text content of the field
    #[arg(short, long, default_value = "")]
    text: String,

    /// Give the field focus
    #[arg(long)]
    focus: bool,

    /// Tap the field after setting the text
    #[arg(long)]
    click: bool,

    /// Time to let pass before painting, in milliseconds
    #[arg(long, default_value = "0")]
    advance_ms: u64,

    /// Widget width in pixels
    #[arg(long, default_value = "240")]
    width: f32,

    /// Widget height in pixels
    #[arg(long, default_value = "56")]
    height: f32,

    /// Uniform padding in pixels
    #[arg(long, default_value = "0")]
    padding: f32,

    /// Display density, overriding the config file
    #[arg(long)]
    density: Option<f32>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => KodeConfig::load(path)?,
        None => KodeConfig::default(),
    };
    let theme = config.theme.build()?;
    let density = args.density.map(Density::new).unwrap_or(config.theme.density);

    let mut input = SlotInput::from_attributes(&config.style, &theme, density)
        .context("Invalid slot input style")?;
    input.set_bounds(Rect::new(0.0, 0.0, args.width, args.height));
    input.set_padding(Insets::uniform(args.padding));
    tracing::info!(
        slots = input.config().slot_count,
        width = args.width,
        height = args.height,
        "slot input ready"
    );

    let mut ctx = WidgetContext::new();
    let target = input.id().as_u64();
    input.handle_event(&mut ctx, &Event::text_changed(target, args.text.as_str()));
    if args.focus {
        input.handle_event(&mut ctx, &Event::focus_changed(target, true));
    }
    if args.click {
        input.handle_event(&mut ctx, &Event::click(target, 0.0, 0.0));
    }
    ctx.advance(Duration::from_millis(args.advance_ms), |ctx, event| {
        input.handle_event(ctx, &event)
    });
    tracing::debug!(caret = ?input.caret_phase(), cursor = input.cursor(), "replayed events");

    let mut paint = PaintContext::new();
    input.paint(&mut paint, &FixedAdvanceMeasurer::default());
    for command in paint.commands() {
        println!("{}", describe(command));
    }

    Ok(())
}

fn describe(command: &PaintCommand) -> String {
    match command {
        PaintCommand::Line { from, to, style } => format!(
            "line ({:.2}, {:.2}) -> ({:.2}, {:.2}) width={:.2} color={}",
            from.x,
            from.y,
            to.x,
            to.y,
            style.width,
            style.color.to_hex_string()
        ),
        PaintCommand::Text {
            text,
            origin,
            size,
            color,
        } => format!(
            "text {:?} at ({:.2}, {:.2}) size={:.2} color={}",
            text,
            origin.x,
            origin.y,
            size,
            color.to_hex_string()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kode_paint::{Color, Point, StrokeStyle};

    #[test]
    fn describes_lines_and_text() {
        let line = PaintCommand::Line {
            from: Point::new(0.0, 40.0),
            to: Point::new(22.0, 40.0),
            style: StrokeStyle::new(Color::BLACK, 1.0),
        };
        assert_eq!(
            describe(&line),
            "line (0.00, 40.00) -> (22.00, 40.00) width=1.00 color=#000000FF"
        );

        let text = PaintCommand::Text {
            text: "7".to_string(),
            origin: Point::new(6.2, 35.8),
            size: 16.0,
            color: Color::WHITE,
        };
        assert_eq!(
            describe(&text),
            "text \"7\" at (6.20, 35.80) size=16.00 color=#FFFFFFFF"
        );
    }

    #[test]
    fn args_parse_long_flags() {
        let args = Args::parse_from([
            "kode",
            "--text",
            "12",
            "--focus",
            "--advance-ms",
            "500",
            "--padding",
            "8",
        ]);
        assert_eq!(args.text, "12");
        assert!(args.focus);
        assert_eq!(args.advance_ms, 500);
        assert_eq!(args.padding, 8.0);
        assert!(args.config.is_none());
    }
}
