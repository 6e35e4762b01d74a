// src/ui/style.rs

use std::io::IsTerminal;

use anstyle::{AnsiColor, Effects, Style};

pub const CHECK: &str = "✔";
pub const CROSS: &str = "✖";
pub const MARKER: &str = "│";
pub const FINISH_GLYPH: &str = "🍺";

/// Spinner frames, cycled in order.
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OutputStyle {
    /// No colors and no spinner animation.
    Plain,
    /// Colors, cursor control and an animated spinner.
    Rich,
}

impl OutputStyle {
    /// Rich on a terminal unless `NO_COLOR` is set.
    pub fn detect() -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some();
        if !no_color && std::io::stdout().is_terminal() {
            OutputStyle::Rich
        } else {
            OutputStyle::Plain
        }
    }
}

pub fn success_style() -> Style {
    Style::new()
        .fg_color(Some(AnsiColor::BrightGreen.into()))
        .effects(Effects::BOLD)
}

pub fn error_style() -> Style {
    Style::new()
        .fg_color(Some(AnsiColor::BrightRed.into()))
        .effects(Effects::BOLD)
}

pub fn marker_style() -> Style {
    Style::new().fg_color(Some(AnsiColor::BrightBlue.into()))
}

/// Wrap `text` in `style` when the output is rich.
pub fn paint(output: OutputStyle, style: Style, text: &str) -> String {
    match output {
        OutputStyle::Plain => text.to_string(),
        OutputStyle::Rich => format!("{}{}{}", style.render(), text, style.render_reset()),
    }
}
