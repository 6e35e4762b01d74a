// src/ui/mod.rs

//! Terminal presentation: status lines, the progress spinner and the cursor
//! guard.
//!
//! All user-facing output goes through a [`Console`], which writes to a
//! cloneable [`Output`]. Production uses stdout; tests hand in a buffer.

pub mod cursor;
pub mod spinner;
pub mod style;

use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

pub use cursor::CursorGuard;
pub use spinner::track;
pub use style::OutputStyle;

use style::{
    error_style, marker_style, paint, success_style, CHECK, CROSS, FINISH_GLYPH, MARKER,
    SPINNER_FRAMES,
};

/// Shared, cloneable writer.
#[derive(Clone)]
pub struct Output {
    inner: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl Output {
    pub fn stdout() -> Self {
        Self::from_writer(io::stdout())
    }

    pub fn from_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Box::new(writer))),
        }
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        guard.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        guard.flush()
    }
}

/// Builds a fresh draw target for each spinner.
type DrawTargetFn = Arc<dyn Fn() -> ProgressDrawTarget + Send + Sync>;

/// User-facing output for one run.
#[derive(Clone)]
pub struct Console {
    out: Output,
    style: OutputStyle,
    interval: Duration,
    spinner_target: DrawTargetFn,
}

impl Console {
    /// Console on stdout. The spinner animates only in rich mode.
    pub fn stdout(style: OutputStyle, interval: Duration) -> Self {
        let console = Self::new(Output::stdout(), style, interval);
        match style {
            OutputStyle::Rich => console.with_spinner_target(ProgressDrawTarget::stdout),
            OutputStyle::Plain => console,
        }
    }

    /// Console writing to `out`. Spinners are hidden until
    /// [`with_spinner_target`](Self::with_spinner_target) says otherwise.
    pub fn new(out: Output, style: OutputStyle, interval: Duration) -> Self {
        Self {
            out,
            style,
            interval,
            spinner_target: Arc::new(ProgressDrawTarget::hidden),
        }
    }

    /// Draw every spinner into the target `make` returns.
    ///
    /// Called once per spinner, since a draw target belongs to one bar.
    pub fn with_spinner_target<F>(mut self, make: F) -> Self
    where
        F: Fn() -> ProgressDrawTarget + Send + Sync + 'static,
    {
        self.spinner_target = Arc::new(make);
        self
    }

    pub fn style(&self) -> OutputStyle {
        self.style
    }

    /// Spinner redraw cadence.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Hide the cursor until the returned guard drops. No-op in plain mode.
    pub fn hide_cursor(&self) -> CursorGuard {
        CursorGuard::hide(self.out.clone(), self.style == OutputStyle::Rich)
    }

    /// New spinner showing `label`. Frames advance on each `tick()`.
    pub fn spinner(&self, label: &str) -> ProgressBar {
        let bar = ProgressBar::with_draw_target(None, (self.spinner_target)());

        let style = ProgressStyle::default_spinner()
            .tick_strings(&spinner_ticks())
            .template("{spinner:.cyan} {msg}");
        if let Ok(style) = style {
            bar.set_style(style);
        }
        bar.set_message(label.to_string());
        bar
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }

    /// `✔ message`
    pub fn success(&mut self, message: &str) -> io::Result<()> {
        let check = paint(self.style, success_style(), CHECK);
        self.line(&format!("{check} {message}"))
    }

    /// `✖ message`
    pub fn error(&mut self, message: &str) -> io::Result<()> {
        let cross = paint(self.style, error_style(), CROSS);
        let text = paint(self.style, error_style(), message);
        self.line(&format!("{cross} {text}"))
    }

    /// Each entry on its own line behind the vertical-bar marker.
    pub fn markers(&mut self, entries: &[String]) -> io::Result<()> {
        let marker = paint(self.style, marker_style(), MARKER);
        for entry in entries {
            self.line(&format!("  {marker} {entry}"))?;
        }
        Ok(())
    }

    /// Final success line with the trailing glyph.
    pub fn finished(&mut self, message: &str) -> io::Result<()> {
        self.success(&format!("{message} {FINISH_GLYPH}"))
    }
}

/// Frames followed by the glyph shown once the bar is finished.
fn spinner_ticks() -> Vec<&'static str> {
    let mut ticks = SPINNER_FRAMES.to_vec();
    ticks.push(CHECK);
    ticks
}
