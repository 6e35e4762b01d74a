use std::io;
use std::sync::{Arc, Mutex};

use indicatif::{ProgressDrawTarget, TermLike};

/// One call indicatif made on the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermEvent {
    Write(String),
    ClearLine,
}

/// An in-memory terminal recording what a spinner draws.
///
/// Clones share the same log, so a test can keep one handle while the
/// console boxes others into draw targets.
#[derive(Debug, Clone, Default)]
pub struct RecordingTerm {
    events: Arc<Mutex<Vec<TermEvent>>>,
}

impl RecordingTerm {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh draw target feeding this terminal's log.
    pub fn draw_target(&self) -> ProgressDrawTarget {
        ProgressDrawTarget::term_like(Box::new(self.clone()))
    }

    pub fn events(&self) -> Vec<TermEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Everything written, with trailing padding trimmed, skipping blank
    /// writes.
    pub fn writes(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                TermEvent::Write(text) if !text.trim().is_empty() => {
                    Some(text.trim_end().to_string())
                }
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: TermEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl TermLike for RecordingTerm {
    fn width(&self) -> u16 {
        80
    }

    fn move_cursor_up(&self, _n: usize) -> io::Result<()> {
        Ok(())
    }

    fn move_cursor_down(&self, _n: usize) -> io::Result<()> {
        Ok(())
    }

    fn move_cursor_right(&self, _n: usize) -> io::Result<()> {
        Ok(())
    }

    fn move_cursor_left(&self, _n: usize) -> io::Result<()> {
        Ok(())
    }

    fn write_line(&self, s: &str) -> io::Result<()> {
        self.push(TermEvent::Write(format!("{s}\n")));
        Ok(())
    }

    fn write_str(&self, s: &str) -> io::Result<()> {
        self.push(TermEvent::Write(s.to_string()));
        Ok(())
    }

    fn clear_line(&self) -> io::Result<()> {
        self.push(TermEvent::ClearLine);
        Ok(())
    }

    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}
