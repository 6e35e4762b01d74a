// src/ui/cursor.rs

//! Cursor visibility guard.

use crossterm::cursor;
use crossterm::execute;
use tracing::{debug, warn};

use super::Output;

/// Hides the terminal cursor while alive and shows it again on drop.
///
/// Drop runs on normal return, on `?` errors and when the owning future is
/// cancelled by the interrupt handler.
pub struct CursorGuard {
    out: Output,
    active: bool,
}

impl CursorGuard {
    /// Hide the cursor on `out`. With `enabled == false` the guard does nothing.
    pub fn hide(mut out: Output, enabled: bool) -> Self {
        let active = if enabled {
            match execute!(out, cursor::Hide) {
                Ok(()) => true,
                Err(err) => {
                    warn!(error = %err, "failed to hide cursor");
                    false
                }
            }
        } else {
            false
        };
        debug!(active, "cursor guard acquired");
        Self { out, active }
    }
}

impl Drop for CursorGuard {
    fn drop(&mut self) {
        if !self.active {
            return;
        }
        if let Err(err) = execute!(self.out, cursor::Show) {
            warn!(error = %err, "failed to restore cursor");
        }
        debug!("cursor restored");
    }
}
