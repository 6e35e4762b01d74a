// src/phases/update.rs

use tracing::debug;

use crate::errors::Result;
use crate::summary::line_count;
use crate::types::PhaseOutcome;

use super::PhaseContext;

pub const LABEL: &str = "Update Homebrew formulae";
pub const UPDATED: &str = "Formulae updated";

/// `brew update`.
///
/// `brew update` prints a single line when the index is already current, so
/// two or more captured lines mean something changed.
pub async fn run(ctx: &mut PhaseContext) -> Result<PhaseOutcome> {
    let capture = ctx.session().capture()?;
    let spec = ctx.brew(["update"]).capture_to(capture.path());
    ctx.run_tracked(spec, LABEL, None).await?;

    let log = capture.read(ctx.fs())?;
    let lines = line_count(&log);
    debug!(lines, "update output captured");

    if lines >= 2 {
        ctx.console().success(UPDATED)?;
        Ok(PhaseOutcome::Changed(Vec::new()))
    } else {
        Ok(PhaseOutcome::UpToDate)
    }
}
