// src/phases/cleanup.rs

use crate::errors::Result;
use crate::types::PhaseOutcome;

use super::PhaseContext;

pub const LABEL: &str = "Clean up";

/// `brew cleanup -s`, output discarded.
pub async fn run(ctx: &mut PhaseContext) -> Result<PhaseOutcome> {
    let spec = ctx.brew(["cleanup", "-s"]);
    ctx.run_tracked(spec, LABEL, None).await?;
    Ok(PhaseOutcome::Changed(Vec::new()))
}
