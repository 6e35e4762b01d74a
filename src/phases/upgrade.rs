// src/phases/upgrade.rs

use tracing::debug;

use crate::errors::Result;
use crate::summary::upgraded_packages;
use crate::types::PhaseOutcome;

use super::PhaseContext;

pub const CHECK_LABEL: &str = "Check for available upgrades";
pub const UPGRADE_LABEL: &str = "Upgrade existing Homebrew packages";
pub const UPGRADED: &str = "Packages upgraded";

/// `brew outdated`, then `brew upgrade --display-times` if anything is listed.
pub async fn run(ctx: &mut PhaseContext) -> Result<PhaseOutcome> {
    let outdated = ctx.session().capture()?;
    let spec = ctx.brew(["outdated"]).capture_to(outdated.path());
    ctx.run_tracked(spec, CHECK_LABEL, None).await?;

    let listing = outdated.read(ctx.fs())?;
    if listing.is_empty() {
        debug!("no outdated packages");
        return Ok(PhaseOutcome::UpToDate);
    }
    debug!(count = listing.lines().count(), "outdated packages found");

    let upgrade_log = ctx.session().capture()?;
    let spec = ctx
        .brew(["upgrade", "--display-times"])
        .capture_to(upgrade_log.path());
    ctx.run_tracked(spec, UPGRADE_LABEL, Some(UPGRADED)).await?;

    let rows = upgraded_packages(&upgrade_log.read(ctx.fs())?);
    ctx.console().markers(&rows)?;

    Ok(PhaseOutcome::Changed(rows))
}
