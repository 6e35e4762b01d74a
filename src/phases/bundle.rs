// src/phases/bundle.rs

use tracing::debug;

use crate::errors::Result;
use crate::summary::installed_packages;
use crate::types::PhaseOutcome;

use super::PhaseContext;

pub const CHECK_LABEL: &str = "Check Brewfile for missing packages";
pub const INSTALL_LABEL: &str = "Install missing packages";
pub const INSTALLED: &str = "New packages installed";

/// Word `brew bundle check --verbose` prints for each absent dependency.
pub const MISSING_MARKER: &str = "missing";

/// `brew bundle check`, then `brew bundle install` for anything missing.
///
/// `--verbose` is required: without it the check reports missing
/// dependencies whether or not there are any.
pub async fn run(ctx: &mut PhaseContext) -> Result<PhaseOutcome> {
    let brewfile = ctx.settings().brewfile.clone();
    if !ctx.fs().is_file(&brewfile) {
        ctx.console()
            .error(&format!("No Brewfile found at {}", brewfile.display()))?;
        return Ok(PhaseOutcome::Skipped);
    }

    let check = ctx.session().capture()?;
    let spec = ctx
        .brew(["bundle", "check", "--global", "--verbose"])
        .capture_to(check.path());
    ctx.run_tracked(spec, CHECK_LABEL, None).await?;

    if !check.read(ctx.fs())?.contains(MISSING_MARKER) {
        debug!("Brewfile satisfied");
        return Ok(PhaseOutcome::UpToDate);
    }

    let install = ctx.session().capture()?;
    let spec = ctx
        .brew(["bundle", "install", "--global"])
        .capture_to(install.path());
    ctx.run_tracked(spec, INSTALL_LABEL, Some(INSTALLED)).await?;

    let packages = installed_packages(&install.read(ctx.fs())?);
    ctx.console().markers(&packages)?;

    Ok(PhaseOutcome::Changed(packages))
}
