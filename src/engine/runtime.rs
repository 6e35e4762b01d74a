// src/engine/runtime.rs

//! IO shell around the stage sequence.

use std::future::Future;

use tracing::{debug, info, warn};

use crate::errors::{BrewupError, Result};
use crate::exec::CommandSpec;
use crate::phases::{self, PhaseContext};
use crate::types::{Phase, PhaseOutcome};

use super::bootstrap::InstallScriptSource;
use super::{check_platform, Stage};

pub const FINISHED: &str = "Homebrew maintenance complete";

/// Shell used to run the downloaded install script.
pub const BOOTSTRAP_SHELL: &str = "/bin/bash";

/// What a completed run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Whether a bootstrap was attempted because the package manager was
    /// missing. Set even when the download or the script failed.
    pub bootstrapped: bool,
    /// Phase outcomes, in execution order.
    pub phases: Vec<(Phase, PhaseOutcome)>,
    /// Empty leftover capture files removed at the end.
    pub swept: usize,
}

/// One maintenance run: platform check, bootstrap, the four phases, done.
pub struct Maintenance {
    ctx: PhaseContext,
    scripts: Box<dyn InstallScriptSource>,
    host_os: String,
}

impl Maintenance {
    pub fn new(ctx: PhaseContext, scripts: Box<dyn InstallScriptSource>) -> Self {
        Self {
            ctx,
            scripts,
            host_os: std::env::consts::OS.to_string(),
        }
    }

    /// Pretend to run on `os` instead of the real host.
    pub fn with_host_os(mut self, os: impl Into<String>) -> Self {
        self.host_os = os.into();
        self
    }

    /// Walk every stage in order.
    ///
    /// The cursor is hidden once the phases begin and restored when this
    /// future completes, fails or is dropped.
    pub async fn run(&mut self) -> Result<RunReport> {
        let mut report = RunReport::default();
        let mut cursor = None;
        let mut stage = Stage::PlatformCheck;

        loop {
            debug!(?stage, "entering stage");
            match stage {
                Stage::PlatformCheck => {
                    check_platform(&self.ctx.settings().platform, &self.host_os)?;
                }
                Stage::BootstrapCheck => {
                    report.bootstrapped = self.bootstrap().await?;
                }
                Stage::Running(phase) => {
                    if cursor.is_none() {
                        cursor = Some(self.ctx.console().hide_cursor());
                    }
                    let outcome = phases::run(phase, &mut self.ctx).await?;
                    report.phases.push((phase, outcome));
                }
                Stage::Done => {
                    self.ctx.console().finished(FINISHED)?;
                    report.swept = self.ctx.session().sweep_empty_leftovers(self.ctx.fs());
                }
            }

            match stage.next() {
                Some(next) => stage = next,
                None => break,
            }
        }

        drop(cursor);
        info!(?report, "maintenance run complete");
        Ok(report)
    }

    /// Run the install script if the package manager cannot be found.
    ///
    /// Returns whether a bootstrap was attempted. A failed download, spawn or
    /// script is logged and the run carries on with the phases.
    async fn bootstrap(&mut self) -> Result<bool> {
        let brew = self.ctx.settings().brew.clone();
        if self.ctx.runner().is_installed(&brew) {
            debug!(%brew, "package manager found");
            return Ok(false);
        }

        info!(%brew, "package manager not found; running install script");
        self.ctx
            .console()
            .line("Homebrew not found, running the official installer")?;

        let url = self.ctx.settings().install_script_url.clone();
        let script = match self.scripts.fetch(&url).await {
            Ok(script) => script,
            Err(err) => {
                warn!(%url, error = %err, "could not fetch install script; continuing anyway");
                return Ok(true);
            }
        };

        let spec = CommandSpec::new(BOOTSTRAP_SHELL, ["-c".to_string(), script]).inherit_stdio();
        let status = match self.ctx.runner().spawn(&spec) {
            Ok(mut job) => job.wait().await,
            Err(err) => Err(err),
        };
        match status {
            Ok(status) if status.success() => debug!("install script finished"),
            Ok(status) => warn!(?status, "install script failed; continuing anyway"),
            Err(err) => warn!(error = %err, "could not run install script; continuing anyway"),
        }

        Ok(true)
    }
}

/// Run `maintenance` unless `interrupt` resolves first.
///
/// An interrupt drops the in-flight run, which restores the cursor and
/// deletes open capture files, and yields [`BrewupError::Interrupted`].
pub async fn run_until_interrupted<F>(
    maintenance: &mut Maintenance,
    interrupt: F,
) -> Result<RunReport>
where
    F: Future<Output = ()>,
{
    tokio::select! {
        report = maintenance.run() => report,
        _ = interrupt => {
            warn!("interrupted by user");
            Err(BrewupError::Interrupted)
        }
    }
}
