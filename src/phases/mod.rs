// src/phases/mod.rs

//! The four maintenance phases.
//!
//! Each phase starts one external command at a time, shows the spinner while
//! it runs, inspects what it captured and decides whether to report or run a
//! follow-up command. Capture files are dropped (and deleted) before the
//! phase returns.

pub mod bundle;
pub mod cleanup;
pub mod update;
pub mod upgrade;

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::Settings;
use crate::errors::Result;
use crate::exec::{CommandRunner, CommandSpec};
use crate::fs::FileSystem;
use crate::session::TempSession;
use crate::types::{JobStatus, Phase, PhaseOutcome};
use crate::ui::{self, Console};

/// Everything a phase needs to do its work.
pub struct PhaseContext {
    runner: Box<dyn CommandRunner>,
    console: Console,
    session: TempSession,
    fs: Arc<dyn FileSystem>,
    settings: Settings,
}

impl PhaseContext {
    pub fn new(
        settings: Settings,
        runner: Box<dyn CommandRunner>,
        fs: Arc<dyn FileSystem>,
        console: Console,
    ) -> Self {
        let session = TempSession::new(&settings.temp_dir);
        Self::with_session(settings, runner, fs, console, session)
    }

    pub fn with_session(
        settings: Settings,
        runner: Box<dyn CommandRunner>,
        fs: Arc<dyn FileSystem>,
        console: Console,
        session: TempSession,
    ) -> Self {
        Self {
            runner,
            console,
            session,
            fs,
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn session(&self) -> &TempSession {
        &self.session
    }

    pub fn fs(&self) -> &dyn FileSystem {
        self.fs.as_ref()
    }

    pub fn console(&mut self) -> &mut Console {
        &mut self.console
    }

    pub fn runner(&mut self) -> &mut dyn CommandRunner {
        self.runner.as_mut()
    }

    /// `brew <args...>` with output discarded.
    pub fn brew<I, S>(&self, args: I) -> CommandSpec
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CommandSpec::new(self.settings.brew.clone(), args)
    }

    /// Start `spec` and show the spinner until it exits.
    pub async fn run_tracked(
        &mut self,
        spec: CommandSpec,
        label: &str,
        done: Option<&str>,
    ) -> Result<JobStatus> {
        let mut job = self.runner.spawn(&spec)?;
        let status = ui::track(&mut self.console, job.as_mut(), label, done).await?;
        self.report(&spec, label, status)?;
        Ok(status)
    }

    /// A non-zero exit is only logged, unless strict mode asks for a line.
    fn report(&mut self, spec: &CommandSpec, label: &str, status: JobStatus) -> Result<()> {
        let JobStatus::Failed(code) = status else {
            return Ok(());
        };

        warn!(cmd = %spec, code, "command exited with failure; continuing");
        if self.settings.strict {
            self.console
                .error(&format!("{label} failed (exit {code})"))?;
        }
        Ok(())
    }
}

/// Run one phase.
pub async fn run(phase: Phase, ctx: &mut PhaseContext) -> Result<PhaseOutcome> {
    info!(%phase, "phase starting");
    let outcome = match phase {
        Phase::Update => update::run(ctx).await?,
        Phase::Upgrade => upgrade::run(ctx).await?,
        Phase::Bundle => bundle::run(ctx).await?,
        Phase::Cleanup => cleanup::run(ctx).await?,
    };
    info!(%phase, ?outcome, "phase finished");
    Ok(outcome)
}
