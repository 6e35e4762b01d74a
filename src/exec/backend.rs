// src/exec/backend.rs

//! Pluggable command runner abstraction.
//!
//! Phases talk to a `CommandRunner` instead of spawning processes directly.
//! This makes it easy to swap in a fake runner in tests while keeping the
//! production implementation in [`RealCommandRunner`].
//!
//! A spawned command is returned as a boxed [`Job`], which the progress
//! indicator polls with `is_finished` until the command exits.

use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;
use crate::types::JobStatus;

use super::command::CommandSpec;
use super::process::ProcessJob;

/// Handle to one background command.
pub trait Job: Send {
    /// Non-blocking liveness check.
    fn is_finished(&mut self) -> Result<bool>;

    /// Wait for the command to exit and return its status.
    fn wait(&mut self) -> Pin<Box<dyn Future<Output = Result<JobStatus>> + Send + '_>>;
}

/// Trait abstracting how external commands are started.
///
/// Production code uses [`RealCommandRunner`]; tests can provide their own
/// implementation that doesn't spawn real processes.
pub trait CommandRunner: Send {
    /// Start `spec` in the background.
    fn spawn(&mut self, spec: &CommandSpec) -> Result<Box<dyn Job>>;

    /// Whether `program` resolves to an executable.
    fn is_installed(&self, program: &str) -> bool;
}

/// Real runner used in production: spawns OS processes with Tokio.
#[derive(Debug, Clone, Default)]
pub struct RealCommandRunner;

impl RealCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for RealCommandRunner {
    fn spawn(&mut self, spec: &CommandSpec) -> Result<Box<dyn Job>> {
        let job = ProcessJob::spawn(spec)?;
        Ok(Box::new(job))
    }

    fn is_installed(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}
