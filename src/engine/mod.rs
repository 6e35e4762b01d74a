// src/engine/mod.rs

//! Orchestration for a maintenance run.
//!
//! The pure stage sequence lives here as [`Stage`]; the IO shell that acts on
//! each stage is [`runtime::Maintenance`]. [`bootstrap`] fetches the
//! package manager's installer when it is missing.

pub mod bootstrap;
pub mod runtime;

pub use bootstrap::{HttpScriptSource, InstallScriptSource};
pub use runtime::{run_until_interrupted, Maintenance, RunReport};

use crate::errors::{BrewupError, Result};
use crate::types::Phase;

/// Where a run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    PlatformCheck,
    BootstrapCheck,
    Running(Phase),
    Done,
}

impl Stage {
    /// The stage after this one, or `None` after `Done`.
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::PlatformCheck => Some(Stage::BootstrapCheck),
            Stage::BootstrapCheck => Some(Stage::Running(Phase::Update)),
            Stage::Running(Phase::Update) => Some(Stage::Running(Phase::Upgrade)),
            Stage::Running(Phase::Upgrade) => Some(Stage::Running(Phase::Bundle)),
            Stage::Running(Phase::Bundle) => Some(Stage::Running(Phase::Cleanup)),
            Stage::Running(Phase::Cleanup) => Some(Stage::Done),
            Stage::Done => None,
        }
    }
}

/// Fail unless the host OS identifier is `expected`.
pub fn check_platform(expected: &str, actual: &str) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(BrewupError::UnsupportedPlatform {
            expected: expected.to_string(),
            actual: actual.to_string(),
        })
    }
}
