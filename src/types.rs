// src/types.rs

use std::fmt;
use std::process::ExitStatus;

/// Observed result of one external command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Success,
    /// Non-zero exit. `-1` when the process was killed by a signal.
    Failed(i32),
}

impl JobStatus {
    pub fn success(self) -> bool {
        matches!(self, JobStatus::Success)
    }
}

impl From<ExitStatus> for JobStatus {
    fn from(status: ExitStatus) -> Self {
        if status.success() {
            JobStatus::Success
        } else {
            JobStatus::Failed(status.code().unwrap_or(-1))
        }
    }
}

/// The four maintenance phases, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Update,
    Upgrade,
    Bundle,
    Cleanup,
}

impl Phase {
    pub const ALL: [Phase; 4] = [Phase::Update, Phase::Upgrade, Phase::Bundle, Phase::Cleanup];
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Update => "update",
            Phase::Upgrade => "upgrade",
            Phase::Bundle => "bundle",
            Phase::Cleanup => "cleanup",
        };
        f.write_str(name)
    }
}

/// What a phase ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhaseOutcome {
    /// Preconditions not met (e.g. no manifest); nothing was run.
    Skipped,
    /// Checks ran but found no work.
    UpToDate,
    /// Work was performed. Holds the summary lines, possibly empty.
    Changed(Vec<String>),
}
