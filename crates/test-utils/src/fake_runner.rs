use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use brewup::engine::InstallScriptSource;
use brewup::errors::{BrewupError, Result};
use brewup::exec::{CommandRunner, CommandSpec, Job, OutputTarget};
use brewup::types::JobStatus;

/// A fake runner that:
/// - records every command it is asked to spawn
/// - writes scripted stdout into the capture file, keyed by subcommand
///   (e.g. `"outdated"`, `"bundle check --global --verbose"`)
/// - reports each job finished after a fixed number of polls.
pub struct FakeRunner {
    invocations: Arc<Mutex<Vec<CommandSpec>>>,
    outputs: HashMap<String, String>,
    statuses: HashMap<String, JobStatus>,
    hanging: HashSet<String>,
    installed: bool,
    polls: usize,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self {
            invocations: Arc::new(Mutex::new(Vec::new())),
            outputs: HashMap::new(),
            statuses: HashMap::new(),
            hanging: HashSet::new(),
            installed: true,
            polls: 2,
        }
    }

    pub fn with_output(mut self, subcommand: &str, stdout: &str) -> Self {
        self.outputs.insert(subcommand.to_string(), stdout.to_string());
        self
    }

    pub fn with_status(mut self, subcommand: &str, status: JobStatus) -> Self {
        self.statuses.insert(subcommand.to_string(), status);
        self
    }

    /// Jobs report finished after `polls` unfinished checks.
    pub fn with_polls(mut self, polls: usize) -> Self {
        self.polls = polls;
        self
    }

    /// Jobs for `subcommand` never finish.
    pub fn hang_on(mut self, subcommand: &str) -> Self {
        self.hanging.insert(subcommand.to_string());
        self
    }

    /// The package manager does not resolve on PATH.
    pub fn not_installed(mut self) -> Self {
        self.installed = false;
        self
    }

    /// Shared log of spawned commands.
    pub fn invocations(&self) -> Arc<Mutex<Vec<CommandSpec>>> {
        Arc::clone(&self.invocations)
    }
}

impl Default for FakeRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for FakeRunner {
    fn spawn(&mut self, spec: &CommandSpec) -> Result<Box<dyn Job>> {
        self.invocations.lock().unwrap().push(spec.clone());

        let subcommand = spec.subcommand();
        if let OutputTarget::Capture(path) = &spec.output {
            let stdout = self.outputs.get(&subcommand).cloned().unwrap_or_default();
            std::fs::write(path, stdout)?;
        }

        Ok(Box::new(FakeJob {
            remaining: self.polls,
            hang: self.hanging.contains(&subcommand),
            status: self
                .statuses
                .get(&subcommand)
                .copied()
                .unwrap_or(JobStatus::Success),
        }))
    }

    fn is_installed(&self, _program: &str) -> bool {
        self.installed
    }
}

pub struct FakeJob {
    remaining: usize,
    hang: bool,
    status: JobStatus,
}

impl Job for FakeJob {
    fn is_finished(&mut self) -> Result<bool> {
        if self.hang {
            return Ok(false);
        }
        if self.remaining == 0 {
            return Ok(true);
        }
        self.remaining -= 1;
        Ok(false)
    }

    fn wait(&mut self) -> Pin<Box<dyn Future<Output = Result<JobStatus>> + Send + '_>> {
        let status = self.status;
        Box::pin(async move { Ok(status) })
    }
}

/// Install script source returning a canned script and counting fetches.
#[derive(Clone, Default)]
pub struct FakeScripts {
    fetched: Arc<AtomicUsize>,
}

impl FakeScripts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fetch_count(&self) -> usize {
        self.fetched.load(Ordering::SeqCst)
    }
}

impl InstallScriptSource for FakeScripts {
    fn fetch(&self, _url: &str) -> Pin<Box<dyn Future<Output = Result<String>> + Send + '_>> {
        self.fetched.fetch_add(1, Ordering::SeqCst);
        Box::pin(async { Ok("echo installing homebrew".to_string()) })
    }
}

/// Install script source whose download always fails.
#[derive(Clone, Default)]
pub struct FailingScripts {
    attempts: Arc<AtomicUsize>,
}

impl FailingScripts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl InstallScriptSource for FailingScripts {
    fn fetch(&self, url: &str) -> Pin<Box<dyn Future<Output = Result<String>> + Send + '_>> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        let url = url.to_string();
        Box::pin(async move {
            Err(BrewupError::Io(std::io::Error::other(format!(
                "network down fetching {url}"
            ))))
        })
    }
}
