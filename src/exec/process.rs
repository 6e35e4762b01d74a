// src/exec/process.rs

//! A spawned OS process exposed as a pollable [`Job`].

use std::fs::OpenOptions;
use std::future::Future;
use std::pin::Pin;
use std::process::Stdio;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{Child, Command};
use tracing::{debug, info};

use crate::errors::Result;
use crate::types::JobStatus;

use super::backend::Job;
use super::command::{CommandSpec, OutputTarget};

pub struct ProcessJob {
    child: Child,
    display: String,
    status: Option<JobStatus>,
}

impl ProcessJob {
    /// Start `spec`, wiring stdout as requested.
    ///
    /// For captured and discarded commands stderr is piped and forwarded to
    /// the log at debug level, so it never scribbles over the spinner.
    pub fn spawn(spec: &CommandSpec) -> Result<Self> {
        let cmd_line = spec.to_string();
        info!(cmd = %cmd_line, "starting process");

        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args).stdin(Stdio::null()).kill_on_drop(true);

        match &spec.output {
            OutputTarget::Capture(path) => {
                let file = OpenOptions::new()
                    .write(true)
                    .create(true)
                    .truncate(true)
                    .open(path)
                    .with_context(|| format!("opening capture file {:?}", path))?;
                cmd.stdout(Stdio::from(file)).stderr(Stdio::piped());
            }
            OutputTarget::Discard => {
                cmd.stdout(Stdio::null()).stderr(Stdio::piped());
            }
            OutputTarget::Inherit => {
                cmd.stdin(Stdio::inherit())
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit());
            }
        }

        let mut child = cmd
            .spawn()
            .with_context(|| format!("spawning process `{}`", cmd_line))?;

        if let Some(stderr) = child.stderr.take() {
            let stderr_cmd = cmd_line.clone();
            tokio::spawn(async move {
                let reader = BufReader::new(stderr);
                let mut lines = reader.lines();

                while let Ok(Some(line)) = lines.next_line().await {
                    debug!(cmd = %stderr_cmd, "stderr: {}", line);
                }
            });
        }

        Ok(Self {
            child,
            display: cmd_line,
            status: None,
        })
    }

    fn record(&mut self, status: JobStatus) -> JobStatus {
        if self.status.is_none() {
            info!(
                cmd = %self.display,
                success = status.success(),
                ?status,
                "process exited"
            );
        }
        self.status = Some(status);
        status
    }
}

impl Job for ProcessJob {
    fn is_finished(&mut self) -> Result<bool> {
        if self.status.is_some() {
            return Ok(true);
        }

        let polled = self
            .child
            .try_wait()
            .with_context(|| format!("polling process `{}`", self.display))?;

        match polled {
            Some(exit) => {
                self.record(exit.into());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn wait(&mut self) -> Pin<Box<dyn Future<Output = Result<JobStatus>> + Send + '_>> {
        Box::pin(async move {
            if let Some(status) = self.status {
                return Ok(status);
            }

            let exit = self
                .child
                .wait()
                .await
                .with_context(|| format!("waiting for process `{}`", self.display))?;

            Ok(self.record(exit.into()))
        })
    }
}
