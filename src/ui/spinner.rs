// src/ui/spinner.rs

//! Progress indicator for one background job.

use tracing::debug;

use crate::errors::Result;
use crate::exec::Job;
use crate::types::JobStatus;

use super::Console;

/// Animate `label` until `job` finishes, then print the completion line.
///
/// The job is polled once per frame and each frame waits for the console's
/// interval. When the job is done the spinner line is cleared and replaced
/// by `✔ done` if `done` is given, or left blank otherwise.
///
/// The job's exit status is returned but never rendered here; deciding what a
/// failure means is up to the caller.
pub async fn track(
    console: &mut Console,
    job: &mut dyn Job,
    label: &str,
    done: Option<&str>,
) -> Result<JobStatus> {
    let bar = console.spinner(label);
    let mut frames = 0u64;

    let polled = loop {
        match job.is_finished() {
            Ok(true) => break Ok(()),
            Ok(false) => {
                bar.tick();
                frames += 1;
                tokio::time::sleep(console.interval()).await;
            }
            Err(err) => break Err(err),
        }
    };
    bar.finish_and_clear();
    polled?;

    debug!(label, frames, "job finished");

    if let Some(done) = done {
        console.success(done)?;
    }

    job.wait().await
}
