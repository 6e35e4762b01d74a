// tests/process.rs

#![cfg(unix)]

use std::error::Error;
use std::time::Duration;

use brewup::exec::{CommandRunner, CommandSpec, RealCommandRunner};
use brewup::types::JobStatus;
use brewup_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn real_runner_captures_stdout() -> TestResult {
    init_tracing();
    let tmp = tempfile::tempdir()?;
    let capture = tmp.path().join("out");

    let mut runner = RealCommandRunner::new();
    let spec = CommandSpec::new("sh", ["-c", "echo one; echo two; echo err >&2"])
        .capture_to(&capture);
    let mut job = runner.spawn(&spec)?;

    let status = tokio::time::timeout(Duration::from_secs(5), job.wait()).await??;

    assert_eq!(status, JobStatus::Success);
    assert_eq!(std::fs::read_to_string(&capture)?, "one\ntwo\n");
    assert!(job.is_finished()?);
    Ok(())
}

#[tokio::test]
async fn real_runner_reports_exit_code() -> TestResult {
    init_tracing();
    let mut runner = RealCommandRunner::new();
    let mut job = runner.spawn(&CommandSpec::new("sh", ["-c", "exit 7"]))?;

    let status = loop {
        if job.is_finished()? {
            break job.wait().await?;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    };

    assert_eq!(status, JobStatus::Failed(7));
    Ok(())
}

#[tokio::test]
async fn unknown_program_fails_to_spawn() {
    init_tracing();
    let mut runner = RealCommandRunner::new();

    assert!(runner.spawn(&CommandSpec::new("brewup-no-such-program", ["x"])).is_err());
    assert!(!runner.is_installed("brewup-no-such-program"));
    assert!(runner.is_installed("sh"));
}
