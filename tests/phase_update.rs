// tests/phase_update.rs

use std::error::Error;

use brewup::phases::{self, update};
use brewup::types::{Phase, PhaseOutcome};
use brewup::ui::OutputStyle;
use brewup_test_utils::builders::SettingsBuilder;
use brewup_test_utils::fake_runner::FakeRunner;
use brewup_test_utils::{dir_entries, init_tracing, phase_context, subcommands, test_console};

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn update_reports_when_index_changed() -> TestResult {
    init_tracing();
    let tmp = tempfile::tempdir()?;
    let settings = SettingsBuilder::new(tmp.path()).build();

    let runner = FakeRunner::new().with_output(
        "update",
        "Updated 2 taps (homebrew/core and homebrew/cask).\n==> New Formulae\nfoo\n",
    );
    let calls = runner.invocations();
    let (console, out) = test_console(OutputStyle::Plain);
    let mut ctx = phase_context(settings, runner, console);

    let outcome = phases::run(Phase::Update, &mut ctx).await?;

    assert_eq!(outcome, PhaseOutcome::Changed(vec![]));
    assert_eq!(subcommands(&calls), vec!["update"]);
    assert_eq!(out.lines(), vec![format!("✔ {}", update::UPDATED)]);
    assert!(dir_entries(tmp.path()).is_empty(), "capture file left behind");
    Ok(())
}

#[tokio::test]
async fn update_is_silent_when_already_current() -> TestResult {
    init_tracing();
    let tmp = tempfile::tempdir()?;
    let settings = SettingsBuilder::new(tmp.path()).build();

    let runner = FakeRunner::new().with_output("update", "Already up-to-date.\n");
    let (console, out) = test_console(OutputStyle::Plain);
    let mut ctx = phase_context(settings, runner, console);

    let outcome = phases::run(Phase::Update, &mut ctx).await?;

    assert_eq!(outcome, PhaseOutcome::UpToDate);
    assert!(out.lines().is_empty());
    assert!(dir_entries(tmp.path()).is_empty(), "capture file left behind");
    Ok(())
}

#[tokio::test]
async fn update_captures_into_session_directory() -> TestResult {
    init_tracing();
    let tmp = tempfile::tempdir()?;
    let settings = SettingsBuilder::new(tmp.path()).build();

    let runner = FakeRunner::new();
    let calls = runner.invocations();
    let (console, _out) = test_console(OutputStyle::Plain);
    let mut ctx = phase_context(settings, runner, console);
    let prefix = ctx.session().prefix().to_string();

    phases::run(Phase::Update, &mut ctx).await?;

    let calls = calls.lock().unwrap();
    let brewup::exec::OutputTarget::Capture(path) = &calls[0].output else {
        panic!("update output should be captured");
    };
    assert_eq!(path.parent(), Some(tmp.path()));
    let name = path.file_name().unwrap().to_string_lossy();
    assert!(name.starts_with(&prefix), "{name} lacks prefix {prefix}");
    Ok(())
}
