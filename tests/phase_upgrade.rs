// tests/phase_upgrade.rs

use std::error::Error;

use brewup::phases::{self, upgrade};
use brewup::types::{Phase, PhaseOutcome};
use brewup::ui::OutputStyle;
use brewup_test_utils::builders::SettingsBuilder;
use brewup_test_utils::fake_runner::FakeRunner;
use brewup_test_utils::{dir_entries, init_tracing, phase_context, subcommands, test_console};

type TestResult = Result<(), Box<dyn Error>>;

const UPGRADE_LOG: &str = "\
==> Upgrading 2 outdated packages:
node 20.1.0 -> 20.2.0, git 2.40.0 -> 2.41.0
==> Upgrading node
";

#[tokio::test]
async fn empty_outdated_list_skips_upgrade() -> TestResult {
    init_tracing();
    let tmp = tempfile::tempdir()?;
    let settings = SettingsBuilder::new(tmp.path()).build();

    let runner = FakeRunner::new().with_output("outdated", "");
    let calls = runner.invocations();
    let (console, out) = test_console(OutputStyle::Plain);
    let mut ctx = phase_context(settings, runner, console);

    let outcome = phases::run(Phase::Upgrade, &mut ctx).await?;

    assert_eq!(outcome, PhaseOutcome::UpToDate);
    assert_eq!(subcommands(&calls), vec!["outdated"]);
    assert!(out.lines().is_empty());
    assert!(dir_entries(tmp.path()).is_empty(), "capture file left behind");
    Ok(())
}

#[tokio::test]
async fn any_outdated_output_counts_as_non_empty() -> TestResult {
    init_tracing();
    let tmp = tempfile::tempdir()?;
    let settings = SettingsBuilder::new(tmp.path()).build();

    let runner = FakeRunner::new().with_output("outdated", "\n");
    let calls = runner.invocations();
    let (console, _out) = test_console(OutputStyle::Plain);
    let mut ctx = phase_context(settings, runner, console);

    let outcome = phases::run(Phase::Upgrade, &mut ctx).await?;

    assert_eq!(
        subcommands(&calls),
        vec!["outdated", "upgrade --display-times"]
    );
    assert_eq!(outcome, PhaseOutcome::Changed(Vec::new()));
    assert!(dir_entries(tmp.path()).is_empty(), "capture files left behind");
    Ok(())
}

#[tokio::test]
async fn outdated_packages_trigger_exactly_one_upgrade() -> TestResult {
    init_tracing();
    let tmp = tempfile::tempdir()?;
    let settings = SettingsBuilder::new(tmp.path()).build();

    let runner = FakeRunner::new()
        .with_output("outdated", "node\ngit\n")
        .with_output("upgrade --display-times", UPGRADE_LOG);
    let calls = runner.invocations();
    let (console, out) = test_console(OutputStyle::Plain);
    let mut ctx = phase_context(settings, runner, console);

    let outcome = phases::run(Phase::Upgrade, &mut ctx).await?;

    assert_eq!(
        subcommands(&calls),
        vec!["outdated", "upgrade --display-times"]
    );
    assert_eq!(
        outcome,
        PhaseOutcome::Changed(vec![
            "node  20.1.0  ->  20.2.0".to_string(),
            "git   2.40.0  ->  2.41.0".to_string(),
        ])
    );
    assert_eq!(
        out.lines(),
        vec![
            format!("✔ {}", upgrade::UPGRADED),
            "  │ node  20.1.0  ->  20.2.0".to_string(),
            "  │ git   2.40.0  ->  2.41.0".to_string(),
        ]
    );
    assert!(dir_entries(tmp.path()).is_empty(), "capture files left behind");
    Ok(())
}

#[tokio::test]
async fn failed_upgrade_is_reported_only_in_strict_mode() -> TestResult {
    init_tracing();

    for strict in [false, true] {
        let tmp = tempfile::tempdir()?;
        let settings = SettingsBuilder::new(tmp.path()).strict(strict).build();

        let runner = FakeRunner::new()
            .with_output("outdated", "node\n")
            .with_output("upgrade --display-times", UPGRADE_LOG)
            .with_status(
                "upgrade --display-times",
                brewup::types::JobStatus::Failed(1),
            );
        let (console, out) = test_console(OutputStyle::Plain);
        let mut ctx = phase_context(settings, runner, console);

        phases::run(Phase::Upgrade, &mut ctx).await?;

        let failure = format!("✖ {} failed (exit 1)", upgrade::UPGRADE_LABEL);
        assert_eq!(out.lines().contains(&failure), strict, "strict = {strict}");
    }
    Ok(())
}
