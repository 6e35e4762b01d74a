// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;
pub mod phases;
pub mod session;
pub mod summary;
pub mod types;
pub mod ui;

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::cli::CliArgs;
use crate::config::{load_or_default, Settings};
use crate::engine::{run_until_interrupted, HttpScriptSource, Maintenance};
use crate::errors::Result;
use crate::exec::RealCommandRunner;
use crate::fs::RealFileSystem;
use crate::phases::PhaseContext;
use crate::ui::{Console, OutputStyle};

/// What an invocation asks for.
#[derive(Debug, Clone)]
pub enum Invocation {
    /// Print this banner and do nothing else.
    Banner(String),
    /// Full maintenance with these settings.
    Maintain(Settings),
}

/// Decide what to do. A banner request never touches the filesystem.
pub fn plan(args: &CliArgs) -> Result<Invocation> {
    if args.wants_banner() {
        return Ok(Invocation::Banner(cli::banner()));
    }
    let settings = load_or_default(args.config.as_deref().map(Path::new))?;
    Ok(Invocation::Maintain(settings))
}

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - settings
/// - the real command runner and filesystem
/// - the stdout console
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let settings = match plan(&args)? {
        Invocation::Banner(banner) => {
            println!("{banner}");
            return Ok(());
        }
        Invocation::Maintain(settings) => settings,
    };
    debug!(?settings, "settings resolved");

    let console = Console::stdout(OutputStyle::detect(), settings.spinner_interval);
    let ctx = PhaseContext::new(
        settings,
        Box::new(RealCommandRunner::new()),
        Arc::new(RealFileSystem),
        console,
    );
    let mut maintenance = Maintenance::new(ctx, Box::new(HttpScriptSource::new()));

    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    run_until_interrupted(&mut maintenance, interrupt).await?;
    Ok(())
}
