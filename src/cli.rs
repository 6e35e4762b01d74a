// src/cli.rs

//! CLI argument parsing using `clap`.

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};

/// Command-line arguments for `brewup`.
///
/// Without positional arguments the full maintenance run is performed. Any
/// positional argument only prints the version banner.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "brewup",
    version,
    about = "Update, upgrade and clean up Homebrew, and install what ~/.Brewfile declares.",
    long_about = None
)]
pub struct CliArgs {
    /// Optional settings file (TOML). Built-in defaults are used otherwise.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `BREWUP_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Any extra argument prints the version banner instead of running.
    #[arg(value_name = "ARG", hide = true)]
    pub extra: Vec<String>,
}

impl CliArgs {
    /// True when the invocation should only print the banner.
    pub fn wants_banner(&self) -> bool {
        !self.extra.is_empty()
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Parse the process arguments; see [`parse_from`].
pub fn parse() -> CliArgs {
    parse_from(std::env::args_os())
}

/// Parse `args`, treating anything clap rejects as a banner request.
///
/// `--help` and `--version` keep clap's behavior and exit. Any other
/// argument clap does not understand (`-v`, `--foo`, a bad `--log-level`
/// value) still only prints the banner, so the process never leaves with a
/// usage error and exit code 2, which is reserved for interrupts.
pub fn parse_from<I, T>(args: I) -> CliArgs
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    match CliArgs::try_parse_from(&args) {
        Ok(parsed) => parsed,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => err.exit(),
            _ => CliArgs {
                config: None,
                log_level: None,
                extra: args
                    .iter()
                    .skip(1)
                    .map(|arg| arg.to_string_lossy().into_owned())
                    .collect(),
            },
        },
    }
}

/// `brewup <version>`, printed for spurious arguments.
pub fn banner() -> String {
    format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
