// src/exec/command.rs

use std::fmt;
use std::path::PathBuf;

/// Where a command's stdout goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Written to the given capture file (truncating it).
    Capture(PathBuf),
    /// Thrown away.
    Discard,
    /// Shared with our own terminal. Used for interactive commands.
    Inherit,
}

/// One external command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub output: OutputTarget,
}

impl CommandSpec {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            output: OutputTarget::Discard,
        }
    }

    pub fn capture_to(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = OutputTarget::Capture(path.into());
        self
    }

    pub fn inherit_stdio(mut self) -> Self {
        self.output = OutputTarget::Inherit;
        self
    }

    /// The subcommand, i.e. the arguments joined with spaces.
    pub fn subcommand(&self) -> String {
        self.args.join(" ")
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            // Keep log lines short for inline scripts.
            if arg.contains('\n') {
                f.write_str(" <script>")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}
