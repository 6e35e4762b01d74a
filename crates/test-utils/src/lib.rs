pub mod builders;
pub mod fake_runner;
pub mod term;

use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use brewup::config::Settings;
use brewup::fs::RealFileSystem;
use brewup::phases::PhaseContext;
use brewup::ui::{Console, Output, OutputStyle};

use crate::fake_runner::FakeRunner;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.:
/// `RUST_LOG=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // print only for failing tests unless --nocapture
            .with_target(true)
            .init();
    });
}

/// In-memory writer that can be inspected after the fact.
#[derive(Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock().unwrap()).into_owned()
    }

    /// Non-empty output lines.
    pub fn lines(&self) -> Vec<String> {
        self.contents()
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A console writing into a fresh buffer with a 1 ms spinner cadence.
pub fn test_console(style: OutputStyle) -> (Console, SharedBuffer) {
    let buffer = SharedBuffer::new();
    let console = Console::new(
        Output::from_writer(buffer.clone()),
        style,
        Duration::from_millis(1),
    );
    (console, buffer)
}

/// Phase context over the real filesystem and a fake runner.
pub fn phase_context(settings: Settings, runner: FakeRunner, console: Console) -> PhaseContext {
    PhaseContext::new(settings, Box::new(runner), Arc::new(RealFileSystem), console)
}

/// Names of the files currently in `dir`.
pub fn dir_entries(dir: &Path) -> Vec<String> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

/// Subcommands (arguments joined by spaces) of every recorded invocation.
pub fn subcommands(invocations: &Arc<Mutex<Vec<brewup::exec::CommandSpec>>>) -> Vec<String> {
    invocations
        .lock()
        .unwrap()
        .iter()
        .map(|spec| spec.subcommand())
        .collect()
}
