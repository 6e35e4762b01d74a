// src/config/model.rs

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_BREW: &str = "brew";
pub const DEFAULT_BREWFILE: &str = "~/.Brewfile";
pub const DEFAULT_PLATFORM: &str = "macos";
pub const DEFAULT_INSTALL_SCRIPT_URL: &str =
    "https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh";
pub const DEFAULT_SPINNER_INTERVAL_MS: u64 = 80;

/// Settings as read from a TOML file.
///
/// ```toml
/// brew = "/opt/homebrew/bin/brew"
/// brewfile = "~/.Brewfile"
/// temp_dir = "/tmp"
/// platform = "macos"
/// spinner_interval_ms = 80
/// strict = false
/// ```
///
/// Every key is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSettings {
    /// Program name or path of the package manager.
    #[serde(default = "default_brew")]
    pub brew: String,

    /// Manifest used by the bundle phase. A leading `~/` is expanded.
    #[serde(default = "default_brewfile")]
    pub brewfile: String,

    /// Directory for capture files. Defaults to the system temp dir.
    #[serde(default)]
    pub temp_dir: Option<PathBuf>,

    /// Expected value of `std::env::consts::OS`.
    #[serde(default = "default_platform")]
    pub platform: String,

    /// Remote installer fetched when the package manager is missing.
    #[serde(default = "default_install_script_url")]
    pub install_script_url: String,

    /// Spinner redraw cadence.
    #[serde(default = "default_spinner_interval_ms")]
    pub spinner_interval_ms: u64,

    /// Report subprocesses that exit non-zero instead of only logging them.
    #[serde(default)]
    pub strict: bool,
}

fn default_brew() -> String {
    DEFAULT_BREW.to_string()
}

fn default_brewfile() -> String {
    DEFAULT_BREWFILE.to_string()
}

fn default_platform() -> String {
    DEFAULT_PLATFORM.to_string()
}

fn default_install_script_url() -> String {
    DEFAULT_INSTALL_SCRIPT_URL.to_string()
}

fn default_spinner_interval_ms() -> u64 {
    DEFAULT_SPINNER_INTERVAL_MS
}

impl Default for RawSettings {
    fn default() -> Self {
        Self {
            brew: default_brew(),
            brewfile: default_brewfile(),
            temp_dir: None,
            platform: default_platform(),
            install_script_url: default_install_script_url(),
            spinner_interval_ms: default_spinner_interval_ms(),
            strict: false,
        }
    }
}

/// Validated settings with paths resolved.
///
/// Construct via `Settings::try_from(raw)` so validation always runs.
#[derive(Debug, Clone)]
pub struct Settings {
    pub brew: String,
    pub brewfile: PathBuf,
    pub temp_dir: PathBuf,
    pub platform: String,
    pub install_script_url: String,
    pub spinner_interval: Duration,
    pub strict: bool,
}
