#![allow(dead_code)]

use std::path::{Path, PathBuf};

use brewup::config::{RawSettings, Settings};

/// Builder for `Settings` to simplify test setup.
///
/// Defaults to a 1 ms spinner cadence, the given capture directory, a
/// Brewfile path that does not exist and the current host as the expected
/// platform.
pub struct SettingsBuilder {
    raw: RawSettings,
}

impl SettingsBuilder {
    pub fn new(temp_dir: &Path) -> Self {
        Self {
            raw: RawSettings {
                temp_dir: Some(temp_dir.to_path_buf()),
                brewfile: "/nonexistent/brewup-test/.Brewfile".to_string(),
                platform: std::env::consts::OS.to_string(),
                spinner_interval_ms: 1,
                ..RawSettings::default()
            },
        }
    }

    pub fn brewfile(mut self, path: impl Into<PathBuf>) -> Self {
        self.raw.brewfile = path.into().to_string_lossy().into_owned();
        self
    }

    pub fn platform(mut self, platform: &str) -> Self {
        self.raw.platform = platform.to_string();
        self
    }

    pub fn strict(mut self, val: bool) -> Self {
        self.raw.strict = val;
        self
    }

    pub fn build(self) -> Settings {
        Settings::try_from(self.raw).expect("Failed to build valid settings from builder")
    }
}
