// src/config/validate.rs

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::model::{RawSettings, Settings};
use crate::errors::{BrewupError, Result};

impl TryFrom<RawSettings> for Settings {
    type Error = BrewupError;

    fn try_from(raw: RawSettings) -> std::result::Result<Self, Self::Error> {
        validate_raw_settings(&raw)?;

        let brewfile = expand_home(&raw.brewfile, dirs::home_dir().as_deref());
        let temp_dir = raw.temp_dir.unwrap_or_else(std::env::temp_dir);

        Ok(Settings {
            brew: raw.brew,
            brewfile,
            temp_dir,
            platform: raw.platform,
            install_script_url: raw.install_script_url,
            spinner_interval: Duration::from_millis(raw.spinner_interval_ms),
            strict: raw.strict,
        })
    }
}

fn validate_raw_settings(raw: &RawSettings) -> Result<()> {
    if raw.brew.trim().is_empty() {
        return Err(BrewupError::Config("`brew` must not be empty".to_string()));
    }

    if raw.platform.trim().is_empty() {
        return Err(BrewupError::Config(
            "`platform` must not be empty".to_string(),
        ));
    }

    if !(1..=1000).contains(&raw.spinner_interval_ms) {
        return Err(BrewupError::Config(format!(
            "`spinner_interval_ms` must be between 1 and 1000 (got {})",
            raw.spinner_interval_ms
        )));
    }

    if !raw.install_script_url.starts_with("https://") {
        return Err(BrewupError::Config(format!(
            "`install_script_url` must use https (got {})",
            raw.install_script_url
        )));
    }

    Ok(())
}

/// Expand a leading `~/` against `home`.
///
/// Paths without the prefix, or a missing home directory, are returned as-is.
pub fn expand_home(path: &str, home: Option<&Path>) -> PathBuf {
    match (path.strip_prefix("~/"), home) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
