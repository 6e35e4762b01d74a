// tests/config.rs

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tempfile::NamedTempFile;

use brewup::config::validate::expand_home;
use brewup::config::{load_and_validate, RawSettings, Settings};
use brewup::errors::BrewupError;

#[test]
fn full_settings_file_is_loaded() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
brew = "/opt/homebrew/bin/brew"
brewfile = "/etc/Brewfile"
temp_dir = "/var/tmp"
platform = "macos"
spinner_interval_ms = 120
strict = true
"#
    )
    .unwrap();

    let settings = load_and_validate(file.path()).unwrap();

    assert_eq!(settings.brew, "/opt/homebrew/bin/brew");
    assert_eq!(settings.brewfile, PathBuf::from("/etc/Brewfile"));
    assert_eq!(settings.temp_dir, PathBuf::from("/var/tmp"));
    assert_eq!(settings.spinner_interval, Duration::from_millis(120));
    assert!(settings.strict);
}

#[test]
fn empty_file_yields_defaults() {
    let file = NamedTempFile::new().unwrap();

    let settings = load_and_validate(file.path()).unwrap();

    assert_eq!(settings.brew, "brew");
    assert_eq!(settings.spinner_interval, Duration::from_millis(80));
    assert_eq!(settings.temp_dir, std::env::temp_dir());
    assert!(!settings.strict);
}

#[test]
fn unknown_key_is_a_toml_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "brw = \"brew\"\n").unwrap();

    match load_and_validate(file.path()) {
        Err(BrewupError::TomlError(_)) => {}
        other => panic!("expected TomlError, got {other:?}"),
    }
}

#[test]
fn zero_spinner_interval_is_rejected() {
    let raw = RawSettings {
        spinner_interval_ms: 0,
        ..RawSettings::default()
    };

    match Settings::try_from(raw) {
        Err(BrewupError::Config(msg)) => assert!(msg.contains("spinner_interval_ms")),
        other => panic!("expected Config error, got {other:?}"),
    }
}

#[test]
fn plain_http_installer_is_rejected() {
    let raw = RawSettings {
        install_script_url: "http://example.com/install.sh".to_string(),
        ..RawSettings::default()
    };

    match Settings::try_from(raw) {
        Err(BrewupError::Config(msg)) => assert!(msg.contains("https")),
        other => panic!("expected Config error, got {other:?}"),
    }
}

#[test]
fn blank_brew_is_rejected() {
    let raw = RawSettings {
        brew: "  ".to_string(),
        ..RawSettings::default()
    };

    assert!(matches!(Settings::try_from(raw), Err(BrewupError::Config(_))));
}

#[test]
fn tilde_is_expanded_against_home() {
    let home = Path::new("/Users/someone");

    assert_eq!(
        expand_home("~/.Brewfile", Some(home)),
        PathBuf::from("/Users/someone/.Brewfile")
    );
    assert_eq!(expand_home("/etc/Brewfile", Some(home)), PathBuf::from("/etc/Brewfile"));
    assert_eq!(expand_home("~/.Brewfile", None), PathBuf::from("~/.Brewfile"));
}
