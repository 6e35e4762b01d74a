// src/errors.rs

//! Crate-wide error type and exit-code mapping.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrewupError {
    #[error("unsupported platform: expected {expected}, found {actual}")]
    UnsupportedPlatform { expected: String, actual: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("interrupted")]
    Interrupted,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BrewupError {
    /// Process exit code for this error.
    ///
    /// `2` is reserved for a user interrupt; every other fatal error,
    /// including running on the wrong platform, exits with `1`.
    pub fn exit_code(&self) -> i32 {
        match self {
            BrewupError::Interrupted => 2,
            _ => 1,
        }
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, BrewupError>;
