// src/config/mod.rs

//! Settings loading and validation for brewup.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a settings file from disk, or fall back to defaults (`loader.rs`).
//! - Validate and resolve raw values into [`Settings`] (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, load_or_default};
pub use model::{RawSettings, Settings};
