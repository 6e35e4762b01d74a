// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`command`] describes one external invocation and where its output goes.
//! - [`backend`] provides the `CommandRunner` / `Job` traits and the
//!   production `RealCommandRunner`. Tests swap in a fake runner that records
//!   invocations and writes scripted output.
//! - [`process`] wraps a spawned `tokio::process::Child` as a pollable job.

pub mod backend;
pub mod command;
pub mod process;

pub use backend::{CommandRunner, Job, RealCommandRunner};
pub use command::{CommandSpec, OutputTarget};
pub use process::ProcessJob;
