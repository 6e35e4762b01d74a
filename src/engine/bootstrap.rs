// src/engine/bootstrap.rs

//! Fetching the package manager's remote install script.

use std::future::Future;
use std::pin::Pin;

use anyhow::Context;
use tracing::debug;

use crate::errors::Result;

/// Where the install script comes from.
///
/// Production uses [`HttpScriptSource`]; tests return a canned script.
pub trait InstallScriptSource: Send + Sync {
    fn fetch(&self, url: &str) -> Pin<Box<dyn Future<Output = Result<String>> + Send + '_>>;
}

/// Downloads the script over HTTPS.
#[derive(Debug, Clone, Default)]
pub struct HttpScriptSource {
    client: reqwest::Client,
}

impl HttpScriptSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InstallScriptSource for HttpScriptSource {
    fn fetch(&self, url: &str) -> Pin<Box<dyn Future<Output = Result<String>> + Send + '_>> {
        let url = url.to_string();

        Box::pin(async move {
            debug!(%url, "fetching install script");
            let script = self
                .client
                .get(&url)
                .send()
                .await
                .and_then(|resp| resp.error_for_status())
                .with_context(|| format!("downloading install script from {url}"))?
                .text()
                .await
                .with_context(|| format!("reading install script from {url}"))?;
            Ok(script)
        })
    }
}
