use std::process::Stdio;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use tokio::{io::AsyncWriteExt, process::Command};

use crate::{
    consts::{
        DEPLOY_BUILD_URL_KEY, DEPLOY_CONFIG_URL_KEY, DEPLOY_PUBLIC_URL_KEY, DEPLOY_STATUS_FAILED,
        DEPLOY_STATUS_KEY, DEPLOY_STATUS_SUCCESS,
    },
    controllers::response::UploadResponse,
    errors::DeployError,
    util::logs,
};

/// Persists a key/value pair for later pipeline steps.
#[async_trait]
pub trait KeyValueExporter: Send + Sync {
    async fn export(&self, key: &str, value: &str) -> Result<()>;
}

/// Exports through `envman add --key <KEY>`, feeding the value on stdin.
pub struct EnvmanExporter {
    program: String,
}

impl EnvmanExporter {
    pub fn new() -> Self {
        Self {
            program: "envman".to_string(),
        }
    }
}

impl Default for EnvmanExporter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueExporter for EnvmanExporter {
    async fn export(&self, key: &str, value: &str) -> Result<()> {
        let mut child = Command::new(&self.program)
            .args(["add", "--key", key])
            .stdin(Stdio::piped())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .with_context(|| format!("Failed to run {}", self.program))?;

        // stdin is dropped at the end of the match so the child sees EOF
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(value.as_bytes()).await,
            None => Ok(()),
        };

        // reap the child even when the write failed
        let status = child.wait().await?;
        written.with_context(|| format!("Failed to pass the value to {}", self.program))?;
        if !status.success() {
            bail!("{} exited with {}", self.program, status);
        }

        Ok(())
    }
}

pub async fn export_success(
    exporter: &dyn KeyValueExporter,
    response: &UploadResponse,
) -> Result<(), DeployError> {
    let pairs = [
        (DEPLOY_STATUS_KEY, DEPLOY_STATUS_SUCCESS),
        (DEPLOY_PUBLIC_URL_KEY, response.public_url.as_str()),
        (DEPLOY_BUILD_URL_KEY, response.build_url.as_str()),
        (DEPLOY_CONFIG_URL_KEY, response.config_url.as_str()),
    ];

    for (key, value) in pairs {
        exporter
            .export(key, value)
            .await
            .map_err(|e| DeployError::Export {
                key,
                reason: format!("{e:#}"),
            })?;
    }

    Ok(())
}

/// Best effort, the step is failing anyway.
pub async fn export_failure(exporter: &dyn KeyValueExporter) {
    if let Err(e) = exporter.export(DEPLOY_STATUS_KEY, DEPLOY_STATUS_FAILED).await {
        logs::warn(format!("Failed to export {DEPLOY_STATUS_KEY}, error: {e:#}"));
    }
}
