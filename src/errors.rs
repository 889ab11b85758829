use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeployError {
    #[error("Failed to read inputs, {0}")]
    Arguments(#[from] clap::Error),

    #[error("Missing required input: {0}")]
    MissingInput(&'static str),

    #[error("No {kind} found to deploy. Specified path was: {path}")]
    PathNotFound { kind: &'static str, path: PathBuf },

    #[error("Failed to check if {kind} ({path}) exist, error: {source}")]
    PathCheck {
        kind: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {path} for upload, error: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid API host \"{0}\"")]
    InvalidApiHost(String),

    #[error("Failed to create request, error: {0}")]
    BuildRequest(#[source] reqwest::Error),

    #[error("Performing request failed, error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Performing request failed, status code: {0}")]
    HttpStatus(u16),

    #[error("Failed to read response body, error: {0}")]
    BodyRead(String),

    #[error("Failed to parse response body, error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to export {key}, error: {reason}")]
    Export { key: &'static str, reason: String },
}
