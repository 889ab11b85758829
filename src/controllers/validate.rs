use std::{
    fs,
    io::{self, ErrorKind},
    path::{Path, PathBuf},
};

use crate::{config::DeployConfig, errors::DeployError};

/// Inputs that passed validation and are ready to be turned into a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPlan {
    pub binary: PathBuf,
    pub mapping: Option<PathBuf>,
}

/// `Ok(false)` only when the path is known not to exist. Any other failure to
/// stat the path is returned as an error.
pub fn path_exists(path: &Path) -> io::Result<bool> {
    match fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

fn ensure_exists(kind: &'static str, path: &Path) -> Result<(), DeployError> {
    match path_exists(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(DeployError::PathNotFound {
            kind,
            path: path.to_path_buf(),
        }),
        Err(source) => Err(DeployError::PathCheck {
            kind,
            path: path.to_path_buf(),
            source,
        }),
    }
}

pub fn validate(config: &DeployConfig) -> Result<UploadPlan, DeployError> {
    if config.apk_path.is_empty() {
        return Err(DeployError::MissingInput("apk_path"));
    }
    let binary = PathBuf::from(&config.apk_path);
    ensure_exists("apk", &binary)?;

    let mapping = if config.mapping_path.is_empty() {
        None
    } else {
        let mapping = PathBuf::from(&config.mapping_path);
        ensure_exists("mapping", &mapping)?;
        Some(mapping)
    };

    if config.api_token.is_empty() {
        return Err(DeployError::MissingInput("api_token"));
    }

    Ok(UploadPlan { binary, mapping })
}
