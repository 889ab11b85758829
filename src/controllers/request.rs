use std::path::Path;

use reqwest::{
    multipart::{Form, Part},
    Client, Request,
};
use url::Url;

use crate::{
    config::UploadFields,
    consts::{BINARY_FIELD, HOCKEYAPP_TOKEN_HEADER, MAPPING_FIELD},
    controllers::validate::UploadPlan,
    errors::DeployError,
};

/// New app upload when `app_id` is empty, otherwise a new version of that app.
pub fn upload_url(api_host: &str, app_id: &str) -> Result<Url, DeployError> {
    let invalid = || DeployError::InvalidApiHost(api_host.to_string());

    let mut url = Url::parse(api_host).map_err(|_| invalid())?;
    {
        let mut segments = url.path_segments_mut().map_err(|_| invalid())?;
        segments.pop_if_empty().extend(["api", "2", "apps"]);
        if app_id.is_empty() {
            segments.push("upload");
        } else {
            segments.extend([app_id, "app_versions", "upload"]);
        }
    }
    Ok(url)
}

/// Builds the multipart body. Files are read completely before returning, so
/// no handle outlives this call.
pub async fn build_form(fields: &UploadFields, plan: &UploadPlan) -> Result<Form, DeployError> {
    let mut form = Form::new();
    for (name, value) in fields.pairs() {
        form = form.text(name, value.to_string());
    }

    form = form.part(BINARY_FIELD, file_part(&plan.binary).await?);
    if let Some(mapping) = &plan.mapping {
        form = form.part(MAPPING_FIELD, file_part(mapping).await?);
    }

    Ok(form)
}

async fn file_part(path: &Path) -> Result<Part, DeployError> {
    let contents = tokio::fs::read(path)
        .await
        .map_err(|source| DeployError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

    Part::bytes(contents)
        .file_name(upload_file_name(path))
        .mime_str("application/octet-stream")
        .map_err(DeployError::BuildRequest)
}

/// The path exactly as configured, directories included.
pub fn upload_file_name(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

pub fn build_request(
    client: &Client,
    url: Url,
    api_token: &str,
    form: Form,
) -> Result<Request, DeployError> {
    client
        .post(url)
        .header(HOCKEYAPP_TOKEN_HEADER, api_token)
        .multipart(form)
        .build()
        .map_err(DeployError::BuildRequest)
}
