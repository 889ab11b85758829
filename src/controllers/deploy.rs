use crate::{
    client,
    config::DeployConfig,
    controllers::{
        export::{export_failure, export_success, KeyValueExporter},
        request::{build_form, build_request, upload_url},
        response::UploadResponse,
        validate::validate,
    },
    errors::DeployError,
    util::logs,
};

/// Runs the whole step. On any failure the failed status is exported before
/// the error is handed back to the caller.
pub async fn run(
    config: &DeployConfig,
    exporter: &dyn KeyValueExporter,
) -> Result<UploadResponse, DeployError> {
    match upload(config, exporter).await {
        Ok(response) => Ok(response),
        Err(e) => {
            export_failure(exporter).await;
            Err(e)
        }
    }
}

async fn upload(
    config: &DeployConfig,
    exporter: &dyn KeyValueExporter,
) -> Result<UploadResponse, DeployError> {
    config.print();
    let plan = validate(config)?;

    logs::info("Performing request");
    let url = upload_url(&config.api_host, &config.app_id)?;
    let form = build_form(&config.fields, &plan).await?;
    let client = client::build_client()?;
    let request = build_request(&client, url, &config.api_token, form)?;

    let response = client::send_upload(&client, request).await?;
    response.print_summary();

    export_success(exporter, &response).await?;
    Ok(response)
}
