use reqwest::{Client, Request};

use crate::{
    consts,
    controllers::response::{self, UploadResponse},
    errors::DeployError,
    util::progress,
};

/// Client for the upload call. No timeout is set; large binaries on slow
/// links can take as long as they need.
pub fn build_client() -> Result<Client, DeployError> {
    Client::builder()
        .user_agent(consts::get_user_agent())
        .build()
        .map_err(DeployError::BuildRequest)
}

/// Sends the upload and waits for the whole response body.
pub async fn send_upload(client: &Client, request: Request) -> Result<UploadResponse, DeployError> {
    let spinner = progress::create_spinner("Uploading");

    let response = match client.execute(request).await {
        Ok(response) => response,
        Err(e) => {
            progress::clear_spinner(spinner);
            return Err(DeployError::Transport(e));
        }
    };

    let status = response.status().as_u16();
    let body = response.text().await;
    progress::clear_spinner(spinner);

    response::interpret(status, body)
}

