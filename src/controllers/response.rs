use std::fmt::Display;

use serde::{Deserialize, Deserializer};

use crate::{errors::DeployError, util::logs};

/// URLs returned by HockeyApp for an uploaded build. Missing or null fields
/// are left empty.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct UploadResponse {
    #[serde(deserialize_with = "null_as_empty")]
    pub config_url: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub public_url: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub build_url: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl UploadResponse {
    pub fn print_summary(&self) {
        println!();
        if !self.public_url.is_empty() {
            logs::done(format!("Public URL: {}", self.public_url));
        }
        if !self.build_url.is_empty() {
            logs::done(format!("Build (direct download) URL: {}", self.build_url));
        }
        if !self.config_url.is_empty() {
            logs::done(format!("Config URL: {}", self.config_url));
        }
    }
}

/// Accepted range is [200, 300); a 300 is a failure.
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Classifies a finished exchange. `body` is the outcome of reading the
/// response body, which only matters for a successful status.
pub fn interpret<E: Display>(
    status: u16,
    body: Result<String, E>,
) -> Result<UploadResponse, DeployError> {
    if !is_success(status) {
        match &body {
            Ok(body) => {
                logs::info("Response:");
                logs::details(format!("status code: {status}"));
                logs::details(format!("body: {body}"));
            }
            Err(e) => logs::warn(format!("Failed to read response body, error: {e}")),
        }
        return Err(DeployError::HttpStatus(status));
    }

    logs::done("Request succeeded");

    let body = body.map_err(|e| DeployError::BodyRead(e.to_string()))?;
    logs::info("Response:");
    logs::details(format!("status code: {status}"));
    logs::details(format!("body: {body}"));

    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(body: &str) -> Result<String, String> {
        Ok(body.to_string())
    }

    #[test]
    fn test_is_success_boundaries() {
        assert!(!is_success(199));
        assert!(is_success(200));
        assert!(is_success(201));
        assert!(is_success(299));
        assert!(!is_success(300));
        assert!(!is_success(404));
        assert!(!is_success(500));
    }

    #[test]
    fn test_interpret_success() {
        let body = r#"{"public_url":"https://a","build_url":"https://b","config_url":"https://c"}"#;
        let response = interpret(200, ok(body)).unwrap();
        assert_eq!(
            response,
            UploadResponse {
                config_url: "https://c".to_string(),
                public_url: "https://a".to_string(),
                build_url: "https://b".to_string(),
            }
        );
    }

    #[test]
    fn test_interpret_missing_and_null_fields() {
        let body = r#"{"public_url":null,"title":"My App","id":42}"#;
        let response = interpret(201, ok(body)).unwrap();
        assert_eq!(response, UploadResponse::default());
    }

    #[test]
    fn test_interpret_keeps_values_verbatim() {
        let body = r#"{"public_url":"https://rink.hockeyapp.net/apps/abc?x=1&y=%20"}"#;
        let response = interpret(200, ok(body)).unwrap();
        assert_eq!(
            response.public_url,
            "https://rink.hockeyapp.net/apps/abc?x=1&y=%20"
        );
    }

    #[test]
    fn test_interpret_not_found_skips_parsing() {
        let err = interpret(404, ok("this is not json")).unwrap_err();
        assert!(matches!(err, DeployError::HttpStatus(404)));
    }

    #[test]
    fn test_interpret_redirect_status_is_failure() {
        let body = r#"{"public_url":"https://a"}"#;
        let err = interpret(300, ok(body)).unwrap_err();
        assert!(matches!(err, DeployError::HttpStatus(300)));
    }

    #[test]
    fn test_interpret_failure_status_with_unreadable_body() {
        let err = interpret(500, Err::<String, _>("connection reset")).unwrap_err();
        assert!(matches!(err, DeployError::HttpStatus(500)));
    }

    #[test]
    fn test_interpret_body_read_failure() {
        let err = interpret(200, Err::<String, _>("connection reset")).unwrap_err();
        match err {
            DeployError::BodyRead(reason) => assert_eq!(reason, "connection reset"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_interpret_parse_failure() {
        let err = interpret(200, ok("<html>oops</html>")).unwrap_err();
        assert!(matches!(err, DeployError::Parse(_)));
    }
}
