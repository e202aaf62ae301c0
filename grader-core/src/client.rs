use grader_common::{SubmitRequest, SubmitResult};
use serde::Deserialize;
use tracing::{info, warn};

use crate::config::Config;

/// Posts modal form submissions to the grading server.
///
/// With no base URL, endpoints are requested as given, which in the browser
/// resolves them against the current page origin.
#[derive(Clone, Debug)]
pub struct FormClient {
    base_url: Option<String>,
    http: reqwest::Client,
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{message}")]
    Status { status: u16, message: String },
}

/// Error body shapes the server may answer with
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

impl FormClient {
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            base_url: base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty()),
            http: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.base_url.clone())
    }

    fn url_for(&self, endpoint: &str) -> String {
        match &self.base_url {
            Some(base) if endpoint.starts_with('/') => format!("{base}{endpoint}"),
            Some(base) => format!("{base}/{endpoint}"),
            None => endpoint.to_string(),
        }
    }

    /// POST the request body as JSON. Any 2xx status is success.
    pub async fn post(&self, request: &SubmitRequest) -> Result<(), ClientError> {
        let url = self.url_for(&request.endpoint);
        let resp = self.http.post(&url).json(&request.body).send().await?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }

        let text = resp.text().await.unwrap_or_default();
        Err(ClientError::Status {
            status: status.as_u16(),
            message: error_message(status, &text),
        })
    }

    /// POST and fold the outcome into a [`SubmitResult`] for the form state.
    pub async fn submit(&self, request: &SubmitRequest) -> SubmitResult {
        info!("Submitting form to {}", request.endpoint);
        match self.post(request).await {
            Ok(()) => {
                info!("Form submitted to {}", request.endpoint);
                SubmitResult::Success
            }
            Err(e) => {
                warn!("Form submit to {} failed: {}", request.endpoint, e);
                SubmitResult::failure(e.to_string())
            }
        }
    }
}

/// User-facing message for a non-2xx response.
///
/// Prefers an `error` or `message` string from a JSON body, falling back to
/// the status line.
fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error.or(b.message))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("Server error: {status}"))
}
