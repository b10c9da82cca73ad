/// HTTP client for the detection endpoint
///
/// `POST {base_url}/detect` with a multipart form holding a single `file`
/// field. A 2xx answer carries the diagnosis as JSON; anything else is a
/// failure, and error bodies are not inspected.

use reqwest::multipart::{Form, Part};
use reqwest::{StatusCode, Url};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::config::ApiSettings;
use crate::state::data::{DiagnosisResult, PickedFile};
use crate::upload::guess_mime;

#[derive(Debug, Error)]
pub enum DetectError {
    #[error("Invalid detection endpoint {url}: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Detection service answered {0}")]
    Status(StatusCode),

    #[error("Malformed detection response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct DetectionClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl DetectionClient {
    pub fn new(settings: &ApiSettings) -> Result<Self, DetectError> {
        let endpoint = detect_url(&settings.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Upload `file` and decode the diagnosis
    pub async fn detect(&self, file: PickedFile) -> Result<DiagnosisResult, DetectError> {
        let size = file.bytes.len();
        let part = Part::bytes(file.bytes)
            .file_name(file.name.clone())
            .mime_str(guess_mime(&file.name))?;
        let form = Form::new().part("file", part);

        debug!("POST {} ({}, {} bytes)", self.endpoint, file.name, size);
        let response = self
            .http
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DetectError::Status(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// `{base}/detect`, tolerating a trailing slash on the base URL
fn detect_url(base_url: &str) -> Result<Url, DetectError> {
    let raw = format!("{}/detect", base_url.trim().trim_end_matches('/'));
    let url = Url::parse(&raw).map_err(|e| DetectError::InvalidEndpoint {
        url: base_url.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(DetectError::InvalidEndpoint {
            url: base_url.to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}
