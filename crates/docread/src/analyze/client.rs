//! Document Intelligence REST client
//!
//! Thin wrapper over the analyze endpoint: one POST to start the long-running
//! operation, then polling of the returned `operation-location` URL until the
//! service reports a terminal status. Retries and backoff beyond this simple
//! poll loop are the service's concern, not ours.

use std::path::{Path, PathBuf};
use std::time::Duration;

use docread_core::analysis::AnalyzeResult;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::Deserialize;

use crate::analyze::DiConfig;
use crate::prelude::*;

/// The fixed OCR/layout model identifier used for every request.
pub const READ_MODEL: &str = "prebuilt-read";

const API_VERSION: &str = "2024-11-30";
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Failures from file I/O or the remote analyze operation.
///
/// The single wrapping boundary: everything here becomes
/// [`Error::AnalysisFailed`](crate::error::Error) at the driver's call site,
/// with the original cause preserved.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service rejected the request [{status}]: {body}")]
    Rejected {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("response is missing the operation-location header")]
    MissingOperationLocation,

    #[error("analysis ended with status '{0}'")]
    Failed(String),

    #[error("analysis succeeded but returned no result")]
    EmptyResult,
}

/// The document to analyze: raw bytes or a URL reference.
#[derive(Debug)]
pub enum AnalyzeBody {
    Bytes {
        content_type: &'static str,
        data: Vec<u8>,
    },
    UrlSource(String),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OperationStatus {
    status: String,
    #[serde(default)]
    analyze_result: Option<AnalyzeResult>,
}

/// An authenticated Document Intelligence client.
pub struct DocumentClient {
    http: reqwest::Client,
    endpoint: String,
    poll_interval: Duration,
}

impl DocumentClient {
    /// Build a client from validated configuration.
    ///
    /// The API key goes into a default header, so every request the client
    /// sends is authenticated.
    pub fn new(config: &DiConfig) -> Result<Self, Error> {
        let mut key = HeaderValue::from_str(&config.key)
            .map_err(|e| Error::Configuration(f!("{} is not a valid header value: {e}", super::KEY_VAR)))?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("Ocp-Apim-Subscription-Key", key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Configuration(f!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
        })
    }

    /// Override the delay between status polls. Tests shrink this.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Submit a document for analysis and block until the operation completes.
    ///
    /// One outstanding request at a time; the operation runs to completion or
    /// fails, with no local retry and no cancellation path.
    pub async fn submit_and_wait(
        &self,
        model_id: &str,
        body: AnalyzeBody,
    ) -> Result<AnalyzeResult, ClientError> {
        let analyze_url = format!(
            "{}/documentintelligence/documentModels/{}:analyze?api-version={}",
            self.endpoint, model_id, API_VERSION
        );

        let request = match body {
            AnalyzeBody::Bytes { content_type, data } => self
                .http
                .post(&analyze_url)
                .header(CONTENT_TYPE, content_type)
                .body(data),
            AnalyzeBody::UrlSource(url) => self
                .http
                .post(&analyze_url)
                .json(&serde_json::json!({ "urlSource": url })),
        };

        let response = request.send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Rejected { status, body });
        }

        let operation_location = response
            .headers()
            .get("operation-location")
            .and_then(|value| value.to_str().ok())
            .ok_or(ClientError::MissingOperationLocation)?
            .to_string();
        log::debug!("operation location: {operation_location}");

        loop {
            tokio::time::sleep(self.poll_interval).await;

            let status: OperationStatus = self
                .http
                .get(&operation_location)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;
            log::debug!("operation status: {}", status.status);

            match status.status.as_str() {
                "succeeded" => return status.analyze_result.ok_or(ClientError::EmptyResult),
                "running" | "notStarted" => continue,
                other => return Err(ClientError::Failed(other.to_string())),
            }
        }
    }
}

/// Content type for binary submission, derived from the file extension.
pub fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("pdf") => "application/pdf",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("tiff") | Some("tif") => "image/tiff",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}
