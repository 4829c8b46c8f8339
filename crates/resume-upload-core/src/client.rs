//! Client for the remote resume-parsing service.
//!
//! [`ResumeParser`] is the seam between the upload lifecycle and the network:
//! the view only ever sees a `Result<ParsedUpload, ApiError>`, which keeps the
//! lifecycle testable with scripted parsers.
//!
//! [`HttpResumeParser`] is the production implementation. reqwest works on both
//! native and WASM targets:
//! - Native: hyper with rustls, a cookie store for credentials, and a request timeout
//! - WASM: browser `fetch()` with `credentials: include`

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::debug;

use crate::config::UploadConfig;
use crate::error::ApiError;
use crate::model::{ParsedUpload, SelectedFile, UploadResponse};

/// Sends one file to a parsing service and maps its answer.
///
/// Declared `?Send`: requests are driven from a single-threaded UI executor,
/// and the browser fetch future is not `Send`.
#[async_trait(?Send)]
pub trait ResumeParser {
    /// Uploads `file` and returns the mapped payload. Never retries.
    async fn parse(&self, file: &SelectedFile) -> Result<ParsedUpload, ApiError>;
}

/// Multipart upload over HTTP.
#[derive(Debug, Clone)]
pub struct HttpResumeParser {
    client: reqwest::Client,
    endpoint: url::Url,
    field_name: String,
}

impl HttpResumeParser {
    /// Builds a parser for `config`, validating its endpoint.
    pub fn new(config: UploadConfig) -> Result<Self, ApiError> {
        let endpoint = config.validate()?;
        let client = build_client(&config)?;

        Ok(Self {
            client,
            endpoint,
            field_name: config.field_name,
        })
    }

    pub fn endpoint(&self) -> &url::Url {
        &self.endpoint
    }

    fn form(&self, file: &SelectedFile) -> Result<Form, ApiError> {
        let part = Part::bytes(file.contents().to_vec())
            .file_name(file.name().to_string())
            .mime_str(file.mime_type())
            .map_err(|e| ApiError::Request(format!("Invalid part MIME type: {}", e)))?;

        Ok(Form::new().part(self.field_name.clone(), part))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client(config: &UploadConfig) -> Result<reqwest::Client, ApiError> {
    reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout)
        .cookie_store(true)
        .build()
        .map_err(|e| ApiError::ClientBuild(e.to_string()))
}

#[cfg(target_arch = "wasm32")]
fn build_client(_config: &UploadConfig) -> Result<reqwest::Client, ApiError> {
    reqwest::Client::builder()
        .build()
        .map_err(|e| ApiError::ClientBuild(e.to_string()))
}

#[async_trait(?Send)]
impl ResumeParser for HttpResumeParser {
    async fn parse(&self, file: &SelectedFile) -> Result<ParsedUpload, ApiError> {
        // reqwest sets the multipart/form-data content type with its boundary
        let request = self
            .client
            .post(self.endpoint.clone())
            .multipart(self.form(file)?);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Request(format!("Failed to POST {}: {}", self.endpoint, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Request(format!("Failed to read response body: {}", e)))?;

        debug!("Parsing service answered {} with {} bytes", status, body.len());

        ParsedUpload::try_from(UploadResponse::from_slice(&body)?)
    }
}
