//! Upload configuration.
//!
//! [`UploadConfig::default()`] is the production configuration. Overrides exist
//! so the endpoint can be pointed elsewhere (staging servers, tests).
//!
//! ```
//! use resume_upload_core::config::{UploadConfig, DEFAULT_ENDPOINT};
//!
//! let config = UploadConfig::default();
//! assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
//! assert_eq!(config.accept_attribute(), ".pdf,.doc,.docx");
//! ```

use std::time::Duration;

use crate::error::ApiError;

// =============================================================================
// Wire Contract
// =============================================================================

/// Parsing service endpoint that receives the multipart upload.
pub const DEFAULT_ENDPOINT: &str = "https://jobscibe.onrender.com/api/resume/upload";

/// Multipart form field that carries the file.
pub const FORM_FIELD: &str = "resume";

/// Extensions offered by the file picker.
///
/// The filter is advisory. Nothing in this crate rejects other files.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = [".pdf", ".doc", ".docx"];

// =============================================================================
// Native Client
// =============================================================================

/// Request timeout for the native client.
///
/// The browser `fetch` backend has no client-side timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent sent by the native client.
pub const USER_AGENT: &str = concat!("resume-upload/", env!("CARGO_PKG_VERSION"));

/// Settings for the upload request and the file picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadConfig {
    /// URL the file is POSTed to.
    pub endpoint: String,
    /// Name of the multipart field holding the file.
    pub field_name: String,
    /// Extensions (with leading dot) offered by the picker.
    pub accepted_extensions: Vec<String>,
    /// Native request timeout.
    pub timeout: Duration,
    /// Native user agent.
    pub user_agent: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            field_name: FORM_FIELD.to_string(),
            accepted_extensions: ACCEPTED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            timeout: REQUEST_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl UploadConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_field_name(mut self, field_name: impl Into<String>) -> Self {
        self.field_name = field_name.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Value for the `accept` attribute of an HTML file input.
    pub fn accept_attribute(&self) -> String {
        self.accepted_extensions.join(",")
    }

    /// Extensions without the leading dot, as native file dialogs expect them.
    pub fn picker_extensions(&self) -> Vec<&str> {
        self.accepted_extensions
            .iter()
            .map(|e| e.trim_start_matches('.'))
            .collect()
    }

    /// Checks that the endpoint is an absolute http(s) URL.
    pub fn validate(&self) -> Result<url::Url, ApiError> {
        let parsed = url::Url::parse(&self.endpoint)
            .map_err(|e| ApiError::InvalidEndpoint(format!("{}: {}", self.endpoint, e)))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ApiError::InvalidEndpoint(format!(
                "Unsupported scheme: {} (only http/https allowed)",
                parsed.scheme()
            )));
        }

        Ok(parsed)
    }
}
