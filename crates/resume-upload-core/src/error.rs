//! Error types for the upload lifecycle.
//!
//! Two layers:
//! - [`UploadError`] is what the user sees. Its `Display` text is the inline
//!   message rendered under the upload button.
//! - [`ApiError`] is the diagnostic detail of a failed request. It is logged and
//!   never rendered.

use thiserror::Error;

/// Recoverable, user-facing errors shown inline by the component.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// Upload was invoked with no file selected
    #[error("Please select a file first.")]
    NoFileSelected,
    /// The outbound request failed for any reason
    #[error("Failed to upload resume. Try again.")]
    UploadFailed,
}

/// Failures of the outbound request to the parsing service.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Endpoint is not an absolute http(s) URL
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
    /// Transport-level failure (DNS, TLS, connection, timeout, body read)
    #[error("Request failed: {0}")]
    Request(String),
    /// Server answered with a non-success status
    #[error("Server returned status {0}")]
    Status(u16),
    /// Body was not JSON or lacked `data.parsedData`
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl From<ApiError> for UploadError {
    fn from(_: ApiError) -> Self {
        UploadError::UploadFailed
    }
}
