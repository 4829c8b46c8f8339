//! Transient data held by the upload view.
//!
//! Nothing here is persisted. A [`SelectedFile`] lives until the next pick or
//! clear, and a [`ParsedResume`] only ever comes from one successful response.
//!
//! # Response mapping
//!
//! The service answers with
//!
//! ```text
//! { "data": { "_id": "...", "parsedData": {
//!     "skills": [..], "email": "..", "phone": "..", "links": [..], "text": ".." } } }
//! ```
//!
//! Leaf fields are read leniently: a missing or non-array list is empty, a
//! missing or non-string scalar is the empty string. A body without
//! `data.parsedData` is rejected as [`ApiError::MalformedResponse`].

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;

/// File chosen in the picker.
///
/// Contents are opaque; only the name is looked at (for the part MIME type).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    contents: Arc<[u8]>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, contents: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contents(&self) -> &[u8] {
        &self.contents
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// MIME type for the multipart part, from the file extension.
    pub fn mime_type(&self) -> &'static str {
        let extension = self
            .name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("pdf") => "application/pdf",
            Some("doc") => "application/msword",
            Some("docx") => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            _ => "application/octet-stream",
        }
    }
}

/// Fields extracted by the parsing service.
///
/// `Default` is the fully empty result. Empty `email`/`phone` mean "absent".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedResume {
    pub skills: Vec<String>,
    pub email: String,
    pub phone: String,
    pub links: Vec<String>,
    pub text: String,
}

impl ParsedResume {
    /// Links joined for single-line display.
    pub fn links_line(&self) -> String {
        self.links.join(", ")
    }
}

/// Mapped payload of a successful upload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUpload {
    /// Server-assigned identifier of the stored resume
    pub resume_id: Option<String>,
    pub resume: ParsedResume,
}

// =============================================================================
// Wire Envelope
// =============================================================================

/// Top-level JSON body returned by the parsing service.
#[derive(Debug, Default, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub data: Option<UploadRecord>,
}

/// The stored resume record inside the envelope.
#[derive(Debug, Default, Deserialize)]
pub struct UploadRecord {
    #[serde(rename = "_id", default)]
    pub id: Value,
    #[serde(rename = "parsedData", default)]
    pub parsed_data: Option<RawParsedData>,
}

/// Parsed fields as sent, before defaulting.
#[derive(Debug, Default, Deserialize)]
pub struct RawParsedData {
    #[serde(default)]
    pub skills: Value,
    #[serde(default)]
    pub email: Value,
    #[serde(default)]
    pub phone: Value,
    #[serde(default)]
    pub links: Value,
    #[serde(default)]
    pub text: Value,
}

impl UploadResponse {
    /// Decodes a response body.
    pub fn from_slice(body: &[u8]) -> Result<Self, ApiError> {
        serde_json::from_slice(body)
            .map_err(|e| ApiError::MalformedResponse(format!("Invalid JSON body: {}", e)))
    }
}

impl TryFrom<UploadResponse> for ParsedUpload {
    type Error = ApiError;

    fn try_from(response: UploadResponse) -> Result<Self, Self::Error> {
        let record = response
            .data
            .ok_or_else(|| ApiError::MalformedResponse("missing `data`".to_string()))?;
        let parsed = record
            .parsed_data
            .ok_or_else(|| ApiError::MalformedResponse("missing `data.parsedData`".to_string()))?;

        Ok(ParsedUpload {
            resume_id: identifier(&record.id),
            resume: parsed.into(),
        })
    }
}

impl From<RawParsedData> for ParsedResume {
    fn from(raw: RawParsedData) -> Self {
        ParsedResume {
            skills: string_list(&raw.skills),
            email: string_or_empty(&raw.email),
            phone: string_or_empty(&raw.phone),
            links: string_list(&raw.links),
            text: string_or_empty(&raw.text),
        }
    }
}

fn string_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

fn string_or_empty(value: &Value) -> String {
    value.as_str().unwrap_or_default().to_string()
}

fn identifier(value: &Value) -> Option<String> {
    match value {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}
