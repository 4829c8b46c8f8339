//! # Resume Upload Core
//!
//! Platform-independent logic behind the resume upload component.
//!
//! The component lets a user pick one resume file, sends it to a remote parsing
//! API, and shows what the service extracted (skills, email, phone, links).
//! Everything interesting happens server-side; this crate owns the lifecycle
//! around that single request so the UI crate only has to render it.
//!
//! ## Modules
//!
//! - [`view`] - The upload lifecycle state machine and the parent-facing observer
//! - [`client`] - The [`ResumeParser`] seam and its `reqwest` implementation
//! - [`model`] - Selected file, parsed result, and response envelope mapping
//! - [`config`] - Endpoint, form field, and accepted file extensions
//! - [`error`] - User-facing and diagnostic error types
//!
//! ## Example
//!
//! ```ignore
//! use resume_upload_core::{HttpResumeParser, SelectedFile, UploadConfig, UploadView};
//!
//! let parser = HttpResumeParser::new(UploadConfig::default())?;
//! let mut view = UploadView::new();
//!
//! view.select_file(Some(SelectedFile::new("cv.pdf", bytes)), &mut observer);
//! if let Some(ticket) = view.begin_upload() {
//!     let outcome = ticket.dispatch(&parser).await;
//!     view.finish_upload(outcome, &mut observer);
//! }
//! ```

#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod view;

#[cfg(test)]
pub(crate) mod test_utils;

pub use client::{HttpResumeParser, ResumeParser};
pub use config::UploadConfig;
pub use error::{ApiError, UploadError};
pub use model::{ParsedResume, ParsedUpload, SelectedFile, UploadResponse};
pub use view::{UploadObserver, UploadOutcome, UploadPhase, UploadTicket, UploadView};
