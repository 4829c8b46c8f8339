//! Upload lifecycle state machine.
//!
//! [`UploadView`] holds everything the upload component shows: the picked file,
//! the busy flag, the inline error, and the parsed result. It is a single tagged
//! [`UploadPhase`] so that combinations like "uploading with no file" cannot be
//! represented.
//!
//! ```text
//!              select                 begin_upload              finish (Ok)
//!   Idle ─────────────▶ FileSelected ─────────────▶ Uploading ─────────────▶ Parsed
//!    ▲                      ▲                           │
//!    │ clear (any state)    │ select (any state)        │ finish (Err)
//!    │                      │                           ▼
//!    └──────────────────────┴──────────────────────── Failed
//! ```
//!
//! # Parent reporting
//!
//! The caller observes the view through [`UploadObserver`]. A successful upload
//! reports identifier, skills, and text exactly once. Every reset (file pick or
//! clear) reports the empty triple. Failures report nothing.
//!
//! # Stale responses
//!
//! Requests run outside the view (see [`UploadTicket::dispatch`]). Each reset
//! and each upload start bumps a generation counter, and
//! [`UploadView::finish_upload`] drops outcomes whose generation no longer
//! matches the request in flight.

use instant::Instant;
use tracing::{debug, error, info, warn};

use crate::client::ResumeParser;
use crate::error::{ApiError, UploadError};
use crate::model::{ParsedResume, ParsedUpload, SelectedFile};

/// Receives the values the component reports to its parent.
pub trait UploadObserver {
    /// Identifier of the stored resume, `None` on reset.
    fn resume_id_changed(&mut self, resume_id: Option<&str>);
    /// Parsed skills, empty on reset.
    fn skills_changed(&mut self, skills: &[String]);
    /// Extracted resume text, empty on reset.
    fn text_changed(&mut self, text: &str);
}

/// Current lifecycle state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadPhase {
    /// No file, no result
    #[default]
    Idle,
    /// File chosen, nothing sent yet
    FileSelected { file: SelectedFile },
    /// Request in flight
    Uploading { file: SelectedFile, generation: u64 },
    /// Last action failed; the file (if any) is kept for another attempt
    Failed {
        file: Option<SelectedFile>,
        error: UploadError,
    },
    /// Result populated from one successful response
    Parsed {
        file: SelectedFile,
        upload: ParsedUpload,
    },
}

/// Permission to run one upload, handed out by [`UploadView::begin_upload`].
#[derive(Debug, Clone)]
pub struct UploadTicket {
    generation: u64,
    file: SelectedFile,
}

/// Result of a dispatched ticket, to be fed back to [`UploadView::finish_upload`].
#[derive(Debug, Clone)]
pub struct UploadOutcome {
    generation: u64,
    result: Result<ParsedUpload, ApiError>,
}

impl UploadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn file(&self) -> &SelectedFile {
        &self.file
    }

    /// Runs the request. Does not touch any view state.
    pub async fn dispatch(self, parser: &dyn ResumeParser) -> UploadOutcome {
        info!(
            "Uploading {} ({} bytes, generation {})",
            self.file.name(),
            self.file.len(),
            self.generation
        );

        let start = Instant::now();
        let result = parser.parse(&self.file).await;
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        match &result {
            Ok(upload) => info!(
                "Parsed {} in {:.0}ms: {} skills, {} links",
                self.file.name(),
                elapsed_ms,
                upload.resume.skills.len(),
                upload.resume.links.len()
            ),
            Err(_) => warn!("Upload of {} failed after {:.0}ms", self.file.name(), elapsed_ms),
        }

        UploadOutcome {
            generation: self.generation,
            result,
        }
    }
}

impl UploadOutcome {
    pub fn new(generation: u64, result: Result<ParsedUpload, ApiError>) -> Self {
        Self { generation, result }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn result(&self) -> &Result<ParsedUpload, ApiError> {
        &self.result
    }
}

/// View state of the upload component.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadView {
    phase: UploadPhase,
    generation: u64,
}

impl UploadView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &UploadPhase {
        &self.phase
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        match &self.phase {
            UploadPhase::Idle => None,
            UploadPhase::FileSelected { file }
            | UploadPhase::Uploading { file, .. }
            | UploadPhase::Parsed { file, .. } => Some(file),
            UploadPhase::Failed { file, .. } => file.as_ref(),
        }
    }

    /// Busy flag. Disables the upload button.
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, UploadPhase::Uploading { .. })
    }

    pub fn error(&self) -> Option<&UploadError> {
        match &self.phase {
            UploadPhase::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Inline message to render, if any.
    pub fn error_message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }

    pub fn result(&self) -> Option<&ParsedResume> {
        match &self.phase {
            UploadPhase::Parsed { upload, .. } => Some(&upload.resume),
            _ => None,
        }
    }

    pub fn resume_id(&self) -> Option<&str> {
        match &self.phase {
            UploadPhase::Parsed { upload, .. } => upload.resume_id.as_deref(),
            _ => None,
        }
    }

    /// True once a response has been accepted, even one with no skills.
    pub fn has_result(&self) -> bool {
        matches!(self.phase, UploadPhase::Parsed { .. })
    }

    /// Whether the results panel replaces the upload form.
    ///
    /// Only a non-empty skill list shows the panel. A parse with zero skills
    /// keeps the form visible.
    pub fn shows_results(&self) -> bool {
        self.result().is_some_and(|resume| !resume.skills.is_empty())
    }

    /// Replaces the selected file (or drops it when `file` is `None`).
    ///
    /// Always discards the result and error, invalidates any request in flight,
    /// and reports the empty triple.
    pub fn select_file(&mut self, file: Option<SelectedFile>, observer: &mut impl UploadObserver) {
        self.generation += 1;
        self.phase = match file {
            Some(file) => {
                debug!("Selected {} ({} bytes)", file.name(), file.len());
                UploadPhase::FileSelected { file }
            }
            None => UploadPhase::Idle,
        };
        report_reset(observer);
    }

    /// Starts an upload of the selected file.
    ///
    /// Returns `None` without issuing anything when busy, or when no file is
    /// selected (the latter also surfaces [`UploadError::NoFileSelected`]).
    pub fn begin_upload(&mut self) -> Option<UploadTicket> {
        if self.is_busy() {
            debug!("Upload already in flight, ignoring");
            return None;
        }

        let Some(file) = self.selected_file().cloned() else {
            self.phase = UploadPhase::Failed {
                file: None,
                error: UploadError::NoFileSelected,
            };
            return None;
        };

        self.generation += 1;
        self.phase = UploadPhase::Uploading {
            file: file.clone(),
            generation: self.generation,
        };

        Some(UploadTicket {
            generation: self.generation,
            file,
        })
    }

    /// Applies a finished request. Returns `false` if the outcome was stale.
    pub fn finish_upload(
        &mut self,
        outcome: UploadOutcome,
        observer: &mut impl UploadObserver,
    ) -> bool {
        let file = match &self.phase {
            UploadPhase::Uploading { file, generation } if *generation == outcome.generation => {
                file.clone()
            }
            _ => {
                debug!(
                    "Dropping stale upload outcome (generation {}, current {})",
                    outcome.generation, self.generation
                );
                return false;
            }
        };

        match outcome.result {
            Ok(upload) => {
                observer.resume_id_changed(upload.resume_id.as_deref());
                observer.skills_changed(&upload.resume.skills);
                observer.text_changed(&upload.resume.text);
                self.phase = UploadPhase::Parsed { file, upload };
            }
            Err(e) => {
                error!("Resume upload failed: {}", e);
                self.phase = UploadPhase::Failed {
                    file: Some(file),
                    error: e.into(),
                };
            }
        }

        true
    }

    /// Drops file, result, and error, and reports the empty triple.
    pub fn clear(&mut self, observer: &mut impl UploadObserver) {
        self.generation += 1;
        self.phase = UploadPhase::Idle;
        report_reset(observer);
    }
}

fn report_reset(observer: &mut impl UploadObserver) {
    observer.resume_id_changed(None);
    observer.skills_changed(&[]);
    observer.text_changed("");
}
