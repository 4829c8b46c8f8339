//! Test utilities for resume-upload-core.
//!
//! Only compiled when running unit tests.

use crate::model::{ParsedResume, ParsedUpload, SelectedFile};
use crate::view::UploadObserver;

/// One call made on an [`UploadObserver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ResumeId(Option<String>),
    Skills(Vec<String>),
    Text(String),
}

impl Call {
    /// The three calls made on every reset.
    pub fn reset() -> Vec<Call> {
        vec![
            Call::ResumeId(None),
            Call::Skills(Vec::new()),
            Call::Text(String::new()),
        ]
    }
}

/// Observer that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub calls: Vec<Call>,
}

impl UploadObserver for RecordingObserver {
    fn resume_id_changed(&mut self, resume_id: Option<&str>) {
        self.calls.push(Call::ResumeId(resume_id.map(str::to_string)));
    }

    fn skills_changed(&mut self, skills: &[String]) {
        self.calls.push(Call::Skills(skills.to_vec()));
    }

    fn text_changed(&mut self, text: &str) {
        self.calls.push(Call::Text(text.to_string()));
    }
}

pub fn resume_file(name: &str) -> SelectedFile {
    SelectedFile::new(name, b"%PDF-1.4 test".to_vec())
}

pub fn parsed_upload(resume_id: &str, skills: &[&str], text: &str) -> ParsedUpload {
    ParsedUpload {
        resume_id: Some(resume_id.to_string()),
        resume: ParsedResume {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            text: text.to_string(),
            ..Default::default()
        },
    }
}
