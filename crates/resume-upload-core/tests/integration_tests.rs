//! End-to-end tests of the upload lifecycle against a scripted parsing service.
//!
//! Each test drives [`UploadView`] the way the component does: pick a file,
//! take a ticket, dispatch it through a [`ResumeParser`], feed the outcome back.
//! The scripted parser answers with a raw JSON body so the response mapping is
//! exercised too.
//!
//! Run with: `cargo test -p resume-upload-core --test integration_tests`

use std::cell::Cell;

use async_trait::async_trait;
use resume_upload_core::{
    ApiError, ParsedUpload, ResumeParser, SelectedFile, UploadError, UploadObserver, UploadPhase,
    UploadResponse, UploadView,
};
use serde_json::{json, Value};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Parsing service stand-in that returns one scripted answer and counts calls.
struct ScriptedParser {
    answer: Result<Value, ApiError>,
    calls: Cell<usize>,
}

impl ScriptedParser {
    fn answering(body: Value) -> Self {
        Self {
            answer: Ok(body),
            calls: Cell::new(0),
        }
    }

    fn failing(error: ApiError) -> Self {
        Self {
            answer: Err(error),
            calls: Cell::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.get()
    }
}

#[async_trait(?Send)]
impl ResumeParser for ScriptedParser {
    async fn parse(&self, _file: &SelectedFile) -> Result<ParsedUpload, ApiError> {
        self.calls.set(self.calls.get() + 1);
        let body = self.answer.clone()?;
        let response: UploadResponse = serde_json::from_value(body)
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))?;
        ParsedUpload::try_from(response)
    }
}

/// What the parent currently holds, plus how often each setter ran.
#[derive(Debug, Default)]
struct Parent {
    resume_id: Option<String>,
    skills: Vec<String>,
    text: String,
    id_calls: usize,
    skills_calls: usize,
    text_calls: usize,
}

impl Parent {
    fn calls(&self) -> (usize, usize, usize) {
        (self.id_calls, self.skills_calls, self.text_calls)
    }

    fn assert_reset(&self) {
        assert_eq!(self.resume_id, None);
        assert!(self.skills.is_empty());
        assert!(self.text.is_empty());
    }
}

impl UploadObserver for Parent {
    fn resume_id_changed(&mut self, resume_id: Option<&str>) {
        self.id_calls += 1;
        self.resume_id = resume_id.map(str::to_string);
    }

    fn skills_changed(&mut self, skills: &[String]) {
        self.skills_calls += 1;
        self.skills = skills.to_vec();
    }

    fn text_changed(&mut self, text: &str) {
        self.text_calls += 1;
        self.text = text.to_string();
    }
}

fn resume(name: &str) -> SelectedFile {
    SelectedFile::new(name, b"%PDF-1.7 fake resume".to_vec())
}

fn go_sql_body() -> Value {
    json!({
        "data": {
            "_id": "r1",
            "parsedData": {
                "skills": ["Go", "SQL"],
                "email": "a@b.com",
                "phone": "",
                "links": [],
                "text": "resume text"
            }
        }
    })
}

/// Picks `file`, uploads it through `parser`, and applies the outcome.
async fn upload(view: &mut UploadView, parent: &mut Parent, parser: &dyn ResumeParser) -> bool {
    let ticket = view.begin_upload().expect("upload should start");
    let outcome = ticket.dispatch(parser).await;
    view.finish_upload(outcome, parent)
}

// ============================================================================
// Lifecycle Properties
// ============================================================================

#[tokio::test]
async fn test_successful_mapping() {
    let parser = ScriptedParser::answering(go_sql_body());
    let mut view = UploadView::new();
    let mut parent = Parent::default();

    view.select_file(Some(resume("cv.pdf")), &mut parent);
    let before = parent.calls();
    assert!(upload(&mut view, &mut parent, &parser).await);

    assert!(matches!(view.phase(), UploadPhase::Parsed { .. }));
    assert!(view.shows_results());
    let result = view.result().unwrap();
    assert_eq!(result.skills, vec!["Go", "SQL"]);
    assert_eq!(result.email, "a@b.com");
    assert!(result.phone.is_empty(), "empty phone is not rendered");
    assert!(result.links.is_empty(), "empty links are not rendered");
    assert_eq!(view.resume_id(), Some("r1"));

    // Each setter ran exactly once for the upload
    let after = parent.calls();
    assert_eq!(after, (before.0 + 1, before.1 + 1, before.2 + 1));
    assert_eq!(parent.resume_id.as_deref(), Some("r1"));
    assert_eq!(parent.skills, vec!["Go", "SQL"]);
    assert_eq!(parent.text, "resume text");
}

#[tokio::test]
async fn test_clear_is_idempotent_from_any_state() {
    let parser = ScriptedParser::answering(go_sql_body());

    // Build one view per reachable state
    let mut parent = Parent::default();
    let idle = UploadView::new();

    let mut selected = UploadView::new();
    selected.select_file(Some(resume("cv.pdf")), &mut parent);

    let mut uploading = selected.clone();
    uploading.begin_upload().unwrap();

    let mut failed = UploadView::new();
    failed.begin_upload();

    let mut parsed = selected.clone();
    upload(&mut parsed, &mut parent, &parser).await;

    let mut cleared = Vec::new();
    for mut view in [idle, selected, uploading, failed, parsed] {
        let mut parent = Parent::default();
        view.clear(&mut parent);

        assert_eq!(parent.calls(), (1, 1, 1));
        parent.assert_reset();
        assert!(view.selected_file().is_none());
        assert!(view.result().is_none());
        assert!(view.error_message().is_none());
        cleared.push(view);
    }

    // Same observable state everywhere
    for view in &cleared {
        assert_eq!(view.phase(), cleared[0].phase());
    }

    // Clearing twice changes nothing observable either
    let mut again = cleared.pop().unwrap();
    let mut parent = Parent::default();
    again.clear(&mut parent);
    assert_eq!(again.phase(), &UploadPhase::Idle);
    parent.assert_reset();
}

#[tokio::test]
async fn test_reselect_resets_parsed_result() {
    let parser = ScriptedParser::answering(go_sql_body());
    let mut view = UploadView::new();
    let mut parent = Parent::default();

    view.select_file(Some(resume("cv.pdf")), &mut parent);
    upload(&mut view, &mut parent, &parser).await;
    assert!(view.shows_results());
    let before = parent.calls();

    view.select_file(Some(resume("cv-v2.docx")), &mut parent);

    assert!(!view.shows_results());
    assert!(view.result().is_none());
    assert_eq!(view.selected_file().map(SelectedFile::name), Some("cv-v2.docx"));
    assert_eq!(parent.calls(), (before.0 + 1, before.1 + 1, before.2 + 1));
    parent.assert_reset();
}

#[tokio::test]
async fn test_no_file_guard() {
    let parser = ScriptedParser::answering(go_sql_body());
    let mut view = UploadView::new();
    let mut parent = Parent::default();

    for _ in 0..3 {
        assert!(view.begin_upload().is_none());
        assert_eq!(
            view.error_message().as_deref(),
            Some("Please select a file first.")
        );
    }

    assert_eq!(parser.calls(), 0);
    assert_eq!(parent.calls(), (0, 0, 0));

    // Picking a file clears the message
    view.select_file(Some(resume("cv.pdf")), &mut parent);
    assert!(view.error().is_none());
}

#[tokio::test]
async fn test_malformed_payload_resilience() {
    let parser = ScriptedParser::answering(json!({
        "data": {
            "_id": "r9",
            "parsedData": { "email": "a@b.com", "text": "plain" }
        }
    }));
    let mut view = UploadView::new();
    let mut parent = Parent::default();

    view.select_file(Some(resume("cv.pdf")), &mut parent);
    assert!(upload(&mut view, &mut parent, &parser).await);

    // Parsed, but with no skills the upload form comes back
    assert!(view.has_result());
    assert!(!view.shows_results());
    assert!(view.error().is_none());
    let result = view.result().unwrap();
    assert!(result.skills.is_empty());
    assert!(result.links.is_empty());
    assert_eq!(parent.resume_id.as_deref(), Some("r9"));
    assert!(parent.skills.is_empty());
}

#[tokio::test]
async fn test_failure_path() {
    let parser = ScriptedParser::failing(ApiError::Request("connection reset".to_string()));
    let mut view = UploadView::new();
    let mut parent = Parent::default();

    view.select_file(Some(resume("cv.pdf")), &mut parent);
    let before = parent.calls();
    assert!(upload(&mut view, &mut parent, &parser).await);

    assert_eq!(view.selected_file().map(SelectedFile::name), Some("cv.pdf"));
    assert_eq!(view.error(), Some(&UploadError::UploadFailed));
    assert_eq!(
        view.error_message().as_deref(),
        Some("Failed to upload resume. Try again.")
    );
    assert!(!view.is_busy());
    assert_eq!(parent.calls(), before);
}

#[tokio::test]
async fn test_server_error_and_bad_body_use_same_message() {
    let bodies = [
        ScriptedParser::failing(ApiError::Status(500)),
        ScriptedParser::failing(ApiError::Status(413)),
        ScriptedParser::answering(json!({ "error": "unsupported file" })),
    ];

    for parser in bodies {
        let mut view = UploadView::new();
        let mut parent = Parent::default();
        view.select_file(Some(resume("cv.pdf")), &mut parent);
        upload(&mut view, &mut parent, &parser).await;

        assert_eq!(view.error(), Some(&UploadError::UploadFailed));
        assert_eq!(parser.calls(), 1, "no automatic retry");
    }
}

#[tokio::test]
async fn test_stale_response_is_ignored() {
    let parser = ScriptedParser::answering(go_sql_body());
    let mut view = UploadView::new();
    let mut parent = Parent::default();

    view.select_file(Some(resume("old.pdf")), &mut parent);
    let stale = view.begin_upload().unwrap();

    // User picks another file while the first request is in flight
    view.select_file(Some(resume("new.pdf")), &mut parent);
    let before = parent.calls();

    let outcome = stale.dispatch(&parser).await;
    assert!(outcome.result().is_ok(), "the late answer itself succeeded");
    assert!(!view.finish_upload(outcome, &mut parent));

    assert!(matches!(view.phase(), UploadPhase::FileSelected { .. }));
    assert_eq!(view.selected_file().map(SelectedFile::name), Some("new.pdf"));
    assert_eq!(parent.calls(), before);
    parent.assert_reset();
}

#[tokio::test]
async fn test_busy_guard_issues_single_request() {
    let parser = ScriptedParser::answering(go_sql_body());
    let mut view = UploadView::new();
    let mut parent = Parent::default();

    view.select_file(Some(resume("cv.pdf")), &mut parent);
    let ticket = view.begin_upload().unwrap();
    assert!(view.is_busy());
    assert!(view.begin_upload().is_none());

    let outcome = ticket.dispatch(&parser).await;
    view.finish_upload(outcome, &mut parent);

    assert_eq!(parser.calls(), 1);
    assert!(!view.is_busy());
}
