//! UI components.
//!
//! - [`ResumeUpload`]: the upload form / results panel, reporting to its parent
//!   through three event handlers
//! - `file_picker`: native dialog on desktop, hidden file input on web
//! - `results_panel`: skills, email, phone, links, and the clear button
//! - [`App`]: host that owns the parent-side state the component reports into
//!
//! # Context Providers
//!
//! The component reaches the parsing service through context so hosts can swap
//! it (staging endpoint, scripted parser):
//!
//! ```ignore
//! let service = use_upload_service();
//! let ticket = view.mutate(|view| view.begin_upload());
//! let outcome = ticket.dispatch(service.parser()).await;
//! ```

mod file_picker;
mod results_panel;
mod resume_upload;

pub use resume_upload::ResumeUpload;

use std::rc::Rc;

use dioxus::logger::tracing::error;
use dioxus::prelude::*;
use resume_upload_core::{ApiError, HttpResumeParser, ResumeParser, UploadConfig};

/// Parsing service plus the settings the pickers need.
#[derive(Clone)]
pub struct UploadService {
    parser: Rc<dyn ResumeParser>,
    config: UploadConfig,
}

impl UploadService {
    pub fn new(parser: Rc<dyn ResumeParser>, config: UploadConfig) -> Self {
        Self { parser, config }
    }

    /// HTTP service for `config`.
    pub fn http(config: UploadConfig) -> Result<Self, ApiError> {
        let parser = HttpResumeParser::new(config.clone())?;
        Ok(Self::new(Rc::new(parser), config))
    }

    pub fn parser(&self) -> &dyn ResumeParser {
        self.parser.as_ref()
    }

    pub fn config(&self) -> &UploadConfig {
        &self.config
    }
}

/// Makes `service` available to every [`ResumeUpload`] below the caller.
pub fn provide_upload_service(service: UploadService) -> UploadService {
    use_context_provider(|| service)
}

// Upload service context provider
pub fn use_upload_service() -> UploadService {
    use_context::<UploadService>()
}

/// Host application: provides the HTTP service and keeps what the component reports.
#[component]
pub fn App() -> Element {
    let service = use_hook(|| UploadService::http(UploadConfig::default()));

    match service {
        Ok(service) => rsx! { UploadHost { service } },
        Err(e) => {
            error!("Failed to initialize upload service: {}", e);
            rsx! {
                div { class: "ru-app",
                    p { class: "ru-error", "Resume upload is unavailable: {e}" }
                }
            }
        }
    }
}

#[component]
fn UploadHost(service: UploadService) -> Element {
    provide_upload_service(service);

    let mut resume_id = use_signal(|| None::<String>);
    let mut skills = use_signal(Vec::<String>::new);
    let mut text = use_signal(String::new);

    rsx! {
        div { class: "ru-app",
            header { class: "ru-header",
                h1 { class: "ru-title", "Resume Parser" }
                p { class: "ru-subtitle",
                    "Upload a PDF or Word resume to extract skills and contact details."
                }
            }

            main { class: "ru-main",
                ResumeUpload {
                    on_resume_id: move |id| resume_id.set(id),
                    on_skills: move |list| skills.set(list),
                    on_text: move |t| text.set(t),
                }
            }

            if let Some(id) = resume_id() {
                footer { class: "ru-footer",
                    "Resume {id} · {skills.read().len()} skills · {text.read().chars().count()} characters of text"
                }
            }
        }
    }
}

// UploadService holds a trait object, so props compare by identity.
impl PartialEq for UploadService {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.parser, &other.parser) && self.config == other.config
    }
}
