use dioxus::prelude::*;
use resume_upload_core::{SelectedFile, UploadObserver, UploadView};

use crate::components::file_picker::FilePicker;
use crate::components::results_panel::ResultsPanel;
use crate::components::use_upload_service;
use crate::utils::SignalExt;

/// Resume upload form that turns into a results panel once skills are parsed.
///
/// Reports to its parent through three handlers. Each fires once per
/// successful upload, and fires with `None` / empty values whenever the
/// component resets (new file picked, or cleared).
#[component]
pub fn ResumeUpload(
    on_resume_id: EventHandler<Option<String>>,
    on_skills: EventHandler<Vec<String>>,
    on_text: EventHandler<String>,
) -> Element {
    let service = use_upload_service();
    let mut view = use_signal(UploadView::new);
    let reporter = ParentReporter {
        on_resume_id,
        on_skills,
        on_text,
    };

    let handle_file_selected = move |file: Option<SelectedFile>| {
        let mut reporter = reporter;
        view.mutate(|view| view.select_file(file, &mut reporter));
    };

    let upload_service = service.clone();
    let handle_upload = move |_| {
        let Some(ticket) = view.mutate(|view| view.begin_upload()) else {
            return;
        };

        let service = upload_service.clone();
        spawn(async move {
            let outcome = ticket.dispatch(service.parser()).await;
            let mut reporter = reporter;
            view.mutate(|view| view.finish_upload(outcome, &mut reporter));
        });
    };

    let handle_clear = move |_: ()| {
        let mut reporter = reporter;
        view.mutate(|view| view.clear(&mut reporter));
    };

    let state = view.read();
    let busy = state.is_busy();
    let file_name = state.selected_file().map(|file| file.name().to_string());
    let error_message = state.error_message();
    let results = state.result().filter(|_| state.shows_results()).cloned();
    drop(state);

    let config = service.config();
    let accept = config.accept_attribute();
    let extensions: Vec<String> = config
        .picker_extensions()
        .into_iter()
        .map(str::to_string)
        .collect();
    let button_class = if busy {
        "ru-upload-button ru-upload-button--busy"
    } else {
        "ru-upload-button"
    };

    rsx! {
        div { class: "ru-upload",
            if let Some(resume) = results {
                ResultsPanel { resume, on_clear: handle_clear }
            } else {
                section { class: "ru-upload-card",
                    FilePicker {
                        accept,
                        extensions,
                        disabled: busy,
                        on_file_selected: handle_file_selected,
                    }

                    div { class: "ru-selected-file",
                        match file_name {
                            Some(name) => rsx! { "{name}" },
                            None => rsx! { span { class: "ru-muted", "No file selected" } },
                        }
                    }

                    button {
                        class: button_class,
                        disabled: busy,
                        onclick: handle_upload,
                        if busy { "Uploading..." } else { "Upload & Parse" }
                    }

                    if let Some(message) = error_message {
                        p { class: "ru-error", "{message}" }
                    }
                }
            }
        }
    }
}

/// Forwards observer calls to the parent's event handlers.
#[derive(Clone, Copy)]
struct ParentReporter {
    on_resume_id: EventHandler<Option<String>>,
    on_skills: EventHandler<Vec<String>>,
    on_text: EventHandler<String>,
}

impl UploadObserver for ParentReporter {
    fn resume_id_changed(&mut self, resume_id: Option<&str>) {
        self.on_resume_id.call(resume_id.map(str::to_string));
    }

    fn skills_changed(&mut self, skills: &[String]) {
        self.on_skills.call(skills.to_vec());
    }

    fn text_changed(&mut self, text: &str) {
        self.on_text.call(text.to_string());
    }
}
