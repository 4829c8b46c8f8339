use dioxus::prelude::*;
use resume_upload_core::ParsedResume;

/// Parsed skills and contact details, with a button to start over.
///
/// Empty email, phone, or links are left out.
#[component]
pub fn ResultsPanel(resume: ParsedResume, on_clear: EventHandler<()>) -> Element {
    let links = resume.links_line();

    rsx! {
        section { class: "ru-results",
            h2 { class: "ru-results-title", "Skills" }
            div { class: "ru-skill-list",
                for (idx, skill) in resume.skills.iter().enumerate() {
                    span { class: "ru-skill", key: "{idx}", "{skill}" }
                }
            }

            if !resume.email.is_empty() {
                p { class: "ru-field",
                    strong { "Email:" }
                    " {resume.email}"
                }
            }
            if !resume.phone.is_empty() {
                p { class: "ru-field",
                    strong { "Phone:" }
                    " {resume.phone}"
                }
            }
            if !resume.links.is_empty() {
                p { class: "ru-field",
                    strong { "Links:" }
                    " {links}"
                }
            }
        }

        div { class: "ru-results-actions",
            button {
                class: "ru-clear-button",
                onclick: move |_| on_clear.call(()),
                "Clear"
            }
        }
    }
}
