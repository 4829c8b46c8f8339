//! Resume upload - pick a resume, send it to the parsing service, show the result.
//!
//! The lifecycle itself (file selection, busy flag, inline errors, parent
//! reporting, stale-response filtering) lives in [`resume_upload_core`]. This
//! crate renders it with Dioxus and wires the platform file pickers.
//!
//! # Platform Support
//!
//! - **Desktop**: native file dialog via `rfd`, reqwest over rustls with a cookie store
//! - **Web (WASM)**: hidden `<input type="file">`, reqwest over `fetch()` with credentials
//!
//! # Embedding the component
//!
//! ```ignore
//! use resume_upload::components::{provide_upload_service, ResumeUpload};
//!
//! #[component]
//! fn JobMatcher() -> Element {
//!     let mut resume_id = use_signal(|| None::<String>);
//!     let mut skills = use_signal(Vec::<String>::new);
//!     let mut text = use_signal(String::new);
//!
//!     rsx! {
//!         ResumeUpload {
//!             on_resume_id: move |id| resume_id.set(id),
//!             on_skills: move |list| skills.set(list),
//!             on_text: move |t| text.set(t),
//!         }
//!     }
//! }
//! ```

#![forbid(unsafe_code)]

pub mod components;
pub mod utils;
