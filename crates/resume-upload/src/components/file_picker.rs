use dioxus::prelude::*;
use resume_upload_core::SelectedFile;

/// "Choose file" control.
/// Uses a native rfd dialog on desktop, a hidden file input on web.
///
/// `accept` feeds the HTML input, `extensions` (no leading dot) the native
/// dialog filter. Both are advisory.
#[component]
pub fn FilePicker(
    accept: String,
    extensions: Vec<String>,
    disabled: bool,
    on_file_selected: EventHandler<Option<SelectedFile>>,
) -> Element {
    if cfg!(target_arch = "wasm32") {
        rsx! { WebFilePicker { accept, disabled, on_file_selected } }
    } else {
        rsx! { DesktopFilePicker { extensions, disabled, on_file_selected } }
    }
}

/// Turns a browser file read into a selection. An unreadable file drops the
/// current selection so the view resets instead of keeping a stale file.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn selection_from_read<E: std::fmt::Display>(
    name: String,
    contents: Result<Vec<u8>, E>,
) -> Option<SelectedFile> {
    match contents {
        Ok(contents) => Some(SelectedFile::new(name, contents)),
        Err(e) => {
            dioxus::logger::tracing::error!("Failed to read {}: {}", name, e);
            None
        }
    }
}

// =============================================================================
// Desktop Implementation (using rfd native dialogs)
// =============================================================================

#[cfg(not(target_arch = "wasm32"))]
#[component]
fn DesktopFilePicker(
    extensions: Vec<String>,
    disabled: bool,
    on_file_selected: EventHandler<Option<SelectedFile>>,
) -> Element {
    let mut is_picking = use_signal(|| false);

    let handle_pick = move |_| {
        let extensions = extensions.clone();
        spawn(async move {
            use dioxus::logger::tracing::debug;
            use rfd::AsyncFileDialog;

            is_picking.set(true);

            let file = AsyncFileDialog::new()
                .set_title("Select your resume")
                .add_filter("Resume", extensions.as_slice())
                .pick_file()
                .await;

            // A cancelled dialog leaves the current selection alone
            if let Some(file) = file {
                let name = file.file_name();
                let contents = file.read().await;
                debug!("Read {} ({} bytes) from {:?}", name, contents.len(), file.path());
                on_file_selected.call(Some(SelectedFile::new(name, contents)));
            }

            is_picking.set(false);
        });
    };

    rsx! {
        button {
            class: "ru-pick-button",
            disabled: disabled || is_picking(),
            onclick: handle_pick,
            if is_picking() { "Opening..." } else { "Choose file" }
        }
    }
}

// Stub for WASM compilation (never actually called)
#[cfg(target_arch = "wasm32")]
#[component]
fn DesktopFilePicker(
    extensions: Vec<String>,
    disabled: bool,
    on_file_selected: EventHandler<Option<SelectedFile>>,
) -> Element {
    let _ = (extensions, disabled, on_file_selected);
    rsx! {}
}

// =============================================================================
// Web Implementation (using a hidden file input triggered by a button)
// =============================================================================

#[cfg(target_arch = "wasm32")]
#[component]
fn WebFilePicker(
    accept: String,
    disabled: bool,
    on_file_selected: EventHandler<Option<SelectedFile>>,
) -> Element {
    use wasm_bindgen::JsCast;

    let mut is_reading = use_signal(|| false);

    // Click the hidden file input
    let trigger_file_input = move |_| {
        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                if let Some(input) = document.get_element_by_id("ru-file-input") {
                    if let Some(el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                        el.click();
                    }
                }
            }
        }
    };

    let handle_change = move |evt: FormEvent| {
        spawn(async move {
            // An emptied input drops the selection
            let Some(file) = evt.files().into_iter().next() else {
                on_file_selected.call(None);
                return;
            };

            is_reading.set(true);

            let name = file.name().to_string();
            let contents = file.read_bytes().await.map(|bytes| bytes.to_vec());
            on_file_selected.call(selection_from_read(name, contents));

            is_reading.set(false);
        });
    };

    rsx! {
        input {
            id: "ru-file-input",
            r#type: "file",
            class: "ru-hidden-input",
            accept: "{accept}",
            onchange: handle_change,
        }
        button {
            class: "ru-pick-button",
            disabled: disabled || is_reading(),
            onclick: trigger_file_input,
            if is_reading() { "Reading..." } else { "Choose file" }
        }
    }
}

// Stub for non-WASM compilation
#[cfg(not(target_arch = "wasm32"))]
#[component]
fn WebFilePicker(
    accept: String,
    disabled: bool,
    on_file_selected: EventHandler<Option<SelectedFile>>,
) -> Element {
    let _ = (accept, disabled, on_file_selected);
    rsx! {}
}
