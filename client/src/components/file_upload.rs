//! Drag-and-drop upload card submitting one document for summarization.
//!
//! One outstanding request per widget: the drop target and file input are
//! disabled while an upload is in flight. This is a per-widget rule, not a
//! system-wide lock. Success shows a transient banner that clears itself
//! after three seconds.

#[cfg(test)]
#[path = "file_upload_test.rs"]
mod file_upload_test;

use leptos::prelude::*;

use crate::net::types::SummaryRecord;

/// File extensions offered by the picker and checked on drop. A client-side
/// filtering hint only; the backend is the authority on what it accepts.
const ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "txt", "doc", "docx"];

#[cfg(feature = "hydrate")]
const UNSUPPORTED_FILE_MESSAGE: &str = "Choose a PDF, TXT, DOC, or DOCX file.";

/// How long the success banner stays up.
#[cfg(feature = "hydrate")]
const SUCCESS_BANNER: std::time::Duration = std::time::Duration::from_secs(3);

/// `accept` attribute for the hidden file input.
fn accept_attribute() -> String {
    ACCEPTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Whether a filename carries one of the supported extensions.
#[cfg(any(test, feature = "hydrate"))]
fn is_supported_filename(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    ACCEPTED_EXTENSIONS
        .iter()
        .any(|ext| lower.strip_suffix(ext).is_some_and(|stem| stem.ends_with('.')))
}

/// Upload card. Yields each completed summary through `on_summary`.
#[component]
pub fn FileUpload(on_summary: Callback<SummaryRecord>) -> impl IntoView {
    let uploading = RwSignal::new(false);
    let drag_active = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(false);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    #[cfg(feature = "hydrate")]
    let submit = move |file: web_sys::File| {
        if uploading.get_untracked() {
            return;
        }
        if !is_supported_filename(&file.name()) {
            error.set(UNSUPPORTED_FILE_MESSAGE.to_owned());
            return;
        }
        uploading.set(true);
        error.set(String::new());
        success.set(false);

        leptos::task::spawn_local(async move {
            match crate::net::api::upload_document(file).await {
                Ok(record) => {
                    success.set(true);
                    on_summary.run(record);
                    leptos::task::spawn_local(async move {
                        gloo_timers::future::sleep(SUCCESS_BANNER).await;
                        success.set(false);
                    });
                }
                Err(e) => error.set(e),
            }
            uploading.set(false);
        });
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_active.set(false);
        #[cfg(feature = "hydrate")]
        {
            // Only the first file of a multi-file drop is used.
            let file = ev
                .data_transfer()
                .and_then(|transfer| transfer.files())
                .and_then(|files| files.get(0));
            if let Some(file) = file {
                submit(file);
            }
        }
    };

    let on_dragover = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        if !uploading.get_untracked() {
            drag_active.set(true);
        }
    };

    let on_dragleave = move |_| drag_active.set(false);

    let on_browse = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if uploading.get_untracked() {
                return;
            }
            if let Some(input) = input_ref.get() {
                input.click();
            }
        }
    };

    let on_input_change = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(input) = input_ref.get() else {
                return;
            };
            let file = input.files().and_then(|files| files.get(0));
            input.set_value("");
            if let Some(file) = file {
                submit(file);
            }
        }
    };

    let dropzone_class = move || {
        let mut class = "upload-card__dropzone".to_owned();
        if drag_active.get() {
            class.push_str(" upload-card__dropzone--active");
        }
        if uploading.get() {
            class.push_str(" upload-card__dropzone--busy");
        }
        class
    };

    view! {
        <section class="card upload-card">
            <header class="card__header">
                <h2 class="card__title">"Upload Book"</h2>
                <p class="card__subtitle">
                    "Upload a book file (PDF, TXT, DOC, DOCX) to generate an AI summary"
                </p>
            </header>

            <Show when=move || !error.get().is_empty()>
                <div class="alert alert--error">{move || error.get()}</div>
            </Show>
            <Show when=move || success.get()>
                <div class="alert alert--success">"Book uploaded and summarized successfully!"</div>
            </Show>

            <div
                class=dropzone_class
                on:click=on_browse
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:drop=on_drop
            >
                <input
                    class="upload-card__input"
                    type="file"
                    accept=accept_attribute()
                    node_ref=input_ref
                    disabled=move || uploading.get()
                    on:click=move |ev| ev.stop_propagation()
                    on:change=on_input_change
                />
                {move || {
                    if uploading.get() {
                        view! {
                            <div class="upload-card__state">
                                <div class="spinner"></div>
                                <p class="upload-card__hint">"Processing your book..."</p>
                                <p class="upload-card__fine">
                                    "This may take a few moments while we analyze your book."
                                </p>
                            </div>
                        }
                            .into_any()
                    } else if drag_active.get() {
                        view! {
                            <div class="upload-card__state">
                                <p class="upload-card__hint">"Drop the book file here"</p>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="upload-card__state">
                                <p class="upload-card__hint">
                                    "Drag & drop a book file here, or click to select"
                                </p>
                                <p class="upload-card__fine">"Supports PDF, TXT, DOC, DOCX files"</p>
                                <button class="btn">"Choose File"</button>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </section>
    }
}
