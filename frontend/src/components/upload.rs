//! PDF upload form.
//!
//! File picker, submit button and status line. The form only reads the
//! selected file and hands it to the driver; all state lives in the
//! orchestrator and comes back through the view memo.

use leptos::*;
use web_sys::{Event, HtmlInputElement, SubmitEvent};
use crate::driver::UploadDriver;
use crate::{DownloadLink, ProgressSection};

#[component]
pub fn UploadSection(driver: UploadDriver) -> impl IntoView {
    let view_model = driver.view();
    let file_input = create_node_ref::<html::Input>();
    let (selected_name, set_selected_name) = create_signal(None::<String>);

    // Keep the picked name for the hint under the button
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let name = input
            .files()
            .and_then(|files| files.get(0))
            .map(|file| file.name());
        set_selected_name.set(name);
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let file = file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        driver.submit(file);
    };

    let busy = move || view_model.with(|v| !v.submit_enabled);

    view! {
        <form class="upload-section" id="uploadForm" on:submit=on_submit>
            <div class="upload-icon">"📄"</div>
            <div class="upload-text">
                {move || if busy() {
                    "⏳ Uploading and processing..."
                } else {
                    "Choose a PDF to extract its text"
                }}
            </div>

            <input
                type="file"
                id="fileInput"
                accept=".pdf,application/pdf"
                style="display:none"
                node_ref=file_input
                on:change=on_file_change
                prop:disabled=busy
            />

            <label for="fileInput" class="upload-button" class:disabled=busy>
                "Select PDF"
            </label>
            <div class="upload-hint">
                {move || selected_name.get().unwrap_or_else(|| "No file chosen".to_string())}
            </div>

            <button type="submit" class="submit-button" prop:disabled=busy>
                "Extract text"
            </button>

            <div
                class="status-line"
                class:error-message=move || view_model.with(|v| v.is_error)
            >
                {move || view_model.with(|v| v.status.clone())}
            </div>

            <ProgressSection view=view_model/>
            <DownloadLink view=view_model href=driver.download_href()/>
        </form>
    }
}
