//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"PDF Text Extract"</h1>
            <p class="subtitle">
                "Upload a PDF and download its text. "
                "Scanned documents go through OCR, so they take longer."
            </p>
        </div>
    }
}
