use leptos::*;
use crate::orchestrator::{AttemptState, UploadView};

#[component]
pub fn ProgressSection(view: Memo<UploadView>) -> impl IntoView {
    view! {
        <div
            class="progress-section"
            id="progressSection"
            class:show=move || view.with(|v| v.state != AttemptState::Idle)
        >
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    id="progressFill"
                    style:width=move || format!("{}%", view.with(|v| v.progress_percent))
                ></div>
            </div>
            <div class="progress-meta">
                <Show
                    when=move || view.with(|v| v.show_spinner)
                    fallback=|| view! { }
                >
                    <span class="spinner" aria-label="Processing"></span>
                </Show>
                <span class="elapsed">{move || view.with(|v| v.elapsed_text.clone())}</span>
                <span class="progress-percent">
                    {move || format!("{}%", view.with(|v| v.progress_percent))}
                </span>
            </div>
        </div>
    }
}
