//! Activity log of upload attempts.
//!
//! Displays the entries the orchestrator records for each attempt
//! with auto-scroll support.

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::driver::UploadDriver;

/// Request animation frame helper for smooth scrolling
fn request_animation_frame(f: impl FnOnce() + 'static) {
    let closure = Closure::once(f);
    if let Err(e) = gloo_utils::window().request_animation_frame(closure.as_ref().unchecked_ref()) {
        log::warn!("requestAnimationFrame failed: {:?}", e);
        return;
    }
    closure.forget();
}

/// Activity log panel component
#[component]
pub fn LogsPanel(driver: UploadDriver) -> impl IntoView {
    let logs = driver.logs();

    // Reference to the logs content div for auto-scroll
    let logs_container = create_node_ref::<leptos::html::Div>();

    // Auto-scroll to bottom when logs change
    create_effect(move |_| {
        // Track logs changes
        let _ = logs.with(Vec::len);

        if let Some(container) = logs_container.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    view! {
        <Show
            when=move || logs.with(|entries| !entries.is_empty())
            fallback=|| view! { }
        >
            <div class="logs-panel">
                <div class="logs-header">
                    <span class="logs-title">"📋 Activity"</span>
                    <button
                        class="logs-clear"
                        on:click=move |_| driver.clear_logs()
                    >
                        "Clear"
                    </button>
                </div>
                <div class="logs-content" node_ref=logs_container>
                    <For
                        each=move || logs.get()
                        key=|entry| entry.seq
                        children=move |entry| {
                            view! {
                                <div class=format!("log-entry {}", entry.level.css_class())>
                                    <span class="log-time">"[" {entry.timestamp.clone()} "] "</span>
                                    {entry.message.clone()}
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </Show>
    }
}
