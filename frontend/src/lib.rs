//! PDF Text Extract - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that uploads a single PDF to the extraction
//! service and offers the extracted text as a download.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection                                          │
//! │  │   ├── ProgressSection (bar, elapsed time, spinner)       │
//! │  │   └── DownloadLink (after completion)                    │
//! │  └── LogsPanel (attempt activity)                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`orchestrator`] - Pure upload state machine (no browser APIs)
//! - [`driver`] - Runs orchestrator effects (timer, request, blob URLs)
//! - [`services`] - Browser services (upload, download, timer)
//! - [`components`] - UI components
//! - [`types`] / [`error`] - Common types and errors

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod types;
pub mod orchestrator;
pub mod driver;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Errors
pub use error::{ErrorKind, UploadError, UploadResult};

// Types
pub use types::{
    // Logs
    LogEntry, LogLevel,
    // Artifact
    ExtractionArtifact,
};

// Orchestration
pub use orchestrator::{
    AttemptId, AttemptState, Effect, Milestone, PdfPayload, ResponseStatus, UploadOrchestrator,
    UploadOutcome, UploadView,
};
pub use driver::UploadDriver;

// Components
pub use components::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 PDF Text Extract - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // One driver per page: it owns the only attempt, timer and object URL
    let driver = UploadDriver::new(UploadConfig::default());

    // Revoke the artifact URL when the page goes away
    let unload = window_event_listener_untyped(UNLOAD_EVENT, move |_| driver.shutdown());
    on_cleanup(move || {
        unload.remove();
        driver.shutdown();
    });

    view! {
        <div class="container">
            <Hero/>
            <UploadSection driver=driver/>
            <LogsPanel driver=driver/>
        </div>

        <Footer/>
    }
}
