//! GraminScore - Frontend Rust/Leptos Application
//!
//! A WebAssembly upload form for sending house photographs to the
//! GraminScore condition analysis server.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  UploadPage                                                  │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadForm (markup: drop zone, input, preview, loader) │
//! │  └── Footer                                                  │
//! └─────────────────────────────────────────────────────────────┘
//!            │ next animation frame
//!            ▼
//!   dom::enhance ──▶ UploadFormUi (tags, drag states, overlay)
//! ```
//!
//! # Modules
//!
//! - [`config`] - Element ids, palette and page overrides
//! - [`types`] - Visual states and errors
//! - [`form`] - Host-agnostic interaction controller
//! - [`dom`] - Browser bindings for the controller
//! - [`components`] - UI components (Hero, UploadForm, Footer)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod form;
pub mod dom;
pub mod components;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Visual state
    DropZoneState, SubmissionState,
    // Errors
    AppError, AppResult,
};

// Controller
pub use form::{acquire, ElementSource, FormEvent, UploadElements, UploadFormUi};

// Components
pub use components::*;

// =============================================================================
// Application Entry Points
// =============================================================================

fn init_logging() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(LOG_LEVEL);
}

/// Request animation frame helper, runs `f` once the DOM is painted
fn request_animation_frame(f: impl FnOnce() + 'static) {
    let closure = Closure::once(f);
    if let Err(e) = gloo_utils::window().request_animation_frame(closure.as_ref().unchecked_ref()) {
        log::error!("Failed to schedule animation frame: {:?}", e);
        return;
    }
    closure.forget();
}

/// Attach the upload form behavior to the current document.
fn enhance_page() {
    let document = gloo_utils::document();
    let config = dom::page_config(&document);

    if let Err(e) = dom::enhance(&document, &config) {
        log::error!("❌ Upload form not enhanced: {}", e);
    }
}

/// Render the full page, then enhance it.
pub fn run() {
    init_logging();

    log::info!("🏠 GraminScore - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
    request_animation_frame(enhance_page);
}

/// Enhance a page whose form markup was rendered by the server.
#[wasm_bindgen(js_name = enhanceUploadForm)]
pub fn enhance_upload_form() {
    init_logging();
    enhance_page();
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="GraminScore"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=UploadPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn UploadPage() -> impl IntoView {
    view! {
        <div class="container">
            <Hero/>
            <UploadForm/>
        </div>

        <Footer/>
    }
}
