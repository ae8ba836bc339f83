//! Image upload form markup.
//!
//! The behavior (tags, drag states, loading overlay) is attached afterwards
//! by [`crate::dom::enhance`], which finds these elements by id. The same
//! enhancement works on server-rendered markup using the same ids.

use leptos::*;

use crate::config::{
    ACCEPTED_IMAGE_TYPES, ANALYZE_ENDPOINT, DROP_ZONE_ID, FILE_INPUT_ID, FORM_ID, HIDDEN_CLASS,
    LOADER_ID, PREVIEW_ID, SUBMIT_ID, UPLOAD_FIELD_NAME,
};

/// Upload form markup with the default element ids.
///
/// Carries no `on:` handlers. Listeners come from [`crate::dom::enhance`] so
/// this page and server-rendered pages go through one controller and one
/// listener path.
#[component]
pub fn UploadForm() -> impl IntoView {
    view! {
        <form
            id=FORM_ID
            class="upload-form"
            action=ANALYZE_ENDPOINT
            method="post"
            enctype="multipart/form-data"
        >
            <div class="upload-section" id=DROP_ZONE_ID>
                <div class="upload-icon">"🏠"</div>
                <div class="upload-text">"Drop house photos here"</div>
                <div class="upload-hint">"or choose them from your device"</div>
                <div class="upload-hint mt-20">"JPG, PNG or WEBP • roof, walls and door"</div>

                <input
                    type="file"
                    id=FILE_INPUT_ID
                    name=UPLOAD_FIELD_NAME
                    accept=ACCEPTED_IMAGE_TYPES
                    multiple=true
                    class="file-input"
                />
                <label for=FILE_INPUT_ID class="upload-button">
                    "Choose images"
                </label>
            </div>

            <div class="file-preview" id=PREVIEW_ID></div>

            <button type="submit" class="submit-button" id=SUBMIT_ID>
                "Analyze condition"
            </button>

            <div class=format!("loading-overlay {}", HIDDEN_CLASS) id=LOADER_ID>
                <div class="spinner"></div>
                <div class="loading-text">"⏳ Analyzing images..."</div>
            </div>
        </form>
    }
}
