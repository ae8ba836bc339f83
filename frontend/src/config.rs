//! Application configuration.
//!
//! Centralized configuration for the GraminScore upload form. The constants
//! below are the defaults; a page may override element ids and palette
//! values with an embedded JSON block (see [`UploadFormConfig::from_json`]).

use serde::Deserialize;

use crate::types::{AppError, AppResult};

/// Form submission target on the analysis server.
pub const ANALYZE_ENDPOINT: &str = "/analyze";

/// Multipart field name the server reads uploaded photos from.
pub const UPLOAD_FIELD_NAME: &str = "images";

/// File picker hint. Matches the image extensions the server accepts.
pub const ACCEPTED_IMAGE_TYPES: &str = ".jpg,.jpeg,.png,.webp";

/// Id of the `<script type="application/json">` element holding overrides.
pub const CONFIG_SCRIPT_ID: &str = "uploadFormConfig";

/// Class given to each preview tag.
pub const FILE_TAG_CLASS: &str = "file-tag";

/// Class that keeps the loading overlay out of view until submission.
pub const HIDDEN_CLASS: &str = "hidden";

/// Console log verbosity.
pub const LOG_LEVEL: log::Level = log::Level::Debug;

// =============================================================================
// Element ids
// =============================================================================

pub const FILE_INPUT_ID: &str = "fileInput";
pub const PREVIEW_ID: &str = "filePreview";
pub const DROP_ZONE_ID: &str = "dropZone";
pub const FORM_ID: &str = "analyzeForm";
pub const SUBMIT_ID: &str = "submitBtn";
pub const LOADER_ID: &str = "loadingOverlay";

/// Ids used to look up the form's elements in the document.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementIds {
    /// `<input type="file">` holding the selection (required)
    pub file_input: String,
    /// Container the file tags are rendered into (required)
    pub preview: String,
    pub drop_zone: String,
    pub form: String,
    pub submit_trigger: String,
    pub loader: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            file_input: FILE_INPUT_ID.to_string(),
            preview: PREVIEW_ID.to_string(),
            drop_zone: DROP_ZONE_ID.to_string(),
            form: FORM_ID.to_string(),
            submit_trigger: SUBMIT_ID.to_string(),
            loader: LOADER_ID.to_string(),
        }
    }
}

// =============================================================================
// Palette
// =============================================================================

/// Style values written to the drop zone on each visual transition.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Palette {
    pub idle_border: String,
    pub idle_transform: String,
    pub active_border: String,
    pub active_transform: String,
    pub success_border: String,
    pub success_background: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            idle_border: "#cbd5e1".to_string(),
            idle_transform: "scale(1)".to_string(),
            active_border: "#2563eb".to_string(),
            active_transform: "scale(1.02)".to_string(),
            success_border: "#10b981".to_string(),
            success_background: "#f0fdf4".to_string(),
        }
    }
}

// =============================================================================
// Page configuration
// =============================================================================

/// Full upload form configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UploadFormConfig {
    pub ids: ElementIds,
    pub palette: Palette,
}

impl UploadFormConfig {
    /// Parse overrides from JSON. Keys left out keep their defaults.
    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str(json).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Parse overrides, falling back to the defaults when the block is malformed.
    pub fn from_json_or_default(json: &str) -> Self {
        Self::from_json(json).unwrap_or_else(|e| {
            log::warn!("⚠️ Ignoring upload form config: {}", e);
            Self::default()
        })
    }
}
