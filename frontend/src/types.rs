//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Visual State Types** - Drop zone and submission states
//! - **Error Types** - Frontend error handling

use thiserror::Error;

use crate::config::Palette;

// =============================================================================
// Visual State Types
// =============================================================================

/// CSS property recolored on every drop zone transition.
pub const BORDER_COLOR: &str = "border-color";
/// CSS property written when a selection succeeds.
pub const BACKGROUND_COLOR: &str = "background-color";
/// CSS property scaled while a drag hovers the zone.
pub const TRANSFORM: &str = "transform";

/// Visual state of the drop zone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DropZoneState {
    /// Resting styling
    #[default]
    Idle,
    /// A drag gesture is hovering the zone
    DragActive,
    /// Files have been selected
    Success,
}

impl DropZoneState {
    /// CSS writes applied when entering this state.
    ///
    /// Every state writes exactly two properties; anything else keeps its
    /// previous value, so the success background outlives a later drag.
    pub fn style<'a>(self, palette: &'a Palette) -> [(&'static str, &'a str); 2] {
        match self {
            DropZoneState::Idle => [
                (BORDER_COLOR, palette.idle_border.as_str()),
                (TRANSFORM, palette.idle_transform.as_str()),
            ],
            DropZoneState::DragActive => [
                (BORDER_COLOR, palette.active_border.as_str()),
                (TRANSFORM, palette.active_transform.as_str()),
            ],
            DropZoneState::Success => [
                (BORDER_COLOR, palette.success_border.as_str()),
                (BACKGROUND_COLOR, palette.success_background.as_str()),
            ],
        }
    }
}

/// Submission progress of the form. Only ever moves forward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Ready,
    /// Submit button hidden, loading overlay shown
    Submitting,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Only raised while wiring the form up; event handlers themselves never fail.
#[derive(Clone, Debug, Error)]
pub enum AppError {
    /// A required element is absent from the page.
    #[error("Missing required element: #{0}")]
    MissingElement(String),

    /// A DOM call failed.
    #[error("DOM error: {0}")]
    Dom(String),

    /// The page configuration could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
