//! Upload form interaction controller.
//!
//! [`UploadFormUi`] owns explicit handles to the form's elements and turns
//! [`FormEvent`]s into visual side effects:
//!
//! - selection changes render one preview tag per file
//! - drags recolor and scale the drop zone
//! - drops are forwarded into the file input, which then raises `change`
//! - submission swaps the submit button for the loading overlay
//!
//! The controller only talks to its elements through the capability traits
//! below. The browser implementations live in [`crate::dom`].

use std::cell::Cell;

use crate::config::{ElementIds, Palette, FILE_TAG_CLASS, HIDDEN_CLASS};
use crate::types::{AppError, AppResult, DropZoneState, SubmissionState};

#[cfg(test)]
mod fake;

// =============================================================================
// Host capabilities
// =============================================================================

/// An element whose inline style and classes can be changed.
pub trait StyledElement {
    fn set_style(&self, property: &str, value: &str);
    fn remove_class(&self, class: &str);
}

/// An element holding the rendered preview tags.
pub trait TagContainer {
    /// Remove every child.
    fn clear(&self);
    /// Append a `<span>` with the given class and text.
    fn append_tag(&self, class: &str, text: &str);
}

/// The native file input owning the selected file set.
pub trait FileInput {
    /// Collection type delivered by a drop.
    type Files;

    /// Names of the currently selected files, in selection order.
    fn file_names(&self) -> Vec<String>;

    /// Replace the selection.
    fn assign_files(&self, files: &Self::Files);

    /// Raise a `change` event on the input, as a manual pick would.
    ///
    /// Listeners run synchronously, before this returns.
    fn notify_change(&self);
}

// =============================================================================
// Events
// =============================================================================

/// Interaction events the form reacts to.
#[derive(Debug)]
pub enum FormEvent<F> {
    /// `change` on the file input
    SelectionChanged,
    /// `submit` on the form
    Submit,
    /// `dragenter` on the zone
    DragEnter,
    /// `dragover` on the zone
    DragOver,
    /// `dragleave` on the zone
    DragLeave,
    /// `drop` on the zone, with its data transfer files if any
    Drop(Option<F>),
}

impl<F> FormEvent<F> {
    /// Whether the browser's default handling must be cancelled.
    ///
    /// Drag events are cancelled so the zone accepts drops. Submission is
    /// never cancelled: the form still posts to the server.
    pub fn cancels_default(&self) -> bool {
        matches!(
            self,
            FormEvent::DragEnter | FormEvent::DragOver | FormEvent::DragLeave | FormEvent::Drop(_)
        )
    }
}

// =============================================================================
// Element acquisition
// =============================================================================

/// Element lookup by id.
pub trait ElementSource {
    type Input: FileInput;
    type Element: StyledElement + TagContainer;
    /// Only listened to, never modified.
    type Form;

    fn file_input(&self, id: &str) -> Option<Self::Input>;
    fn element(&self, id: &str) -> Option<Self::Element>;
    fn form(&self, id: &str) -> Option<Self::Form>;
}

/// Element handles the controller is built from.
///
/// Only the file input and the preview container are required.
pub struct UploadElements<I, C, E> {
    pub file_input: I,
    pub preview: C,
    pub drop_zone: Option<E>,
    pub submit_trigger: Option<E>,
    pub loader: Option<E>,
}

/// Everything found for one form.
pub struct AcquiredForm<S: ElementSource> {
    pub elements: UploadElements<S::Input, S::Element, S::Element>,
    /// Submission listener target, if present
    pub form: Option<S::Form>,
}

/// Look the form's elements up by id.
///
/// A missing file input or preview container is an error. Anything else may
/// be absent, and the behavior it drives is skipped.
pub fn acquire<S: ElementSource>(source: &S, ids: &ElementIds) -> AppResult<AcquiredForm<S>> {
    let file_input = source
        .file_input(&ids.file_input)
        .ok_or_else(|| AppError::MissingElement(ids.file_input.clone()))?;
    let preview = source
        .element(&ids.preview)
        .ok_or_else(|| AppError::MissingElement(ids.preview.clone()))?;

    let optional = |id: &str| {
        let found = source.element(id);
        if found.is_none() {
            log::warn!("⚠️ #{} not found, its behavior is skipped", id);
        }
        found
    };

    let form = source.form(&ids.form);
    if form.is_none() {
        log::warn!("⚠️ #{} not found, submission is not tracked", ids.form);
    }

    Ok(AcquiredForm {
        elements: UploadElements {
            file_input,
            preview,
            drop_zone: optional(&ids.drop_zone),
            submit_trigger: optional(&ids.submit_trigger),
            loader: optional(&ids.loader),
        },
        form,
    })
}

// =============================================================================
// Controller
// =============================================================================

/// Upload form controller.
///
/// Handlers take `&self` because a drop re-enters the controller through the
/// synthetic `change` event while the drop handler is still running.
pub struct UploadFormUi<I, C, E> {
    file_input: I,
    preview: C,
    drop_zone: Option<E>,
    submit_trigger: Option<E>,
    loader: Option<E>,
    palette: Palette,
    drop_zone_state: Cell<DropZoneState>,
    submission: Cell<SubmissionState>,
}

impl<I, C, E> UploadFormUi<I, C, E>
where
    I: FileInput,
    C: TagContainer,
    E: StyledElement,
{
    pub fn new(elements: UploadElements<I, C, E>, palette: Palette) -> Self {
        Self {
            file_input: elements.file_input,
            preview: elements.preview,
            drop_zone: elements.drop_zone,
            submit_trigger: elements.submit_trigger,
            loader: elements.loader,
            palette,
            drop_zone_state: Cell::new(DropZoneState::Idle),
            submission: Cell::new(SubmissionState::Ready),
        }
    }

    pub fn drop_zone_state(&self) -> DropZoneState {
        self.drop_zone_state.get()
    }

    pub fn submission_state(&self) -> SubmissionState {
        self.submission.get()
    }

    /// Route an event to its handler.
    pub fn dispatch(&self, event: FormEvent<I::Files>) {
        match event {
            FormEvent::SelectionChanged => self.handle_selection_change(),
            FormEvent::Submit => self.handle_submit(),
            FormEvent::DragEnter | FormEvent::DragOver => self.handle_drag_over(),
            FormEvent::DragLeave => self.handle_drag_end(),
            FormEvent::Drop(files) => self.handle_drop(files.as_ref()),
        }
    }

    /// Re-render the preview tags from the input's current selection.
    pub fn handle_selection_change(&self) {
        let names = self.file_input.file_names();

        self.preview.clear();
        if names.is_empty() {
            // Drop zone keeps whatever state it had.
            log::debug!("Selection cleared");
            return;
        }

        for name in &names {
            self.preview.append_tag(FILE_TAG_CLASS, name);
        }
        self.set_drop_zone(DropZoneState::Success);

        log::info!("📎 {} file(s) selected", names.len());
    }

    /// Swap the submit button for the loading overlay.
    ///
    /// The native submission is left to proceed.
    pub fn handle_submit(&self) {
        if let Some(trigger) = &self.submit_trigger {
            trigger.set_style("display", "none");
        }

        match &self.loader {
            Some(loader) => {
                loader.remove_class(HIDDEN_CLASS);
                loader.set_style("display", "flex");
            }
            None => log::warn!("⚠️ No loading overlay to show"),
        }

        if self.submission.replace(SubmissionState::Submitting) == SubmissionState::Ready {
            log::info!("⏳ Submitting images for analysis...");
        }
    }

    /// `dragenter` / `dragover`
    pub fn handle_drag_over(&self) {
        self.set_drop_zone(DropZoneState::DragActive);
    }

    /// `dragleave`, and the first half of `drop`
    pub fn handle_drag_end(&self) {
        self.set_drop_zone(DropZoneState::Idle);
    }

    /// Forward dropped files into the input and let its `change` listener
    /// render them.
    pub fn handle_drop(&self, files: Option<&I::Files>) {
        self.handle_drag_end();

        match files {
            Some(files) => {
                self.file_input.assign_files(files);
                self.file_input.notify_change();
            }
            None => log::warn!("⚠️ Drop carried no files"),
        }
    }

    fn set_drop_zone(&self, state: DropZoneState) {
        let Some(zone) = &self.drop_zone else {
            return;
        };

        for (property, value) in state.style(&self.palette) {
            zone.set_style(property, value);
        }

        if self.drop_zone_state.replace(state) != state {
            log::debug!("Drop zone: {:?}", state);
        }
    }
}
