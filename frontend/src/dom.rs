//! Browser bindings for the upload form.
//!
//! Implements the [`crate::form`] capability traits for `web_sys` elements
//! and the id lookup for [`Document`] and registers the DOM listeners that
//! feed [`FormEvent`]s into the controller.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, DragEvent, Event, EventTarget, FileList, HtmlElement, HtmlFormElement,
    HtmlInputElement,
};

use crate::config::{UploadFormConfig, CONFIG_SCRIPT_ID};
use crate::form::{
    acquire, AcquiredForm, ElementSource, FileInput, FormEvent, StyledElement, TagContainer,
    UploadFormUi,
};
use crate::types::{AppError, AppResult};

/// Controller over real DOM elements.
pub type WebUploadForm = UploadFormUi<HtmlInputElement, HtmlElement, HtmlElement>;

// =============================================================================
// Capability implementations
// =============================================================================

impl StyledElement for HtmlElement {
    fn set_style(&self, property: &str, value: &str) {
        if let Err(e) = self.style().set_property(property, value) {
            log::warn!("Failed to set {}: {:?}", property, e);
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(e) = self.class_list().remove_1(class) {
            log::warn!("Failed to remove class '{}': {:?}", class, e);
        }
    }
}

impl TagContainer for HtmlElement {
    fn clear(&self) {
        self.set_inner_html("");
    }

    fn append_tag(&self, class: &str, text: &str) {
        let Some(document) = self.owner_document() else {
            log::warn!("Preview container is detached from the document");
            return;
        };

        let tag = match document.create_element("span") {
            Ok(tag) => tag,
            Err(e) => {
                log::warn!("Failed to create tag: {:?}", e);
                return;
            }
        };
        tag.set_class_name(class);
        tag.set_text_content(Some(text));

        if let Err(e) = self.append_child(&tag) {
            log::warn!("Failed to append tag: {:?}", e);
        }
    }
}

impl FileInput for HtmlInputElement {
    type Files = FileList;

    fn file_names(&self) -> Vec<String> {
        let Some(files) = self.files() else {
            return Vec::new();
        };

        (0..files.length())
            .filter_map(|i| files.get(i))
            .map(|file| file.name())
            .collect()
    }

    fn assign_files(&self, files: &FileList) {
        self.set_files(Some(files));
    }

    fn notify_change(&self) {
        let event = match Event::new("change") {
            Ok(event) => event,
            Err(e) => {
                log::warn!("Failed to create change event: {:?}", e);
                return;
            }
        };

        if let Err(e) = self.dispatch_event(&event) {
            log::warn!("Failed to dispatch change event: {:?}", e);
        }
    }
}

// =============================================================================
// Element lookup
// =============================================================================

fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<T>().ok())
}

impl ElementSource for Document {
    type Input = HtmlInputElement;
    type Element = HtmlElement;
    type Form = HtmlFormElement;

    fn file_input(&self, id: &str) -> Option<HtmlInputElement> {
        by_id(self, id)
    }

    fn element(&self, id: &str) -> Option<HtmlElement> {
        by_id(self, id)
    }

    fn form(&self, id: &str) -> Option<HtmlFormElement> {
        by_id(self, id)
    }
}

/// Read overrides from the page's JSON config block, if it has one.
pub fn page_config(document: &Document) -> UploadFormConfig {
    match document
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|script| script.text_content())
    {
        Some(json) => UploadFormConfig::from_json_or_default(&json),
        None => UploadFormConfig::default(),
    }
}

// =============================================================================
// Listener registration
// =============================================================================

/// Register `handler` for `event` on `target` for the rest of the page's life.
fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> AppResult<()> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);

    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| AppError::Dom(format!("Failed to listen for '{}': {:?}", event, e)))?;

    // The listener lives as long as the page
    closure.forget();
    Ok(())
}

/// Register a listener that feeds `to_form_event` into the controller,
/// cancelling the browser's default handling where the event asks for it.
fn listen_form_event(
    ui: &Rc<WebUploadForm>,
    target: &EventTarget,
    event: &str,
    to_form_event: fn(&Event) -> FormEvent<FileList>,
) -> AppResult<()> {
    let ui = Rc::clone(ui);
    listen(target, event, move |ev: Event| {
        let form_event = to_form_event(&ev);
        if form_event.cancels_default() {
            ev.prevent_default();
        }
        ui.dispatch(form_event);
    })
}

fn dropped_files(ev: &Event) -> FormEvent<FileList> {
    let files = ev
        .dyn_ref::<DragEvent>()
        .and_then(|drag| drag.data_transfer())
        .and_then(|transfer| transfer.files());
    FormEvent::Drop(files)
}

/// Attach the upload form behavior to the elements already in `document`.
///
/// Fails only if the file input or the preview container is missing, or if
/// a listener cannot be registered.
pub fn enhance(document: &Document, config: &UploadFormConfig) -> AppResult<Rc<WebUploadForm>> {
    let AcquiredForm { elements, form } = acquire(document, &config.ids)?;

    let file_input = elements.file_input.clone();
    let drop_zone = elements.drop_zone.clone();
    let ui = Rc::new(UploadFormUi::new(elements, config.palette.clone()));

    listen_form_event(&ui, &file_input, "change", |_| FormEvent::SelectionChanged)?;

    if let Some(form) = &form {
        listen_form_event(&ui, form, "submit", |_| FormEvent::Submit)?;
    }

    if let Some(zone) = &drop_zone {
        listen_form_event(&ui, zone, "dragenter", |_| FormEvent::DragEnter)?;
        listen_form_event(&ui, zone, "dragover", |_| FormEvent::DragOver)?;
        listen_form_event(&ui, zone, "dragleave", |_| FormEvent::DragLeave)?;
        listen_form_event(&ui, zone, "drop", dropped_files)?;
    }

    log::info!("🏠 Upload form ready (#{})", config.ids.file_input);
    Ok(ui)
}
