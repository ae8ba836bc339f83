//! In-memory elements for exercising the controller without a browser.
//!
//! Clones share state, like clones of a `web_sys` element handle.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use super::{ElementSource, FileInput, StyledElement, TagContainer};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementState {
    pub styles: BTreeMap<String, String>,
    pub classes: Vec<String>,
    /// `(class, text)` per appended tag
    pub tags: Vec<(String, String)>,
}

#[derive(Clone, Default)]
pub struct FakeElement(Rc<RefCell<ElementState>>);

impl FakeElement {
    pub fn with_class(class: &str) -> Self {
        let element = Self::default();
        element.0.borrow_mut().classes.push(class.to_string());
        element
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.0.borrow().styles.get(property).cloned()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    pub fn tags(&self) -> Vec<(String, String)> {
        self.0.borrow().tags.clone()
    }

    pub fn tag_texts(&self) -> Vec<String> {
        self.0.borrow().tags.iter().map(|(_, text)| text.clone()).collect()
    }

    pub fn snapshot(&self) -> ElementState {
        self.0.borrow().clone()
    }
}

impl StyledElement for FakeElement {
    fn set_style(&self, property: &str, value: &str) {
        self.0
            .borrow_mut()
            .styles
            .insert(property.to_string(), value.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.retain(|c| c != class);
    }
}

impl TagContainer for FakeElement {
    fn clear(&self) {
        self.0.borrow_mut().tags.clear();
    }

    fn append_tag(&self, class: &str, text: &str) {
        self.0
            .borrow_mut()
            .tags
            .push((class.to_string(), text.to_string()));
    }
}

#[derive(Default)]
struct InputState {
    files: RefCell<Vec<String>>,
    listener: RefCell<Option<Rc<dyn Fn()>>>,
    changes: Cell<usize>,
}

/// File input whose "files" are just names.
#[derive(Clone, Default)]
pub struct FakeInput(Rc<InputState>);

impl FakeInput {
    /// Set the selection as the picker would, without raising `change`.
    pub fn select(&self, files: Vec<String>) {
        *self.0.files.borrow_mut() = files;
    }

    pub fn on_change(&self, listener: impl Fn() + 'static) {
        *self.0.listener.borrow_mut() = Some(Rc::new(listener));
    }

    /// Number of synthetic `change` events raised.
    pub fn change_count(&self) -> usize {
        self.0.changes.get()
    }
}

impl FileInput for FakeInput {
    type Files = Vec<String>;

    fn file_names(&self) -> Vec<String> {
        self.0.files.borrow().clone()
    }

    fn assign_files(&self, files: &Vec<String>) {
        self.select(files.clone());
    }

    fn notify_change(&self) {
        self.0.changes.set(self.0.changes.get() + 1);

        let listener = self.0.listener.borrow().clone();
        if let Some(listener) = listener {
            listener();
        }
    }
}

/// Page whose elements are found by id in maps.
#[derive(Default)]
pub struct FakeDocument {
    inputs: HashMap<String, FakeInput>,
    elements: HashMap<String, FakeElement>,
}

impl FakeDocument {
    pub fn with_input(mut self, id: &str, input: FakeInput) -> Self {
        self.inputs.insert(id.to_string(), input);
        self
    }

    pub fn with_element(mut self, id: &str, element: FakeElement) -> Self {
        self.elements.insert(id.to_string(), element);
        self
    }
}

impl ElementSource for FakeDocument {
    type Input = FakeInput;
    type Element = FakeElement;
    type Form = FakeElement;

    fn file_input(&self, id: &str) -> Option<FakeInput> {
        self.inputs.get(id).cloned()
    }

    fn element(&self, id: &str) -> Option<FakeElement> {
        self.elements.get(id).cloned()
    }

    fn form(&self, id: &str) -> Option<FakeElement> {
        self.elements.get(id).cloned()
    }
}
