use std::collections::HashMap;
use std::sync::Mutex;

use assistant_core::ElementKind;

use crate::document::Document;

/// Everything the document was asked to do, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomRecord {
    ValueSet { id: String, value: String },
    InputDispatched { id: String },
    AiUpdateDispatched { id: String, value: String },
    Focused { id: String },
}

#[derive(Debug)]
struct ElementState {
    kind: ElementKind,
    value: String,
    in_popup: bool,
}

/// In-memory [`Document`] for tests and demos, with a recorded event log.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    elements: HashMap<String, ElementState>,
    records: Vec<DomRecord>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an editable element outside the popup.
    pub fn insert(&self, id: impl Into<String>, kind: ElementKind, value: impl Into<String>) {
        self.inner.lock().unwrap().elements.insert(
            id.into(),
            ElementState {
                kind,
                value: value.into(),
                in_popup: false,
            },
        );
    }

    /// Registers an element belonging to the popup's own UI.
    pub fn insert_popup(&self, id: impl Into<String>, kind: ElementKind) {
        self.inner.lock().unwrap().elements.insert(
            id.into(),
            ElementState {
                kind,
                value: String::new(),
                in_popup: true,
            },
        );
    }

    /// Snapshot of the recorded operations so far.
    pub fn records(&self) -> Vec<DomRecord> {
        self.inner.lock().unwrap().records.clone()
    }

    /// The identifier that most recently received focus, if any.
    pub fn focused(&self) -> Option<String> {
        self.inner
            .lock()
            .unwrap()
            .records
            .iter()
            .rev()
            .find_map(|record| match record {
                DomRecord::Focused { id } => Some(id.clone()),
                _ => None,
            })
    }
}

impl Document for MemoryDocument {
    fn kind(&self, id: &str) -> Option<ElementKind> {
        self.inner
            .lock()
            .unwrap()
            .elements
            .get(id)
            .map(|element| element.kind)
    }

    fn value(&self, id: &str) -> Option<String> {
        self.inner
            .lock()
            .unwrap()
            .elements
            .get(id)
            .map(|element| element.value.clone())
    }

    fn set_value(&self, id: &str, text: &str) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(element) = inner.elements.get_mut(id) {
            element.value = text.to_string();
            inner.records.push(DomRecord::ValueSet {
                id: id.to_string(),
                value: text.to_string(),
            });
        }
    }

    fn dispatch_input(&self, id: &str) {
        let mut inner = self.inner.lock().unwrap();
        if inner.elements.contains_key(id) {
            inner
                .records
                .push(DomRecord::InputDispatched { id: id.to_string() });
        }
    }

    fn dispatch_ai_update(&self, id: &str, text: &str) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(element) = inner.elements.get_mut(id) {
            // Models the rich-text editor's listener applying the update
            // through its own content-setting API.
            element.value = text.to_string();
            inner.records.push(DomRecord::AiUpdateDispatched {
                id: id.to_string(),
                value: text.to_string(),
            });
        }
    }

    fn focus(&self, id: &str) {
        let mut inner = self.inner.lock().unwrap();
        if inner.elements.contains_key(id) {
            inner
                .records
                .push(DomRecord::Focused { id: id.to_string() });
        }
    }

    fn in_popup(&self, id: &str) -> bool {
        self.inner
            .lock()
            .unwrap()
            .elements
            .get(id)
            .is_some_and(|element| element.in_popup)
    }
}
