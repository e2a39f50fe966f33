//! Minimal page model
//!
//! Components receive the page and their collaborators explicitly instead of
//! reaching into a global document, so they can run without a browser.

use std::collections::HashMap;

/// Errors raised while wiring or running page components.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error("Element not found: #{0}")]
    ElementNotFound(String),

    #[error("Element has no data-{0} attribute")]
    MissingDataAttribute(String),
}

/// A page element: an optional id plus its `data-*` attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    id: Option<String>,
    dataset: HashMap<String, String>,
}

impl Element {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            dataset: HashMap::new(),
        }
    }

    /// An element without an id, such as an icon nested inside a button
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Set a data attribute; `name` is given without the `data-` prefix.
    pub fn with_data(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.dataset.insert(name.into(), value.into());
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn data(&self, name: &str) -> Option<&str> {
        self.dataset.get(name).map(String::as_str)
    }
}

/// The elements of a rendered page
#[derive(Debug, Clone, Default)]
pub struct Page {
    elements: Vec<Element>,
}

impl Page {
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|element| element.id() == Some(id))
    }
}

/// A click, as seen by a handler attached to `current_target`.
///
/// `target` is the element actually clicked, which may be a descendant.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub target: Element,
    pub current_target: Element,
}

impl ClickEvent {
    /// A click landing directly on `element`
    pub fn on(element: Element) -> Self {
        Self {
            target: element.clone(),
            current_target: element,
        }
    }

    /// Look up a data attribute on the clicked element, then on the element the handler is attached to.
    pub fn data(&self, name: &str) -> Option<&str> {
        self.target.data(name).or_else(|| self.current_target.data(name))
    }
}
