//! In-memory rendering surface used by the headless driver and tests.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use super::Document;
use crate::markup::Node;
use crate::types::ElementId;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to read page document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse page document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate element id '{0}'")]
    DuplicateId(ElementId),

    #[error("Element '{element}' refers to unknown parent '{parent}'")]
    UnknownParent { element: ElementId, parent: ElementId },
}

/// Content of an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Content {
    Text(String),
    Nodes(Vec<Node>),
}

impl Default for Content {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl Content {
    /// Text as a reader would see it (markup tags of `Raw` fragments included).
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Nodes(nodes) => nodes.iter().map(Node::text_content).collect(),
        }
    }

    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        match self {
            Self::Text(_) => &[],
            Self::Nodes(nodes) => nodes,
        }
    }
}

/// A single element of a [`MemoryDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Element {
    pub id: ElementId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<ElementId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub styles: BTreeMap<String, String>,
    pub content: Content,
    pub scroll_top: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

impl Element {
    #[must_use]
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self { id: id.into(), ..Self::default() }
    }

    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<ElementId>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        if !self.classes.iter().any(|c| c == class) {
            self.classes.push(class.to_string());
        }
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.content = Content::Text(text.to_string());
        self
    }

    #[must_use]
    pub const fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }
}

/// Elements kept in document order, plus the attributes of the root.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemoryDocument {
    root_attributes: BTreeMap<String, String>,
    elements: Vec<Element>,
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a document from elements in document order.
    ///
    /// # Errors
    /// - Two elements share an id
    /// - An element names a parent that does not precede it
    pub fn from_elements(elements: Vec<Element>) -> Result<Self, DocumentError> {
        let mut document = Self::new();
        for element in elements {
            document.push(element)?;
        }
        Ok(document)
    }

    /// Loads a serialized document (e.g. `pages/home.json`).
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        tracing::debug!("Loading page document from: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        let parsed: Self = serde_json::from_str(&content)?;
        Self::from_elements(parsed.elements).map(|mut document| {
            document.root_attributes = parsed.root_attributes;
            document
        })
    }

    /// Appends an element at the end of the document.
    pub fn push(&mut self, element: Element) -> Result<(), DocumentError> {
        if self.contains(&element.id) {
            return Err(DocumentError::DuplicateId(element.id));
        }
        if let Some(parent) = &element.parent
            && !self.contains(parent)
        {
            return Err(DocumentError::UnknownParent {
                element: element.id,
                parent: parent.clone(),
            });
        }
        self.elements.push(element);
        Ok(())
    }

    #[must_use]
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id.as_str() == id)
    }

    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    fn element_mut(&mut self, id: &ElementId) -> Option<&mut Element> {
        let element = self.elements.iter_mut().find(|e| &e.id == id);
        if element.is_none() {
            tracing::trace!(%id, "Element not found on surface");
        }
        element
    }

    fn is_descendant_of(&self, element: &Element, ancestor: &ElementId) -> bool {
        let mut parent = element.parent.as_ref();
        while let Some(id) = parent {
            if id == ancestor {
                return true;
            }
            parent = self.element(id.as_str()).and_then(|e| e.parent.as_ref());
        }
        false
    }
}

impl Document for MemoryDocument {
    fn elements_with_attribute(&self, attribute: &str) -> Vec<(ElementId, String)> {
        self.elements
            .iter()
            .filter_map(|e| e.attributes.get(attribute).map(|value| (e.id.clone(), value.clone())))
            .collect()
    }

    fn elements_with_class(&self, class: &str) -> Vec<ElementId> {
        self.elements
            .iter()
            .filter(|e| e.classes.iter().any(|c| c == class))
            .map(|e| e.id.clone())
            .collect()
    }

    fn descendant_with_class(&self, ancestor: &ElementId, class: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .filter(|e| e.classes.iter().any(|c| c == class))
            .find(|e| self.is_descendant_of(e, ancestor))
            .map(|e| e.id.clone())
    }

    fn contains(&self, id: &ElementId) -> bool {
        self.elements.iter().any(|e| &e.id == id)
    }

    fn attribute(&self, id: &ElementId, name: &str) -> Option<String> {
        self.element(id.as_str()).and_then(|e| e.attributes.get(name).cloned())
    }

    fn has_class(&self, id: &ElementId, class: &str) -> bool {
        self.element(id.as_str()).is_some_and(|e| e.classes.iter().any(|c| c == class))
    }

    fn width(&self, id: &ElementId) -> Option<u32> {
        self.element(id.as_str()).and_then(|e| e.width)
    }

    fn set_text(&mut self, id: &ElementId, text: &str) {
        if let Some(element) = self.element_mut(id) {
            element.content = Content::Text(text.to_string());
        }
    }

    fn set_children(&mut self, id: &ElementId, children: Vec<Node>) {
        if let Some(element) = self.element_mut(id) {
            element.content = Content::Nodes(children);
        }
    }

    fn set_class(&mut self, id: &ElementId, class: &str, enabled: bool) {
        if let Some(element) = self.element_mut(id) {
            let present = element.classes.iter().any(|c| c == class);
            if enabled && !present {
                element.classes.push(class.to_string());
            } else if !enabled && present {
                element.classes.retain(|c| c != class);
            }
        }
    }

    fn set_style(&mut self, id: &ElementId, property: &str, value: Option<&str>) {
        if let Some(element) = self.element_mut(id) {
            match value {
                Some(value) => {
                    element.styles.insert(property.to_string(), value.to_string());
                }
                None => {
                    element.styles.remove(property);
                }
            }
        }
    }

    fn set_scroll_top(&mut self, id: &ElementId, top: u32) {
        if let Some(element) = self.element_mut(id) {
            element.scroll_top = top;
        }
    }

    fn set_root_attribute(&mut self, name: &str, value: &str) {
        self.root_attributes.insert(name.to_string(), value.to_string());
    }

    fn root_attribute(&self, name: &str) -> Option<String> {
        self.root_attributes.get(name).cloned()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;
    use tempfile::TempDir;

    use super::*;

    #[fixture]
    fn document() -> MemoryDocument {
        MemoryDocument::from_elements(vec![
            Element::new("grid"),
            Element::new("item-1")
                .with_parent("grid")
                .with_class("portfolio-item")
                .with_attribute("data-category", "branding"),
            Element::new("view-1")
                .with_parent("item-1")
                .with_class("portfolio-view")
                .with_attribute("data-project", "1"),
            Element::new("item-2").with_parent("grid").with_class("portfolio-item"),
        ])
        .expect("valid document")
    }

    #[rstest]
    fn test_queries_follow_document_order(document: MemoryDocument) {
        let items = document.elements_with_class("portfolio-item");

        assert_that!(
            items,
            elements_are![eq(&ElementId::from("item-1")), eq(&ElementId::from("item-2"))]
        );
        assert_that!(
            document.elements_with_attribute("data-project"),
            elements_are![eq(&(ElementId::from("view-1"), "1".to_string()))]
        );
    }

    #[rstest]
    fn test_descendant_with_class(document: MemoryDocument) {
        let grid = ElementId::from("grid");
        let item_2 = ElementId::from("item-2");

        assert_that!(
            document.descendant_with_class(&grid, "portfolio-view"),
            some(eq(&ElementId::from("view-1")))
        );
        assert_that!(document.descendant_with_class(&item_2, "portfolio-view"), none());
    }

    #[rstest]
    fn test_set_class_is_idempotent(mut document: MemoryDocument) {
        let id = ElementId::from("item-2");

        document.set_class(&id, "revealed", true);
        document.set_class(&id, "revealed", true);

        assert_that!(document.element("item-2").unwrap().classes, len(eq(2)));

        document.set_class(&id, "revealed", false);
        assert_that!(document.has_class(&id, "revealed"), eq(false));
    }

    #[rstest]
    fn test_mutating_missing_element_is_ignored(mut document: MemoryDocument) {
        let before = document.clone();
        let missing = ElementId::from("nope");

        document.set_text(&missing, "x");
        document.set_style(&missing, "display", Some("none"));
        document.set_class(&missing, "active", true);

        assert_that!(document, eq(&before));
    }

    #[rstest]
    fn test_set_style_and_remove(mut document: MemoryDocument) {
        let id = ElementId::from("item-1");

        document.set_style(&id, "display", Some("none"));
        assert_that!(document.element("item-1").unwrap().style("display"), some(eq("none")));

        document.set_style(&id, "display", None);
        assert_that!(document.element("item-1").unwrap().style("display"), none());
    }

    #[googletest::test]
    fn test_from_elements_rejects_duplicates_and_orphans() {
        let duplicate = MemoryDocument::from_elements(vec![Element::new("a"), Element::new("a")]);
        let orphan = MemoryDocument::from_elements(vec![Element::new("a").with_parent("b")]);

        expect_that!(matches!(duplicate, Err(DocumentError::DuplicateId(_))), eq(true));
        expect_that!(matches!(orphan, Err(DocumentError::UnknownParent { .. })), eq(true));
    }

    #[googletest::test]
    fn test_load_round_trips_through_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("home.json");
        let json = r#"{
            "rootAttributes": { "lang": "en" },
            "elements": [
                { "id": "heroTag", "attributes": { "data-i18n": "hero.tag" }, "content": { "text": "Visual Agency" } },
                { "id": "card-1", "classes": ["testimonial-card"], "width": 400 }
            ]
        }"#;
        std::fs::write(&path, json).unwrap();

        let document = MemoryDocument::load(&path).unwrap();

        expect_that!(document.root_attribute("lang"), some(eq("en")));
        expect_that!(document.element("heroTag").unwrap().content.text(), eq("Visual Agency"));
        expect_that!(document.width(&ElementId::from("card-1")), some(eq(400)));
    }
}
