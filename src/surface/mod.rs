//! Rendering surface abstraction.
//!
//! Controllers never talk to a concrete DOM. They address elements by id,
//! class or attribute through [`Document`], and every mutation on a missing
//! element is silently ignored.

mod memory;

pub use memory::{
    Content,
    DocumentError,
    Element,
    MemoryDocument,
};

use crate::markup::Node;
use crate::types::ElementId;

/// A DOM-like tree of elements that can be queried and mutated.
pub trait Document {
    /// Elements carrying `attribute`, with its value, in document order.
    fn elements_with_attribute(&self, attribute: &str) -> Vec<(ElementId, String)>;

    /// Elements carrying `class`, in document order.
    fn elements_with_class(&self, class: &str) -> Vec<ElementId>;

    /// First descendant of `ancestor` carrying `class`.
    fn descendant_with_class(&self, ancestor: &ElementId, class: &str) -> Option<ElementId>;

    fn contains(&self, id: &ElementId) -> bool;

    fn attribute(&self, id: &ElementId, name: &str) -> Option<String>;

    fn has_class(&self, id: &ElementId, class: &str) -> bool;

    /// Rendered width in pixels, when the surface knows it.
    fn width(&self, id: &ElementId) -> Option<u32>;

    /// Replaces the element's content with plain text.
    fn set_text(&mut self, id: &ElementId, text: &str);

    /// Replaces the element's content with markup nodes.
    fn set_children(&mut self, id: &ElementId, children: Vec<Node>);

    fn set_class(&mut self, id: &ElementId, class: &str, enabled: bool);

    /// Sets an inline style property, or removes it when `value` is `None`.
    fn set_style(&mut self, id: &ElementId, property: &str, value: Option<&str>);

    fn set_scroll_top(&mut self, id: &ElementId, top: u32);

    /// Sets an attribute on the document root (e.g. `lang` on `<html>`).
    fn set_root_attribute(&mut self, name: &str, value: &str);

    fn root_attribute(&self, name: &str) -> Option<String>;
}
