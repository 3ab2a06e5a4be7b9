// crates/xpdsc-rs/src/tree.rs

//! The generic, array-wrapped representation of a parsed XML document.
//!
//! Every element maps each child tag name to the ordered list of children
//! carrying that tag, even when only one exists. Attributes live in their own
//! map, so they can never collide with child tags. The builders only consume
//! this tree; they never look at raw XML.

use crate::error::XpdscError;
use std::collections::BTreeMap;

/// A single XML element (or the document node, which has an empty name).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: BTreeMap<String, String>,
    children: BTreeMap<String, Vec<Element>>,
    text: String,
}

impl Element {
    /// Creates an empty element with the given tag name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Creates the unnamed document node that holds the root element.
    pub fn document(root: Element) -> Self {
        Self::default().with_child(root)
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.push_child(child);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub(crate) fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Appends a child, keeping document order within its tag.
    pub(crate) fn push_child(&mut self, child: Element) {
        self.children
            .entry(child.name.clone())
            .or_default()
            .push(child);
    }

    pub(crate) fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Drops text that is whitespace only, whether it separated child
    /// elements or was the whole content of a leaf.
    pub(crate) fn discard_blank_text(&mut self) {
        if self.text.trim().is_empty() {
            self.text.clear();
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw attribute value, which may be an empty string.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// The attribute value if it is present and non-empty.
    ///
    /// Every presence-gated field of the xpdsc output uses this check, so
    /// `Dclock=""` behaves exactly like a missing `Dclock`.
    pub fn flag(&self, name: &str) -> Option<&str> {
        self.attribute(name).filter(|v| !v.is_empty())
    }

    /// All children with the given tag, in document order.
    pub fn children(&self, tag: &str) -> &[Element] {
        self.children.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns `true` if at least one child with the given tag exists.
    pub fn has(&self, tag: &str) -> bool {
        !self.children(tag).is_empty()
    }

    pub fn first(&self, tag: &str) -> Option<&Element> {
        self.children(tag).first()
    }

    /// First-or-fail access to a structurally required child.
    ///
    /// `path` names the full location of the element in the error.
    pub fn require(&self, tag: &str, path: &'static str) -> Result<&Element, XpdscError> {
        self.first(tag).ok_or(XpdscError::MissingElement { path })
    }

    /// The character content, or `None` for an empty element.
    pub fn text(&self) -> Option<&str> {
        if self.text.is_empty() {
            None
        } else {
            Some(&self.text)
        }
    }
}
