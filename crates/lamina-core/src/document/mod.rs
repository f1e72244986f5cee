//! Read-only navigation over a pre-parsed configuration document.
//!
//! The parser that turns raw bytes into a tree of named elements with
//! attributes and text content is an external collaborator; the core only
//! needs the narrow navigation surface defined by [`TreeElement`].
//! [`Element`] is the owned tree type callers hand to the scope extractor,
//! and the natural target for an adapter over any document parser.

use crate::error::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Narrow read-only view of one element in a configuration document.
pub trait TreeElement {
    /// The element's tag name.
    fn tag(&self) -> &str;

    /// The value of an attribute, if present.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// The immediate child elements carrying the given tag, in document
    /// order.
    fn children_by_tag(&self, tag: &str) -> Vec<&Self>;

    /// The element's trimmed text content.
    ///
    /// Fallible so that adapters over streaming parsers can surface a failed
    /// read; the scope extractor treats such a failure as recoverable.
    fn text(&self) -> Result<String>;

    /// Textual representation used when reporting a malformed element.
    fn describe(&self) -> String {
        format!("<{}>", self.tag())
    }
}

/// An owned document element: tag, attributes, children, text.
///
/// # Example
///
/// ```
/// use lamina_core::{Element, TreeElement};
///
/// let doc = Element::new("lamina-config")
///     .with_child(
///         Element::new("default-config")
///             .with_child(Element::new("property").with_attribute("name", "x").with_text("1")),
///     );
/// assert_eq!(doc.tag(), "lamina-config");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    tag: String,
    #[serde(default)]
    attributes: IndexMap<String, String>,
    #[serde(default)]
    children: Vec<Element>,
    #[serde(default)]
    text: String,
}

impl Element {
    /// Creates an element with the given tag and no attributes, children or
    /// text.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
            text: String::new(),
        }
    }

    /// Adds an attribute, replacing any previous value for the same name.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Appends a child element.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Sets the text content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Returns all immediate children, in document order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }
}

impl TreeElement for Element {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    fn children_by_tag(&self, tag: &str) -> Vec<&Self> {
        self.children.iter().filter(|c| c.tag == tag).collect()
    }

    fn text(&self) -> Result<String> {
        Ok(self.text.trim().to_string())
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attributes {
            write!(f, " {}=\"{}\"", name, value)?;
        }
        if self.children.is_empty() && self.text.is_empty() {
            return write!(f, "/>");
        }
        write!(f, ">{}", self.text)?;
        for child in &self.children {
            write!(f, "{}", child)?;
        }
        write!(f, "</{}>", self.tag)
    }
}
