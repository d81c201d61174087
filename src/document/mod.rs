//! # Document Store
//!
//! Library files and quantitation methods are both hierarchical documents.
//! This module is the only place that knows how such a document is spelled
//! on the wire; the rest of the crate sees an [`Element`] tree through the
//! [`TreeNode`] read interface and builds output trees with the `push_*`
//! methods on [`Element`].
//!
//! ## Supported operations
//!
//! - Scalar field read with an optional default ([`TreeNode::get`],
//!   [`TreeNode::get_or`]), addressed by dotted paths such as
//!   `"Library.LibraryID"`
//! - Ordered iteration over named child nodes ([`TreeNode::children`])
//! - Scalar field write, attribute write and child attachment, all preserving
//!   insertion order
//!
//! XML is the only wire syntax implemented ([`read_document`],
//! [`render_document`]).

use std::fmt::Display;
use std::str::FromStr;

use log::warn;

mod error;
mod reader;
mod writer;


pub use error::DocumentError;
pub use reader::{read_document, read_document_file, read_document_str};
pub use writer::{render_document, write_document};

/// An owned node of a hierarchical document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    /// Create an empty element with the given tag
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Create a leaf element holding a scalar value
    pub fn leaf(name: impl Into<String>, value: impl Display) -> Self {
        Self {
            name: name.into(),
            text: value.to_string(),
            ..Default::default()
        }
    }

    /// Attributes in insertion order
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Look up an attribute value by key
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, replacing an existing value for the same key
    pub fn push_attribute(&mut self, key: &str, value: impl Display) -> &mut Self {
        let value = value.to_string();
        match self.attributes.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((key.to_string(), value)),
        }
        self
    }

    /// Replace the text content of this element
    pub fn set_text(&mut self, value: impl Display) -> &mut Self {
        self.text = value.to_string();
        self
    }

    /// Append a scalar field as a leaf child
    pub fn push_field(&mut self, name: &str, value: impl Display) -> &mut Self {
        self.children.push(Element::leaf(name, value));
        self
    }

    /// Append a child element
    pub fn push_child(&mut self, child: Element) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Whether this element has neither text nor children
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.children.is_empty()
    }
}

/// Scalar types that can be read from a document field
pub trait FromField: Sized {
    /// Parse the textual value of a field, `None` if it is not valid
    fn from_field(text: &str) -> Option<Self>;
}

macro_rules! from_field_via_from_str {
    ($($ty:ty),*) => {
        $(
            impl FromField for $ty {
                fn from_field(text: &str) -> Option<Self> {
                    <$ty>::from_str(text.trim()).ok()
                }
            }
        )*
    };
}

from_field_via_from_str!(u32, u64, i32, i64, f32, f64);

impl FromField for bool {
    fn from_field(text: &str) -> Option<Self> {
        match text.trim() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        }
    }
}

impl FromField for String {
    fn from_field(text: &str) -> Option<Self> {
        Some(text.to_string())
    }
}

/// A field that is present but cannot be converted to the requested type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidField {
    /// Dotted path of the field
    pub path: String,
    /// Raw text found at that path
    pub value: String,
}

/// Read interface over a hierarchical document node
///
/// Paths are dotted tag sequences resolved from this node; at every step the
/// first child with a matching tag is taken.
pub trait TreeNode: Sized {
    /// Tag of this node
    fn tag(&self) -> &str;

    /// Text content of this node
    fn text(&self) -> &str;

    /// Child nodes in document order
    fn children(&self) -> &[Self];

    /// Resolve a dotted path to a descendant node
    fn child(&self, path: &str) -> Option<&Self> {
        path.split('.').try_fold(self, |node, tag| {
            node.children().iter().find(|child| child.tag() == tag)
        })
    }

    /// Raw text of the field at `path`
    fn field(&self, path: &str) -> Option<&str> {
        self.child(path).map(|node| node.text())
    }

    /// Typed field read: `Ok(None)` when absent, `Err` when unparsable
    fn get<T: FromField>(&self, path: &str) -> Result<Option<T>, InvalidField> {
        match self.field(path) {
            None => Ok(None),
            Some(text) => T::from_field(text).map(Some).ok_or_else(|| InvalidField {
                path: path.to_string(),
                value: text.to_string(),
            }),
        }
    }

    /// Typed field read falling back to `default` when absent or unparsable
    fn get_or<T: FromField>(&self, path: &str, default: T) -> T {
        match self.get(path) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(invalid) => {
                warn!(
                    "Ignoring unparsable value {:?} for <{}> in <{}>",
                    invalid.value,
                    invalid.path,
                    self.tag()
                );
                default
            }
        }
    }
}

impl TreeNode for Element {
    fn tag(&self) -> &str {
        &self.name
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}
