//! List node representation

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::attributes::fmt_attributes;
use crate::error::{Error, Result};
use crate::name::NodeName;
use crate::value::NodeValue;

/// One XML container element whose children are simple valued elements.
///
/// Children are kept in document order; an element with no children yields an
/// empty list, which is valid.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct NodeList {
    node_name: String,
    attributes: Option<BTreeMap<String, String>>,
    children: Vec<NodeValue>,
}

impl NodeList {
    /// Create a new list node for the named element.
    ///
    /// Returns [`Error::InvalidArgument`] if `node_name` is empty; the
    /// attribute map and children are taken as-is.
    pub fn new(
        node_name: impl Into<String>,
        attributes: Option<BTreeMap<String, String>>,
        children: Vec<NodeValue>,
    ) -> Result<Self> {
        let node_name = node_name.into();
        if node_name.is_empty() {
            return Err(Error::invalid_argument("node name must not be empty"));
        }

        Ok(Self {
            node_name,
            attributes,
            children,
        })
    }

    /// Get the name of the element this list belongs to
    pub fn node_name(&self) -> &str {
        &self.node_name
    }

    /// Get the value of the named attribute.
    ///
    /// Returns `None` when the attribute map is absent or when the map lacks
    /// the key, exactly as
    /// [`NodeAttributeSet::attribute`](crate::attributes::NodeAttributeSet::attribute).
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.as_ref()?.get(name).map(String::as_str)
    }

    /// Get the attribute map as stored: absent, empty, or populated
    pub fn attributes(&self) -> Option<&BTreeMap<String, String>> {
        self.attributes.as_ref()
    }

    /// Get the child elements in document order
    pub fn children(&self) -> &[NodeValue] {
        &self.children
    }
}

impl NodeName for NodeList {
    fn node_name(&self) -> &str {
        &self.node_name
    }
}

impl fmt::Debug for NodeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeList[nodeName={}, attributes=", self.node_name)?;
        fmt_attributes(f, &self.attributes)?;
        write!(f, ", children={}]", self.children.len())
    }
}
