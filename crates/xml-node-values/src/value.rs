//! Valued node representation

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::attributes::fmt_attributes;
use crate::error::{Error, Result};
use crate::name::NodeName;

/// One XML element carrying character content.
///
/// Covers elements with a text value, with or without attributes — including
/// the attributes-plus-content combination that
/// [`NodeAttributeSet`](crate::attributes::NodeAttributeSet) does not
/// represent. An empty element yields an absent value.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct NodeValue {
    node_name: String,
    value: Option<String>,
    attributes: Option<BTreeMap<String, String>>,
}

impl NodeValue {
    /// Create a new valued node for the named element.
    ///
    /// Returns [`Error::InvalidArgument`] if `node_name` is empty; the value
    /// and attribute map are taken as-is.
    pub fn new(
        node_name: impl Into<String>,
        value: Option<String>,
        attributes: Option<BTreeMap<String, String>>,
    ) -> Result<Self> {
        let node_name = node_name.into();
        if node_name.is_empty() {
            return Err(Error::invalid_argument("node name must not be empty"));
        }

        Ok(Self {
            node_name,
            value,
            attributes,
        })
    }

    /// Get the name of the element this value belongs to
    pub fn node_name(&self) -> &str {
        &self.node_name
    }

    /// Get the character content of the element, if any
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
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
}

impl NodeName for NodeValue {
    fn node_name(&self) -> &str {
        &self.node_name
    }
}

impl fmt::Debug for NodeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NodeValue[nodeName={}, value={:?}, attributes=",
            self.node_name, self.value
        )?;
        fmt_attributes(f, &self.attributes)?;
        f.write_str("]")
    }
}
