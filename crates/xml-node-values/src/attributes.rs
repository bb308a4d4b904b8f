//! Attribute-only node representation

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::name::NodeName;

/// All attributes of one XML element.
///
/// An intermediate conversion value: the attribute-extraction step builds one
/// instance per element and hands it to a converter, which projects it into a
/// domain-specific result. The attribute map may be absent (the element
/// declared no attributes) or present-but-empty; the two states are distinct
/// and both are preserved as supplied.
///
/// This type does not represent elements that carry attributes and character
/// content at the same time; those are represented by
/// [`NodeValue`](crate::value::NodeValue) instead.
///
/// Instances are immutable: fully populated at construction, shared
/// references out, no setters.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct NodeAttributeSet {
    node_name: String,
    attributes: Option<BTreeMap<String, String>>,
}

impl NodeAttributeSet {
    /// Create a new attribute set for the named element.
    ///
    /// Returns [`Error::InvalidArgument`] if `node_name` is empty. This is
    /// the only validation performed; the attribute map contents are taken
    /// as-is, and no trimming is applied to the name.
    pub fn new(
        node_name: impl Into<String>,
        attributes: Option<BTreeMap<String, String>>,
    ) -> Result<Self> {
        let node_name = node_name.into();
        if node_name.is_empty() {
            return Err(Error::invalid_argument("node name must not be empty"));
        }

        Ok(Self {
            node_name,
            attributes,
        })
    }

    /// Get the name of the element this set belongs to
    pub fn node_name(&self) -> &str {
        &self.node_name
    }

    /// Get the value of the named attribute.
    ///
    /// Returns `None` when the attribute map is absent or when the map lacks
    /// the key; the two cases are not distinguished here. Callers that need
    /// the distinction use [`attributes`](Self::attributes).
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.as_ref()?.get(name).map(String::as_str)
    }

    /// Get the attribute map as stored: absent, empty, or populated
    pub fn attributes(&self) -> Option<&BTreeMap<String, String>> {
        self.attributes.as_ref()
    }
}

impl NodeName for NodeAttributeSet {
    fn node_name(&self) -> &str {
        &self.node_name
    }
}

impl fmt::Debug for NodeAttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeAttributeSet[nodeName={}, attributes=", self.node_name)?;
        fmt_attributes(f, &self.attributes)?;
        f.write_str("]")
    }
}

/// Write an optional attribute map in the diagnostic form shared by all node
/// value types: the map's debug representation, or `None` when absent.
pub(crate) fn fmt_attributes(
    f: &mut fmt::Formatter<'_>,
    attributes: &Option<BTreeMap<String, String>>,
) -> fmt::Result {
    match attributes {
        Some(map) => write!(f, "{:?}", map),
        None => f.write_str("None"),
    }
}
