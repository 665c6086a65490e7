//! Typed view of the grammar's `node-types.json`.

use std::collections::BTreeMap;

use serde::Deserialize;

/// One entry of `node-types.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NodeType {
    #[serde(rename = "type")]
    pub kind: String,
    pub named: bool,
    #[serde(default)]
    pub fields: BTreeMap<String, ChildType>,
    #[serde(default)]
    pub children: Option<ChildType>,
}

impl NodeType {
    /// Returns the description of the field `name`, if the node has one.
    pub fn field(&self, name: &str) -> Option<&ChildType> {
        self.fields.get(name)
    }

    /// Kinds of the unnamed-field children this node may contain.
    pub fn child_kinds(&self) -> impl Iterator<Item = &str> {
        self.children
            .iter()
            .flat_map(|children| children.types.iter().map(|t| t.kind.as_str()))
    }
}

/// Shape of a field or of the remaining children of a node.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChildType {
    pub multiple: bool,
    pub required: bool,
    pub types: Vec<NodeTypeRef>,
}

/// Reference to a node kind allowed in a field or child position.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NodeTypeRef {
    #[serde(rename = "type")]
    pub kind: String,
    pub named: bool,
}

/// Parses the embedded `node-types.json`.
pub fn node_types() -> Result<Vec<NodeType>, serde_json::Error> {
    serde_json::from_str(crate::node_types_json())
}
