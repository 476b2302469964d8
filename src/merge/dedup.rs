//! Structural identity of merged nodes.

use crate::node::Node;

/// The shape of a node as it will be rendered: its text and, recursively, the
/// shape of its children. Conditions are not part of the shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeShape {
    text: String,
    children: Vec<NodeShape>,
}

impl From<&Node> for NodeShape {
    fn from(node: &Node) -> Self {
        Self {
            text: node.text.clone(),
            children: node.children.iter().map(NodeShape::from).collect(),
        }
    }
}

/// Two nodes under the same heading with equal keys are duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DedupKey {
    heading: String,
    shape: NodeShape,
}

impl DedupKey {
    pub fn new(heading: &str, node: &Node) -> Self {
        Self {
            heading: heading.to_string(),
            shape: NodeShape::from(node),
        }
    }
}
