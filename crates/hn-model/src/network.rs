//! Ordered node collections and id lookup.

use serde::{Deserialize, Serialize};

use crate::error::ModelResult;
use crate::node::{ControlUnit, Node};

/// An ordered sequence of nodes describing one network.
///
/// Order is insertion order. It carries no semantic weight, but it is the
/// iteration basis everywhere: id lookups resolve to the first match in
/// list order, and both validation and layout scan in list order. Duplicate
/// ids are tolerated; lookups simply return the earliest occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Network {
    nodes: Vec<Node>,
}

impl Network {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Decode a network from its wire format, a JSON array of node records.
    pub fn from_json(input: &str) -> ModelResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Encode the network back into its wire format.
    pub fn to_json(&self) -> ModelResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// All nodes, in list order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// First node in list order with the given id.
    pub fn find_by_id(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id() == id)
    }

    /// Position of the first node in list order with the given id.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|node| node.id() == id)
    }

    /// All control units, in list order.
    pub fn control_units(&self) -> impl Iterator<Item = &ControlUnit> {
        self.nodes.iter().filter_map(Node::as_control_unit)
    }
}

impl From<Vec<Node>> for Network {
    fn from(nodes: Vec<Node>) -> Self {
        Self::new(nodes)
    }
}

impl FromIterator<Node> for Network {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Network {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
