//! Parent/child adjacency derived from control-unit references.

use hn_model::Network;

/// Per-node adjacency lists, parallel to network list order.
///
/// `spills_to[i]` holds the ids drawn one row below node `i`: every control
/// unit feeding from it, plus the node's own spill target when the node is
/// itself a control unit. `feeds_from[i]` is the symmetric construction;
/// a node with no entries there is a root of the picture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjacency {
    spills_to: Vec<Vec<String>>,
    feeds_from: Vec<Vec<String>>,
}

impl Adjacency {
    /// Derive adjacency for every node of the network.
    pub fn derive(network: &Network) -> Self {
        let mut spills_to = Vec::with_capacity(network.len());
        let mut feeds_from = Vec::with_capacity(network.len());

        for node in network.iter() {
            let mut children: Vec<String> = network
                .control_units()
                .filter(|unit| unit.feeds_from.as_deref() == Some(node.id()))
                .map(|unit| unit.id.clone())
                .collect();
            if let Some(unit) = node.as_control_unit()
                && let Some(target) = unit.spills_to.as_deref()
                && !children.iter().any(|id| id == target)
            {
                children.push(target.to_owned());
            }

            let mut parents: Vec<String> = network
                .control_units()
                .filter(|unit| unit.spills_to.as_deref() == Some(node.id()))
                .map(|unit| unit.id.clone())
                .collect();
            if let Some(unit) = node.as_control_unit()
                && let Some(source) = unit.feeds_from.as_deref()
                && !parents.iter().any(|id| id == source)
            {
                parents.push(source.to_owned());
            }

            spills_to.push(children);
            feeds_from.push(parents);
        }

        Self {
            spills_to,
            feeds_from,
        }
    }

    /// Ids placed one row below the node at `position`.
    pub fn children(&self, position: usize) -> &[String] {
        &self.spills_to[position]
    }

    /// Ids justifying that the node at `position` is not a root.
    pub fn parents(&self, position: usize) -> &[String] {
        &self.feeds_from[position]
    }

    /// True iff nothing in the network flows into this node.
    pub fn is_root(&self, position: usize) -> bool {
        self.feeds_from[position].is_empty()
    }
}
