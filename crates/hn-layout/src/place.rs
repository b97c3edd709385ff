//! Recursive coordinate assignment and connector derivation.

use std::collections::HashMap;

use hn_model::{Network, Node};

use crate::adjacency::Adjacency;
use crate::types::{Connector, Layout, PositionedNode};

/// Compute the full layout for a network.
///
/// Works on any input, valid or not: nodes unreachable from every root
/// (possible only on cyclic descriptions) are left out of the picture, and
/// references that do not resolve to a placed node draw no connector.
pub fn layout(network: &Network) -> Layout {
    let adjacency = Adjacency::derive(network);
    let mut placed = PlacedNodes::default();

    for root in 0..network.len() {
        if adjacency.is_root(root) {
            let column = placed.next_free_column();
            place_subtree(network, &adjacency, &mut placed, root, column, 0);
        }
    }

    normalize_sink_row(&mut placed);
    let connectors = derive_connectors(&placed);

    Layout {
        nodes: placed.nodes,
        connectors,
    }
}

/// Accumulator threaded through the recursive placement.
///
/// First placement wins: an id already in the index is never re-placed,
/// which both resolves nodes reachable through several parents and stops
/// descent on cyclic input.
#[derive(Debug, Default)]
struct PlacedNodes {
    nodes: Vec<PositionedNode>,
    index: HashMap<String, usize>,
}

impl PlacedNodes {
    fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    fn insert(&mut self, node: &Node, x: i32, y: i32) {
        self.index.insert(node.id().to_owned(), self.nodes.len());
        self.nodes.push(PositionedNode {
            node: node.clone(),
            x,
            y,
        });
    }

    fn coordinates(&self, id: &str) -> Option<(i32, i32)> {
        self.index.get(id).map(|&slot| {
            let positioned = &self.nodes[slot];
            (positioned.x, positioned.y)
        })
    }

    /// One column to the right of everything placed so far.
    fn next_free_column(&self) -> i32 {
        self.nodes
            .iter()
            .map(|positioned| positioned.x)
            .max()
            .map_or(0, |max| max + 1)
    }
}

fn place_subtree(
    network: &Network,
    adjacency: &Adjacency,
    placed: &mut PlacedNodes,
    position: usize,
    x: i32,
    y: i32,
) {
    let node = &network.nodes()[position];
    if placed.contains(node.id()) {
        return;
    }
    placed.insert(node, x, y);

    let children = adjacency.children(position);
    let count = children.len() as i32;
    for (index, child_id) in children.iter().enumerate() {
        let Some(child) = network.position_of(child_id) else {
            continue;
        };
        let index = index as i32;
        let column = if x > 0 {
            // Non-leftmost subtree: stack children left to right; symmetry
            // is only kept for the first root's subtree.
            x + index
        } else if count % 2 == 0 {
            // Even sibling count: straddle the parent column, skipping it.
            let half = count / 2;
            x + index - half + i32::from(index >= half)
        } else {
            // Odd sibling count: middle child directly under the parent.
            x + index - count / 2
        };
        place_subtree(network, adjacency, placed, child, column, y + 1);
    }
}

/// Move every placed downstream one row below the deepest non-downstream
/// node. A picture holding nothing but downstream nodes puts them on row 1.
fn normalize_sink_row(placed: &mut PlacedNodes) {
    let deepest = placed
        .nodes
        .iter()
        .filter(|positioned| !positioned.node.is_downstream())
        .map(|positioned| positioned.y)
        .max()
        .unwrap_or(0);
    let sink_row = deepest + 1;

    for positioned in &mut placed.nodes {
        if positioned.node.is_downstream() {
            positioned.y = sink_row;
        }
    }
}

/// One connector per resolvable reference of every placed control unit, in
/// placement order: feed source into the unit, unit into its spill target.
fn derive_connectors(placed: &PlacedNodes) -> Vec<Connector> {
    let mut connectors = Vec::new();
    for positioned in &placed.nodes {
        let Some(unit) = positioned.node.as_control_unit() else {
            continue;
        };
        if let Some(source) = unit.feeds_from.as_deref()
            && let Some((x, y)) = placed.coordinates(source)
        {
            connectors.push(Connector {
                from_x: x,
                from_y: y,
                to_x: positioned.x,
                to_y: positioned.y,
            });
        }
        if let Some(target) = unit.spills_to.as_deref()
            && let Some((x, y)) = placed.coordinates(target)
        {
            connectors.push(Connector {
                from_x: positioned.x,
                from_y: positioned.y,
                to_x: x,
                to_y: y,
            });
        }
    }
    connectors
}
