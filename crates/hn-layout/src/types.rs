//! Output types of the layout engine.

use hn_model::Node;
use serde::{Deserialize, Serialize};

/// A node with assigned grid coordinates.
///
/// Coordinates are grid cells, not pixels; the rendering side scales them.
/// Columns can go negative: children of a column-0 parent spread
/// symmetrically to both sides of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionedNode {
    #[serde(flatten)]
    pub node: Node,
    pub x: i32,
    pub y: i32,
}

/// A directed visual edge between two placed nodes' coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connector {
    #[serde(rename = "fromX")]
    pub from_x: i32,
    #[serde(rename = "fromY")]
    pub from_y: i32,
    #[serde(rename = "toX")]
    pub to_x: i32,
    #[serde(rename = "toY")]
    pub to_y: i32,
}

/// Complete layout of one network: positioned nodes in placement order plus
/// the connectors between them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub nodes: Vec<PositionedNode>,
    pub connectors: Vec<Connector>,
}

impl Layout {
    /// Coordinates of the first placed node with the given id.
    pub fn coordinates_of(&self, id: &str) -> Option<(i32, i32)> {
        self.nodes
            .iter()
            .find(|positioned| positioned.node.id() == id)
            .map(|positioned| (positioned.x, positioned.y))
    }
}
