//! Typed nodes of a water-distribution network.

use serde::{Deserialize, Serialize};

/// Kind discriminant for passive hydrobody nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HydrobodyKind {
    /// Source body that control units take water from.
    Reservoir,
    /// Terminal sink; always rendered on the lowest row.
    Downstream,
}

/// Kind discriminant for active flow-control units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlUnitKind {
    Turbine,
    Gate,
}

/// Flat classification across all four node types.
///
/// Consumers that dispatch on the concrete type (icon selection, shape
/// mapping) match on this; adding a node type breaks every match site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Reservoir,
    Downstream,
    Turbine,
    Gate,
}

/// A passive body of water: a reservoir or a downstream sink.
///
/// Hydrobodies carry no references of their own; their place in the graph
/// is established entirely by the control units pointing at them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hydrobody {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: HydrobodyKind,
}

/// An active unit moving water from one body to another.
///
/// `feeds_from` is the upstream source, `spills_to` the downstream target.
/// Either may be absent or dangling; the validator reports both conditions
/// as data rather than failing on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlUnit {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ControlUnitKind,
    #[serde(rename = "feedsFrom", default)]
    pub feeds_from: Option<String>,
    #[serde(rename = "spillsTo", default)]
    pub spills_to: Option<String>,
}

/// A node in a network description.
///
/// Untagged on the wire: the `type` field of the record decides which
/// variant it decodes to. Control units are tried first since their kind
/// tags (`turbine`, `gate`) are disjoint from the hydrobody ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    ControlUnit(ControlUnit),
    Hydrobody(Hydrobody),
}

impl Node {
    /// Build a reservoir hydrobody.
    pub fn reservoir(id: impl Into<String>, name: impl Into<String>) -> Self {
        Node::Hydrobody(Hydrobody {
            id: id.into(),
            name: name.into(),
            kind: HydrobodyKind::Reservoir,
        })
    }

    /// Build a downstream hydrobody.
    pub fn downstream(id: impl Into<String>, name: impl Into<String>) -> Self {
        Node::Hydrobody(Hydrobody {
            id: id.into(),
            name: name.into(),
            kind: HydrobodyKind::Downstream,
        })
    }

    /// Build a turbine with the given upstream/downstream references.
    pub fn turbine(
        id: impl Into<String>,
        name: impl Into<String>,
        feeds_from: Option<&str>,
        spills_to: Option<&str>,
    ) -> Self {
        Self::control_unit(ControlUnitKind::Turbine, id, name, feeds_from, spills_to)
    }

    /// Build a gate with the given upstream/downstream references.
    pub fn gate(
        id: impl Into<String>,
        name: impl Into<String>,
        feeds_from: Option<&str>,
        spills_to: Option<&str>,
    ) -> Self {
        Self::control_unit(ControlUnitKind::Gate, id, name, feeds_from, spills_to)
    }

    fn control_unit(
        kind: ControlUnitKind,
        id: impl Into<String>,
        name: impl Into<String>,
        feeds_from: Option<&str>,
        spills_to: Option<&str>,
    ) -> Self {
        Node::ControlUnit(ControlUnit {
            id: id.into(),
            name: name.into(),
            kind,
            feeds_from: feeds_from.map(str::to_owned),
            spills_to: spills_to.map(str::to_owned),
        })
    }

    pub fn id(&self) -> &str {
        match self {
            Node::Hydrobody(body) => &body.id,
            Node::ControlUnit(unit) => &unit.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::Hydrobody(body) => &body.name,
            Node::ControlUnit(unit) => &unit.name,
        }
    }

    /// Concrete four-way classification.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Hydrobody(body) => match body.kind {
                HydrobodyKind::Reservoir => NodeKind::Reservoir,
                HydrobodyKind::Downstream => NodeKind::Downstream,
            },
            Node::ControlUnit(unit) => match unit.kind {
                ControlUnitKind::Turbine => NodeKind::Turbine,
                ControlUnitKind::Gate => NodeKind::Gate,
            },
        }
    }

    /// True iff the node is a turbine or a gate.
    pub fn is_control_unit(&self) -> bool {
        matches!(self, Node::ControlUnit(_))
    }

    /// True iff the node is a reservoir or a downstream.
    pub fn is_hydrobody(&self) -> bool {
        matches!(self, Node::Hydrobody(_))
    }

    pub fn is_reservoir(&self) -> bool {
        matches!(
            self,
            Node::Hydrobody(Hydrobody {
                kind: HydrobodyKind::Reservoir,
                ..
            })
        )
    }

    pub fn is_downstream(&self) -> bool {
        matches!(
            self,
            Node::Hydrobody(Hydrobody {
                kind: HydrobodyKind::Downstream,
                ..
            })
        )
    }

    /// The inner control unit, if this node is one.
    pub fn as_control_unit(&self) -> Option<&ControlUnit> {
        match self {
            Node::ControlUnit(unit) => Some(unit),
            Node::Hydrobody(_) => None,
        }
    }
}
