//! Rule violations and the wire-facing verdict.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The first structural rule a network violates.
///
/// Variants are ordered by rule number; the serialized form is the stable
/// reason code that editing frontends map to explanatory text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
#[serde(rename_all = "kebab-case")]
pub enum Violation {
    /// Rule 1: every network needs at least one downstream.
    #[error("the network has no downstream for water to end up in")]
    NoDownstream,

    /// Rule 2: every control unit takes water in and spills it out.
    #[error("a control unit is missing its feedsFrom or spillsTo connection")]
    UnitNotConnected,

    /// Rule 3: water never flows out of a downstream.
    #[error("a control unit takes water from a downstream")]
    FeedingFromDownstream,

    /// Rule 4: every reservoir feeds at least one control unit.
    #[error("a reservoir does not feed any control unit")]
    ReservoirNotConnected,

    /// Rule 5: references point at ids that exist.
    #[error("a control unit references an id that is not in the network")]
    InvalidId,

    /// Rule 6: units connect to hydrobodies, never to each other.
    #[error("a control unit connects directly to another control unit")]
    UnitConnectedToUnit,

    /// Rule 7: no reservoir sits upstream of itself.
    #[error("water can loop back into a reservoir above it")]
    ClosedLoop,
}

impl Violation {
    /// Stable reason code, the key frontends use for explanation lookup.
    pub fn code(self) -> &'static str {
        match self {
            Violation::NoDownstream => "no-downstream",
            Violation::UnitNotConnected => "unit-not-connected",
            Violation::FeedingFromDownstream => "feeding-from-downstream",
            Violation::ReservoirNotConnected => "reservoir-not-connected",
            Violation::InvalidId => "invalid-id",
            Violation::UnitConnectedToUnit => "unit-connected-to-unit",
            Violation::ClosedLoop => "closed-loop",
        }
    }
}

/// Validation outcome in the shape editing frontends consume:
/// `{"valid":true}` or `{"valid":false,"reason":"<code>"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<Violation>,
}

impl From<Result<(), Violation>> for Verdict {
    fn from(result: Result<(), Violation>) -> Self {
        match result {
            Ok(()) => Verdict {
                valid: true,
                reason: None,
            },
            Err(violation) => Verdict {
                valid: false,
                reason: Some(violation),
            },
        }
    }
}
