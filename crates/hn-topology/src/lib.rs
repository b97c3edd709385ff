//! hn-topology: structural validation of network descriptions.
//!
//! Checks a [`hn_model::Network`] against seven ordered rules and reports
//! the first violation as a value, never as a panic. The rules cover sink
//! existence, control-unit connectivity, reference resolution, type
//! compatibility of the endpoints, and closed loops through reservoirs.
//!
//! # Example
//!
//! ```
//! use hn_model::{Network, Node};
//! use hn_topology::{validate, Violation};
//!
//! let network = Network::new(vec![
//!     Node::reservoir("R1", "Upper basin"),
//!     Node::gate("G1", "Spill gate", Some("R1"), Some("D1")),
//!     Node::downstream("D1", "Valley outflow"),
//! ]);
//! assert_eq!(validate(&network), Ok(()));
//!
//! let empty = Network::default();
//! assert_eq!(validate(&empty), Err(Violation::NoDownstream));
//! ```

pub mod validate;
pub mod violation;

// Re-exports for ergonomics
pub use validate::{validate, verdict};
pub use violation::{Verdict, Violation};
