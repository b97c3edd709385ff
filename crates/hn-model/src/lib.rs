//! hn-model: graph model layer for hydronet.
//!
//! Provides:
//! - Typed node representation (hydrobodies and control units)
//! - Ordered `Network` collection with first-match id lookup
//! - Wire-format (de)serialization of network descriptions
//!
//! # Example
//!
//! ```
//! use hn_model::{Network, Node};
//!
//! let network = Network::new(vec![
//!     Node::reservoir("R1", "Summit reservoir"),
//!     Node::gate("G1", "Spill gate", Some("R1"), Some("D1")),
//!     Node::downstream("D1", "Valley outflow"),
//! ]);
//!
//! assert!(network.find_by_id("G1").is_some_and(Node::is_control_unit));
//! assert!(network.find_by_id("R1").is_some_and(Node::is_hydrobody));
//! ```

pub mod error;
pub mod network;
pub mod node;

// Re-exports for ergonomics
pub use error::{ModelError, ModelResult};
pub use network::Network;
pub use node::{ControlUnit, ControlUnitKind, Hydrobody, HydrobodyKind, Node, NodeKind};
